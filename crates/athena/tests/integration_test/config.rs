//! Tests for AthenaConfig construction.

use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

use athena_lite::AthenaConfig;

// Env-based tests must run serially to avoid interfering with each other.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn explicit_values_are_kept_as_is() {
    let cfg = AthenaConfig::new("/opt/aws/credentials", "reporting", "ap-southeast-1");

    assert_eq!(cfg.credentials_file, PathBuf::from("/opt/aws/credentials"));
    assert_eq!(cfg.profile, "reporting");
    assert_eq!(cfg.region, "ap-southeast-1");
}

#[test]
fn env_overrides_are_picked_up() {
    let _lock = ENV_LOCK.lock().unwrap();

    env::set_var("AWS_SHARED_CREDENTIALS_FILE", "/run/secrets/aws");
    env::set_var("AWS_PROFILE", "ci");
    env::set_var("AWS_REGION", "us-east-2");

    let cfg = AthenaConfig::from_env();

    assert_eq!(cfg.credentials_file, PathBuf::from("/run/secrets/aws"));
    assert_eq!(cfg.profile, "ci");
    assert_eq!(cfg.region, "us-east-2");

    for k in ["AWS_SHARED_CREDENTIALS_FILE", "AWS_PROFILE", "AWS_REGION"] {
        env::remove_var(k);
    }
}
