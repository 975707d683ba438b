use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Profile used when `AWS_PROFILE` is not set.
const DEFAULT_PROFILE: &str = "default";

/// Region used when `AWS_REGION` is not set.
const DEFAULT_REGION: &str = "ap-southeast-1";

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

/// `~/.aws/credentials`, or a bare relative path when HOME is unset.
fn default_credentials_file() -> PathBuf {
    env_opt("HOME")
        .map(|home| PathBuf::from(home).join(".aws").join("credentials"))
        .unwrap_or_else(|| PathBuf::from(".aws/credentials"))
}

// ── AthenaConfig ─────────────────────────────────────────────────

/// Configuration for the Athena client.
///
/// Identifies a shared-credentials file, a profile within it, and the AWS
/// region to query in. Nothing is validated here: a missing file or an
/// unknown profile only surfaces on the first remote call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthenaConfig {
    /// Path to the shared credentials file.
    pub credentials_file: PathBuf,
    /// Profile name within the credentials file.
    pub profile: String,
    /// AWS region for Athena queries.
    pub region: String,
}

impl AthenaConfig {
    /// Build a config from explicit values.
    pub fn new(
        credentials_file: impl Into<PathBuf>,
        profile: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            credentials_file: credentials_file.into(),
            profile: profile.into(),
            region: region.into(),
        }
    }

    /// Build a config from environment variables.
    ///
    /// Reads `AWS_SHARED_CREDENTIALS_FILE` (falling back to
    /// `~/.aws/credentials`), `AWS_PROFILE` and `AWS_REGION`.
    pub fn from_env() -> Self {
        let credentials_file = env_opt("AWS_SHARED_CREDENTIALS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_credentials_file);

        Self {
            credentials_file,
            profile: env_or("AWS_PROFILE", DEFAULT_PROFILE),
            region: env_or("AWS_REGION", DEFAULT_REGION),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────
