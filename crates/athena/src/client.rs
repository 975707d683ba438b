//! Athena query execution client.
//!
//! Provides [`AthenaClient`] for executing SQL queries against AWS Athena:
//! submit a statement, block on a fixed-interval poll loop until the query
//! reaches a terminal state, then fetch the results flattened into
//! key-value records.

use std::time::Duration;

use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::BehaviorVersion;
use aws_runtime::env_config::file::{EnvConfigFileKind, EnvConfigFiles};
use aws_sdk_athena::config::Region;
use tracing::{error, info};

use crate::config::AthenaConfig;
use crate::result::{flatten_rows, ResultRow};
use crate::service::{QueryService, QueryState, SdkQueryService};

/// Fixed delay between status polls.
const POLL_INTERVAL: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors that can occur during Athena operations.
#[derive(Debug, thiserror::Error)]
pub enum AthenaError {
    /// The start-query call failed. No polling was attempted.
    #[error("query submission failed: {0}")]
    Submission(String),

    /// A status poll failed. The wait loop aborts on the first such error.
    #[error("status check failed: {0}")]
    StatusCheck(String),

    /// The service completed the query with a FAILED status. The message is
    /// the service-provided failure reason, verbatim.
    #[error("{0}")]
    QueryFailed(String),

    /// The get-results call failed.
    #[error("fetching results failed: {0}")]
    ResultFetch(String),
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for executing queries against AWS Athena.
///
/// Owns one handle to the remote service and exposes two operations:
/// [`submit`](Self::submit), which blocks until the query reaches a terminal
/// state, and [`fetch_results`](Self::fetch_results), which flattens the
/// result rows into records keyed by column name.
pub struct AthenaClient {
    service: Box<dyn QueryService>,
}

impl AthenaClient {
    /// Create a client from the given configuration.
    ///
    /// Builds an AWS session from the shared-credentials file, profile and
    /// region in `config`. Nothing is validated and no network contact
    /// happens here; a bad file or unknown profile surfaces on the first
    /// remote call.
    pub async fn new(config: &AthenaConfig) -> Self {
        let profile_files = EnvConfigFiles::builder()
            .with_file(EnvConfigFileKind::Credentials, &config.credentials_file)
            .build();
        let credentials = ProfileFileCredentialsProvider::builder()
            .profile_files(profile_files)
            .profile_name(&config.profile)
            .build();

        let aws_cfg = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        info!(
            region = %config.region,
            profile = %config.profile,
            "AthenaClient initialised"
        );

        Self::with_service(Box::new(SdkQueryService::new(aws_sdk_athena::Client::new(
            &aws_cfg,
        ))))
    }

    /// Create a client over an explicit [`QueryService`] implementation.
    ///
    /// This is the seam tests use to drive the poll loop and the result
    /// flattening with a scripted fake instead of the real SDK.
    pub fn with_service(service: Box<dyn QueryService>) -> Self {
        Self { service }
    }

    /// Execute `sql` against `database`, blocking until the query reaches a
    /// terminal state. Returns the execution id on success.
    ///
    /// Results are written by the service to `s3://{output_bucket}`. The
    /// execution status is polled every 5 seconds with no timeout and no
    /// retry: the first error from the start call or a status call aborts
    /// the whole operation.
    pub async fn submit(
        &self,
        sql: &str,
        database: &str,
        output_bucket: &str,
    ) -> Result<String, AthenaError> {
        let output_location = format!("s3://{output_bucket}");

        let query_id = self
            .service
            .start_query(sql, database, &output_location)
            .await
            .map_err(|e| AthenaError::Submission(e.to_string()))?;

        info!(query_id = %query_id, "Query execution started");

        loop {
            let status = self
                .service
                .query_status(&query_id)
                .await
                .map_err(|e| AthenaError::StatusCheck(e.to_string()))?;

            match status.state {
                QueryState::Succeeded => return Ok(query_id),

                QueryState::Failed => {
                    let reason = status
                        .state_change_reason
                        .unwrap_or_else(|| "unknown".to_string());

                    error!(query_id = %query_id, reason = %reason, "Query failed");
                    return Err(AthenaError::QueryFailed(reason));
                }

                QueryState::Other(state) => {
                    info!(query_id = %query_id, state = %state, "waiting");
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
            }
        }
    }

    /// Fetch the results of a completed execution, flattened into records.
    ///
    /// Issues a single get-results call (first page only). Returns
    /// `Ok(None)` when the service reports no result-set structure at all,
    /// as opposed to `Ok(Some(vec![]))` for a header-only result. Row 0 is
    /// consumed as the header; every later row becomes one record keyed by
    /// column name, with NULL cells as the literal string `"NULL"`.
    pub async fn fetch_results(
        &self,
        execution_id: &str,
    ) -> Result<Option<Vec<ResultRow>>, AthenaError> {
        let result_set = self
            .service
            .query_results(execution_id)
            .await
            .map_err(|e| AthenaError::ResultFetch(e.to_string()))?;

        Ok(result_set.map(|set| flatten_rows(&set)))
    }
}

// ---------------------------------------------------------------------------
// Tests — poll loop and flattening over a scripted fake, no AWS calls
// ---------------------------------------------------------------------------
