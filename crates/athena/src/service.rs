//! Narrow interface to the remote query service.
//!
//! The client needs exactly three remote operations — start a query, check
//! its status, fetch its results — so they are expressed as the
//! [`QueryService`] trait, which tests can fake. [`SdkQueryService`] is the
//! production implementation over the AWS SDK Athena client.

use async_trait::async_trait;
use aws_sdk_athena::types::QueryExecutionState;
use serde::{Deserialize, Serialize};

use crate::result::ResultSet;

/// Error from a single remote call, stringified from the underlying SDK error.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ServiceError(pub String);

/// State of a query execution, read fresh on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryState {
    Succeeded,
    Failed,
    /// Any non-terminal or unrecognized state, carried verbatim.
    /// The poll loop keeps waiting on these.
    Other(String),
}

/// Status snapshot for one query execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionStatus {
    pub state: QueryState,
    /// Diagnostic message the service attaches to FAILED executions.
    pub state_change_reason: Option<String>,
}

/// The three remote operations the client depends on.
#[async_trait]
pub trait QueryService: Send + Sync {
    /// Start a query execution against `database`, writing results to
    /// `output_location`. Returns the execution id.
    async fn start_query(
        &self,
        sql: &str,
        database: &str,
        output_location: &str,
    ) -> Result<String, ServiceError>;

    /// Fetch the current status of an execution.
    async fn query_status(&self, execution_id: &str) -> Result<ExecutionStatus, ServiceError>;

    /// Fetch the first page of results for an execution.
    ///
    /// Returns `None` when the service reports no result-set structure at
    /// all. Rows pass through verbatim, header row included.
    async fn query_results(&self, execution_id: &str)
        -> Result<Option<ResultSet>, ServiceError>;
}

// ── SDK-backed implementation ────────────────────────────────────

/// [`QueryService`] backed by the AWS SDK Athena client.
pub struct SdkQueryService {
    athena_client: aws_sdk_athena::Client,
}

impl SdkQueryService {
    pub fn new(athena_client: aws_sdk_athena::Client) -> Self {
        Self { athena_client }
    }
}

#[async_trait]
impl QueryService for SdkQueryService {
    async fn start_query(
        &self,
        sql: &str,
        database: &str,
        output_location: &str,
    ) -> Result<String, ServiceError> {
        let resp = self
            .athena_client
            .start_query_execution()
            .query_string(sql)
            .query_execution_context(
                aws_sdk_athena::types::QueryExecutionContext::builder()
                    .database(database)
                    .build(),
            )
            .result_configuration(
                aws_sdk_athena::types::ResultConfiguration::builder()
                    .output_location(output_location)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| ServiceError(e.to_string()))?;

        resp.query_execution_id()
            .map(|id| id.to_string())
            .ok_or_else(|| ServiceError("No query execution ID returned".into()))
    }

    async fn query_status(&self, execution_id: &str) -> Result<ExecutionStatus, ServiceError> {
        let resp = self
            .athena_client
            .get_query_execution()
            .query_execution_id(execution_id)
            .send()
            .await
            .map_err(|e| ServiceError(e.to_string()))?;

        let status = resp.query_execution().and_then(|qe| qe.status());

        let state = status
            .and_then(|s| s.state())
            .map(|s| match s {
                QueryExecutionState::Succeeded => QueryState::Succeeded,
                QueryExecutionState::Failed => QueryState::Failed,
                other => QueryState::Other(other.as_str().to_string()),
            })
            .unwrap_or_else(|| QueryState::Other("UNKNOWN".to_string()));

        Ok(ExecutionStatus {
            state,
            state_change_reason: status
                .and_then(|s| s.state_change_reason())
                .map(|r| r.to_string()),
        })
    }

    async fn query_results(
        &self,
        execution_id: &str,
    ) -> Result<Option<ResultSet>, ServiceError> {
        let resp = self
            .athena_client
            .get_query_results()
            .query_execution_id(execution_id)
            .send()
            .await
            .map_err(|e| ServiceError(e.to_string()))?;

        let Some(result_set) = resp.result_set() else {
            return Ok(None);
        };

        let rows = result_set
            .rows()
            .iter()
            .map(|row| {
                row.data()
                    .iter()
                    .map(|datum| datum.var_char_value().map(|v| v.to_string()))
                    .collect()
            })
            .collect();

        Ok(Some(ResultSet { rows }))
    }
}
