pub mod client;
pub mod config;
pub mod result;
pub mod service;

pub use client::{AthenaClient, AthenaError};
pub use config::AthenaConfig;
pub use result::{flatten_rows, ResultRow, ResultSet, NULL_MARKER};
pub use service::{ExecutionStatus, QueryService, QueryState, SdkQueryService, ServiceError};
