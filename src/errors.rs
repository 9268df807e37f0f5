use std::{path::PathBuf, result::Result as StdResult};

use thiserror::Error;

use crate::domain::JoinKey;

/// Error type for ingestion, lookup, and aggregation failures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Orders not attached to {kind} `{id}`")]
    OrdersNotAttached { kind: JoinKey, id: String },
    #[error("Client not found: {0}")]
    ClientNotFound(String),
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Monthly targets must have {expected} entries, found {found}")]
    TargetLength { expected: usize, found: usize },
    #[error("Revenue threshold must be a non-negative number, got {0}")]
    InvalidThreshold(f64),
    #[error("Malformed row in {source_name} at line {line}: {reason}")]
    MalformedRow {
        source_name: String,
        line: u64,
        reason: String,
    },
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = StdResult<T, ReportError>;

impl ReportError {
    /// True for unknown client or product ids.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReportError::ClientNotFound(_) | ReportError::ProductNotFound(_)
        )
    }
}
