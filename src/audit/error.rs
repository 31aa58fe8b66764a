//! Audit export errors.

use thiserror::Error;

/// Errors that can occur when exporting audit records
#[derive(Debug, Error)]
pub enum AuditError {
    /// A record could not be rendered as JSON
    #[error("Failed to serialize audit record: {0}")]
    Serialization(#[from] serde_json::Error),
}
