//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when loading an automaton configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for `AutomatonConfig`
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record limit of zero would discard every audit record
    #[error("audit.max_records must be greater than zero, use level \"off\" to disable auditing")]
    InvalidRecordLimit,
}
