//! Automaton configuration.
//!
//! Configuration is plain data: it can be built in code, taken from
//! `Default`, or parsed from JSON. Missing fields fall back to defaults.
//!
//! ```rust
//! use statehook::automaton::TransitionPolicy;
//! use statehook::config::{AuditLevel, AutomatonConfig};
//!
//! let config = AutomatonConfig::from_json(
//!     r#"{ "policy": "require_registered", "audit": { "level": "rejected" } }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.policy, TransitionPolicy::RequireRegistered);
//! assert_eq!(config.audit.level, AuditLevel::Rejected);
//! assert_eq!(config.audit.max_records, None);
//! ```

use crate::audit::Outcome;
use crate::automaton::TransitionPolicy;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Which audited outcomes a recorder retains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditLevel {
    /// Retain nothing
    Off,

    /// Retain rejected requests only
    Rejected,

    /// Retain every request
    #[default]
    All,
}

impl AuditLevel {
    /// Whether a request with this outcome is retained at this level.
    pub fn admits(self, outcome: Outcome) -> bool {
        match self {
            Self::Off => false,
            Self::Rejected => outcome == Outcome::Rejected,
            Self::All => true,
        }
    }
}

/// Settings for `audit::Recorder`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub level: AuditLevel,

    /// Oldest records are evicted past this many; `None` keeps everything.
    ///
    /// Only audit records are bounded. The recorder's committed-transition
    /// history keeps every commit for as long as the recorder lives.
    pub max_records: Option<usize>,
}

/// Top-level automaton configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonConfig {
    pub policy: TransitionPolicy,
    pub audit: AuditConfig,
}

impl AutomatonConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.audit.max_records == Some(0) {
            return Err(ConfigError::InvalidRecordLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_permissive_and_records_everything() {
        let config = AutomatonConfig::default();

        assert_eq!(config.policy, TransitionPolicy::AllowUnregistered);
        assert_eq!(config.audit.level, AuditLevel::All);
        assert_eq!(config.audit.max_records, None);
    }

    #[test]
    fn empty_object_yields_defaults() {
        let config = AutomatonConfig::from_json("{}").unwrap();
        assert_eq!(config, AutomatonConfig::default());
    }

    #[test]
    fn full_config_parses() {
        let config = AutomatonConfig::from_json(
            r#"{
                "policy": "require_registered",
                "audit": { "level": "off", "max_records": 16 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.policy, TransitionPolicy::RequireRegistered);
        assert_eq!(config.audit.level, AuditLevel::Off);
        assert_eq!(config.audit.max_records, Some(16));
    }

    #[test]
    fn zero_record_limit_is_rejected() {
        let result = AutomatonConfig::from_json(r#"{ "audit": { "max_records": 0 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidRecordLimit)));
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let result = AutomatonConfig::from_json(r#"{ "policy": "sometimes" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn audit_level_admits_outcomes() {
        assert!(!AuditLevel::Off.admits(Outcome::Committed));
        assert!(!AuditLevel::Off.admits(Outcome::Rejected));
        assert!(!AuditLevel::Rejected.admits(Outcome::Committed));
        assert!(AuditLevel::Rejected.admits(Outcome::Rejected));
        assert!(AuditLevel::All.admits(Outcome::Committed));
        assert!(AuditLevel::All.admits(Outcome::Rejected));
    }
}
