//! Audit record types.

use crate::core::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// How a transition request ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Committed,
    Rejected,
}

impl Outcome {
    pub fn from_committed(committed: bool) -> Self {
        if committed {
            Self::Committed
        } else {
            Self::Rejected
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Committed => "committed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audited transition request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AuditRecord<S: State> {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// State the automaton was in when the request was made
    pub from: S,
    /// Requested target
    pub to: S,
    pub outcome: Outcome,
    /// Requests made since the previous commit, this one included
    pub attempt: usize,
}

impl<S: State> AuditRecord<S> {
    pub fn is_committed(&self) -> bool {
        self.outcome == Outcome::Committed
    }
}
