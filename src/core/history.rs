//! Committed-transition history.
//!
//! A history is a value: `record` consumes it and returns the extended
//! history. Clone first to keep a snapshot of the earlier one.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One committed move between states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state that was left
    pub from: S,
    /// The state that was entered
    pub to: S,
    /// When the transition committed
    pub timestamp: DateTime<Utc>,
    /// Requests made since the previous commit, this one included
    pub attempt: usize,
}

/// Ordered record of committed transitions.
///
/// # Example
///
/// ```rust
/// use statehook::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Stage { Queued, Running, Done }
///
/// impl State for Stage {
///     fn name(&self) -> &str {
///         match self {
///             Self::Queued => "Queued",
///             Self::Running => "Running",
///             Self::Done => "Done",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Stage::Queued,
///         to: Stage::Running,
///         timestamp: Utc::now(),
///         attempt: 1,
///     })
///     .record(StateTransition {
///         from: Stage::Running,
///         to: Stage::Done,
///         timestamp: Utc::now(),
///         attempt: 2,
///     });
///
/// assert_eq!(history.get_path(), vec![&Stage::Queued, &Stage::Running, &Stage::Done]);
/// assert_eq!(history.last().map(|t| t.attempt), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Return this history with `transition` appended.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// States visited in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and last commit.
    ///
    /// `None` when empty, or when the last timestamp is earlier than the
    /// first (the wall clock stepped back between commits).
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Stage {
        Queued,
        Running,
        Done,
    }

    impl State for Stage {
        fn name(&self) -> &str {
            match self {
                Self::Queued => "Queued",
                Self::Running => "Running",
                Self::Done => "Done",
            }
        }
    }

    fn step(from: Stage, to: Stage, timestamp: DateTime<Utc>) -> StateTransition<Stage> {
        StateTransition {
            from,
            to,
            timestamp,
            attempt: 1,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Stage> = StateHistory::new();

        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn recording_on_a_clone_leaves_original_untouched() {
        let history = StateHistory::new();
        let next = history
            .clone()
            .record(step(Stage::Queued, Stage::Running, Utc::now()));

        assert!(history.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn path_lists_states_in_order() {
        let now = Utc::now();
        let history = StateHistory::new()
            .record(step(Stage::Queued, Stage::Running, now))
            .record(step(Stage::Running, Stage::Done, now));

        assert_eq!(
            history.get_path(),
            vec![&Stage::Queued, &Stage::Running, &Stage::Done]
        );
        assert_eq!(history.last().map(|t| &t.to), Some(&Stage::Done));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(step(Stage::Queued, Stage::Running, start))
            .record(step(
                Stage::Running,
                Stage::Done,
                start + chrono::Duration::milliseconds(250),
            ));

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn duration_is_none_when_clock_stepped_back() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(step(Stage::Queued, Stage::Running, start))
            .record(step(
                Stage::Running,
                Stage::Done,
                start - chrono::Duration::seconds(1),
            ));

        assert_eq!(history.len(), 2);
        assert!(history.duration().is_none());
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let history = StateHistory::new().record(step(Stage::Queued, Stage::Running, Utc::now()));
        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn history_serializes() {
        let history = StateHistory::new().record(step(Stage::Queued, Stage::Running, Utc::now()));

        let json = serde_json::to_string(&history).unwrap();
        let restored: StateHistory<Stage> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, restored);
    }
}
