//! Hook signatures, verdicts and the transition policy.

use serde::{Deserialize, Serialize};

/// Answer a guard or entry hook gives about a pending transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Let the transition continue to the next hook
    #[default]
    Proceed,

    /// Veto the transition; the remaining hooks are skipped
    Cancel,
}

impl Verdict {
    /// `Cancel` when `condition` holds, `Proceed` otherwise.
    pub fn cancel_if(condition: bool) -> Self {
        if condition {
            Self::Cancel
        } else {
            Self::Proceed
        }
    }

    /// `Proceed` when `condition` holds, `Cancel` otherwise.
    pub fn proceed_if(condition: bool) -> Self {
        Self::cancel_if(!condition)
    }

    pub fn is_cancel(self) -> bool {
        matches!(self, Self::Cancel)
    }
}

/// What the automaton does with a transition that has no registered guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Unguarded transitions are permitted (entry hooks still apply)
    #[default]
    AllowUnregistered,

    /// Only pairs with at least one registered guard may be attempted
    RequireRegistered,
}

/// Called with `(from, to)` before leaving `from`.
pub type TransitionGuard<S> = Box<dyn FnMut(&S, &S) -> Verdict>;

/// Called with the state about to be entered.
pub type EntryHook<S> = Box<dyn FnMut(&S) -> Verdict>;

/// Called with the state that was just left, after the commit.
pub type ExitHook<S> = Box<dyn FnMut(&S)>;

pub(crate) struct GuardRegistration<S> {
    pub(crate) from: S,
    pub(crate) to: S,
    pub(crate) guard: TransitionGuard<S>,
}

pub(crate) struct EntryRegistration<S> {
    pub(crate) state: S,
    pub(crate) hook: EntryHook<S>,
}

pub(crate) struct ExitRegistration<S> {
    pub(crate) state: S,
    pub(crate) hook: ExitHook<S>,
}
