//! Errors raised when building an automaton.

use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(
        "Policy requires registered transitions but no guard was added. \
         Call .on_transition(from, to, guard) or allow unregistered transitions"
    )]
    NoRegisteredTransitions,
}
