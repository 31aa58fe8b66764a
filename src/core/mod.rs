//! Building blocks shared by the automaton and its observers.
//!
//! - `State` for values that can be named and serialized
//! - `Predicate` for composable boolean tests
//! - `StateHistory` for an immutable log of committed transitions

mod history;
mod predicate;
mod state;

pub use history::{StateHistory, StateTransition};
pub use predicate::Predicate;
pub use state::State;
