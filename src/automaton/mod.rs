//! Hook-driven state automaton.
//!
//! An [`Automaton`] owns one current state and three ordered hook
//! registries:
//!
//! - **Transition guards**, keyed by `(from, to)`, may veto a move
//! - **Entry hooks**, keyed by the target state, may veto a move
//! - **Exit hooks**, keyed by the source state, run after the commit
//!
//! Rejection is an ordinary outcome reported as `false`; it carries no
//! cause. Whether a pair with no guards may be attempted at all is decided by
//! the [`TransitionPolicy`] chosen at construction.

mod hooks;
mod machine;

pub use hooks::{EntryHook, ExitHook, TransitionGuard, TransitionPolicy, Verdict};
pub use machine::Automaton;
