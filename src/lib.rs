//! Statehook: a hook-driven finite-state automaton
//!
//! An [`Automaton`] holds one value of any `PartialEq` type and moves to a
//! new value only when every hook registered for the move agrees. Three
//! kinds of hooks exist:
//!
//! - **Transition guards** for an exact `(from, to)` pair, consulted first
//! - **Entry hooks** for the target state, consulted next
//! - **Exit hooks** for the source state, notified after the commit
//!
//! Guards and entry hooks answer with a [`Verdict`]; the first
//! `Verdict::Cancel` rejects the request. Under
//! [`TransitionPolicy::RequireRegistered`] a pair with no guard at all is
//! rejected before any hook runs.
//!
//! Around the core sit a builder, a serde-backed configuration, composable
//! predicates and an audit recorder that logs every request through
//! `tracing`.
//!
//! # Example
//!
//! ```rust
//! use statehook::{Automaton, Verdict};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut machine = Automaton::new("draft");
//!
//! let (guard_log, entry_log, exit_log) = (log.clone(), log.clone(), log.clone());
//! machine
//!     .on_transition("draft", "review", move |from, to| {
//!         guard_log.borrow_mut().push(format!("guard {from} -> {to}"));
//!         Verdict::Proceed
//!     })
//!     .on_entry("review", move |state| {
//!         entry_log.borrow_mut().push(format!("enter {state}"));
//!         Verdict::Proceed
//!     })
//!     .on_exit("draft", move |state| {
//!         exit_log.borrow_mut().push(format!("exit {state}"));
//!     });
//!
//! assert!(machine.request_transition("review"));
//! assert_eq!(machine.current_state(), &"review");
//! assert_eq!(
//!     *log.borrow(),
//!     vec!["guard draft -> review", "enter review", "exit draft"]
//! );
//! ```

pub mod audit;
pub mod automaton;
pub mod builder;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use audit::{AuditRecord, Outcome, Recorder};
pub use automaton::{Automaton, TransitionPolicy, Verdict};
pub use builder::{AutomatonBuilder, BuildError};
pub use config::AutomatonConfig;
pub use core::{Predicate, State, StateHistory, StateTransition};
