//! Audit trail for transition requests.
//!
//! [`Recorder`] wraps an [`Automaton`](crate::automaton::Automaton) and
//! observes every request from the outside: it never registers hooks and
//! never changes an outcome. Each request yields an [`AuditRecord`] and a
//! `tracing` event on the `statehook.audit` target. Committed requests are
//! also appended to a [`StateHistory`](crate::core::StateHistory).
//!
//! Records are kept in memory according to [`AuditConfig`] and can be
//! exported as JSON lines.
//!
//! ```rust
//! use statehook::audit::{Outcome, Recorder};
//! use statehook::automaton::{Automaton, Verdict};
//! use statehook::config::AuditConfig;
//! use statehook::state_enum;
//!
//! state_enum! {
//!     enum Step { Idle, Busy, Done }
//!     final: [Done]
//! }
//!
//! let mut machine = Automaton::new(Step::Idle);
//! machine.on_entry(Step::Busy, |_| Verdict::Cancel);
//!
//! let mut recorder = Recorder::new(machine, AuditConfig::default());
//! assert!(!recorder.request_transition(Step::Busy));
//! assert!(recorder.request_transition(Step::Done));
//!
//! let outcomes: Vec<Outcome> = recorder.records().map(|r| r.outcome).collect();
//! assert_eq!(outcomes, vec![Outcome::Rejected, Outcome::Committed]);
//! ```
//!
//! [`AuditConfig`]: crate::config::AuditConfig

pub mod error;
mod record;
mod recorder;

pub use error::AuditError;
pub use record::{AuditRecord, Outcome};
pub use recorder::Recorder;
