//! Builder API for constructing automata.
//!
//! `AutomatonBuilder` collects the initial state, configuration and hooks,
//! then validates them in `build`. The `state_enum!` macro removes the
//! boilerplate of implementing `State` for plain enums.
//!
//! ```
//! use statehook::automaton::{TransitionPolicy, Verdict};
//! use statehook::builder::AutomatonBuilder;
//! use statehook::state_enum;
//!
//! state_enum! {
//!     enum Valve { Shut, Open }
//! }
//!
//! let mut valve = AutomatonBuilder::new()
//!     .initial(Valve::Shut)
//!     .policy(TransitionPolicy::RequireRegistered)
//!     .on_transition(Valve::Shut, Valve::Open, |_, _| Verdict::Proceed)
//!     .on_transition(Valve::Open, Valve::Shut, |_, _| Verdict::Proceed)
//!     .build()
//!     .unwrap();
//!
//! assert!(valve.request_transition(Valve::Open));
//! assert!(!valve.request_transition(Valve::Open));
//! ```

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
