//! Trait for named, serializable states.
//!
//! `Automaton` itself only needs `PartialEq`. Implementing `State` unlocks
//! the parts of the crate that report on states: audit records, history
//! and `Automaton::is_final`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A state value that can be named, cloned into records and serialized.
///
/// # Example
///
/// ```rust
/// use statehook::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Order {
///     Placed,
///     Shipped,
///     Cancelled,
/// }
///
/// impl State for Order {
///     fn name(&self) -> &str {
///         match self {
///             Self::Placed => "Placed",
///             Self::Shipped => "Shipped",
///             Self::Cancelled => "Cancelled",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Shipped | Self::Cancelled)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Cancelled)
///     }
/// }
///
/// assert!(Order::Cancelled.is_error());
/// assert!(!Order::Placed.is_final());
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned {
    /// Name used in logs and audit output.
    fn name(&self) -> &str;

    /// Whether no further transitions are expected from this state.
    ///
    /// Informational only; the automaton does not refuse to leave a final
    /// state unless a hook says so.
    fn is_final(&self) -> bool {
        false
    }

    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Connection {
        Idle,
        Dialing { attempt: u8 },
        Open,
        Refused,
    }

    impl State for Connection {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Dialing { .. } => "Dialing",
                Self::Open => "Open",
                Self::Refused => "Refused",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Open | Self::Refused)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Refused)
        }
    }

    #[test]
    fn name_ignores_payload() {
        assert_eq!(Connection::Dialing { attempt: 1 }.name(), "Dialing");
        assert_eq!(Connection::Dialing { attempt: 7 }.name(), "Dialing");
    }

    #[test]
    fn payload_participates_in_equality() {
        assert_ne!(
            Connection::Dialing { attempt: 1 },
            Connection::Dialing { attempt: 2 }
        );
    }

    #[test]
    fn final_and_error_flags() {
        assert!(!Connection::Idle.is_final());
        assert!(Connection::Open.is_final());
        assert!(!Connection::Open.is_error());
        assert!(Connection::Refused.is_final());
        assert!(Connection::Refused.is_error());
    }

    #[test]
    fn defaults_are_false() {
        #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
        struct Level(u8);

        impl State for Level {
            fn name(&self) -> &str {
                "Level"
            }
        }

        assert!(!Level(3).is_final());
        assert!(!Level(3).is_error());
    }

    #[test]
    fn state_with_payload_serializes() {
        let state = Connection::Dialing { attempt: 3 };
        let json = serde_json::to_string(&state).unwrap();
        let restored: Connection = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
