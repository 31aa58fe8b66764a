//! Macros for declaring state enums.

/// Declare a unit-variant enum and implement [`State`](crate::core::State)
/// for it.
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize,
/// Deserialize` and gets a `VARIANTS` constant listing every variant in
/// declaration order.
///
/// # Example
///
/// ```
/// use statehook::core::State;
/// use statehook::state_enum;
///
/// state_enum! {
///     pub enum Job {
///         Queued,
///         Running,
///         Done,
///         Crashed,
///     }
///     final: [Done, Crashed]
///     error: [Crashed]
/// }
///
/// assert_eq!(Job::Running.name(), "Running");
/// assert!(Job::Crashed.is_error());
/// assert_eq!(Job::VARIANTS.len(), 4);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const VARIANTS: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::automaton::{Automaton, TransitionPolicy, Verdict};
    use crate::core::State;

    state_enum! {
        enum Download {
            Pending,
            Fetching,
            Complete,
            Failed,
        }
        final: [Complete, Failed]
        error: [Failed]
    }

    #[test]
    fn generates_state_impl() {
        assert_eq!(Download::Pending.name(), "Pending");
        assert!(!Download::Pending.is_final());
        assert!(Download::Complete.is_final());
        assert!(!Download::Complete.is_error());
        assert!(Download::Failed.is_final());
        assert!(Download::Failed.is_error());
    }

    #[test]
    fn variants_in_declaration_order() {
        assert_eq!(
            Download::VARIANTS,
            &[
                Download::Pending,
                Download::Fetching,
                Download::Complete,
                Download::Failed
            ]
        );
    }

    #[test]
    fn generated_enum_drives_an_automaton() {
        let mut machine =
            Automaton::with_policy(Download::Pending, TransitionPolicy::RequireRegistered);
        for pair in Download::VARIANTS.windows(2) {
            machine.on_transition(pair[0], pair[1], |_, _| Verdict::Proceed);
        }

        assert!(machine.request_transition(Download::Fetching));
        assert!(machine.request_transition(Download::Complete));
        assert!(!machine.request_transition(Download::Pending));
        assert!(machine.is_final());
    }

    #[test]
    fn supports_visibility_and_missing_lists() {
        state_enum! {
            pub enum Switch {
                Off,
                On,
            }
        }

        assert!(!Switch::On.is_final());
        assert!(!Switch::Off.is_error());
        assert_eq!(Switch::VARIANTS.len(), 2);
    }
}
