//! The hook-driven automaton.

use crate::automaton::hooks::{
    EntryRegistration, ExitRegistration, GuardRegistration, TransitionPolicy, Verdict,
};
use crate::config::AutomatonConfig;
use crate::core::State;

/// Holds one current state and decides transitions through registered hooks.
///
/// A transition request runs, in order: every guard registered for the
/// exact `(current, target)` pair, every entry hook registered for the
/// target, then commits and runs every exit hook registered for the state
/// that was left. A `Verdict::Cancel` from any guard or entry hook rejects
/// the request and stops the sequence.
///
/// States are matched with `PartialEq`, which must be total for the lookups
/// to be meaningful.
///
/// # Example
///
/// ```rust
/// use statehook::automaton::{Automaton, Verdict};
///
/// let mut door = Automaton::new("closed");
/// door.on_transition("closed", "open", |_, _| Verdict::Proceed)
///     .on_entry("locked", |_| Verdict::Cancel);
///
/// assert!(door.request_transition("open"));
/// assert!(!door.request_transition("locked"));
/// assert_eq!(door.current_state(), &"open");
/// ```
pub struct Automaton<S> {
    current: S,
    policy: TransitionPolicy,
    guards: Vec<GuardRegistration<S>>,
    entry_hooks: Vec<EntryRegistration<S>>,
    exit_hooks: Vec<ExitRegistration<S>>,
}

impl<S: PartialEq> Automaton<S> {
    /// Create an automaton that permits unguarded transitions.
    pub fn new(initial: S) -> Self {
        Self::with_policy(initial, TransitionPolicy::AllowUnregistered)
    }

    pub fn with_policy(initial: S, policy: TransitionPolicy) -> Self {
        Self {
            current: initial,
            policy,
            guards: Vec::new(),
            entry_hooks: Vec::new(),
            exit_hooks: Vec::new(),
        }
    }

    pub fn from_config(initial: S, config: &AutomatonConfig) -> Self {
        Self::with_policy(initial, config.policy)
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Total number of registered transition guards, across all pairs.
    pub fn guard_count(&self) -> usize {
        self.guards.len()
    }

    /// Register a guard consulted before leaving `from` for `to`.
    pub fn on_transition<F>(&mut self, from: S, to: S, guard: F) -> &mut Self
    where
        F: FnMut(&S, &S) -> Verdict + 'static,
    {
        self.guards.push(GuardRegistration {
            from,
            to,
            guard: Box::new(guard),
        });
        self
    }

    /// Register a hook consulted before entering `state`.
    pub fn on_entry<F>(&mut self, state: S, hook: F) -> &mut Self
    where
        F: FnMut(&S) -> Verdict + 'static,
    {
        self.entry_hooks.push(EntryRegistration {
            state,
            hook: Box::new(hook),
        });
        self
    }

    /// Register a hook notified after `state` has been left.
    pub fn on_exit<F>(&mut self, state: S, hook: F) -> &mut Self
    where
        F: FnMut(&S) + 'static,
    {
        self.exit_hooks.push(ExitRegistration {
            state,
            hook: Box::new(hook),
        });
        self
    }

    /// Attempt to move to `to`. Returns `true` when the transition committed.
    ///
    /// A rejected request leaves the current state untouched and runs no
    /// exit hooks. A panicking hook unwinds through this call; hooks that
    /// already ran are not undone.
    pub fn request_transition(&mut self, to: S) -> bool {
        let matched: Vec<usize> = self
            .guards
            .iter()
            .enumerate()
            .filter(|(_, reg)| reg.from == self.current && reg.to == to)
            .map(|(index, _)| index)
            .collect();

        if matched.is_empty() && self.policy == TransitionPolicy::RequireRegistered {
            tracing::trace!(
                target: "statehook.transition",
                stage = "policy",
                outcome = "rejected"
            );
            return false;
        }

        for (position, index) in matched.iter().enumerate() {
            let reg = &mut self.guards[*index];
            if (reg.guard)(&self.current, &to).is_cancel() {
                tracing::trace!(
                    target: "statehook.transition",
                    stage = "guard",
                    guard = position,
                    outcome = "rejected"
                );
                return false;
            }
        }

        let mut entered = 0usize;
        for reg in self.entry_hooks.iter_mut().filter(|reg| reg.state == to) {
            if (reg.hook)(&to).is_cancel() {
                tracing::trace!(
                    target: "statehook.transition",
                    stage = "entry",
                    hook = entered,
                    outcome = "rejected"
                );
                return false;
            }
            entered += 1;
        }

        let left = std::mem::replace(&mut self.current, to);

        let mut exited = 0usize;
        for reg in self.exit_hooks.iter_mut().filter(|reg| reg.state == left) {
            (reg.hook)(&left);
            exited += 1;
        }

        tracing::trace!(
            target: "statehook.transition",
            stage = "commit",
            guards = matched.len(),
            entry_hooks = entered,
            exit_hooks = exited,
            outcome = "committed"
        );
        true
    }
}

impl<S: State> Automaton<S> {
    /// Whether the current state is terminal.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }
}

impl<S: PartialEq + Default> Default for Automaton<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Automaton<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("current", &self.current)
            .field("policy", &self.policy)
            .field("guards", &self.guards.len())
            .field("entry_hooks", &self.entry_hooks.len())
            .field("exit_hooks", &self.exit_hooks.len())
            .finish()
    }
}
