//! Builder for constructing automata.

use crate::audit::Recorder;
use crate::automaton::{
    Automaton, EntryHook, ExitHook, TransitionGuard, TransitionPolicy, Verdict,
};
use crate::builder::error::BuildError;
use crate::config::AutomatonConfig;
use crate::core::State;

/// Fluent builder that validates the configuration before handing out an
/// automaton. Hooks are registered in the order they were added.
pub struct AutomatonBuilder<S: PartialEq + 'static> {
    initial: Option<S>,
    config: AutomatonConfig,
    guards: Vec<(S, S, TransitionGuard<S>)>,
    entry_hooks: Vec<(S, EntryHook<S>)>,
    exit_hooks: Vec<(S, ExitHook<S>)>,
}

impl<S: PartialEq + 'static> AutomatonBuilder<S> {
    pub fn new() -> Self {
        Self {
            initial: None,
            config: AutomatonConfig::default(),
            guards: Vec::new(),
            entry_hooks: Vec::new(),
            exit_hooks: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn policy(mut self, policy: TransitionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Replace the whole configuration, policy and audit settings alike.
    pub fn config(mut self, config: AutomatonConfig) -> Self {
        self.config = config;
        self
    }

    pub fn on_transition<F>(mut self, from: S, to: S, guard: F) -> Self
    where
        F: FnMut(&S, &S) -> Verdict + 'static,
    {
        self.guards.push((from, to, Box::new(guard)));
        self
    }

    pub fn on_entry<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut(&S) -> Verdict + 'static,
    {
        self.entry_hooks.push((state, Box::new(hook)));
        self
    }

    pub fn on_exit<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut(&S) + 'static,
    {
        self.exit_hooks.push((state, Box::new(hook)));
        self
    }

    /// Build the automaton.
    /// Returns an error if the initial state is missing, or if the policy
    /// requires registered transitions and none were added.
    pub fn build(self) -> Result<Automaton<S>, BuildError> {
        self.into_parts().map(|(automaton, _)| automaton)
    }

    fn into_parts(self) -> Result<(Automaton<S>, AutomatonConfig), BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.config.policy == TransitionPolicy::RequireRegistered && self.guards.is_empty() {
            return Err(BuildError::NoRegisteredTransitions);
        }

        let mut automaton = Automaton::from_config(initial, &self.config);
        for (from, to, guard) in self.guards {
            automaton.on_transition(from, to, guard);
        }
        for (state, hook) in self.entry_hooks {
            automaton.on_entry(state, hook);
        }
        for (state, hook) in self.exit_hooks {
            automaton.on_exit(state, hook);
        }

        Ok((automaton, self.config))
    }
}

impl<S: State + 'static> AutomatonBuilder<S> {
    /// Build the automaton wrapped in a `Recorder` using the audit settings
    /// from the configuration.
    pub fn build_recorded(self) -> Result<Recorder<S>, BuildError> {
        let (automaton, config) = self.into_parts()?;
        Ok(Recorder::new(automaton, config.audit))
    }
}

impl<S: PartialEq + 'static> Default for AutomatonBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
