//! Recording wrapper around an automaton.

use crate::audit::error::AuditError;
use crate::audit::record::{AuditRecord, Outcome};
use crate::automaton::Automaton;
use crate::config::AuditConfig;
use crate::core::{Predicate, State, StateHistory, StateTransition};
use chrono::Utc;
use std::collections::VecDeque;
use uuid::Uuid;

/// Forwards transition requests to an automaton and records their outcome.
///
/// The recorder registers no hooks, so wrapping an automaton never changes
/// which pairs count as registered or what any request returns.
pub struct Recorder<S: State> {
    automaton: Automaton<S>,
    config: AuditConfig,
    filter: Predicate<AuditRecord<S>>,
    history: StateHistory<S>,
    records: VecDeque<AuditRecord<S>>,
    attempt: usize,
}

impl<S: State + 'static> Recorder<S> {
    pub fn new(automaton: Automaton<S>, config: AuditConfig) -> Self {
        Self {
            automaton,
            config,
            filter: Predicate::always(),
            history: StateHistory::new(),
            records: VecDeque::new(),
            attempt: 0,
        }
    }

    /// Retain only records that also satisfy `filter`.
    ///
    /// The filter narrows what the audit level admits; it does not affect
    /// history or tracing output.
    pub fn with_filter(mut self, filter: Predicate<AuditRecord<S>>) -> Self {
        self.filter = filter;
        self
    }

    /// Same contract as [`Automaton::request_transition`].
    pub fn request_transition(&mut self, to: S) -> bool {
        let from = self.automaton.current_state().clone();
        self.attempt += 1;

        let committed = self.automaton.request_transition(to.clone());
        let record = AuditRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            from,
            to,
            outcome: Outcome::from_committed(committed),
            attempt: self.attempt,
        };

        tracing::debug!(
            target: "statehook.audit",
            id = %record.id,
            from = record.from.name(),
            to = record.to.name(),
            outcome = %record.outcome,
            attempt = record.attempt,
            "transition requested"
        );

        if committed {
            self.history = std::mem::take(&mut self.history).record(StateTransition {
                from: record.from.clone(),
                to: record.to.clone(),
                timestamp: record.timestamp,
                attempt: record.attempt,
            });
            self.attempt = 0;
        }

        if self.config.level.admits(record.outcome) && self.filter.check(&record) {
            self.retain(record);
        }

        committed
    }

    fn retain(&mut self, record: AuditRecord<S>) {
        self.records.push_back(record);
        if let Some(max) = self.config.max_records {
            while self.records.len() > max {
                self.records.pop_front();
            }
        }
    }

    pub fn current_state(&self) -> &S {
        self.automaton.current_state()
    }

    pub fn automaton(&self) -> &Automaton<S> {
        &self.automaton
    }

    /// Access the wrapped automaton, e.g. to register more hooks.
    pub fn automaton_mut(&mut self) -> &mut Automaton<S> {
        &mut self.automaton
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Committed transitions only. Not bounded by `max_records`.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &AuditRecord<S>> + '_ {
        self.records.iter()
    }

    pub fn clear_records(&mut self) {
        self.records.clear();
    }

    /// Render retained records as JSON, one object per line.
    pub fn export_json_lines(&self) -> Result<String, AuditError> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }

    pub fn into_inner(self) -> Automaton<S> {
        self.automaton
    }
}
