//! Ticket Classifier
//!
//! Turns a free-text description into a [`TriageResult`]. Classification is
//! pure: the same description always yields the same result.

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::category::{CategoryDef, CategoryStore};
use crate::config::Config;
use crate::priority::{self, Priority, SignalStore, Signals};

static BUILTIN_CLASSIFIER: Lazy<TicketClassifier> = Lazy::new(TicketClassifier::builtin);

/// Outcome of triaging one ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageResult {
    pub category: String,
    pub priority: Priority,
    pub recommendation: String,
}

impl fmt::Display for TriageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Priority: {}", self.priority)?;
        write!(f, "Recommended action: {}", self.recommendation)
    }
}

/// Keyword-based ticket classifier
#[derive(Debug, Clone)]
pub struct TicketClassifier {
    store: CategoryStore,
    signals: SignalStore,
}

impl TicketClassifier {
    pub fn new(store: CategoryStore, signals: SignalStore) -> Self {
        Self { store, signals }
    }

    /// Classifier using only the compiled-in keyword tables
    pub fn builtin() -> Self {
        Self::new(CategoryStore::builtin(), SignalStore::builtin())
    }

    /// Classifier with config overrides applied on top of the builtins
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CategoryStore::builtin().with_config(&config.categories),
            SignalStore::builtin().with_config(&config.signals),
        )
    }

    pub fn rules(&self) -> &CategoryStore {
        &self.store
    }

    pub fn signals(&self) -> &SignalStore {
        &self.signals
    }

    /// Classify a ticket description
    pub fn classify(&self, description: &str) -> TriageResult {
        let text = description.to_lowercase();

        let category = self.category_for(&text);
        let signals = self.signals_for(&text);
        let priority = priority::resolve(&signals);

        debug!(
            category = %category.key,
            urgent = signals.urgent,
            high_impact = signals.high_impact,
            low_impact = signals.low_impact,
            %priority,
            "classified ticket"
        );

        TriageResult {
            category: category.label.clone(),
            priority,
            recommendation: category.recommendation.clone(),
        }
    }

    /// First matching rule, or the fallback. `text` must be lowercased.
    fn category_for(&self, text: &str) -> &CategoryDef {
        for rule in self.store.all() {
            if let Some(keyword) = rule.matches(text) {
                debug!(rule = %rule.key, keyword, "category rule matched");
                return rule;
            }
        }
        self.store.fallback()
    }

    fn signals_for(&self, text: &str) -> Signals {
        self.signals.detect(text)
    }
}

impl Default for TicketClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classify with the builtin keyword tables
pub fn triage_ticket(description: &str) -> TriageResult {
    BUILTIN_CLASSIFIER.classify(description)
}
