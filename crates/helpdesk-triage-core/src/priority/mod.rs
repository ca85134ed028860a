//! # Priority Module
//!
//! Priority is independent of the category. It is resolved from three
//! signals by an ordered rule list; the first rule whose signals are all
//! raised wins, otherwise the ticket is `P3 (Medium)`.

mod signal;

use std::fmt;

use serde::{Serialize, Serializer};

pub use signal::{Signal, SignalDef, SignalStore, Signals, SignalsConfig};

/// Ticket priority, P1 highest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "P1 (Critical)",
            Self::High => "P2 (High)",
            Self::Medium => "P3 (Medium)",
            Self::Low => "P4 (Low)",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A priority granted when every required signal is raised
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule {
    pub requires: &'static [Signal],
    pub priority: Priority,
}

impl PriorityRule {
    pub fn applies(&self, signals: &Signals) -> bool {
        self.requires.iter().all(|s| signals.get(*s))
    }
}

/// Rules in resolution order
pub const PRIORITY_RULES: &[PriorityRule] = &[
    PriorityRule {
        requires: &[Signal::HighImpact, Signal::Urgent],
        priority: Priority::Critical,
    },
    PriorityRule {
        requires: &[Signal::Urgent],
        priority: Priority::High,
    },
    PriorityRule {
        requires: &[Signal::LowImpact],
        priority: Priority::Low,
    },
];

/// Resolve a priority from raised signals
pub fn resolve(signals: &Signals) -> Priority {
    PRIORITY_RULES
        .iter()
        .find(|rule| rule.applies(signals))
        .map(|rule| rule.priority)
        .unwrap_or_default()
}
