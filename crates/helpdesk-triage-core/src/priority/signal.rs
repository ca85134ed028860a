//! Impact and urgency signals.
//!
//! A signal is true when any of its keywords occurs in the lowercased
//! description. Negating phrases are blanked out before the search, so
//! "not urgent" does not raise the urgent signal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::normalize_keywords;

/// Boolean signal derived from the description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Urgent,
    HighImpact,
    LowImpact,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::Urgent, Signal::HighImpact, Signal::LowImpact];

    pub fn name(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::HighImpact => "high_impact",
            Self::LowImpact => "low_impact",
        }
    }

    fn builtin_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Urgent => &[
                "urgent",
                "asap",
                "immediately",
                "down",
                "outage",
                "cannot",
                "can't",
            ],
            Self::HighImpact => &[
                "all users",
                "everyone",
                "entire",
                "company",
                "multiple",
                "system down",
            ],
            Self::LowImpact => &["minor", "when you can", "not urgent", "low priority"],
        }
    }

    fn builtin_negations(self) -> &'static [&'static str] {
        match self {
            Self::Urgent => &["not urgent"],
            Self::HighImpact | Self::LowImpact => &[],
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Keyword set for one signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalDef {
    pub signal: Signal,
    pub keywords: Vec<String>,
    /// Phrases removed from the text before `keywords` are searched
    pub negations: Vec<String>,
}

impl SignalDef {
    fn builtin(signal: Signal) -> Self {
        Self {
            signal,
            keywords: signal.builtin_keywords().iter().map(|s| s.to_string()).collect(),
            negations: signal.builtin_negations().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Evaluate against lowercased text
    pub fn detect(&self, text: &str) -> bool {
        if self.negations.is_empty() {
            return self.keywords.iter().any(|k| text.contains(k.as_str()));
        }

        let mut masked = text.to_string();
        for negation in &self.negations {
            // Replace with a separator so the remaining words cannot join up.
            masked = masked.replace(negation.as_str(), " ");
        }
        self.keywords.iter().any(|k| masked.contains(k.as_str()))
    }
}

/// Which signals were raised for a description
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    pub urgent: bool,
    pub high_impact: bool,
    pub low_impact: bool,
}

impl Signals {
    pub fn get(&self, signal: Signal) -> bool {
        match signal {
            Signal::Urgent => self.urgent,
            Signal::HighImpact => self.high_impact,
            Signal::LowImpact => self.low_impact,
        }
    }

    fn set(&mut self, signal: Signal, value: bool) {
        match signal {
            Signal::Urgent => self.urgent = value,
            Signal::HighImpact => self.high_impact = value,
            Signal::LowImpact => self.low_impact = value,
        }
    }
}

/// Runtime keyword sets for all signals
#[derive(Debug, Clone)]
pub struct SignalStore {
    defs: Vec<SignalDef>,
}

impl SignalStore {
    pub fn builtin() -> Self {
        Self {
            defs: Signal::ALL.iter().map(|s| SignalDef::builtin(*s)).collect(),
        }
    }

    /// Append keywords from the `[signals]` section of `config.toml`
    pub fn with_config(mut self, config: &SignalsConfig) -> Self {
        for def in &mut self.defs {
            let extra = match def.signal {
                Signal::Urgent => &config.urgent,
                Signal::HighImpact => &config.high_impact,
                Signal::LowImpact => &config.low_impact,
            };
            for keyword in normalize_keywords(extra) {
                if !def.keywords.contains(&keyword) {
                    def.keywords.push(keyword);
                }
            }
        }
        self
    }

    pub fn get(&self, signal: Signal) -> Option<&SignalDef> {
        self.defs.iter().find(|d| d.signal == signal)
    }

    pub fn all(&self) -> &[SignalDef] {
        &self.defs
    }

    /// Evaluate every signal against lowercased text
    pub fn detect(&self, text: &str) -> Signals {
        let mut signals = Signals::default();
        for def in &self.defs {
            signals.set(def.signal, def.detect(text));
        }
        signals
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `[signals]` section of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalsConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urgent: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub high_impact: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub low_impact: Vec<String>,
}

impl SignalsConfig {
    pub fn is_empty(&self) -> bool {
        self.urgent.is_empty() && self.high_impact.is_empty() && self.low_impact.is_empty()
    }
}
