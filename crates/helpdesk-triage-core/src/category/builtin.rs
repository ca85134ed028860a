//! Builtin Category Definitions
//!
//! Keyword rules compiled into the binary. Rules are evaluated from the
//! highest priority down; the first rule with a matching keyword wins.

use serde::{Deserialize, Serialize};

/// Priority assigned to rules that do not declare one.
pub const DEFAULT_CATEGORY_PRIORITY: i32 = 100;

/// Builtin keyword rules, listed in evaluation order.
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        key: "account",
        label: "Account / Access",
        keywords: &["password", "login", "locked", "mfa", "reset"],
        recommendation: "Verify identity, reset credentials/MFA, confirm access restored.",
        priority: 500,
    },
    BuiltinCategory {
        key: "network",
        label: "Network",
        keywords: &["wifi", "network", "vpn", "internet", "dns", "offline"],
        recommendation: "Check connectivity, VPN/Wi-Fi status, confirm outage scope, \
                         escalate if widespread.",
        priority: 400,
    },
    BuiltinCategory {
        key: "software",
        label: "Software / Application",
        keywords: &[
            "outlook", "excel", "app", "software", "install", "update", "crash",
        ],
        recommendation: "Reproduce issue, check updates, verify permissions, reinstall if needed.",
        priority: 300,
    },
    BuiltinCategory {
        key: "hardware",
        label: "Hardware",
        keywords: &[
            "printer", "keyboard", "mouse", "monitor", "laptop", "hardware",
        ],
        recommendation: "Check power/cables, run basic diagnostics, swap peripherals if available.",
        priority: 200,
    },
];

/// Category used when no keyword rule matches.
pub const FALLBACK_CATEGORY: BuiltinCategory = BuiltinCategory {
    key: "general",
    label: "General Support",
    keywords: &[],
    recommendation: "Gather details (who/what/when), reproduce issue, document steps, \
                     route appropriately.",
    priority: 0,
};

/// Static definition of a builtin rule
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// Stable identifier, used as the config table name
    pub key: &'static str,
    /// Label shown in the triage summary
    pub label: &'static str,
    /// Substrings searched for in the lowercased description
    pub keywords: &'static [&'static str],
    /// Fixed recommended action for the category
    pub recommendation: &'static str,
    /// Evaluation order (higher is checked first)
    pub priority: i32,
}

/// Runtime category definition
///
/// Built from the builtin table or from the `[categories]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub key: String,
    pub label: String,
    pub keywords: Vec<String>,
    pub recommendation: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    DEFAULT_CATEGORY_PRIORITY
}

impl CategoryDef {
    /// Whether any keyword occurs in `text`.
    ///
    /// `text` must already be lowercased. This is a plain substring test, so
    /// "app" also matches inside "happen".
    pub fn matches(&self, text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| text.contains(k.as_str()))
            .map(String::as_str)
    }
}

impl From<&BuiltinCategory> for CategoryDef {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            key: builtin.key.to_string(),
            label: builtin.label.to_string(),
            keywords: builtin.keywords.iter().map(|s| s.to_string()).collect(),
            recommendation: builtin.recommendation.to_string(),
            priority: builtin.priority,
        }
    }
}
