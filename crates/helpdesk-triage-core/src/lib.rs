//! Keyword-based helpdesk ticket triage.
//!
//! ```rust
//! use helpdesk_triage_core::{triage_ticket, Priority};
//!
//! let result = triage_ticket("VPN is down for everyone, urgent!!");
//! assert_eq!(result.category, "Network");
//! assert_eq!(result.priority, Priority::Critical);
//! ```

pub mod category;
pub mod classifier;
pub mod config;
pub mod error;
pub mod priority;

pub use classifier::{triage_ticket, TicketClassifier, TriageResult};
pub use config::Config;
pub use error::{Result, TriageError};
pub use priority::{Priority, Signal, Signals};

// Category system
pub use category::{
    BuiltinCategory, CategoriesConfig, CategoryConfigEntry, CategoryDef, CategoryStore,
    BUILTIN_CATEGORIES, FALLBACK_CATEGORY,
};
