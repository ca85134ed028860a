//! # Category Module
//!
//! Maps a ticket description to a subject area using ordered keyword rules.
//!
//! - `builtin`: compiled-in rules and the fallback category
//! - `store`: runtime rule set, merged with `config.toml`
//!
//! ```rust
//! use helpdesk_triage_core::category::CategoryStore;
//!
//! let store = CategoryStore::builtin();
//! let first = store
//!     .all()
//!     .into_iter()
//!     .find(|c| c.matches("password reset over vpn").is_some())
//!     .unwrap();
//! assert_eq!(first.label, "Account / Access");
//! ```

mod builtin;
mod store;

// Re-exports
pub use builtin::{
    BuiltinCategory, CategoryDef, BUILTIN_CATEGORIES, DEFAULT_CATEGORY_PRIORITY, FALLBACK_CATEGORY,
};
pub(crate) use store::normalize_keywords;
pub use store::{CategoriesConfig, CategoryConfigEntry, CategoryStore};
