//! Category Store
//!
//! Runtime set of keyword rules. Holds the builtin table merged with the
//! `[categories]` section of `config.toml`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::builtin::{
    CategoryDef, BUILTIN_CATEGORIES, DEFAULT_CATEGORY_PRIORITY, FALLBACK_CATEGORY,
};

/// Runtime store of category rules
#[derive(Debug, Clone)]
pub struct CategoryStore {
    categories: Vec<CategoryDef>,
    fallback: CategoryDef,
}

impl CategoryStore {
    /// Store with the builtin rules only
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN_CATEGORIES.iter().map(CategoryDef::from).collect(),
            fallback: CategoryDef::from(&FALLBACK_CATEGORY),
        }
    }

    /// Merge config entries into the store
    ///
    /// - Existing key: keywords are appended, other fields replaced when set
    /// - New key: added as a custom rule
    pub fn with_config(mut self, config: &CategoriesConfig) -> Self {
        for (key, entry) in &config.categories {
            let keywords = normalize_keywords(&entry.keywords);

            if let Some(existing) = self.categories.iter_mut().find(|c| &c.key == key) {
                for keyword in keywords {
                    if !existing.keywords.contains(&keyword) {
                        existing.keywords.push(keyword);
                    }
                }
                if let Some(label) = &entry.label {
                    existing.label = label.clone();
                }
                if let Some(recommendation) = &entry.recommendation {
                    existing.recommendation = recommendation.clone();
                }
                if let Some(priority) = entry.priority {
                    existing.priority = priority;
                }
                continue;
            }

            self.categories.push(CategoryDef {
                key: key.clone(),
                label: entry.label.clone().unwrap_or_else(|| key.clone()),
                keywords: keywords.collect(),
                recommendation: entry
                    .recommendation
                    .clone()
                    .unwrap_or_else(|| self.fallback.recommendation.clone()),
                priority: entry.priority.unwrap_or(DEFAULT_CATEGORY_PRIORITY),
            });
        }
        self
    }

    /// Get a rule by key
    pub fn get(&self, key: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// All rules in evaluation order
    ///
    /// Priority descending. Ties keep definition order: builtins first, then
    /// custom rules in the order they appear in `config.toml`.
    pub fn all(&self) -> Vec<&CategoryDef> {
        let mut categories: Vec<_> = self.categories.iter().collect();
        categories.sort_by(|a, b| b.priority.cmp(&a.priority));
        categories
    }

    /// Category reported when nothing matches
    pub fn fallback(&self) -> &CategoryDef {
        &self.fallback
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lowercased config keywords; blank entries would match every description.
pub(crate) fn normalize_keywords(keywords: &[String]) -> impl Iterator<Item = String> + '_ {
    keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| !k.trim().is_empty())
}

/// `[categories]` section of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesConfig {
    #[serde(flatten)]
    pub categories: IndexMap<String, CategoryConfigEntry>,
}

impl CategoriesConfig {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Single category entry in the config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfigEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(key: &str, entry: CategoryConfigEntry) -> CategoriesConfig {
        CategoriesConfig {
            categories: [(key.to_string(), entry)].into_iter().collect(),
        }
    }

    #[test]
    fn test_category_store_builtin() {
        let store = CategoryStore::builtin();
        assert!(store.get("account").is_some());
        assert!(store.get("hardware").is_some());
        assert!(store.get("nonexistent").is_none());
        assert_eq!(store.fallback().label, "General Support");
    }

    #[test]
    fn test_all_follows_builtin_order() {
        let store = CategoryStore::builtin();
        let keys: Vec<_> = store.all().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["account", "network", "software", "hardware"]);
    }

    #[test]
    fn test_override_extends_keywords() {
        let store = CategoryStore::builtin().with_config(&config_with(
            "network",
            CategoryConfigEntry {
                keywords: vec!["Ethernet".to_string(), "vpn".to_string()],
                priority: Some(600),
                ..Default::default()
            },
        ));

        let network = store.get("network").unwrap();
        assert!(network.keywords.contains(&"ethernet".to_string()));
        assert_eq!(network.keywords.iter().filter(|k| *k == "vpn").count(), 1);
        assert_eq!(network.label, "Network");
        assert_eq!(store.all()[0].key, "network");
    }

    #[test]
    fn test_custom_category_defaults() {
        let store = CategoryStore::builtin().with_config(&config_with(
            "facilities",
            CategoryConfigEntry {
                keywords: vec!["aircon".to_string()],
                ..Default::default()
            },
        ));

        let facilities = store.get("facilities").unwrap();
        assert_eq!(facilities.label, "facilities");
        assert_eq!(facilities.priority, DEFAULT_CATEGORY_PRIORITY);
        assert_eq!(facilities.recommendation, FALLBACK_CATEGORY.recommendation);
        assert_eq!(store.all().last().unwrap().key, "facilities");
    }

    #[test]
    fn test_equal_priority_keeps_config_order() {
        let entry = |label: &str| CategoryConfigEntry {
            label: Some(label.to_string()),
            keywords: vec!["badge".to_string()],
            priority: Some(150),
            ..Default::default()
        };
        let config = CategoriesConfig {
            categories: [
                ("zeta".to_string(), entry("Zeta")),
                ("alpha".to_string(), entry("Alpha")),
            ]
            .into_iter()
            .collect(),
        };

        let store = CategoryStore::builtin().with_config(&config);
        let keys: Vec<_> = store.all().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["account", "network", "software", "hardware", "zeta", "alpha"]
        );
    }

    #[test]
    fn test_blank_keywords_are_ignored() {
        let store = CategoryStore::builtin().with_config(&config_with(
            "facilities",
            CategoryConfigEntry {
                keywords: vec!["".to_string(), "   ".to_string(), "aircon".to_string()],
                ..Default::default()
            },
        ));

        let facilities = store.get("facilities").unwrap();
        assert_eq!(facilities.keywords, vec!["aircon"]);
        assert!(facilities.matches("printer jam").is_none());
    }
}
