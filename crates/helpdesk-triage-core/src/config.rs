use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::CategoriesConfig;
use crate::error::{Result, TriageError};
use crate::priority::SignalsConfig;

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# helpdesk-triage configuration file
# Location: ~/.helpdesk-triage/config.toml
#
# Everything here is optional. Without this file the builtin keyword
# tables are used unchanged.

# Extend a builtin category (account, network, software, hardware).
# Keywords are appended; label, recommendation and priority replace the builtin.
#
# [categories.network]
# keywords = ["ethernet", "proxy"]

# Add a custom category. Rules are checked from the highest priority down.
# Builtin priorities: account 500, network 400, software 300, hardware 200.
# Default priority for custom rules: 100
#
# [categories.facilities]
# label = "Facilities"
# keywords = ["aircon", "badge reader"]
# recommendation = "Raise with building management and note the location."
# priority = 150

# Extra keywords for the priority signals.
#
# [signals]
# urgent = ["blocker"]
# high_impact = ["whole team"]
# low_impact = ["no rush"]
"#;

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "CategoriesConfig::is_empty")]
    pub categories: CategoriesConfig,

    #[serde(default, skip_serializing_if = "SignalsConfig::is_empty")]
    pub signals: SignalsConfig,
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| TriageError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = self.to_toml()?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_default() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_categories_and_signals() {
        let config: Config = toml::from_str(
            r#"
            [categories.network]
            keywords = ["ethernet"]

            [categories.facilities]
            label = "Facilities"
            keywords = ["aircon"]
            priority = 150

            [signals]
            urgent = ["blocker"]
            "#,
        )
        .unwrap();

        assert_eq!(config.categories.categories.len(), 2);
        let facilities = &config.categories.categories["facilities"];
        assert_eq!(facilities.label.as_deref(), Some("Facilities"));
        assert_eq!(facilities.priority, Some(150));
        assert_eq!(config.signals.urgent, vec!["blocker"]);
        assert!(config.signals.low_impact.is_empty());
    }

    #[test]
    fn test_path() {
        assert_eq!(
            Config::path(Path::new("/tmp/triage")),
            PathBuf::from("/tmp/triage/config.toml")
        );
    }
}
