//! # Session Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CARDVAULT_COLLECTOR_NAME=Ash                                        │
//! │     CARDVAULT_TRADE_WARNING_THRESHOLD=2.50                              │
//! │     CARDVAULT_LOG=debug                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cardvault/config.toml (Linux)                            │
//! │     ~/Library/Application Support/com.cardvault.cardvault/config.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     collector "Collector", threshold $1.00, log filter "info"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [inventory]
//! collector_name = "Ash"
//! trade_warning_threshold = 250  # cents
//!
//! [logging]
//! filter = "info,cardvault_core=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use cardvault_core::{InventoryConfig, Money};

use crate::error::{ConfigError, ConfigResult};

pub const ENV_COLLECTOR_NAME: &str = "CARDVAULT_COLLECTOR_NAME";
pub const ENV_TRADE_WARNING_THRESHOLD: &str = "CARDVAULT_TRADE_WARNING_THRESHOLD";
pub const ENV_LOG: &str = "CARDVAULT_LOG";

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive string. `RUST_LOG` still wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Session Configuration
// =============================================================================

/// Complete session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SessionConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else the platform config dir)
    /// 3. Environment variables
    ///
    /// A missing file falls back to defaults; an unreadable or malformed
    /// one is an error.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::Invalid("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Config saved");
        Ok(path)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.inventory.trade_warning_threshold.is_negative() {
            return Err(ConfigError::Invalid(format!(
                "trade_warning_threshold must not be negative, got {}",
                self.inventory.trade_warning_threshold
            )));
        }

        if self.inventory.collector_name.trim().is_empty() {
            return Err(ConfigError::Invalid("collector_name must not be empty".into()));
        }

        Ok(())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value. [`SessionConfig::load`] passes the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_COLLECTOR_NAME) {
            debug!(collector = %name, "Overriding collector name from environment");
            self.inventory.collector_name = name;
        }

        if let Some(raw) = lookup(ENV_TRADE_WARNING_THRESHOLD) {
            match raw.parse::<Money>() {
                Ok(threshold) => {
                    debug!(%threshold, "Overriding trade warning threshold from environment");
                    self.inventory.trade_warning_threshold = threshold;
                }
                Err(e) => warn!(value = %raw, error = %e, "Ignoring trade warning threshold"),
            }
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cardvault", "cardvault")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cardvault-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.inventory.collector_name, "Collector");
        assert_eq!(config.inventory.trade_warning_threshold, Money::from_cents(100));
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_sections() {
        let config: SessionConfig = toml::from_str(
            r#"
            [inventory]
            trade_warning_threshold = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.inventory.trade_warning_threshold, Money::from_cents(250));
        assert_eq!(config.inventory.collector_name, "Collector");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_COLLECTOR_NAME, "Ash"),
            (ENV_TRADE_WARNING_THRESHOLD, "$2.50"),
            (ENV_LOG, "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = SessionConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.inventory.collector_name, "Ash");
        assert_eq!(config.inventory.trade_warning_threshold, Money::from_cents(250));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_bad_threshold_override_is_ignored() {
        let mut config = SessionConfig::default();
        config.apply_overrides(|key| {
            (key == ENV_TRADE_WARNING_THRESHOLD).then(|| "lots".to_string())
        });
        assert_eq!(config.inventory.trade_warning_threshold, Money::from_cents(100));
    }

    #[test]
    fn test_validation() {
        let mut config = SessionConfig::default();
        config.inventory.trade_warning_threshold = Money::from_cents(-1);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SessionConfig::default();
        config.inventory.collector_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = SessionConfig::from_file(&scratch_path("absent.toml")).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch_path("malformed.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[inventory\ncollector_name = ").unwrap();

        assert!(matches!(
            SessionConfig::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_then_read_back() {
        let mut config = SessionConfig::default();
        config.inventory.collector_name = "Misty".into();
        config.logging.filter = "warn".into();

        let path = config.save(Some(scratch_path("saved.toml"))).unwrap();
        let loaded = SessionConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
