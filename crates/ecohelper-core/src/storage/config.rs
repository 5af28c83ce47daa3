//! TOML-based application configuration.
//!
//! Stores user preferences for:
//! - Dashboard display (recent-list length, timestamp format)
//! - Log verbosity
//!
//! Configuration is stored at `~/.config/ecohelper/config.toml`. A missing
//! file means defaults; nothing is written until [`Config::save`] is called.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::config_dir;
use crate::dashboard::RECENT_LIMIT;
use crate::error::{self, ConfigError};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Dashboard display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows in the recent-activity list (1..=10).
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// strftime pattern for activity timestamps.
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Show timestamps in local time rather than UTC.
    #[serde(default = "default_true")]
    pub local_time: bool,
}

/// Logging configuration. `RUST_LOG` takes precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ecohelper/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_recent_limit() -> usize {
    RECENT_LIMIT
}
fn default_time_format() -> String {
    "%H:%M:%S".into()
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            time_format: default_time_format(),
            local_time: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }
        key.split('.').try_fold(root, |current, part| current.get(part))
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        if let Some(parent_path) = parent_path {
            for part in parent_path.split('.') {
                current = current.get_mut(part).ok_or_else(unknown)?;
            }
        }

        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
            ),
            serde_json::Value::Number(_) => value
                .parse::<u64>()
                .map(|n| serde_json::Value::Number(n.into()))
                .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
            serde_json::Value::Object(_) => return Err(unknown()),
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Path of the config file in the default location.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, or return defaults when no file
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read,
    /// parsed, or fails validation.
    pub fn load() -> error::Result<Self> {
        Ok(Self::load_from(&Self::path()?)?)
    }

    /// Load from an explicit path, or return defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> error::Result<()> {
        Ok(self.save_to(&Self::path()?)?)
    }

    /// Persist to an explicit path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=RECENT_LIMIT).contains(&self.display.recent_limit) {
            return Err(ConfigError::InvalidValue {
                key: "display.recent_limit".into(),
                message: format!("must be between 1 and {RECENT_LIMIT}"),
            });
        }
        let format_ok = !self.display.time_format.is_empty()
            && StrftimeItems::new(&self.display.time_format).all(|item| item != Item::Error);
        if !format_ok {
            return Err(ConfigError::InvalidValue {
                key: "display.time_format".into(),
                message: format!("'{}' is not a valid strftime pattern", self.display.time_format),
            });
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".into(),
                message: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the result fails validation. `self` is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.display.recent_limit, 10);
        assert_eq!(parsed.logging.level, "warn");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[display]\nlocal_time = false\n").unwrap();
        assert!(!parsed.display.local_time);
        assert_eq!(parsed.display.time_format, "%H:%M:%S");
        assert_eq!(parsed.logging.level, "warn");
    }

    #[test]
    fn get_by_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("display.recent_limit").as_deref(), Some("10"));
        assert_eq!(cfg.get("display.time_format").as_deref(), Some("%H:%M:%S"));
        assert_eq!(cfg.get("display.local_time").as_deref(), Some("true"));
        assert_eq!(cfg.get("display.nope"), None);
        assert_eq!(cfg.get(""), None);
    }

    #[test]
    fn set_preserves_types() {
        let mut cfg = Config::default();
        cfg.set("display.recent_limit", "5").unwrap();
        cfg.set("display.local_time", "false").unwrap();
        cfg.set("logging.level", "debug").unwrap();
        assert_eq!(cfg.display.recent_limit, 5);
        assert!(!cfg.display.local_time);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn set_rejects_bad_input() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("display.color", "red"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("display", "x"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("display.recent_limit", "many"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("display.recent_limit", "11"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("display.time_format", "%Q"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("logging.level", "loud"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(!dir.path().join("config.toml").exists());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.set("display.recent_limit", "3").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_rejects_out_of_range_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nrecent_limit = 0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
