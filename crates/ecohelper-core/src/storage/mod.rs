//! On-disk settings. Activities themselves are never written out.

mod config;

pub use config::{Config, DisplayConfig, LoggingConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/ecohelper[-dev]/` based on ECOHELPER_ENV.
///
/// Set ECOHELPER_ENV=dev to use the development directory. The directory is
/// not created here; [`Config::save`] creates it on first write.
///
/// # Errors
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?.join(".config");

    let env = std::env::var("ECOHELPER_ENV").unwrap_or_else(|_| "production".to_string());

    Ok(if env == "dev" {
        base_dir.join("ecohelper-dev")
    } else {
        base_dir.join("ecohelper")
    })
}
