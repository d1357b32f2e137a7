//! # hsym-config
//!
//! Layered configuration loading for hsym using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HSYM_*` prefix, `__` as separator)
//! 2. Project-level `.hsym/config.toml`
//! 3. User-level `~/.config/hsym/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HSYM_SCAN__WORKERS` -> `scan.workers`,
//! `HSYM_CHECK__MIN_LENGTH` -> `check.min_length`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hsym_config::HsymConfig;
//!
//! let config = HsymConfig::load_with_dotenv().expect("config");
//! println!("scanning *.{} with {} workers", config.scan.extensions[0], config.scan.workers);
//! ```

mod check;
mod error;
mod scan;

pub use check::CheckConfig;
pub use error::ConfigError;
pub use scan::ScanConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HsymConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

impl HsymConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`HsymConfig::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file, if one exists.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary provider chain.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".hsym/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HSYM_").split("__"))
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scan.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hsym").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HsymConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scan.workers, 4);
        assert_eq!(config.check.min_length, 2);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: HsymConfig = HsymConfig::figment().extract()?;
            assert_eq!(config.scan.extensions, vec!["h"]);
            Ok(())
        });
    }
}
