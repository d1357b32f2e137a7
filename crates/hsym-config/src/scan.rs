//! Tree scanning configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_extensions() -> Vec<String> {
    vec!["h".to_string()]
}

/// Default worker pool size.
const fn default_workers() -> usize {
    4
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// File extensions to scan, with or without a leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Number of files processed concurrently.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Honour `.gitignore` and `.hsymignore` files and skip hidden entries.
    #[serde(default)]
    pub respect_ignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            workers: default_workers(),
            respect_ignore: false,
        }
    }
}

impl ScanConfig {
    /// Reject values the scanner cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scan.workers".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self
            .extensions
            .iter()
            .all(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "scan.extensions".to_string(),
                reason: "at least one non-empty extension is required".to_string(),
            });
        }
        Ok(())
    }
}
