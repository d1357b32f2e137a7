//! Settings for the `--check` diagnostic pass.

use hsym_core::CheckRules;
use hsym_core::diagnostics::{DEFAULT_MIN_LENGTH, DEFAULT_SUSPICIOUS};
use serde::{Deserialize, Serialize};

const fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_suspicious() -> Vec<String> {
    DEFAULT_SUSPICIOUS.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Symbols shorter than this many characters are reported.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Substrings that mark a symbol as a likely false positive.
    #[serde(default = "default_suspicious")]
    pub suspicious: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            suspicious: default_suspicious(),
        }
    }
}

impl From<CheckConfig> for CheckRules {
    fn from(config: CheckConfig) -> Self {
        Self {
            min_length: config.min_length,
            suspicious: config.suspicious,
        }
    }
}
