#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::filter::{DEFAULT_SEQUENCE, DEFAULT_THRESHOLD};
use crate::core::SieveSettings;
use crate::domain::model::MAX_AGE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings after applying defaults, the config file and overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SieveConfig {
    pub numbers: Vec<i64>,
    pub less_than: i64,
    pub max_age: u32,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            numbers: DEFAULT_SEQUENCE.to_vec(),
            less_than: DEFAULT_THRESHOLD,
            max_age: MAX_AGE,
        }
    }
}

impl SieveConfig {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            numbers: config.filter.numbers.clone().unwrap_or(defaults.numbers),
            less_than: config.filter.less_than.unwrap_or(defaults.less_than),
            max_age: config.validation.max_age.unwrap_or(defaults.max_age),
        }
    }

    /// Command-line values win over file values. An empty `numbers` keeps the current list.
    pub fn with_overrides(mut self, numbers: &[i64], less_than: Option<i64>) -> Self {
        if !numbers.is_empty() {
            self.numbers = numbers.to_vec();
        }
        if let Some(threshold) = less_than {
            self.less_than = threshold;
        }
        self
    }
}

impl SieveSettings for SieveConfig {
    fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    fn less_than(&self) -> i64 {
        self.less_than
    }

    fn max_age(&self) -> u32 {
        self.max_age
    }
}

impl Validate for SieveConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("validation.max_age", self.max_age, 1)
    }
}
