pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::csv_people::CsvPeople;
pub use crate::config::{toml_config::TomlConfig, SieveConfig};
pub use crate::core::{
    filter::{filter, format_sequence, smaller_than_10},
    sieve::SieveEngine,
    validator::{is_valid_person, PersonValidator},
};
pub use crate::domain::model::{Age, Person, PhoneNumber};
pub use crate::utils::error::{Result, SieveError};
