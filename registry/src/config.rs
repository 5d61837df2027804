//! Configuration of a registry instance, read from the environment.
use crate::types::ConsumableCombination;
use alloy_primitives::Address;
use std::env;
use std::fs;
use strum::{Display, EnumString};
use thiserror::Error;

/// How `set_combinations` treats two inputs that share a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DuplicatePolicy {
    /// Fail the call and keep the previous combinations.
    #[default]
    Reject,
    /// The later input replaces the earlier one in place.
    Overwrite,
}

/// The `RegistryConfig` struct holds the settings of one deployed provider facet.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// The consumable minted by `provide`
    pub provided_consumable: Address,
    /// The duplicate key policy for `set_combinations`
    pub duplicate_policy: DuplicatePolicy,
    /// Combinations the registry starts with
    pub initial_combinations: Vec<ConsumableCombination>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("The environment variable {0} is not set.")]
    MissingVariable(&'static str),
    #[error("The environment variable {name} has an invalid value '{value}'.")]
    InvalidVariable { name: &'static str, value: String },
    #[error("Failed to read the combinations file {path}: {source}")]
    CombinationsFile {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse the combinations file: {0}")]
    CombinationsJson(serde_json::Error),
}

pub const PROVIDED_CONSUMABLE_ADDRESS: &str = "PROVIDED_CONSUMABLE_ADDRESS";
pub const COMBINATION_DUPLICATE_POLICY: &str = "COMBINATION_DUPLICATE_POLICY";
pub const INITIAL_COMBINATIONS_JSON: &str = "INITIAL_COMBINATIONS_JSON";

/// Reads the environment for required values and sets them into the config.
///
/// Values from a `.env` file in the working directory are loaded first, without overriding
/// variables that are already set.
pub fn load_config() -> Result<RegistryConfig, ConfigError> {
    dotenv::dotenv().ok();

    let provided = env::var(PROVIDED_CONSUMABLE_ADDRESS)
        .map_err(|_| ConfigError::MissingVariable(PROVIDED_CONSUMABLE_ADDRESS))?;
    let provided_consumable: Address =
        provided.parse().map_err(|_| ConfigError::InvalidVariable {
            name: PROVIDED_CONSUMABLE_ADDRESS,
            value: provided.clone(),
        })?;

    let duplicate_policy = match env::var(COMBINATION_DUPLICATE_POLICY) {
        Ok(policy) => policy
            .parse()
            .map_err(|_| ConfigError::InvalidVariable {
                name: COMBINATION_DUPLICATE_POLICY,
                value: policy.clone(),
            })?,
        Err(_) => DuplicatePolicy::default(),
    };

    let initial_combinations = match env::var(INITIAL_COMBINATIONS_JSON) {
        Ok(path) => read_combinations_file(&path)?,
        Err(_) => Vec::new(),
    };

    Ok(RegistryConfig {
        provided_consumable,
        duplicate_policy,
        initial_combinations,
    })
}

/// Parses a JSON array of combinations from the file at `path`.
pub fn read_combinations_file(path: &str) -> Result<Vec<ConsumableCombination>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::CombinationsFile {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(ConfigError::CombinationsJson)
}
