//! Configuration loading from TOML files

mod rules;

pub use rules::GearRules;

use crate::hunter::BaseStats;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Starting stats and gear rules for a hunter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunterConfig {
    #[serde(default)]
    pub base: BaseStats,
    #[serde(default)]
    pub rules: GearRules,
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate a hunter config file
pub fn load_config(path: &Path) -> Result<HunterConfig, ConfigError> {
    let config: HunterConfig = load_toml(path)?;
    config.rules.validate()?;
    Ok(config)
}

/// Parse and validate a hunter config string
pub fn parse_config(content: &str) -> Result<HunterConfig, ConfigError> {
    let config: HunterConfig = parse_toml(content)?;
    config.rules.validate()?;
    Ok(config)
}

/// Get the bundled default configuration
pub fn default_config() -> HunterConfig {
    let toml = include_str!("../../config/hunter.toml");
    parse_config(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "bundled hunter config is invalid, using built-in defaults");
        HunterConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementResistances;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[base]
attack = 120
defense = 45

[base.resistances]
fire = 3
water = 0
lightning = -1
ice = 0
dragon = 2

[rules]
max_decoration_level = 4
combo_decoration_min_level = 4
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.base.attack, 120);
        assert_eq!(config.base.defense, 45);
        assert_eq!(config.base.resistances, ElementResistances::new(3, 0, -1, 0, 2));
        assert_eq!(config.rules, GearRules::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, HunterConfig::default());
    }

    #[test]
    fn test_invalid_rules_rejected() {
        let toml = r#"
[rules]
max_decoration_level = 2
combo_decoration_min_level = 3
"#;
        assert!(matches!(parse_config(toml), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(parse_config("[base"), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.base, BaseStats::default());
        assert_eq!(config.rules.max_decoration_level, 4);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_config(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
