//! Configuration loading from TOML files

mod constants;
mod roster;

pub use constants::{BattleConstants, RoleBaselines};
pub use roster::{default_roster, load_roster, parse_roster, Roster};

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

/// Load battle constants from a TOML file
pub fn load_constants(path: &Path) -> Result<BattleConstants, ConfigError> {
    parse_constants(&fs::read_to_string(path)?)
}

/// Load battle constants from a TOML string. Missing keys take their defaults.
pub fn parse_constants(content: &str) -> Result<BattleConstants, ConfigError> {
    let constants: BattleConstants = parse_toml(content)?;
    constants
        .validate()
        .map_err(|err| ConfigError::ValidationError(err.to_string()))?;
    Ok(constants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let err = load_constants(Path::new("/nonexistent/duel_constants.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = parse_constants("time_limit_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_error_surfaces() {
        let err = parse_constants("roll_modulus = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
