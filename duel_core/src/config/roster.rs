//! Roster loading - the two characters that meet in a battle

use super::ConfigError;
use crate::character::Character;
use crate::rng::Seed;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A player and a boss, optionally with the seed to fight under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub player: Character,
    pub boss: Character,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
}

impl Roster {
    fn validate(&self) -> Result<(), ConfigError> {
        for character in [&self.player, &self.boss] {
            character
                .validate()
                .map_err(|err| ConfigError::ValidationError(err.to_string()))?;
        }
        Ok(())
    }
}

/// Load a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let roster: Roster = super::load_toml(path)?;
    roster.validate()?;
    Ok(roster)
}

/// Load a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<Roster, ConfigError> {
    let roster: Roster = super::parse_toml(content)?;
    roster.validate()?;
    Ok(roster)
}

/// The reference encounter shipped with the crate
pub fn default_roster() -> Result<Roster, ConfigError> {
    parse_roster(include_str!("../../config/reference.toml"))
}
