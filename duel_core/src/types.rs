//! Core types shared across the combat modules

use crate::error::DuelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest supported character level
pub const LEVEL_MIN: u32 = 1;
/// Highest supported character level
pub const LEVEL_MAX: u32 = 1000;

/// Which side of the encounter a combatant fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Boss,
}

impl Side {
    /// The opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Boss,
            Side::Boss => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Boss => f.write_str("boss"),
        }
    }
}

/// Character level, guaranteed to lie in `1..=1000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    /// Validate a raw level
    pub fn new(level: u32) -> Result<Self, DuelError> {
        if (LEVEL_MIN..=LEVEL_MAX).contains(&level) {
            Ok(Level(level))
        } else {
            Err(DuelError::InvalidLevel { level })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Level {
    type Error = DuelError;

    fn try_from(level: u32) -> Result<Self, Self::Error> {
        Level::new(level)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the next skill is drawn from a rotation once the opening exchange is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedrawPolicy {
    /// Modulus excludes one slot but negative rolls wrap against the full
    /// rotation, so the skill that just finished may be drawn again
    #[default]
    Legacy,
    /// Never draw the skill at the back of the rotation
    ExcludeLast,
}

/// How a battle came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// One side's hp reached zero
    Knockout,
    /// Time ran out and the side with more of its starting hp left won
    TimeLimit,
    /// Time ran out with both sides on the same hp fraction
    Draw,
}
