//! Character - input record for one side of a battle

mod derived;
mod skill;

pub use derived::DerivedStats;
pub use skill::Skill;

use crate::error::DuelError;
use crate::types::Level;
use serde::{Deserialize, Serialize};

/// A combatant's stat sheet and skill rotation.
///
/// Derived percentages are not stored here; they are computed per battle
/// against a specific opponent (see [`DerivedStats`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub level: Level,
    pub attack: f64,
    /// Current hp. May go negative on overkill.
    pub hp: f64,
    #[serde(default)]
    pub hp_max: f64,
    /// Informational; no regeneration is simulated
    #[serde(default)]
    pub heal: f64,

    // === Contested stats ===
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub penetrate: f64,
    #[serde(default)]
    pub hit: f64,
    #[serde(default)]
    pub miss: f64,
    #[serde(default, alias = "cirt")]
    pub crit: f64,
    #[serde(default)]
    pub uncrit: f64,

    /// Ordered skill list, used as the initial rotation
    pub skills: Vec<Skill>,
}

impl Character {
    /// Create a character with zeroed stats and no skills
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Character {
            name: name.into(),
            level,
            attack: 0.0,
            hp: 0.0,
            hp_max: 0.0,
            heal: 0.0,
            defense: 0.0,
            penetrate: 0.0,
            hit: 0.0,
            miss: 0.0,
            crit: 0.0,
            uncrit: 0.0,
            skills: Vec::new(),
        }
    }

    /// Append a skill to the rotation
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Check the record can enter a battle
    pub fn validate(&self) -> Result<(), DuelError> {
        if self.skills.is_empty() {
            return Err(DuelError::character(&self.name, "skill list is empty"));
        }

        if !(self.hp.is_finite() && self.hp > 0.0) {
            return Err(DuelError::character(
                &self.name,
                format!("starting hp must be positive, got {}", self.hp),
            ));
        }

        let stats = [
            ("attack", self.attack),
            ("hp_max", self.hp_max),
            ("heal", self.heal),
            ("defense", self.defense),
            ("penetrate", self.penetrate),
            ("hit", self.hit),
            ("miss", self.miss),
            ("crit", self.crit),
            ("uncrit", self.uncrit),
        ];
        for (stat, value) in stats {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DuelError::character(
                    &self.name,
                    format!("{} must be a non-negative number, got {}", stat, value),
                ));
            }
        }

        for skill in &self.skills {
            skill
                .validate()
                .map_err(|reason| DuelError::character(&self.name, reason))?;
        }

        Ok(())
    }
}
