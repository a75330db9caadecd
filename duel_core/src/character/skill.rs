//! Skill - one entry in a character's rotation

use serde::{Deserialize, Serialize};

/// A rotation skill. Durations and timestamps are simulated milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Damage multiplier applied to the attacker's attack
    #[serde(alias = "atk_mul")]
    pub attack_multiplier: f64,
    /// Time before the next skill in the rotation can start
    pub duration: u64,
    /// Informational; the scheduler rotates skills instead of timing cooldowns
    #[serde(default)]
    pub cool_down: u64,
    /// When this skill was last drawn in the current battle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_use: Option<u64>,
}

impl Skill {
    pub fn new(name: impl Into<String>, attack_multiplier: f64, duration: u64) -> Self {
        Skill {
            name: name.into(),
            attack_multiplier,
            duration,
            cool_down: 0,
            last_use: None,
        }
    }

    pub fn with_cool_down(mut self, cool_down: u64) -> Self {
        self.cool_down = cool_down;
        self
    }

    /// When this skill's duration runs out, if it has been used
    pub fn finishes_at(&self) -> Option<u64> {
        self.last_use.map(|t| t.saturating_add(self.duration))
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if !(self.attack_multiplier.is_finite() && self.attack_multiplier > 0.0) {
            return Err(format!(
                "skill `{}` needs a positive attack multiplier, got {}",
                self.name, self.attack_multiplier
            ));
        }
        if self.duration == 0 {
            return Err(format!("skill `{}` has zero duration", self.name));
        }
        Ok(())
    }
}
