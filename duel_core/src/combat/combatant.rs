//! Combatant - a character's per-battle copy with its derived percentages

use crate::character::{Character, DerivedStats};
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// One side of a running battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub side: Side,
    pub character: Character,
    pub derived: DerivedStats,
    /// Hp when the battle started, used for time-limit comparisons
    pub starting_hp: f64,
}

impl Combatant {
    pub fn new(side: Side, character: Character, derived: DerivedStats) -> Self {
        let starting_hp = character.hp;
        Combatant {
            side,
            character,
            derived,
            starting_hp,
        }
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn hp(&self) -> f64 {
        self.character.hp
    }

    pub fn is_alive(&self) -> bool {
        self.character.is_alive()
    }

    /// Remaining hp as a fraction of the starting hp
    pub fn hp_fraction(&self) -> f64 {
        self.character.hp / self.starting_hp
    }
}
