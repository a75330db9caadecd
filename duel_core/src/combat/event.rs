//! CombatEvent - one resolved attack

use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Record of a single attack, in battle order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatEvent {
    /// Simulated time the attack started
    pub elapsed_ms: u64,
    pub attacker: Side,
    pub attacker_name: String,
    pub defender_name: String,
    pub skill: String,
    pub hit: bool,
    pub critical: bool,
    /// Damage dealt; zero on a miss
    pub damage: f64,
    /// Defender hp after the attack; negative on overkill
    pub defender_hp: f64,
}

impl CombatEvent {
    /// Damage past zero hp
    pub fn overkill(&self) -> f64 {
        if self.defender_hp < 0.0 {
            -self.defender_hp
        } else {
            0.0
        }
    }

    pub fn is_killing_blow(&self) -> bool {
        self.hit && self.defender_hp <= 0.0
    }

    /// A one-line narrative of the attack
    pub fn narrate(&self) -> String {
        let opening = format!(
            "[{:>6} ms] {} uses {} on {}",
            self.elapsed_ms, self.attacker_name, self.skill, self.defender_name
        );

        if !self.hit {
            return format!("{} - {} dodges", opening, self.defender_name);
        }

        let crit = if self.critical { " - critical hit!" } else { "" };
        if self.defender_hp >= 0.0 {
            format!(
                "{}{} {} takes {:.0} damage, {:.0} hp left",
                opening, crit, self.defender_name, self.damage, self.defender_hp
            )
        } else {
            format!(
                "{}{} {} takes {:.0} damage, {:.0} overkill",
                opening,
                crit,
                self.defender_name,
                self.damage,
                self.overkill()
            )
        }
    }
}
