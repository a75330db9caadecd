//! BattleOutcome - the record a resolved battle hands back

use super::{CombatEvent, Combatant};
use crate::types::{Resolution, Side};
use serde::{Deserialize, Serialize};

/// Result of a resolved battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// `None` only for a draw
    pub winner: Option<Side>,
    pub resolution: Resolution,
    /// Simulated time of the last attack or of the time-limit check
    pub elapsed_ms: u64,
    /// Every attack, in order
    pub events: Vec<CombatEvent>,
    /// Final state of both sides
    pub player: Combatant,
    pub boss: Combatant,
}

impl BattleOutcome {
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Boss => &self.boss,
        }
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|side| self.combatant(side).name())
    }

    /// Attacks made by one side
    pub fn events_by(&self, side: Side) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter().filter(move |e| e.attacker == side)
    }

    /// Total damage dealt by one side
    pub fn damage_dealt(&self, side: Side) -> f64 {
        self.events_by(side).map(|e| e.damage).sum()
    }

    /// One-line result
    pub fn summary(&self) -> String {
        match (self.resolution, self.winner_name()) {
            (Resolution::Knockout, Some(name)) => format!(
                "{} wins by knockout at {} ms after {} attacks",
                name,
                self.elapsed_ms,
                self.events.len()
            ),
            (Resolution::TimeLimit, Some(name)) => format!(
                "{} wins on time at {} ms ({:.1}% vs {:.1}% hp left)",
                name,
                self.elapsed_ms,
                self.player.hp_fraction() * 100.0,
                self.boss.hp_fraction() * 100.0
            ),
            _ => format!(
                "draw at {} ms, both sides on {:.1}% hp",
                self.elapsed_ms,
                self.player.hp_fraction() * 100.0
            ),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
