//! Combat - attack resolution and the battle timeline

mod attack;
mod battle;
mod combatant;
mod event;
mod outcome;
mod rotation;

pub use attack::resolve_attack;
pub use battle::{Battle, Phase};
pub use combatant::Combatant;
pub use event::CombatEvent;
pub use outcome::BattleOutcome;
pub use rotation::{pick_index, Draw, Rotation};

use crate::character::Character;
use crate::config::BattleConstants;
use crate::error::DuelError;
use crate::rng::{Seed, SeedRandom};
use rand::RngCore;

/// Run a full battle between `player` and `boss`
pub fn resolve_battle(
    player: Character,
    boss: Character,
    constants: &BattleConstants,
    rng: &mut impl RngCore,
) -> Result<BattleOutcome, DuelError> {
    Ok(Battle::new(player, boss, constants)?.run(rng))
}

/// Run a full battle with default constants, drawing from a fresh seeded generator
pub fn resolve_battle_seeded(
    player: Character,
    boss: Character,
    seed: impl Into<Seed>,
) -> Result<BattleOutcome, DuelError> {
    let mut rng = SeedRandom::new(seed);
    resolve_battle(player, boss, &BattleConstants::default(), &mut rng)
}
