//! Attack resolution - miss roll, crit roll, penetration, hp loss
//!
//! Rolls are `int32 % roll_modulus`, so they land in `-(m-1)..=(m-1)` and are
//! compared against the unclamped percentages directly:
//! 1. roll >= hit_chance: the attack misses
//! 2. base damage = skill multiplier * attack
//! 3. roll >= crit_chance: damage is multiplied by the crit multiplier
//! 4. damage *= (penetration_bonus + 100) / 100
//! 5. defender hp drops by the damage, with no floor

use super::{CombatEvent, Combatant};
use crate::character::Skill;
use crate::config::BattleConstants;
use rand::RngCore;

/// Signed roll with the remainder taking the sign of the draw
pub(crate) fn roll(rng: &mut impl RngCore, modulus: i32) -> i32 {
    (rng.next_u32() as i32) % modulus
}

/// Resolve one attack of `attacker` on `defender` with `skill`
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &mut Combatant,
    skill: &Skill,
    elapsed_ms: u64,
    constants: &BattleConstants,
    rng: &mut impl RngCore,
) -> CombatEvent {
    let mut event = CombatEvent {
        elapsed_ms,
        attacker: attacker.side,
        attacker_name: attacker.name().to_string(),
        defender_name: defender.name().to_string(),
        skill: skill.name.clone(),
        hit: false,
        critical: false,
        damage: 0.0,
        defender_hp: defender.hp(),
    };

    let hit_roll = roll(rng, constants.roll_modulus);
    if f64::from(hit_roll) >= attacker.derived.hit_chance {
        tracing::debug!(
            elapsed_ms,
            attacker = %event.attacker_name,
            skill = %event.skill,
            hit_roll,
            "attack missed"
        );
        return event;
    }

    let mut damage = skill.attack_multiplier * attacker.character.attack;

    let crit_roll = roll(rng, constants.roll_modulus);
    if f64::from(crit_roll) >= attacker.derived.crit_chance {
        damage *= constants.crit_multiplier;
        event.critical = true;
    }

    damage *= attacker.derived.penetration_multiplier();
    defender.character.hp -= damage;

    event.hit = true;
    event.damage = damage;
    event.defender_hp = defender.hp();

    tracing::debug!(
        elapsed_ms,
        attacker = %event.attacker_name,
        skill = %event.skill,
        critical = event.critical,
        damage,
        defender_hp = event.defender_hp,
        "attack landed"
    );

    event
}
