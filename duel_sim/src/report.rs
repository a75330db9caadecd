//! Plain-text battle report

use duel_core::{BattleOutcome, Side};
use std::fmt::Write;

/// Header, one line per attack, then the result
pub fn render(outcome: &BattleOutcome, seed: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} (lv {}) vs {} (lv {}) - seed {:?}",
        outcome.player.name(),
        outcome.player.character.level,
        outcome.boss.name(),
        outcome.boss.character.level,
        seed
    );
    for side in [Side::Player, Side::Boss] {
        let c = outcome.combatant(side);
        let _ = writeln!(
            out,
            "  {:<8} hit {:>7.2}%  crit {:>7.2}%  penetration {:>7.2}%",
            c.name(),
            c.derived.hit_chance,
            c.derived.crit_chance,
            c.derived.penetration_bonus
        );
    }
    out.push('\n');

    for event in &outcome.events {
        let _ = writeln!(out, "{}", event.narrate());
    }

    out.push('\n');
    let _ = writeln!(out, "{}", outcome.summary());
    for side in [Side::Player, Side::Boss] {
        let c = outcome.combatant(side);
        let _ = writeln!(
            out,
            "  {:<8} dealt {:>10.0}  hp {:>10.0} / {:.0}",
            c.name(),
            outcome.damage_dealt(side),
            c.hp(),
            c.starting_hp
        );
    }

    out
}
