//! Battle - the timeline state machine
//!
//! Setup computes both sides' percentages. The opening exchange has the
//! player then the boss act at time zero. After that the side whose current
//! skill finishes first acts next, the boss on ties, until a knockout or
//! until simulated time reaches the limit.

use super::attack::resolve_attack;
use super::rotation::{Draw, Rotation};
use super::{BattleOutcome, CombatEvent, Combatant};
use crate::character::{Character, DerivedStats};
use crate::config::BattleConstants;
use crate::error::DuelError;
use crate::types::{Resolution, Side};
use rand::RngCore;

/// Where the battle is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Percentages computed, nobody has acted
    Setup,
    /// Opening exchange done or in progress
    RoundLoop,
    Resolved,
}

/// A battle in progress
#[derive(Debug, Clone)]
pub struct Battle {
    constants: BattleConstants,
    player: Combatant,
    boss: Combatant,
    player_rotation: Rotation,
    boss_rotation: Rotation,
    now: u64,
    phase: Phase,
    events: Vec<CombatEvent>,
    winner: Option<Side>,
    resolution: Option<Resolution>,
}

impl Battle {
    /// Validate both sides and compute their percentages
    pub fn new(
        player: Character,
        boss: Character,
        constants: &BattleConstants,
    ) -> Result<Self, DuelError> {
        constants.validate()?;
        player.validate()?;
        boss.validate()?;

        let player_derived =
            DerivedStats::against(&player, &constants.player, &boss, &constants.boss, &constants.curve);
        let boss_derived =
            DerivedStats::against(&boss, &constants.boss, &player, &constants.player, &constants.curve);

        tracing::debug!(
            player = %player.name,
            hit = player_derived.hit_chance,
            crit = player_derived.crit_chance,
            penetration = player_derived.penetration_bonus,
            "player percentages"
        );
        tracing::debug!(
            boss = %boss.name,
            hit = boss_derived.hit_chance,
            crit = boss_derived.crit_chance,
            penetration = boss_derived.penetration_bonus,
            "boss percentages"
        );

        Ok(Battle {
            constants: constants.clone(),
            player_rotation: Rotation::new(&player.skills),
            boss_rotation: Rotation::new(&boss.skills),
            player: Combatant::new(Side::Player, player, player_derived),
            boss: Combatant::new(Side::Boss, boss, boss_derived),
            now: 0,
            phase: Phase::Setup,
            events: Vec::new(),
            winner: None,
            resolution: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current simulated time
    pub fn elapsed_ms(&self) -> u64 {
        self.now
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Boss => &self.boss,
        }
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == Phase::Resolved
    }

    /// Advance by one attack.
    ///
    /// Returns `None` once the battle is resolved, including the call that
    /// notices the time limit.
    pub fn step(&mut self, rng: &mut impl RngCore) -> Option<CombatEvent> {
        if self.phase == Phase::Resolved {
            return None;
        }
        self.phase = Phase::RoundLoop;

        if self.player_rotation.current().is_none() {
            return self.act(Side::Player, Draw::Opening, rng);
        }
        if self.boss_rotation.current().is_none() {
            return self.act(Side::Boss, Draw::Opening, rng);
        }

        if self.now >= self.constants.time_limit_ms {
            self.resolve_on_time();
            return None;
        }

        let player_next = finish_time(&self.player_rotation);
        let boss_next = finish_time(&self.boss_rotation);
        let (side, next) = if player_next < boss_next {
            (Side::Player, player_next)
        } else {
            (Side::Boss, boss_next)
        };

        self.now = next;
        self.act(side, Draw::Follow(self.constants.redraw), rng)
    }

    /// Step until resolved
    pub fn run(mut self, rng: &mut impl RngCore) -> BattleOutcome {
        while !self.is_resolved() {
            self.step(rng);
        }
        self.into_outcome()
    }

    /// Final record; an unresolved battle reports a draw
    pub fn into_outcome(self) -> BattleOutcome {
        BattleOutcome {
            winner: self.winner,
            resolution: self.resolution.unwrap_or(Resolution::Draw),
            elapsed_ms: self.now,
            events: self.events,
            player: self.player,
            boss: self.boss,
        }
    }

    fn act(&mut self, side: Side, draw: Draw, rng: &mut impl RngCore) -> Option<CombatEvent> {
        let skill_roll = rng.next_u32() as i32;
        let now = self.now;

        let (rotation, attacker, defender) = match side {
            Side::Player => (&mut self.player_rotation, &self.player, &mut self.boss),
            Side::Boss => (&mut self.boss_rotation, &self.boss, &mut self.player),
        };

        let skill = rotation.draw(skill_roll, draw, now)?;
        let event = resolve_attack(attacker, defender, skill, now, &self.constants, rng);
        let knocked_out = !defender.is_alive();

        self.events.push(event.clone());

        if knocked_out {
            self.resolve(Some(side), Resolution::Knockout);
        }

        Some(event)
    }

    fn resolve_on_time(&mut self) {
        let player = self.player.hp_fraction();
        let boss = self.boss.hp_fraction();

        tracing::warn!(
            elapsed_ms = self.now,
            player_hp = self.player.hp(),
            boss_hp = self.boss.hp(),
            "time limit reached"
        );

        if player > boss {
            self.resolve(Some(Side::Player), Resolution::TimeLimit);
        } else if boss > player {
            self.resolve(Some(Side::Boss), Resolution::TimeLimit);
        } else {
            self.resolve(None, Resolution::Draw);
        }
    }

    fn resolve(&mut self, winner: Option<Side>, resolution: Resolution) {
        self.winner = winner;
        self.resolution = Some(resolution);
        self.phase = Phase::Resolved;

        let name = winner.map(|side| self.combatant(side).name().to_string());
        tracing::info!(
            winner = name.as_deref().unwrap_or("none"),
            ?resolution,
            elapsed_ms = self.now,
            attacks = self.events.len(),
            "battle resolved"
        );
    }
}

fn finish_time(rotation: &Rotation) -> u64 {
    rotation.current().and_then(|skill| skill.finishes_at()).unwrap_or(0)
}
