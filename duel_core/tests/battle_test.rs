//! Integration test: reference roster -> seeded battle -> recorded timeline
//!
//! The expected traces were recorded from the reference encounter and pin the
//! exact order of generator draws: skill roll, miss roll, then crit roll.

use duel_core::prelude::*;
use duel_core::{DerivedStats, DuelError, SeedRandom};
use rand::RngCore;

const TOLERANCE: f64 = 1e-6;

/// (elapsed_ms, attacker, skill, hit, critical, damage, defender hp after)
type Expected = (u64, Side, &'static str, bool, bool, f64, f64);

const P: Side = Side::Player;
const B: Side = Side::Boss;

const TEST_1_TRACE: [Expected; 30] = [
    (0, P, "Basic Attack", true, true, 63000.0, 937000.0),
    (0, B, "Hair Pull", true, false, 63000.0, 937000.0),
    (800, P, "Nose Pick", false, false, 0.0, 937000.0),
    (1200, B, "Nose Pick", true, false, 47250.0, 889750.0),
    (2000, P, "Low Kick", false, false, 0.0, 937000.0),
    (3200, B, "Low Kick", true, true, 252000.0, 637750.0),
    (5000, P, "Basic Attack", true, true, 63000.0, 874000.0),
    (5800, P, "Basic Attack", true, false, 31500.0, 842500.0),
    (6200, B, "Nose Pick", false, false, 0.0, 637750.0),
    (6600, P, "Hair Pull", true, true, 126000.0, 716500.0),
    (7800, P, "Eye Poke", true, true, 126000.0, 590500.0),
    (8200, B, "Hair Pull", true, false, 63000.0, 574750.0),
    (9000, P, "Nose Pick", true, false, 63000.0, 527500.0),
    (9400, B, "Nose Pick", true, false, 47250.0, 527500.0),
    (10200, P, "Low Kick", false, false, 0.0, 527500.0),
    (11400, B, "Hair Pull", true, true, 126000.0, 401500.0),
    (12600, B, "Nose Pick", false, false, 0.0, 401500.0),
    (13200, P, "Basic Attack", true, false, 31500.0, 496000.0),
    (14000, P, "Nose Pick", true, false, 63000.0, 433000.0),
    (14600, B, "Low Kick", true, true, 252000.0, 149500.0),
    (15200, P, "Nose Pick", false, false, 0.0, 433000.0),
    (16400, P, "Hair Pull", true, false, 63000.0, 370000.0),
    (17600, B, "Low Kick", false, false, 0.0, 149500.0),
    (17600, P, "Low Kick", false, false, 0.0, 370000.0),
    (20600, B, "Eye Poke", false, false, 0.0, 149500.0),
    (20600, P, "Basic Attack", true, false, 31500.0, 338500.0),
    (21400, P, "Eye Poke", false, false, 0.0, 338500.0),
    (21800, B, "Eye Poke", true, true, 126000.0, 23500.0),
    (22600, P, "Low Kick", true, false, 126000.0, 212500.0),
    (23000, B, "Hair Pull", true, false, 63000.0, -39500.0),
];

fn reference_battle(seed: &str) -> BattleOutcome {
    let roster = default_roster().unwrap();
    resolve_battle_seeded(roster.player, roster.boss, seed).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

#[test]
fn test_reference_trace_test_1() {
    let outcome = reference_battle("test-1");

    assert_eq!(outcome.events.len(), TEST_1_TRACE.len());
    for (i, (event, expected)) in outcome.events.iter().zip(TEST_1_TRACE.iter()).enumerate() {
        let (t, side, skill, hit, critical, damage, hp) = *expected;
        assert_eq!(event.elapsed_ms, t, "event {} time", i);
        assert_eq!(event.attacker, side, "event {} attacker", i);
        assert_eq!(event.skill, skill, "event {} skill", i);
        assert_eq!(event.hit, hit, "event {} hit", i);
        assert_eq!(event.critical, critical, "event {} crit", i);
        assert!(close(event.damage, damage), "event {} damage {}", i, event.damage);
        assert!(close(event.defender_hp, hp), "event {} hp {}", i, event.defender_hp);
    }

    assert_eq!(outcome.winner, Some(Side::Boss));
    assert_eq!(outcome.winner_name(), Some("Boss"));
    assert_eq!(outcome.resolution, Resolution::Knockout);
    assert_eq!(outcome.elapsed_ms, 23000);
    assert!(close(outcome.player.hp(), -39500.0));
    assert!(close(outcome.boss.hp(), 212500.0));
}

#[test]
fn test_reference_result_duel_42() {
    let outcome = reference_battle("duel-42");

    assert_eq!(outcome.winner, Some(Side::Player));
    assert_eq!(outcome.resolution, Resolution::Knockout);
    assert_eq!(outcome.elapsed_ms, 16200);
    assert_eq!(outcome.events.len(), 23);
    assert!(close(outcome.player.hp(), 275500.0));
    assert!(close(outcome.boss.hp(), -39500.0));
}

#[test]
fn test_reference_percentages() {
    let outcome = reference_battle("test-1");

    assert!(close(outcome.player.derived.hit_chance, 41.14325611751928));
    assert!(close(outcome.player.derived.crit_chance, 9.0));
    assert!(close(outcome.player.derived.penetration_bonus, 5.0));
    assert!(close(outcome.boss.derived.hit_chance, 41.14325611751928));
    assert!(close(outcome.boss.derived.crit_chance, 2.0));
    assert!(close(outcome.boss.derived.penetration_bonus, 5.0));
}

#[test]
fn test_same_seed_replays_identically() {
    let first = reference_battle("replay");
    let second = reference_battle("replay");
    assert_eq!(first, second);
}

#[test]
fn test_step_by_step_matches_run() {
    let roster = default_roster().unwrap();
    let constants = BattleConstants::default();

    let mut battle = Battle::new(roster.player.clone(), roster.boss.clone(), &constants).unwrap();
    let mut rng = SeedRandom::new("test-1");
    let mut stepped = Vec::new();
    while let Some(event) = battle.step(&mut rng) {
        stepped.push(event);
    }

    let ran = resolve_battle(
        roster.player,
        roster.boss,
        &constants,
        &mut SeedRandom::new("test-1"),
    )
    .unwrap();
    assert_eq!(stepped, ran.events);
}

#[test]
fn test_battle_does_not_touch_input_skills() {
    let roster = default_roster().unwrap();
    let skills_before = roster.player.skills.clone();
    let outcome = reference_battle("test-1");
    assert_eq!(outcome.player.character.skills, skills_before);
}

#[test]
fn test_exclude_last_never_repeats_immediately() {
    let roster = default_roster().unwrap();
    let constants = BattleConstants {
        redraw: RedrawPolicy::ExcludeLast,
        ..BattleConstants::default()
    };

    for seed in ["a", "b", "c", "test-1", "duel-42"] {
        let outcome = resolve_battle(
            roster.player.clone(),
            roster.boss.clone(),
            &constants,
            &mut SeedRandom::new(seed),
        )
        .unwrap();

        for side in [Side::Player, Side::Boss] {
            let skills: Vec<&str> = outcome.events_by(side).map(|e| e.skill.as_str()).collect();
            for pair in skills.windows(2) {
                assert_ne!(pair[0], pair[1], "seed {} side {}", seed, side);
            }
        }
    }
}

#[test]
fn test_time_limit_awards_higher_hp_fraction() {
    let roster = default_roster().unwrap();
    let constants = BattleConstants {
        time_limit_ms: 4000,
        ..BattleConstants::default()
    };

    let outcome = resolve_battle(
        roster.player,
        roster.boss,
        &constants,
        &mut SeedRandom::new("test-1"),
    )
    .unwrap();

    // the limit is checked before each follow-up, so the player's attack
    // starting at 5000 ms still lands before the battle stops
    assert_eq!(outcome.events.len(), 7);
    assert_eq!(outcome.elapsed_ms, 5000);
    assert_eq!(outcome.resolution, Resolution::TimeLimit);
    assert_eq!(outcome.winner, Some(Side::Boss));
    assert!(close(outcome.player.hp(), 637750.0));
    assert!(close(outcome.boss.hp(), 874000.0));
    assert!(outcome.summary().contains("wins on time"));
}

#[test]
fn test_time_limit_equal_fractions_is_draw() {
    let level = Level::new(1).unwrap();
    let harmless = |name: &str| {
        let mut c = Character::new(name, level).with_skill(Skill::new("Wave", 1.0, 1000));
        c.attack = 0.0;
        c.hp = 10.0;
        c
    };
    let constants = BattleConstants {
        time_limit_ms: 10_000,
        ..BattleConstants::default()
    };

    let outcome = resolve_battle(
        harmless("Hero"),
        harmless("Ogre"),
        &constants,
        &mut SeedRandom::new("draw"),
    )
    .unwrap();

    assert_eq!(outcome.resolution, Resolution::Draw);
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.winner_name(), None);
    assert!(outcome.summary().starts_with("draw"));
}

#[test]
fn test_empty_rotation_rejected() {
    let roster = default_roster().unwrap();
    let mut boss = roster.boss;
    boss.skills.clear();

    let result = resolve_battle_seeded(roster.player, boss, "x");
    match result {
        Err(DuelError::InvalidCharacterState { name, .. }) => assert_eq!(name, "Boss"),
        other => panic!("expected InvalidCharacterState, got {:?}", other),
    }
}

#[test]
fn test_non_positive_hp_rejected() {
    let roster = default_roster().unwrap();
    let mut player = roster.player;
    player.hp = 0.0;

    let result = resolve_battle_seeded(player, roster.boss, "x");
    assert!(matches!(result, Err(DuelError::InvalidCharacterState { .. })));
}

#[test]
fn test_outcome_json() {
    let outcome = reference_battle("duel-42");
    let json = outcome.to_json().unwrap();
    let parsed: BattleOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.winner, Some(Side::Player));
    assert_eq!(parsed.events.len(), 23);
    assert!(json.contains("\"resolution\": \"knockout\""));
}

#[test]
fn test_narrative_lines() {
    let outcome = reference_battle("test-1");
    let first = outcome.events[0].narrate();
    assert!(first.contains("Player uses Basic Attack on Boss"));
    assert!(first.contains("critical hit!"));

    let last = outcome.events.last().unwrap().narrate();
    assert!(last.contains("39500 overkill"));
    assert_eq!(
        outcome.summary(),
        "Boss wins by knockout at 23000 ms after 30 attacks"
    );
}

/// Replays fixed 32-bit draws in order
struct Scripted(Vec<u32>);

impl RngCore for Scripted {
    fn next_u32(&mut self) -> u32 {
        self.0.remove(0)
    }
    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn brawler(name: &str) -> Character {
    let mut c = Character::new(name, Level::new(10).unwrap())
        .with_skill(Skill::new("Jab", 1.0, 1000))
        .with_skill(Skill::new("Hook", 2.0, 1500));
    c.attack = 100.0;
    c.hp = 1e6;
    c
}

/// Hp that one non-crit Jab from `attacker` brings to exactly zero
fn one_jab_hp(attacker: &Character, defender: &Character, side: Side) -> f64 {
    let constants = BattleConstants::default();
    let derived = DerivedStats::against(
        attacker,
        constants.baselines(side),
        defender,
        constants.baselines(side.opponent()),
        &constants.curve,
    );
    attacker.attack * derived.penetration_multiplier()
}

#[test]
fn test_opening_knockout_by_player_skips_boss() {
    let player = brawler("Hero");
    let mut boss = brawler("Ogre");
    boss.hp = one_jab_hp(&player, &boss, Side::Player);

    // skill 0, hit, no crit
    let mut rng = Scripted(vec![0, 0, 0]);
    let outcome = resolve_battle(player, boss, &BattleConstants::default(), &mut rng).unwrap();

    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].attacker, Side::Player);
    assert_eq!(outcome.boss.hp(), 0.0);
    assert_eq!(outcome.winner, Some(Side::Player));
    assert_eq!(outcome.resolution, Resolution::Knockout);
    assert_eq!(outcome.elapsed_ms, 0);
    assert!(rng.0.is_empty());
}

#[test]
fn test_opening_knockout_by_boss_after_player_misses() {
    let mut player = brawler("Hero");
    let boss = brawler("Ogre");
    player.hp = one_jab_hp(&boss, &player, Side::Boss);

    // player: skill 0, miss roll 100; boss: skill 0, hit, no crit
    let mut rng = Scripted(vec![0, 100, 0, 0, 0]);
    let outcome = resolve_battle(player, boss, &BattleConstants::default(), &mut rng).unwrap();

    assert_eq!(outcome.events.len(), 2);
    assert!(!outcome.events[0].hit);
    assert_eq!(outcome.events[1].attacker, Side::Boss);
    assert_eq!(outcome.player.hp(), 0.0);
    assert_eq!(outcome.winner, Some(Side::Boss));
    assert_eq!(outcome.resolution, Resolution::Knockout);
    assert!(rng.0.is_empty());
}
