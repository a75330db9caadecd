//! duel_core - deterministic turn-timeline battle simulator
//!
//! This library provides:
//! - SeedRandom: reproducible ARC4-based generator keyed by arbitrary seed data
//! - Level conversion: the sigmoid level curve and net percentage formula
//! - Character / Skill: battle input records, loadable from TOML
//! - Battle: the player-vs-boss timeline and its outcome record

pub mod character;
pub mod combat;
pub mod config;
pub mod conversion;
pub mod error;
pub mod prelude;
pub mod rng;
pub mod types;

// Re-export core types for convenience
pub use character::{Character, DerivedStats, Skill};
pub use combat::{
    resolve_attack, resolve_battle, resolve_battle_seeded, Battle, BattleOutcome, CombatEvent,
    Combatant,
};
pub use config::{default_roster, BattleConstants, ConfigError, RoleBaselines, Roster};
pub use conversion::{level_scale, net_percent, Contest, LevelCurve};
pub use error::DuelError;
pub use rng::{Seed, SeedRandom};
pub use types::{Level, RedrawPolicy, Resolution, Side};
