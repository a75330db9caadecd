//! Prelude module for convenient imports
//!
//! ```rust
//! use duel_core::prelude::*;
//! ```

// Inputs
pub use crate::character::{Character, Skill};
pub use crate::types::{Level, RedrawPolicy, Resolution, Side};

// Combat
pub use crate::combat::{resolve_battle, resolve_battle_seeded, Battle, BattleOutcome, CombatEvent};

// Randomness
pub use crate::rng::{Seed, SeedRandom};

// Config
pub use crate::config::{default_roster, BattleConstants, Roster};
