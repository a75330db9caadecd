//! Battle constants configuration

use crate::conversion::LevelCurve;
use crate::error::DuelError;
use crate::types::{RedrawPolicy, Side};
use serde::{Deserialize, Serialize};

/// Tunable battle constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConstants {
    /// Simulated battle length in milliseconds
    #[serde(default = "default_time_limit_ms")]
    pub time_limit_ms: u64,
    /// Hit and crit rolls are `int32 % roll_modulus`
    #[serde(default = "default_roll_modulus")]
    pub roll_modulus: i32,
    /// Damage multiplier on a critical strike
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    #[serde(default)]
    pub curve: LevelCurve,
    #[serde(default = "RoleBaselines::player")]
    pub player: RoleBaselines,
    #[serde(default = "RoleBaselines::boss")]
    pub boss: RoleBaselines,
    #[serde(default)]
    pub redraw: RedrawPolicy,
}

impl Default for BattleConstants {
    fn default() -> Self {
        BattleConstants {
            time_limit_ms: default_time_limit_ms(),
            roll_modulus: default_roll_modulus(),
            crit_multiplier: default_crit_multiplier(),
            curve: LevelCurve::default(),
            player: RoleBaselines::player(),
            boss: RoleBaselines::boss(),
            redraw: RedrawPolicy::default(),
        }
    }
}

fn default_time_limit_ms() -> u64 {
    5 * 60 * 1000
}
fn default_roll_modulus() -> i32 {
    101
}
fn default_crit_multiplier() -> f64 {
    2.0
}

impl BattleConstants {
    /// Baselines for the given role
    pub fn baselines(&self, side: Side) -> &RoleBaselines {
        match side {
            Side::Player => &self.player,
            Side::Boss => &self.boss,
        }
    }

    /// Reject constants the engine cannot run with
    pub fn validate(&self) -> Result<(), DuelError> {
        let invalid = |reason: String| Err(DuelError::InvalidConstants { reason });
        if self.roll_modulus <= 0 {
            return invalid(format!("roll_modulus must be positive, got {}", self.roll_modulus));
        }
        if !(self.crit_multiplier.is_finite() && self.crit_multiplier > 0.0) {
            return invalid(format!("crit_multiplier must be positive, got {}", self.crit_multiplier));
        }
        if !(self.curve.level_max > 0.0 && self.curve.min_point > 0.0) {
            return invalid("curve needs a positive level_max and min_point".to_string());
        }
        Ok(())
    }
}

/// Role-specific default percentages combined with stat points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBaselines {
    pub hit: f64,
    pub miss: f64,
    pub crit: f64,
    pub uncrit: f64,
    pub penetrate: f64,
    pub defense: f64,
}

impl RoleBaselines {
    pub fn player() -> Self {
        RoleBaselines {
            hit: 100.0,
            miss: 3.0,
            crit: 10.0,
            uncrit: 3.0,
            penetrate: 10.0,
            defense: 5.0,
        }
    }

    pub fn boss() -> Self {
        RoleBaselines {
            hit: 100.0,
            miss: 3.0,
            crit: 5.0,
            uncrit: 1.0,
            penetrate: 10.0,
            defense: 5.0,
        }
    }
}
