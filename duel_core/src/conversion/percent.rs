//! Net percent - one contested formula for hit, crit and penetration
//!
//! effect_points = atk_stat + atk_points * atk_baseline
//!               - def_stat - def_points * def_baseline
//! percent = effect_points / def_points
//!
//! The defender's level-scaled points are always the divisor. The result is
//! not clamped: it may exceed 100 or go negative.

use super::LevelCurve;
use crate::types::Level;

/// One side of a stat contest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contest {
    pub level: Level,
    /// Stat points (hit, crit, penetrate for attackers; miss, uncrit, defense for defenders)
    pub stat: f64,
    /// Role baseline percent granted on top of the stat
    pub baseline_percent: f64,
}

impl Contest {
    pub fn new(level: Level, stat: f64, baseline_percent: f64) -> Self {
        Contest {
            level,
            stat,
            baseline_percent,
        }
    }
}

impl LevelCurve {
    /// Net signed percent of `attacker` over `defender`
    pub fn net_percent(&self, attacker: Contest, defender: Contest) -> f64 {
        let atk_points = self.scale(attacker.level);
        let def_points = self.scale(defender.level);
        let effect_points = attacker.stat + atk_points * attacker.baseline_percent
            - defender.stat
            - def_points * defender.baseline_percent;
        effect_points / def_points
    }
}

/// Net signed percent on the default curve
pub fn net_percent(attacker: Contest, defender: Contest) -> f64 {
    LevelCurve::default().net_percent(attacker, defender)
}
