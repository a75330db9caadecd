//! DerivedStats - per-battle percentages computed against one opponent

use super::Character;
use crate::config::RoleBaselines;
use crate::conversion::{Contest, LevelCurve};
use serde::{Deserialize, Serialize};

/// Net percentages an attacker carries into a battle.
///
/// All three are unbounded signed percentages. The roll comparisons in the
/// combat engine clamp them implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedStats {
    /// Hit vs. miss
    pub hit_chance: f64,
    /// Crit vs. uncrit
    pub crit_chance: f64,
    /// Penetrate vs. defense
    pub penetration_bonus: f64,
}

impl DerivedStats {
    /// Compute `attacker`'s percentages against `defender`
    pub fn against(
        attacker: &Character,
        attacker_role: &RoleBaselines,
        defender: &Character,
        defender_role: &RoleBaselines,
        curve: &LevelCurve,
    ) -> Self {
        let contest = |atk_stat: f64, atk_baseline: f64, def_stat: f64, def_baseline: f64| {
            curve.net_percent(
                Contest::new(attacker.level, atk_stat, atk_baseline),
                Contest::new(defender.level, def_stat, def_baseline),
            )
        };

        DerivedStats {
            hit_chance: contest(attacker.hit, attacker_role.hit, defender.miss, defender_role.miss),
            crit_chance: contest(
                attacker.crit,
                attacker_role.crit,
                defender.uncrit,
                defender_role.uncrit,
            ),
            penetration_bonus: contest(
                attacker.penetrate,
                attacker_role.penetrate,
                defender.defense,
                defender_role.defense,
            ),
        }
    }

    /// Damage multiplier granted by the penetration bonus
    pub fn penetration_multiplier(&self) -> f64 {
        (self.penetration_bonus + 100.0) / 100.0
    }
}
