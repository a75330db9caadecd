//! Level curve - how many stat points one percent costs at a given level
//!
//! A logistic curve over the level range:
//!
//! c = 2k * level / level_max - k
//! points = min_point + point_range * 1 / (1 + e^-c)
//!
//! Low levels need few points per percent, high levels need many, which keeps
//! percentages bounded as levels rise.

use super::constants::{LEVEL_MAX, MIN_POINT, POINT_RANGE, STEEPNESS};
use crate::types::Level;
use serde::{Deserialize, Serialize};

/// Logistic level-to-points curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelCurve {
    #[serde(default = "default_min_point")]
    pub min_point: f64,
    #[serde(default = "default_point_range")]
    pub point_range: f64,
    #[serde(default = "default_level_max")]
    pub level_max: f64,
    #[serde(default = "default_steepness")]
    pub steepness: f64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        LevelCurve {
            min_point: MIN_POINT,
            point_range: POINT_RANGE,
            level_max: LEVEL_MAX,
            steepness: STEEPNESS,
        }
    }
}

fn default_min_point() -> f64 {
    MIN_POINT
}
fn default_point_range() -> f64 {
    POINT_RANGE
}
fn default_level_max() -> f64 {
    LEVEL_MAX
}
fn default_steepness() -> f64 {
    STEEPNESS
}

impl LevelCurve {
    /// Stat points worth one percent at `level`
    pub fn scale(&self, level: Level) -> f64 {
        let k = self.steepness;
        let c = (k * 2.0) * f64::from(level.get()) / self.level_max - k;
        let d = 1.0 / (1.0 + (-c).exp());
        self.min_point + d * self.point_range
    }
}

/// Stat points worth one percent at `level` on the default curve
pub fn level_scale(level: Level) -> f64 {
    LevelCurve::default().scale(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lv(level: u32) -> Level {
        Level::new(level).unwrap()
    }

    #[test]
    fn test_midpoint() {
        // c = 0 at half the level range: 5 + 1000 / 2
        assert!((level_scale(lv(500)) - 505.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_points() {
        assert!((level_scale(lv(1)) - 26.618293696369257).abs() < 1e-9);
        assert!((level_scale(lv(111)) - 53.70882352741189).abs() < 1e-9);
        assert!((level_scale(lv(1000)) - 983.5427102823965).abs() < 1e-9);
    }

    #[test]
    fn test_strictly_increasing() {
        let mut prev = level_scale(lv(1));
        for level in 2..=1000 {
            let next = level_scale(lv(level));
            assert!(next > prev, "not increasing at level {}", level);
            prev = next;
        }
    }

    #[test]
    fn test_bounded_by_range() {
        for level in [1, 250, 750, 1000] {
            let points = level_scale(lv(level));
            assert!(points > MIN_POINT);
            assert!(points < MIN_POINT + POINT_RANGE);
        }
    }

    #[test]
    fn test_custom_curve_from_toml() {
        let curve: LevelCurve = toml::from_str("min_point = 10.0").unwrap();
        assert!((curve.min_point - 10.0).abs() < f64::EPSILON);
        assert!((curve.point_range - POINT_RANGE).abs() < f64::EPSILON);
        assert!((curve.scale(lv(500)) - 510.0).abs() < 1e-9);
    }
}
