//! Stat conversion - level-scaled points and net contested percentages

mod curve;
mod percent;

pub use curve::{level_scale, LevelCurve};
pub use percent::{net_percent, Contest};

/// Conversion curve constants
pub mod constants {
    /// Points per percent at the bottom of the curve
    pub const MIN_POINT: f64 = 5.0;

    /// Points per percent added across the whole level range
    pub const POINT_RANGE: f64 = 1000.0;

    /// Level at which the curve reaches its upper end
    pub const LEVEL_MAX: f64 = 1000.0;

    /// Logistic steepness; the curve spans `-k..k` over the level range
    pub const STEEPNESS: f64 = (1.0 - 0.618) * 10.0;
}
