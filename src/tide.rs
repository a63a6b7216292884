//! Water level control with clamped tide adjustments.

use crate::params::TideParams;

/// Single shared water level, bounded to a closed interval.
///
/// The only mutators are the saturating `raise`/`lower` pair; repeated
/// calls at a bound have no further effect.
#[derive(Debug, Clone)]
pub struct Tide {
    level: f32,
    min: f32,
    max: f32,
}

impl Tide {
    pub fn new(params: &TideParams) -> Self {
        Self {
            level: params.initial_level_m,
            min: params.min_level_m,
            max: params.max_level_m,
        }
    }

    /// Current water level (meters)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Raise the water level, saturating at the upper bound.
    pub fn raise(&mut self, delta: f32) {
        self.level = (self.level + delta).min(self.max);
    }

    /// Lower the water level, saturating at the lower bound.
    pub fn lower(&mut self, delta: f32) {
        self.level = (self.level - delta).max(self.min);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tide() -> Tide {
        Tide::new(&TideParams::default())
    }

    #[test]
    fn test_starts_at_initial_level() {
        assert_eq!(default_tide().level(), 1.8);
    }

    #[test]
    fn test_raise_clamps_at_max() {
        let mut tide = default_tide();
        tide.level = 11.9;
        tide.raise(0.5);
        assert_eq!(tide.level(), 12.0);
    }

    #[test]
    fn test_lower_clamps_at_min() {
        let mut tide = default_tide();
        tide.level = -5.9;
        tide.lower(0.5);
        assert_eq!(tide.level(), -6.0);
    }

    #[test]
    fn test_saturated_bounds_are_stable() {
        let mut tide = default_tide();
        for _ in 0..100 {
            tide.raise(5.0);
        }
        assert_eq!(tide.level(), 12.0);
        for _ in 0..100 {
            tide.lower(5.0);
        }
        assert_eq!(tide.level(), -6.0);
    }

    #[test]
    fn test_small_steps_accumulate() {
        let mut tide = default_tide();
        tide.raise(0.2);
        tide.raise(0.2);
        tide.lower(0.2);
        assert!((tide.level() - 2.0).abs() < 1e-6);
    }
}
