//! Parameter definitions with physical units and documented semantics.
//!
//! All tuning constants live here with:
//! - Physical units (meters, seconds, etc.)
//! - Documented ranges and meanings
//! - `validate()` checks that reject bad startup configuration with a
//!   descriptive message instead of producing undefined numerics

/// Fractal noise accumulation parameters
#[derive(Debug, Clone)]
pub struct FbmParams {
    /// Number of octaves summed (>= 1)
    pub octaves: u32,

    /// Amplitude multiplier per octave (0..1)
    pub persistence: f32,

    /// Frequency multiplier per octave (> 1)
    pub lacunarity: f32,

    /// Starting spatial frequency in cycles per grid unit.
    /// This is the only place the noise scale is applied.
    pub base_frequency: f32,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            octaves: 6,
            persistence: 0.48,
            lacunarity: 2.05,
            base_frequency: 0.055,
        }
    }
}

impl FbmParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.octaves == 0 {
            return Err("fbm octaves must be >= 1".to_string());
        }
        if self.persistence <= 0.0 || self.persistence >= 1.0 {
            return Err(format!(
                "fbm persistence must be in (0, 1), got {}",
                self.persistence
            ));
        }
        if self.lacunarity <= 1.0 {
            return Err(format!(
                "fbm lacunarity must be > 1, got {}",
                self.lacunarity
            ));
        }
        if self.base_frequency <= 0.0 {
            return Err(format!(
                "fbm base frequency must be > 0, got {}",
                self.base_frequency
            ));
        }
        Ok(())
    }
}

/// Heightfield generation parameters
#[derive(Debug, Clone)]
pub struct TerrainParams {
    /// Grid resolution (elevation samples per side)
    pub resolution: usize,

    /// Spacing between grid vertices in world units (meters)
    pub cell_size_m: f32,

    /// Vertical scale applied to the raw fbm value (meters)
    pub height_scale_m: f32,

    /// Exponent applied to positive heights only, sharpening peaks
    /// while leaving valleys untouched
    pub peak_exponent: f32,

    /// Normalized radius where the island falloff band begins
    pub falloff_start: f32,

    /// Normalized radius where the falloff reaches zero
    pub falloff_end: f32,

    /// Falloff normalization radius as a fraction of the resolution
    pub falloff_radius: f32,

    /// Constant subtracted from every height so the mean terrain sits
    /// partly below the default water level (meters)
    pub base_offset_m: f32,

    /// Seed for the noise permutation table
    pub noise_seed: u64,

    /// Fractal accumulation settings
    pub fbm: FbmParams,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            resolution: 128,
            cell_size_m: 0.8,
            height_scale_m: 16.0,
            peak_exponent: 1.15,
            falloff_start: 0.7,
            falloff_end: 1.0,
            falloff_radius: 0.45,
            base_offset_m: 2.0,
            noise_seed: 1337,
            fbm: FbmParams::default(),
        }
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.resolution < 2 {
            return Err(format!(
                "terrain resolution must be >= 2, got {}",
                self.resolution
            ));
        }
        if self.cell_size_m <= 0.0 {
            return Err(format!(
                "terrain cell size must be > 0, got {}",
                self.cell_size_m
            ));
        }
        if self.falloff_radius <= 0.0 {
            return Err(format!(
                "terrain falloff radius must be > 0, got {}",
                self.falloff_radius
            ));
        }
        if self.falloff_end < self.falloff_start {
            return Err(format!(
                "terrain falloff band is inverted: start {} > end {}",
                self.falloff_start, self.falloff_end
            ));
        }
        self.fbm.validate()
    }

    /// World-space side length of the terrain footprint (meters)
    pub fn extent_m(&self) -> f32 {
        self.resolution as f32 * self.cell_size_m
    }
}

/// Rain simulation parameters
#[derive(Debug, Clone)]
pub struct WeatherParams {
    /// Number of drops in the pool; constant for the process lifetime
    pub drop_count: usize,

    /// Constant fall speed (meters per second, no acceleration)
    pub fall_speed_m_per_s: f32,

    /// Initial spawn height range above the terrain (meters)
    pub spawn_height_range_m: (f32, f32),

    /// Half-width of the respawn square centered on the observer (meters)
    pub respawn_half_extent_m: f32,

    /// Fixed height above the observer where respawns begin (meters)
    pub respawn_height_offset_m: f32,

    /// Uniform jitter added on top of the respawn offset (meters)
    pub respawn_height_jitter_m: f32,

    /// Seed for the weather RNG, separate from the terrain seed
    pub rng_seed: u64,
}

impl Default for WeatherParams {
    fn default() -> Self {
        Self {
            drop_count: 4000,
            fall_speed_m_per_s: 35.0,
            spawn_height_range_m: (5.0, 30.0),
            respawn_half_extent_m: 20.0,
            respawn_height_offset_m: 10.0,
            respawn_height_jitter_m: 10.0,
            rng_seed: 1337,
        }
    }
}

impl WeatherParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.drop_count == 0 {
            return Err("rain drop count must be > 0".to_string());
        }
        if self.fall_speed_m_per_s <= 0.0 {
            return Err(format!(
                "rain fall speed must be > 0, got {}",
                self.fall_speed_m_per_s
            ));
        }
        let (lo, hi) = self.spawn_height_range_m;
        if hi < lo {
            return Err(format!("rain spawn height range is inverted: {} > {}", lo, hi));
        }
        if self.respawn_half_extent_m <= 0.0 {
            return Err(format!(
                "rain respawn extent must be > 0, got {}",
                self.respawn_half_extent_m
            ));
        }
        Ok(())
    }
}

/// Water level bounds and starting height
#[derive(Debug, Clone)]
pub struct TideParams {
    /// Starting water level (meters)
    pub initial_level_m: f32,

    /// Lowest level the tide can be driven to (meters)
    pub min_level_m: f32,

    /// Highest level the tide can be driven to (meters)
    pub max_level_m: f32,
}

impl Default for TideParams {
    fn default() -> Self {
        Self {
            initial_level_m: 1.8,
            min_level_m: -6.0,
            max_level_m: 12.0,
        }
    }
}

impl TideParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_level_m > self.max_level_m {
            return Err(format!(
                "tide bounds are inverted: min {} > max {}",
                self.min_level_m, self.max_level_m
            ));
        }
        if self.initial_level_m < self.min_level_m || self.initial_level_m > self.max_level_m {
            return Err(format!(
                "initial water level {} outside bounds [{}, {}]",
                self.initial_level_m, self.min_level_m, self.max_level_m
            ));
        }
        Ok(())
    }
}

/// Top-level startup configuration
#[derive(Debug, Clone, Default)]
pub struct WorldParams {
    pub terrain: TerrainParams,
    pub weather: WeatherParams,
    pub tide: TideParams,
}

impl WorldParams {
    pub fn validate(&self) -> Result<(), String> {
        self.terrain.validate()?;
        self.weather.validate()?;
        self.tide.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(WorldParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_resolution() {
        let params = TerrainParams {
            resolution: 1,
            ..TerrainParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_drop_count() {
        let params = WeatherParams {
            drop_count: 0,
            ..WeatherParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_octaves() {
        let params = FbmParams {
            octaves: 0,
            ..FbmParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_initial_level_outside_bounds() {
        let params = TideParams {
            initial_level_m: 20.0,
            ..TideParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_terrain_extent() {
        let params = TerrainParams::default();
        assert_eq!(params.extent_m(), 128.0 * 0.8);
    }
}
