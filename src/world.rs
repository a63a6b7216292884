//! World state: one owned aggregate of terrain, weather, and tide,
//! advanced once per frame by the host loop.

use glam::Vec3;

use crate::noise::NoiseField;
use crate::params::WorldParams;
use crate::terrain::HeightGrid;
use crate::tide::Tide;
use crate::weather::RainPool;

/// Lighting phase of the sky, consumed by the renderer for gradient and
/// shader tinting. Independent of the simulation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeOfDay {
    #[default]
    Day,
    Sunset,
    Night,
}

/// Everything the simulation owns: the generated heightfield, the rain
/// pool, the tide, and the sky/weather toggles.
pub struct World {
    pub terrain: HeightGrid,
    pub rain: RainPool,
    pub tide: Tide,
    pub time_of_day: TimeOfDay,
    pub raining: bool,
    pub foggy: bool,
}

impl World {
    /// Build the world from startup parameters. Terrain generation runs
    /// to completion here, before any height or normal query. Fails
    /// with a descriptive message when a parameter violates its
    /// precondition.
    pub fn new(params: &WorldParams) -> Result<Self, String> {
        params.validate()?;

        let noise = NoiseField::new(params.terrain.noise_seed);
        let terrain = HeightGrid::generate(&noise, &params.terrain);
        let rain = RainPool::new(&params.weather, params.terrain.extent_m());
        let tide = Tide::new(&params.tide);

        Ok(Self {
            terrain,
            rain,
            tide,
            time_of_day: TimeOfDay::default(),
            raining: false,
            foggy: true,
        })
    }

    /// Per-frame tick. Rain advances against the current water level
    /// only while `raining` is set.
    pub fn advance(&mut self, dt: f32, observer: Vec3) {
        if self.raining {
            self.rain.advance(dt, self.tide.level(), observer);
        }
    }

    pub fn raise_water_level(&mut self, delta: f32) {
        self.tide.raise(delta);
    }

    pub fn lower_water_level(&mut self, delta: f32) {
        self.tide.lower(delta);
    }

    pub fn water_level(&self) -> f32 {
        self.tide.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> WorldParams {
        let mut params = WorldParams::default();
        params.terrain.resolution = 32;
        params.weather.drop_count = 100;
        params
    }

    #[test]
    fn test_builds_with_defaults() {
        let world = World::new(&WorldParams::default()).unwrap();
        assert_eq!(world.terrain.resolution(), 128);
        assert_eq!(world.rain.len(), 4000);
        assert_eq!(world.water_level(), 1.8);
        assert_eq!(world.time_of_day, TimeOfDay::Day);
        assert!(!world.raining);
        assert!(world.foggy);
    }

    #[test]
    fn test_rejects_invalid_params() {
        let mut params = WorldParams::default();
        params.weather.drop_count = 0;
        assert!(World::new(&params).is_err());
    }

    #[test]
    fn test_rain_holds_still_unless_raining() {
        let mut world = World::new(&small_params()).unwrap();
        let before: Vec<_> = world.rain.drops().to_vec();
        world.advance(1.0, Vec3::new(0.0, 12.0, 20.0));
        assert_eq!(world.rain.drops(), before.as_slice());

        world.raining = true;
        world.advance(1.0, Vec3::new(0.0, 12.0, 20.0));
        assert_ne!(world.rain.drops(), before.as_slice());
    }

    #[test]
    fn test_identical_seeds_build_identical_worlds() {
        let params = small_params();
        let mut a = World::new(&params).unwrap();
        let mut b = World::new(&params).unwrap();
        a.raining = true;
        b.raining = true;

        let observer = Vec3::new(3.0, 15.0, -7.0);
        for _ in 0..180 {
            a.advance(1.0 / 60.0, observer);
            b.advance(1.0 / 60.0, observer);
        }

        assert_eq!(a.rain.drops(), b.rain.drops());
        assert_eq!(a.terrain.height_at(10, 20), b.terrain.height_at(10, 20));
    }

    #[test]
    fn test_tide_passthrough() {
        let mut world = World::new(&small_params()).unwrap();
        world.raise_water_level(0.2);
        assert!((world.water_level() - 2.0).abs() < 1e-6);
        world.lower_water_level(0.4);
        assert!((world.water_level() - 1.6).abs() < 1e-6);
    }
}
