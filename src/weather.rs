//! Rain simulation: a fixed pool of recycled drops around a moving
//! observer.
//!
//! Drops fall at constant speed and are respawned in place when they
//! cross the water surface. The pool never grows or shrinks after
//! construction.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::params::WeatherParams;

/// Fixed-capacity pool of rain drop positions with its own seeded RNG.
pub struct RainPool {
    drops: Vec<Vec3>,
    rng: ChaCha8Rng,
    fall_speed: f32,
    respawn_half_extent: f32,
    respawn_height_offset: f32,
    respawn_height_jitter: f32,
}

impl RainPool {
    /// Seed `drop_count` drops uniformly over a square of side
    /// `area_extent_m` centered on the origin, with heights in the
    /// configured spawn range.
    pub fn new(params: &WeatherParams, area_extent_m: f32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(params.rng_seed);
        let (height_min, height_max) = params.spawn_height_range_m;

        let mut drops = Vec::with_capacity(params.drop_count);
        for _ in 0..params.drop_count {
            let x = (rng.gen::<f32>() - 0.5) * area_extent_m;
            let z = (rng.gen::<f32>() - 0.5) * area_extent_m;
            let y = height_min + rng.gen::<f32>() * (height_max - height_min);
            drops.push(Vec3::new(x, y, z));
        }

        Self {
            drops,
            rng,
            fall_speed: params.fall_speed_m_per_s,
            respawn_half_extent: params.respawn_half_extent_m,
            respawn_height_offset: params.respawn_height_offset_m,
            respawn_height_jitter: params.respawn_height_jitter_m,
        }
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    /// Drop positions in pool order, for line-segment rendering.
    pub fn drops(&self) -> &[Vec3] {
        &self.drops
    }

    /// Advance every drop by `dt` seconds. A drop that reaches the
    /// water surface is recycled in place: horizontal position uniform
    /// within the respawn square centered on the observer, height reset
    /// above the observer. Three RNG draws per recycle (x, z, y).
    pub fn advance(&mut self, dt: f32, water_level: f32, observer: Vec3) {
        for drop in &mut self.drops {
            drop.y -= self.fall_speed * dt;
            if drop.y <= water_level {
                drop.x = observer.x + (self.rng.gen::<f32>() - 0.5) * (self.respawn_half_extent * 2.0);
                drop.z = observer.z + (self.rng.gen::<f32>() - 0.5) * (self.respawn_half_extent * 2.0);
                drop.y = observer.y
                    + self.respawn_height_offset
                    + self.rng.gen::<f32>() * self.respawn_height_jitter;
            }
        }
    }
}
