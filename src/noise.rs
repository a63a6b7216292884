//! Seeded gradient noise for heightfield synthesis.
//!
//! Classic permutation-table noise with a fractal (fBm) accumulator.
//! The table is built by a seeded Fisher-Yates shuffle over a
//! `ChaCha8Rng`, so identical seeds reproduce identical fields on every
//! platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::params::FbmParams;

/// Gradient-noise field backed by a shuffled permutation table.
///
/// Immutable after construction; sampling is a pure function of the
/// seed and the input coordinates.
pub struct NoiseField {
    /// Permutation of 0..=255, mirrored to 512 entries so corner
    /// lookups never need an explicit wrap.
    perm: [u8; 512],
}

impl NoiseField {
    /// Build the permutation table from a seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);
        for i in (1..256).rev() {
            let j = rng.gen_range(0..=i);
            p.swap(i, j);
        }

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&p);
        perm[256..].copy_from_slice(&p);
        Self { perm }
    }

    /// 3D interpolated gradient noise, approximately in [-1, 1].
    pub fn sample3(&self, x: f32, y: f32, z: f32) -> f32 {
        let xi = (x.floor() as i32 & 255) as usize;
        let yi = (y.floor() as i32 & 255) as usize;
        let zi = (z.floor() as i32 & 255) as usize;
        let xf = x - x.floor();
        let yf = y - y.floor();
        let zf = z - z.floor();

        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        let p = &self.perm;
        let a = p[xi] as usize + yi;
        let aa = p[a] as usize + zi;
        let ab = p[a + 1] as usize + zi;
        let b = p[xi + 1] as usize + yi;
        let ba = p[b] as usize + zi;
        let bb = p[b + 1] as usize + zi;

        lerp(
            lerp(
                lerp(
                    grad(p[aa] as usize, xf, yf, zf),
                    grad(p[ba] as usize, xf - 1.0, yf, zf),
                    u,
                ),
                lerp(
                    grad(p[ab] as usize, xf, yf - 1.0, zf),
                    grad(p[bb] as usize, xf - 1.0, yf - 1.0, zf),
                    u,
                ),
                v,
            ),
            lerp(
                lerp(
                    grad(p[aa + 1] as usize, xf, yf, zf - 1.0),
                    grad(p[ba + 1] as usize, xf - 1.0, yf, zf - 1.0),
                    u,
                ),
                lerp(
                    grad(p[ab + 1] as usize, xf, yf - 1.0, zf - 1.0),
                    grad(p[bb + 1] as usize, xf - 1.0, yf - 1.0, zf - 1.0),
                    u,
                ),
                v,
            ),
            w,
        )
    }

    /// 2D slice of the 3D field at z = 0.
    pub fn sample2(&self, x: f32, y: f32) -> f32 {
        self.sample3(x, y, 0.0)
    }

    /// Fractal sum of 2D octaves, normalized by the total amplitude so
    /// the result stays approximately in [-1, 1] regardless of octave
    /// count. The spatial scale (`base_frequency`) is applied here and
    /// only here; callers pass raw coordinates.
    pub fn fbm(&self, x: f32, z: f32, params: &FbmParams) -> f32 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = params.base_frequency;
        let mut max_amplitude = 0.0;

        for _ in 0..params.octaves {
            total += self.sample2(x * frequency, z * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= params.persistence;
            frequency *= params.lacunarity;
        }

        total / max_amplitude
    }
}

/// Quintic smoothing curve, zero first and second derivative at 0 and 1.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Pseudo-gradient dot product; the low 4 hash bits pick one of 16
/// gradient directions.
#[inline]
fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -v } else { v };
    u + v
}
