//! Heightfield terrain: fractal synthesis, island falloff shaping, and
//! central-difference normal estimation.

pub mod mesh;

use glam::Vec3;

use crate::noise::NoiseField;
use crate::params::TerrainParams;

/// Square grid of elevation samples, generated once at startup and
/// immutable afterwards.
pub struct HeightGrid {
    resolution: usize,
    cell_size: f32,
    /// Row-major by x, `heights[x * resolution + z]`
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Populate the grid from the noise field.
    ///
    /// Per cell: fbm height, peak sharpening on positive values, radial
    /// island falloff, then a constant downward offset so the rim sits
    /// below the default water level. Idempotent for a given seed.
    pub fn generate(noise: &NoiseField, params: &TerrainParams) -> Self {
        let res = params.resolution;
        let half = res as f32 / 2.0;
        let falloff_radius = res as f32 * params.falloff_radius;

        let mut heights = vec![0.0f32; res * res];
        for x in 0..res {
            for z in 0..res {
                let nx = x as f32 - half;
                let nz = z as f32 - half;

                let mut h = noise.fbm(nx, nz, &params.fbm) * params.height_scale_m;
                if h > 0.0 {
                    h = h.powf(params.peak_exponent);
                }

                let dx = nx / falloff_radius;
                let dz = nz / falloff_radius;
                let dist = (dx * dx + dz * dz).sqrt();
                let falloff = (1.0 - smoothstep(params.falloff_start, params.falloff_end, dist))
                    .clamp(0.0, 1.0);

                heights[x * res + z] = h * falloff - params.base_offset_m;
            }
        }

        Self {
            resolution: res,
            cell_size: params.cell_size_m,
            heights,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Elevation at cell `(x, z)`. Out-of-range indices are clamped to
    /// the grid edge; there is no wraparound.
    pub fn height_at(&self, x: usize, z: usize) -> f32 {
        let x = x.min(self.resolution - 1);
        let z = z.min(self.resolution - 1);
        self.heights[x * self.resolution + z]
    }

    /// World-space X of grid column `x`; the grid is centered on the
    /// origin.
    pub fn world_x(&self, x: usize) -> f32 {
        (x as f32 - self.resolution as f32 / 2.0) * self.cell_size
    }

    /// World-space Z of grid row `z`.
    pub fn world_z(&self, z: usize) -> f32 {
        (z as f32 - self.resolution as f32 / 2.0) * self.cell_size
    }

    /// Unit surface normal at cell `(x, z)` from the central difference
    /// of the 4-neighborhood. Edge cells substitute their own height
    /// for the missing neighbor. A degenerate (flat, zero-length)
    /// difference yields straight up rather than NaN.
    pub fn normal_at(&self, x: usize, z: usize) -> Vec3 {
        let last = self.resolution - 1;
        let x = x.min(last);
        let z = z.min(last);

        let here = self.height_at(x, z);
        let l = if x > 0 { self.height_at(x - 1, z) } else { here };
        let r = if x < last { self.height_at(x + 1, z) } else { here };
        let d = if z > 0 { self.height_at(x, z - 1) } else { here };
        let u = if z < last { self.height_at(x, z + 1) } else { here };

        Vec3::new(l - r, 2.0 * self.cell_size, d - u)
            .try_normalize()
            .unwrap_or(Vec3::Y)
    }
}

/// Cubic Hermite smoothing between two edges.
///
/// Coincident edges degenerate to a step: 0 below the edge, 1 at or
/// above it.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
