//! CPU-side triangle mesh assembly for the terrain grid.
//!
//! The renderer consumes this as a flat vertex buffer and index list;
//! nothing here touches the GPU.

use bytemuck::{Pod, Zeroable};

use super::HeightGrid;

/// Vertex data for the terrain mesh (position + surface normal)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle mesh over the heightfield
pub struct TerrainMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Build one vertex per grid cell and two counter-clockwise
    /// triangles per quad.
    pub fn build(grid: &HeightGrid) -> Self {
        let res = grid.resolution();

        let mut vertices = Vec::with_capacity(res * res);
        for x in 0..res {
            for z in 0..res {
                vertices.push(Vertex {
                    position: [grid.world_x(x), grid.height_at(x, z), grid.world_z(z)],
                    normal: grid.normal_at(x, z).to_array(),
                });
            }
        }

        let mut indices = Vec::with_capacity((res - 1) * (res - 1) * 6);
        for x in 0..res - 1 {
            for z in 0..res - 1 {
                let v0 = (x * res + z) as u32;
                let v1 = ((x + 1) * res + z) as u32;
                let v2 = ((x + 1) * res + z + 1) as u32;
                let v3 = (x * res + z + 1) as u32;

                indices.extend_from_slice(&[v0, v1, v2, v0, v2, v3]);
            }
        }

        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseField;
    use crate::params::TerrainParams;

    fn small_grid() -> HeightGrid {
        let params = TerrainParams {
            resolution: 16,
            ..TerrainParams::default()
        };
        HeightGrid::generate(&NoiseField::new(params.noise_seed), &params)
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = TerrainMesh::build(&small_grid());
        assert_eq!(mesh.vertices.len(), 16 * 16);
        assert_eq!(mesh.indices.len(), 15 * 15 * 6);
    }

    #[test]
    fn test_indices_in_range() {
        let mesh = TerrainMesh::build(&small_grid());
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_vertex_normals_are_unit() {
        let mesh = TerrainMesh::build(&small_grid());
        for vertex in &mesh.vertices {
            let [nx, ny, nz] = vertex.normal;
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_vertex_positions_match_grid() {
        let grid = small_grid();
        let mesh = TerrainMesh::build(&grid);
        let vertex = &mesh.vertices[5 * 16 + 9];
        assert_eq!(vertex.position[0], grid.world_x(5));
        assert_eq!(vertex.position[1], grid.height_at(5, 9));
        assert_eq!(vertex.position[2], grid.world_z(9));
    }
}
