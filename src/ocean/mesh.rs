//! Vertex and index buffers for drawing the height grid.

use bytemuck::{Pod, Zeroable};
use glam::{IVec2, Vec3};

use super::Ocean;
use crate::error::{Error, Result};

/// Vertex data for ocean mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// One tile of the ocean surface as a `(nx + 1) × (ny + 1)` vertex lattice
///
/// The surface lies in the XZ plane with heights along +Y. The extra row and
/// column repeat the opposite edge so neighbouring tiles meet seamlessly.
pub struct SurfaceMesh {
    pub vertices: Vec<Vertex>,
    /// Triangle list (counter-clockwise winding)
    pub indices: Vec<u32>,
    /// Line list: every row strip, then every column strip
    pub line_indices: Vec<u32>,
    nx: usize,
    ny: usize,
}

impl SurfaceMesh {
    /// Create the mesh for the tile at integer offset `tile` (in patch widths).
    ///
    /// Fails if the lattice has more vertices than a `u32` index can reach.
    pub fn new(ocean: &Ocean, tile: IVec2) -> Result<Self> {
        let (nx, ny) = (ocean.nx(), ocean.ny());
        vertex_count(nx, ny)?;
        let spacing = ocean.grid().spacing();
        let origin = Vec3::new(
            (tile.x as f64 * ocean.lx()) as f32,
            0.0,
            (tile.y as f64 * ocean.ly()) as f32,
        );

        let mut vertices = Vec::with_capacity((nx + 1) * (ny + 1));
        for y in 0..=ny {
            for x in 0..=nx {
                let offset = Vec3::new(
                    (spacing.x * x as f64) as f32,
                    ocean.height(x, y) as f32,
                    (spacing.y * y as f64) as f32,
                );
                vertices.push(Vertex {
                    position: (origin + offset).to_array(),
                    uv: [x as f32 / nx as f32, y as f32 / ny as f32],
                });
            }
        }

        let vertex = |x: usize, y: usize| (y * (nx + 1) + x) as u32;

        let mut indices = Vec::with_capacity(nx * ny * 6);
        for y in 0..ny {
            for x in 0..nx {
                let top_left = vertex(x, y);
                let top_right = top_left + 1;
                let bottom_left = vertex(x, y + 1);
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        let mut line_indices = Vec::with_capacity(2 * ((ny + 1) * nx + (nx + 1) * ny));
        for y in 0..=ny {
            for x in 0..nx {
                line_indices.extend_from_slice(&[vertex(x, y), vertex(x + 1, y)]);
            }
        }
        for x in 0..=nx {
            for y in 0..ny {
                line_indices.extend_from_slice(&[vertex(x, y), vertex(x, y + 1)]);
            }
        }

        Ok(Self {
            vertices,
            indices,
            line_indices,
            nx,
            ny,
        })
    }

    /// Copy the current heights of `ocean` into the vertex buffer.
    ///
    /// # Panics
    /// If `ocean` has a different grid size than the mesh.
    pub fn update(&mut self, ocean: &Ocean) {
        assert_eq!(
            (ocean.nx(), ocean.ny()),
            (self.nx, self.ny),
            "mesh and ocean grid sizes differ"
        );
        for (row, strip) in self.vertices.chunks_exact_mut(self.nx + 1).enumerate() {
            for (x, vertex) in strip.iter_mut().enumerate() {
                vertex.position[1] = ocean.height(x, row) as f32;
            }
        }
    }

    /// The `nx + 1` vertices along row `y`, closed by the wrapped edge sample
    pub fn row_strip(&self, y: usize) -> &[Vertex] {
        let width = self.nx + 1;
        &self.vertices[y * width..(y + 1) * width]
    }

    /// The `ny + 1` vertices along column `x`, closed by the wrapped edge sample
    pub fn column_strip(&self, x: usize) -> impl Iterator<Item = Vertex> + '_ {
        assert!(x <= self.nx, "column {x} outside mesh");
        self.vertices.iter().skip(x).step_by(self.nx + 1).copied()
    }

    /// Vertex buffer as raw bytes for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Vertex count of a `(nx + 1) × (ny + 1)` lattice, if `u32` indices cover it
fn vertex_count(nx: usize, ny: usize) -> Result<u32> {
    nx.checked_add(1)
        .zip(ny.checked_add(1))
        .and_then(|(w, h)| w.checked_mul(h))
        .and_then(|count| u32::try_from(count).ok())
        .ok_or(Error::MeshTooLarge { nx, ny })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::OceanParams;

    fn ocean() -> Ocean {
        Ocean::new(OceanParams {
            lx: 16.0,
            ly: 32.0,
            nx: 8,
            ny: 16,
            wind_speed: 8.0,
            amplitude: 1e-3,
            ..OceanParams::default()
        })
        .unwrap()
    }

    #[test]
    fn test_mesh_creation() {
        let ocean = ocean();
        let mesh = SurfaceMesh::new(&ocean, IVec2::ZERO).unwrap();

        // Check vertex count: (nx + 1) * (ny + 1)
        assert_eq!(mesh.vertices.len(), 9 * 17);

        // Check triangle count: nx * ny * 2 triangles * 3 indices
        assert_eq!(mesh.indices.len(), 8 * 16 * 6);

        // Rows of nx segments plus columns of ny segments, 2 indices each
        assert_eq!(mesh.line_indices.len(), 2 * (17 * 8 + 9 * 16));
        let max = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().chain(&mesh.line_indices).all(|&i| i < max));
    }

    #[test]
    fn test_tile_offset_and_spacing() {
        let ocean = ocean();
        let mesh = SurfaceMesh::new(&ocean, IVec2::new(1, 2)).unwrap();
        let first = mesh.row_strip(0)[0].position;
        assert_eq!([first[0], first[2]], [16.0, 64.0]);

        let last = *mesh.row_strip(16).last().unwrap();
        assert_eq!([last.position[0], last.position[2]], [32.0, 96.0]);
        assert_eq!(last.uv, [1.0, 1.0]);
    }

    #[test]
    fn test_strips_close_with_wrapped_edge() {
        let ocean = ocean();
        let mesh = SurfaceMesh::new(&ocean, IVec2::ZERO).unwrap();
        for y in 0..=ocean.ny() {
            let strip = mesh.row_strip(y);
            assert_eq!(strip.len(), ocean.nx() + 1);
            assert_eq!(strip[ocean.nx()].position[1], strip[0].position[1]);
        }
        for x in 0..=ocean.nx() {
            let strip: Vec<Vertex> = mesh.column_strip(x).collect();
            assert_eq!(strip.len(), ocean.ny() + 1);
            assert_eq!(strip[ocean.ny()].position[1], strip[0].position[1]);
            assert_eq!(strip[3].position[1], ocean.height(x, 3) as f32);
        }
    }

    #[test]
    fn test_update_tracks_ocean() {
        let mut ocean = ocean();
        let mut mesh = SurfaceMesh::new(&ocean, IVec2::ZERO).unwrap();
        ocean.advance(4.0);
        mesh.update(&ocean);
        for y in 0..=ocean.ny() {
            for x in 0..=ocean.nx() {
                let vertex = mesh.vertices[y * (ocean.nx() + 1) + x];
                assert_eq!(vertex.position[1], ocean.height(x, y) as f32);
            }
        }
    }

    #[test]
    fn test_vertex_count_limit() {
        assert_eq!(vertex_count(8, 16).unwrap(), 9 * 17);
        assert_eq!(vertex_count(1 << 15, 1 << 15).unwrap(), ((1 << 15) + 1) * ((1 << 15) + 1));
        assert!(matches!(
            vertex_count(1 << 16, 1 << 16),
            Err(Error::MeshTooLarge { nx: 65536, ny: 65536 })
        ));
        assert!(vertex_count(usize::MAX, 1).is_err());
    }

    #[test]
    fn test_vertex_bytes_layout() {
        let ocean = ocean();
        let mesh = SurfaceMesh::new(&ocean, IVec2::ZERO).unwrap();
        assert_eq!(
            mesh.vertex_bytes().len(),
            mesh.vertices.len() * std::mem::size_of::<Vertex>()
        );
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
    }
}
