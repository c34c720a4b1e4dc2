//! Indexed triangle mesh built from heightfield buffers.

use glam::Vec3;

use ridgeline_heightfield::{Grid, HeightfieldBuffers};

/// Errors raised when the generator's buffers and the grid disagree.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// Position and color buffers have different lengths.
    #[error("buffer mismatch: {positions} position floats vs {colors} color floats")]
    BufferMismatch {
        /// Length of the position buffer.
        positions: usize,
        /// Length of the color buffer.
        colors: usize,
    },

    /// The buffers do not hold one vertex per grid lattice point.
    #[error("buffers hold {actual} vertices but the grid expects {expected}")]
    VertexCountMismatch {
        /// `(resolution + 1)^2` for the grid.
        expected: usize,
        /// Vertices actually present in the buffers.
        actual: usize,
    },
}

/// An indexed triangle surface with per-vertex colors and normals.
///
/// Vertex order matches the generator's row-major buffers; two triangles
/// per grid cell, counter-clockwise when viewed from +z (the plane's
/// pre-rotation up axis).
pub struct TerrainMesh {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl TerrainMesh {
    /// Triangulate heightfield buffers over their grid and recompute
    /// vertex normals.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError`] if the buffers disagree with each other or
    /// with the grid's vertex count.
    pub fn build(buffers: &HeightfieldBuffers, grid: &Grid) -> Result<Self, MeshError> {
        if buffers.positions.len() != buffers.colors.len() {
            return Err(MeshError::BufferMismatch {
                positions: buffers.positions.len(),
                colors: buffers.colors.len(),
            });
        }
        if buffers.vertex_count() != grid.vertex_count() {
            return Err(MeshError::VertexCountMismatch {
                expected: grid.vertex_count(),
                actual: buffers.vertex_count(),
            });
        }

        let positions: Vec<[f32; 3]> = buffers
            .positions
            .chunks_exact(3)
            .map(|v| [v[0], v[1], v[2]])
            .collect();
        let colors: Vec<[f32; 3]> = buffers
            .colors
            .chunks_exact(3)
            .map(|v| [v[0], v[1], v[2]])
            .collect();

        let indices = grid_indices(grid.resolution());
        let normals = vertex_normals(&positions, &indices);

        Ok(Self {
            positions,
            colors,
            normals,
            indices,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices (three per triangle).
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Vertex colors.
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Recomputed unit vertex normals.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Position buffer as bytes for GPU upload.
    pub fn as_position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Color buffer as bytes for GPU upload.
    pub fn as_color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Normal buffer as bytes for GPU upload.
    pub fn as_normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Index buffer as bytes for GPU upload.
    pub fn as_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Two counter-clockwise triangles per grid cell, row-major.
fn grid_indices(resolution: u32) -> Vec<u32> {
    let per_axis = resolution + 1;
    let mut indices = Vec::with_capacity(resolution as usize * resolution as usize * 6);

    for j in 0..resolution {
        for i in 0..resolution {
            let a = j * per_axis + i;
            let b = a + 1;
            let c = a + per_axis;
            let d = c + 1;
            indices.extend_from_slice(&[a, b, d, a, d, c]);
        }
    }
    indices
}

/// Area-weighted vertex normals: accumulate the unnormalized cross product
/// of each incident triangle, then normalize per vertex.
fn vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let p0 = Vec3::from_array(positions[tri[0] as usize]);
        let p1 = Vec3::from_array(positions[tri[1] as usize]);
        let p2 = Vec3::from_array(positions[tri[2] as usize]);

        // Unnormalized cross product weights large triangles more heavily.
        let face_normal = (p1 - p0).cross(p2 - p0);
        for &index in tri {
            accumulated[index as usize] += face_normal;
        }
    }

    accumulated
        .into_iter()
        .map(|n| {
            // Degenerate fan (all incident triangles zero-area) falls back
            // to the plane's up axis.
            if n.length_squared() > f32::EPSILON {
                n.normalize().to_array()
            } else {
                [0.0, 0.0, 1.0]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeline_heightfield::{Palette, ShapeParameters, generate};
    use ridgeline_noise::SimplexField;

    const EPSILON: f32 = 1e-5;

    fn flat_buffers(grid: &Grid) -> HeightfieldBuffers {
        let positions = grid.planar_positions();
        let colors = vec![1.0; positions.len()];
        HeightfieldBuffers { positions, colors }
    }

    #[test]
    fn test_index_count_and_range() {
        let grid = Grid::new(10.0, 8).unwrap();
        let mesh = TerrainMesh::build(&flat_buffers(&grid), &grid).unwrap();

        assert_eq!(mesh.index_count(), 8 * 8 * 6);
        let max = mesh.vertex_count() as u32;
        assert!(mesh.indices().iter().all(|&i| i < max));
    }

    #[test]
    fn test_flat_grid_normals_point_up() {
        let grid = Grid::new(10.0, 4).unwrap();
        let mesh = TerrainMesh::build(&flat_buffers(&grid), &grid).unwrap();

        for n in mesh.normals() {
            assert!((n[0]).abs() < EPSILON);
            assert!((n[1]).abs() < EPSILON);
            assert!((n[2] - 1.0).abs() < EPSILON, "Flat plane normal must be +z");
        }
    }

    #[test]
    fn test_generated_terrain_normals_are_unit_length() {
        let grid = Grid::new(250.0, 16).unwrap();
        let field = SimplexField::new(42);
        let buffers = generate(
            &grid,
            &field,
            &ShapeParameters::default(),
            &Palette::default(),
        )
        .unwrap();
        let mesh = TerrainMesh::build(&buffers, &grid).unwrap();

        for n in mesh.normals() {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!(
                (len - 1.0).abs() < EPSILON,
                "Normal {n:?} has length {len}"
            );
        }
    }

    #[test]
    fn test_ramp_normals_tilt_against_slope() {
        // z = x is a ramp rising toward +x; normals lean toward -x while
        // keeping a positive up component.
        let grid = Grid::new(4.0, 4).unwrap();
        let mut positions = grid.planar_positions();
        for vertex in positions.chunks_exact_mut(3) {
            vertex[2] = vertex[0];
        }
        let colors = vec![0.5; positions.len()];
        let buffers = HeightfieldBuffers { positions, colors };
        let mesh = TerrainMesh::build(&buffers, &grid).unwrap();

        for n in mesh.normals() {
            assert!(n[0] < 0.0, "Ramp normal {n:?} should lean toward -x");
            assert!(n[2] > 0.0, "Ramp normal {n:?} should keep +z up");
        }
    }

    #[test]
    fn test_buffer_mismatch_rejected() {
        let grid = Grid::new(10.0, 2).unwrap();
        let mut buffers = flat_buffers(&grid);
        buffers.colors.pop();

        assert!(matches!(
            TerrainMesh::build(&buffers, &grid),
            Err(MeshError::BufferMismatch { .. })
        ));
    }

    #[test]
    fn test_vertex_count_mismatch_rejected() {
        let grid = Grid::new(10.0, 2).unwrap();
        let bigger = Grid::new(10.0, 3).unwrap();
        let buffers = flat_buffers(&bigger);

        assert!(matches!(
            TerrainMesh::build(&buffers, &grid),
            Err(MeshError::VertexCountMismatch { .. })
        ));
    }

    #[test]
    fn test_byte_views_cover_all_attributes() {
        let grid = Grid::new(10.0, 4).unwrap();
        let mesh = TerrainMesh::build(&flat_buffers(&grid), &grid).unwrap();

        assert_eq!(mesh.as_position_bytes().len(), mesh.vertex_count() * 12);
        assert_eq!(mesh.as_color_bytes().len(), mesh.vertex_count() * 12);
        assert_eq!(mesh.as_normal_bytes().len(), mesh.vertex_count() * 12);
        assert_eq!(mesh.as_index_bytes().len(), mesh.index_count() * 4);
    }

    #[test]
    fn test_winding_is_counter_clockwise_from_above() {
        let grid = Grid::new(1.0, 1).unwrap();
        let mesh = TerrainMesh::build(&flat_buffers(&grid), &grid).unwrap();

        for tri in mesh.indices().chunks_exact(3) {
            let p0 = Vec3::from_array(mesh.positions()[tri[0] as usize]);
            let p1 = Vec3::from_array(mesh.positions()[tri[1] as usize]);
            let p2 = Vec3::from_array(mesh.positions()[tri[2] as usize]);
            let cross = (p1 - p0).cross(p2 - p0);
            assert!(cross.z > 0.0, "Triangle {tri:?} winds clockwise");
        }
    }
}
