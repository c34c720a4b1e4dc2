//! Grid iteration and buffer packing.
//!
//! The generator walks a row-major planar position buffer, overwrites each
//! vertex's z with the shaped elevation, and appends the matching color
//! triple to a parallel buffer. Normals, tangents, and everything else
//! downstream of flat per-vertex data belong to the mesh sink.

use ridgeline_noise::NoiseField;

use crate::{Grid, HeightfieldError, Palette, ShapeParameters};

/// The generator's output: parallel flat vertex buffers.
///
/// Both buffers hold `3 * (resolution + 1)^2` floats; index `i` of the
/// color buffer describes the same vertex as index `i` of the position
/// buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightfieldBuffers {
    /// Row-major `(x, y, z)` triples. z is the finished elevation.
    pub positions: Vec<f32>,
    /// Row-major `(r, g, b)` triples, each channel in `[0, 1]`.
    pub colors: Vec<f32>,
}

impl HeightfieldBuffers {
    /// Number of vertices in the buffers.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Position triple of vertex `i`.
    pub fn position(&self, i: usize) -> [f32; 3] {
        [
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        ]
    }

    /// Color triple of vertex `i`.
    pub fn color(&self, i: usize) -> [f32; 3] {
        [
            self.colors[i * 3],
            self.colors[i * 3 + 1],
            self.colors[i * 3 + 2],
        ]
    }

    /// Elevation (z) of vertex `i`.
    pub fn elevation(&self, i: usize) -> f32 {
        self.positions[i * 3 + 2]
    }

    /// Minimum and maximum elevation across all vertices.
    pub fn elevation_bounds(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for chunk in self.positions.chunks_exact(3) {
            min = min.min(chunk[2]);
            max = max.max(chunk[2]);
        }
        (min, max)
    }
}

/// The per-vertex pass shared by the serial and row-parallel paths.
///
/// `positions` must already be validated to a whole number of triples.
pub(crate) fn displace_slice(
    positions: &mut [f32],
    colors: &mut Vec<f32>,
    size: f64,
    field: &dyn NoiseField,
    shape: &ShapeParameters,
    palette: &Palette,
) {
    // Rim detection compares at buffer (f32) precision; the grid places the
    // outermost ring at exactly ±size.
    let rim = size as f32;

    for vertex in positions.chunks_exact_mut(3) {
        let x = vertex[0] as f64;
        let y = vertex[1] as f64;

        let edge = shape.edge_factor(size, x, y);
        let mut z = shape.base_elevation(field, x, y) * edge;
        if vertex[0].abs() == rim || vertex[1].abs() == rim {
            z -= shape.cliff_depth;
        }

        vertex[2] = z as f32;
        colors.extend_from_slice(&palette.classify(z, edge).to_array());
    }
}

/// Displace a caller-provided planar position buffer in place and append
/// one color triple per vertex to `colors`.
///
/// Walks every `(x, y, z)` triple in order, overwriting z with the shaped
/// elevation. On return `colors` has grown by exactly `positions.len()`
/// floats, matching index for index.
///
/// # Errors
///
/// Returns [`HeightfieldError::MalformedPositionBuffer`] if `positions` is
/// not a whole number of triples, or [`HeightfieldError::InvalidParameter`]
/// for degenerate shape or palette values. The buffer is untouched on error.
pub fn displace_in_place(
    positions: &mut [f32],
    colors: &mut Vec<f32>,
    size: f64,
    field: &dyn NoiseField,
    shape: &ShapeParameters,
    palette: &Palette,
) -> Result<(), HeightfieldError> {
    if positions.len() % 3 != 0 {
        return Err(HeightfieldError::MalformedPositionBuffer(positions.len()));
    }
    shape.validate()?;
    palette.validate()?;

    displace_slice(positions, colors, size, field, shape, palette);
    Ok(())
}

/// Generate position and color buffers for a grid.
///
/// Pure: the output depends only on `(grid, field, shape, palette)`. Two
/// calls with identically seeded fields produce bit-identical buffers.
///
/// # Errors
///
/// Returns [`HeightfieldError::InvalidParameter`] for degenerate shape or
/// palette values. Generation itself cannot fail.
pub fn generate(
    grid: &Grid,
    field: &dyn NoiseField,
    shape: &ShapeParameters,
    palette: &Palette,
) -> Result<HeightfieldBuffers, HeightfieldError> {
    shape.validate()?;
    palette.validate()?;

    let mut positions = grid.planar_positions();
    let mut colors = Vec::with_capacity(positions.len());
    displace_slice(&mut positions, &mut colors, grid.size(), field, shape, palette);

    Ok(HeightfieldBuffers { positions, colors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeline_noise::SimplexField;

    fn default_inputs() -> (Grid, SimplexField, ShapeParameters, Palette) {
        (
            Grid::new(250.0, 4).unwrap(),
            SimplexField::new(1),
            ShapeParameters::default(),
            Palette::default(),
        )
    }

    #[test]
    fn test_buffer_lengths_and_correspondence() {
        let (grid, field, shape, palette) = default_inputs();
        let buffers = generate(&grid, &field, &shape, &palette).unwrap();

        assert_eq!(buffers.positions.len(), 3 * 25);
        assert_eq!(buffers.colors.len(), 3 * 25);
        assert_eq!(buffers.vertex_count(), 25);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let grid = Grid::new(250.0, 16).unwrap();
        let shape = ShapeParameters::default();
        let palette = Palette::default();

        let a = generate(&grid, &SimplexField::new(42), &shape, &palette).unwrap();
        let b = generate(&grid, &SimplexField::new(42), &shape, &palette).unwrap();

        assert_eq!(a, b, "Same seed and parameters must reproduce buffers");
    }

    #[test]
    fn test_different_seeds_differ() {
        let grid = Grid::new(250.0, 16).unwrap();
        let shape = ShapeParameters::default();
        let palette = Palette::default();

        let a = generate(&grid, &SimplexField::new(1), &shape, &palette).unwrap();
        let b = generate(&grid, &SimplexField::new(2), &shape, &palette).unwrap();

        assert_ne!(a.positions, b.positions);
    }

    #[test]
    fn test_planar_coordinates_are_preserved() {
        let (grid, field, shape, palette) = default_inputs();
        let planar = grid.planar_positions();
        let buffers = generate(&grid, &field, &shape, &palette).unwrap();

        for i in 0..buffers.vertex_count() {
            assert_eq!(buffers.positions[i * 3], planar[i * 3]);
            assert_eq!(buffers.positions[i * 3 + 1], planar[i * 3 + 1]);
        }
    }

    #[test]
    fn test_corner_collapses_to_cliff_depth() {
        // At an exact-boundary vertex the edge factor is zero, so the shaped
        // elevation vanishes and only the cliff drop remains.
        let (grid, field, shape, palette) = default_inputs();
        let buffers = generate(&grid, &field, &shape, &palette).unwrap();

        // Last vertex is the (+250, +250) corner.
        let corner = buffers.vertex_count() - 1;
        assert_eq!(buffers.position(corner)[0], 250.0);
        assert_eq!(buffers.position(corner)[1], 250.0);
        assert_eq!(buffers.elevation(corner), -25.0);
        assert_eq!(buffers.color(corner), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_entire_rim_is_flattened_and_black() {
        let grid = Grid::new(250.0, 8).unwrap();
        let field = SimplexField::new(7);
        let shape = ShapeParameters::default();
        let palette = Palette::default();
        let buffers = generate(&grid, &field, &shape, &palette).unwrap();

        let per_axis = grid.vertices_per_axis();
        let (interior_min, _) = interior_elevation_bounds(&buffers, per_axis);

        for i in 0..buffers.vertex_count() {
            let [x, y, z] = buffers.position(i);
            if x.abs() == 250.0 || y.abs() == 250.0 {
                assert_eq!(z, -25.0, "Rim vertex ({x}, {y}) not dropped");
                assert_eq!(buffers.color(i), [0.0, 0.0, 0.0]);
                assert!(
                    z < interior_min,
                    "Rim must sit below every interior vertex"
                );
            }
        }
    }

    fn interior_elevation_bounds(buffers: &HeightfieldBuffers, per_axis: usize) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for j in 1..per_axis - 1 {
            for i in 1..per_axis - 1 {
                let z = buffers.elevation(j * per_axis + i);
                min = min.min(z);
                max = max.max(z);
            }
        }
        (min, max)
    }

    #[test]
    fn test_interior_elevation_within_height_scale() {
        let grid = Grid::new(250.0, 32).unwrap();
        let field = SimplexField::new(3);
        let shape = ShapeParameters::default();
        let buffers = generate(&grid, &field, &shape, &Palette::default()).unwrap();

        for i in 0..buffers.vertex_count() {
            let [x, y, z] = buffers.position(i);
            if x.abs() < 250.0 && y.abs() < 250.0 {
                assert!(
                    z.abs() <= shape.height_scale as f32,
                    "Interior vertex ({x}, {y}) elevation {z} exceeds the height scale"
                );
            }
        }
    }

    #[test]
    fn test_colors_stay_in_unit_range() {
        let grid = Grid::new(250.0, 16).unwrap();
        let field = SimplexField::new(11);
        let buffers = generate(
            &grid,
            &field,
            &ShapeParameters::default(),
            &Palette::default(),
        )
        .unwrap();

        for &c in &buffers.colors {
            assert!((0.0..=1.0).contains(&c), "Color channel {c} out of range");
        }
    }

    #[test]
    fn test_displace_in_place_matches_generate() {
        let (grid, field, shape, palette) = default_inputs();

        let mut positions = grid.planar_positions();
        let mut colors = Vec::new();
        displace_in_place(&mut positions, &mut colors, grid.size(), &field, &shape, &palette)
            .unwrap();

        let buffers = generate(&grid, &field, &shape, &palette).unwrap();
        assert_eq!(positions, buffers.positions);
        assert_eq!(colors, buffers.colors);
    }

    #[test]
    fn test_displace_rejects_malformed_buffer() {
        let field = SimplexField::new(1);
        let mut positions = vec![0.0f32; 7];
        let mut colors = Vec::new();
        let result = displace_in_place(
            &mut positions,
            &mut colors,
            250.0,
            &field,
            &ShapeParameters::default(),
            &Palette::default(),
        );
        assert!(matches!(
            result,
            Err(HeightfieldError::MalformedPositionBuffer(7))
        ));
        assert!(colors.is_empty(), "No colors may be written on error");
    }

    #[test]
    fn test_generate_rejects_degenerate_shape() {
        let (grid, field, _, palette) = default_inputs();
        let bad = ShapeParameters {
            edge_band_start: 5.0,
            edge_band_end: 5.0,
            ..ShapeParameters::default()
        };
        assert!(generate(&grid, &field, &bad, &palette).is_err());
    }

    #[test]
    fn test_elevation_bounds() {
        let (grid, field, shape, palette) = default_inputs();
        let buffers = generate(&grid, &field, &shape, &palette).unwrap();
        let (min, max) = buffers.elevation_bounds();
        assert_eq!(min, -25.0, "Rim cliff is the global minimum at this size");
        assert!(max <= shape.height_scale as f32);
        assert!(min <= max);
    }
}
