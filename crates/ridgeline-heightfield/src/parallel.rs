//! Row-parallel generation.
//!
//! Rows of the lattice are independent (each vertex's elevation and color
//! depend only on its own planar coordinates), so they can be fanned out to
//! a worker pool and reassembled by index. The output is bit-identical to
//! the serial path.

use crossbeam_channel::bounded;

use ridgeline_noise::NoiseField;

use crate::generate::{HeightfieldBuffers, displace_slice, generate};
use crate::{Grid, HeightfieldError, Palette, ShapeParameters};

/// Generate position and color buffers using `threads` worker threads.
///
/// `threads == 0` picks a default based on available cores, leaving
/// headroom for the calling thread. `threads == 1` is exactly the serial
/// [`generate`] path. Any thread count produces bit-identical buffers.
///
/// # Errors
///
/// Returns [`HeightfieldError::InvalidParameter`] for degenerate shape or
/// palette values, like the serial path.
pub fn generate_parallel(
    grid: &Grid,
    field: &dyn NoiseField,
    shape: &ShapeParameters,
    palette: &Palette,
    threads: usize,
) -> Result<HeightfieldBuffers, HeightfieldError> {
    let rows = grid.vertices_per_axis();
    let workers = match threads {
        0 => num_cpus::get().saturating_sub(2).max(1),
        n => n,
    }
    .min(rows);

    if workers <= 1 {
        return generate(grid, field, shape, palette);
    }

    shape.validate()?;
    palette.validate()?;

    let row_len = rows * 3;
    let (task_sender, task_receiver) = bounded::<u32>(rows);
    let (row_sender, row_receiver) = bounded::<(usize, Vec<f32>, Vec<f32>)>(rows);

    // Queue every row up front; capacity covers them all, so no send can
    // block before the workers start draining.
    for j in 0..=grid.resolution() {
        let _ = task_sender.send(j);
    }
    drop(task_sender);

    let mut positions = vec![0.0f32; rows * row_len];
    let mut colors = vec![0.0f32; rows * row_len];

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let task_receiver = task_receiver.clone();
            let row_sender = row_sender.clone();

            std::thread::Builder::new()
                .name("heightfield-row-worker".into())
                .spawn_scoped(scope, move || {
                    while let Ok(j) = task_receiver.recv() {
                        let mut row_positions = grid.planar_row(j);
                        let mut row_colors = Vec::with_capacity(row_positions.len());
                        displace_slice(
                            &mut row_positions,
                            &mut row_colors,
                            grid.size(),
                            field,
                            shape,
                            palette,
                        );
                        let _ = row_sender.send((j as usize, row_positions, row_colors));
                    }
                })
                .expect("failed to spawn heightfield row worker");
        }
        drop(row_sender);

        // Rows arrive in completion order; placement by index restores the
        // row-major layout regardless.
        while let Ok((j, row_positions, row_colors)) = row_receiver.recv() {
            let start = j * row_len;
            positions[start..start + row_len].copy_from_slice(&row_positions);
            colors[start..start + row_len].copy_from_slice(&row_colors);
        }
    });

    Ok(HeightfieldBuffers { positions, colors })
}
