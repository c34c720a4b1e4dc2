//! Heightfield preview renderers and PNG export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use ridgeline_heightfield::{Grid, HeightfieldBuffers};

use crate::PreviewImage;

/// Errors raised while writing a preview to disk.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// Failed to create or write the output file.
    #[error("failed to write preview: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("failed to encode preview: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Render elevations to a dark-to-light ramp, one pixel per lattice vertex.
///
/// The lowest vertex (the rim cliff on default parameters) maps to black,
/// the highest to white. A flat field renders mid-gray.
///
/// # Panics
///
/// Panics if the buffers hold fewer vertices than the grid describes.
pub fn render_elevation(buffers: &HeightfieldBuffers, grid: &Grid) -> PreviewImage {
    let per_axis = grid.vertices_per_axis() as u32;
    let mut image = PreviewImage::new(per_axis, per_axis);

    let (min, max) = buffers.elevation_bounds();
    let range = max - min;

    for y in 0..per_axis {
        for x in 0..per_axis {
            let z = buffers.elevation((y * per_axis + x) as usize);
            let normalized = if range > 0.0 { (z - min) / range } else { 0.5 };
            let shade = (normalized * 255.0).round() as u8;
            image.set_pixel(x, y, shade, shade, shade);
        }
    }
    image
}

/// Render the generator's vertex colors, one pixel per lattice vertex.
///
/// # Panics
///
/// Panics if the buffers hold fewer vertices than the grid describes.
pub fn render_colors(buffers: &HeightfieldBuffers, grid: &Grid) -> PreviewImage {
    let per_axis = grid.vertices_per_axis() as u32;
    let mut image = PreviewImage::new(per_axis, per_axis);

    for y in 0..per_axis {
        for x in 0..per_axis {
            let [r, g, b] = buffers.color((y * per_axis + x) as usize);
            image.set_pixel(x, y, channel_to_byte(r), channel_to_byte(g), channel_to_byte(b));
        }
    }
    image
}

fn channel_to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Encode a preview image as an 8-bit RGBA PNG at `path`.
///
/// # Errors
///
/// Returns [`PreviewError`] if the file cannot be written or encoding
/// fails.
pub fn write_png(image: &PreviewImage, path: &Path) -> Result<(), PreviewError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.pixels)?;
    Ok(())
}
