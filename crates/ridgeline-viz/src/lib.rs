//! 2D preview rendering of generated heightfields.
//!
//! Renders the generator's flat buffers to [`PreviewImage`]s — one pixel
//! per lattice vertex — and encodes them as PNG. Used to eyeball shaping
//! changes without standing up a renderer.

mod image;
mod render;

pub use image::PreviewImage;
pub use render::{PreviewError, render_colors, render_elevation, write_png};
