//! Scalar interpolation primitives and vertex colors for the Ridgeline terrain generator.

mod color;
mod interp;

pub use color::Rgb;
pub use interp::{lerp, smoothstep};
