//! Seeded 2D noise fields and fractal composition for terrain shaping.
//!
//! The noise field is injected into the generator as a trait object rather
//! than seeded through process-global state, so two runs with the same seed
//! produce identical terrain.

mod field;
mod fractal;

pub use field::{NoiseField, SimplexField};
pub use fractal::{FractalParams, fbm, ridged_fbm};
