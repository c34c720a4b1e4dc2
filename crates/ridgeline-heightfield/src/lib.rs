//! Procedural heightfield terrain generation.
//!
//! Takes a rectangular vertex lattice ([`Grid`]), an injected noise field,
//! and a set of shaping parameters, and produces flat per-vertex position
//! and color buffers for a mesh sink. Generation is a pure function of its
//! inputs: the same grid, seed, and parameters always produce identical
//! buffers.

mod error;
mod generate;
mod grid;
mod palette;
mod parallel;
mod preset;
mod shape;

pub use error::HeightfieldError;
pub use generate::{HeightfieldBuffers, displace_in_place, generate};
pub use grid::Grid;
pub use palette::Palette;
pub use parallel::generate_parallel;
pub use preset::{PresetRegistry, TerrainPreset};
pub use shape::{Relief, ShapeParameters};
