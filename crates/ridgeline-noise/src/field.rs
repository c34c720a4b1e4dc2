//! The [`NoiseField`] trait and its simplex-noise implementation.

use noise::{NoiseFn, Simplex};

/// A deterministic pseudo-random 2D scalar field.
///
/// Implementations are seeded once at construction; the same seed must
/// produce the same value at every coordinate, across runs and across
/// threads. Output is bipolar, approximately `[-1, 1]`.
///
/// `Send + Sync` is a supertrait so one field can be shared by the
/// row-parallel generation path.
pub trait NoiseField: Send + Sync {
    /// Sample the field at a 2D coordinate.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Simplex noise field seeded from a `u64`.
pub struct SimplexField {
    noise: Simplex,
    seed: u64,
}

impl SimplexField {
    /// Create a field for the given seed.
    pub fn new(seed: u64) -> Self {
        let noise = Simplex::new(seed as u32);
        Self { noise, seed }
    }

    /// The seed this field was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl NoiseField for SimplexField {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.noise.get([x, y])
    }
}
