//! Fractal Brownian motion over a [`NoiseField`].
//!
//! Composites multiple octaves of noise at increasing frequency and
//! decreasing amplitude. The plain accumulator produces smooth rolling
//! structure; the ridged variant folds each octave through `1 - |n|`,
//! producing sharp ridge lines at the noise zero crossings.

use serde::{Deserialize, Serialize};

use crate::NoiseField;

/// Octave schedule for fractal accumulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    /// Number of octaves to composite. More octaves add finer detail.
    /// Default: 5.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves. Default: 2.0.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves. With `gain < 1`
    /// the sum is dominated by the early octaves. Default: 0.5.
    pub gain: f64,
    /// Frequency of the first octave, applied as a coordinate pre-scale.
    /// Default: 1.0 (caller passes already-scaled coordinates).
    pub frequency: f64,
    /// Amplitude of the first octave. Default: 1.5, the plain-fBm
    /// convention; ridged accumulation conventionally starts at 1.0
    /// (see [`FractalParams::ridged`]).
    pub amplitude: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 5,
            lacunarity: 2.0,
            gain: 0.5,
            frequency: 1.0,
            amplitude: 1.5,
        }
    }
}

impl FractalParams {
    /// Defaults for ridged accumulation: first-octave amplitude 1.0,
    /// otherwise identical to [`FractalParams::default`].
    pub fn ridged() -> Self {
        Self {
            amplitude: 1.0,
            ..Self::default()
        }
    }

    /// The theoretical maximum absolute value of the accumulated sum
    /// (geometric series of octave amplitudes).
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = self.amplitude;
        for _ in 0..self.octaves {
            sum += amp;
            amp *= self.gain;
        }
        sum
    }
}

/// Fractal Brownian motion: sum of `field` octaves per `params`.
///
/// Octave `i` contributes `field(x * f_i, y * f_i) * a_i` where
/// `f_0 = frequency`, `a_0 = amplitude`, `f_{i+1} = f_i * lacunarity`,
/// `a_{i+1} = a_i * gain`. Stateless and deterministic for a fixed field.
pub fn fbm<F: NoiseField + ?Sized>(field: &F, x: f64, y: f64, params: &FractalParams) -> f64 {
    let mut amplitude = params.amplitude;
    let mut frequency = params.frequency;
    let mut sum = 0.0;

    for _ in 0..params.octaves {
        sum += field.sample(x * frequency, y * frequency) * amplitude;
        amplitude *= params.gain;
        frequency *= params.lacunarity;
    }
    sum
}

/// Ridged fractal Brownian motion: like [`fbm`] but each octave contributes
/// `(1 - |field(x * f_i, y * f_i)|) * a_i`, turning noise zero crossings
/// into sharp maxima.
pub fn ridged_fbm<F: NoiseField + ?Sized>(
    field: &F,
    x: f64,
    y: f64,
    params: &FractalParams,
) -> f64 {
    let mut amplitude = params.amplitude;
    let mut frequency = params.frequency;
    let mut sum = 0.0;

    for _ in 0..params.octaves {
        sum += (1.0 - field.sample(x * frequency, y * frequency).abs()) * amplitude;
        amplitude *= params.gain;
        frequency *= params.lacunarity;
    }
    sum
}
