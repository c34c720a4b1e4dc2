//! The height-shaping policy: what elevation each planar coordinate gets.
//!
//! Elevation is composed in two stages. A relief policy produces the raw
//! organic variation (a blend of two noise regimes by default), then the
//! boundary treatment flattens a rim band and drops a sheer cliff at the
//! outermost vertex ring so the tile never ends mid-slope.

use ridgeline_math::{lerp, smoothstep};
use ridgeline_noise::{FractalParams, NoiseField, fbm, ridged_fbm};
use serde::{Deserialize, Serialize};

use crate::HeightfieldError;

/// Selects the raw elevation policy applied before boundary treatment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Relief {
    /// Two noise regimes — sharp low dune ridges and broad rolling hills —
    /// blended spatially by a third, very low-frequency noise channel.
    Blended,
    /// Plain fractal Brownian motion.
    Fbm(FractalParams),
    /// Ridged fractal Brownian motion.
    Ridged(FractalParams),
}

/// Named numeric knobs for the shaping policy.
///
/// Defaults match the stock dunes terrain; all frequencies are in inverse
/// world units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParameters {
    /// Raw elevation policy. Default: [`Relief::Blended`].
    pub relief: Relief,
    /// Sampling frequency of the dune regime. Default: 0.05.
    pub dune_frequency: f64,
    /// Amplitude of the dune regime. Default: 0.1.
    pub dune_amplitude: f64,
    /// Constant bias added to the dune regime, pushing dune floors below
    /// the waterline of the color cutoff. Default: -0.5.
    pub dune_bias: f64,
    /// Sampling frequency of the rolling-hill regime. Default: 0.01.
    pub hill_frequency: f64,
    /// Sampling frequency of the dune/hill blend channel. Default: 0.005.
    pub mix_frequency: f64,
    /// Blend-weight band: weights at or below this are fully dune.
    /// Default: 0.25.
    pub mix_low: f64,
    /// Blend-weight band: weights at or above this are fully hill.
    /// Default: 0.55.
    pub mix_high: f64,
    /// Vertical exaggeration applied to the raw relief. Default: 20.0.
    pub height_scale: f64,
    /// Distance in from the rim where the edge falloff begins.
    /// Default: 18.0.
    pub edge_band_start: f64,
    /// Distance in from the rim where the falloff reaches zero. Greater
    /// than `edge_band_start`, which makes the smoothstep edges descending
    /// and inverts the ramp. Default: 20.0.
    pub edge_band_end: f64,
    /// Fixed drop subtracted at the outermost vertex ring. Default: 25.0.
    pub cliff_depth: f64,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            relief: Relief::Blended,
            dune_frequency: 0.05,
            dune_amplitude: 0.1,
            dune_bias: -0.5,
            hill_frequency: 0.01,
            mix_frequency: 0.005,
            mix_low: 0.25,
            mix_high: 0.55,
            height_scale: 20.0,
            edge_band_start: 18.0,
            edge_band_end: 20.0,
            cliff_depth: 25.0,
        }
    }
}

impl ShapeParameters {
    /// Check the parameters for degenerate values.
    ///
    /// # Errors
    ///
    /// Returns [`HeightfieldError::InvalidParameter`] when the edge band
    /// collapses to a single distance. The band is normally *inverted*
    /// (`start < end`, descending smoothstep edges) and either ordering is
    /// accepted; only equality is rejected.
    pub fn validate(&self) -> Result<(), HeightfieldError> {
        if self.edge_band_start == self.edge_band_end {
            return Err(HeightfieldError::InvalidParameter(format!(
                "edge band is degenerate: start and end are both {}",
                self.edge_band_start
            )));
        }
        Ok(())
    }

    /// Raw elevation at a planar coordinate, before boundary treatment.
    pub fn base_elevation(&self, field: &dyn NoiseField, x: f64, y: f64) -> f64 {
        let raw = match &self.relief {
            Relief::Blended => {
                let dune = (1.0
                    - field
                        .sample(x * self.dune_frequency, y * self.dune_frequency)
                        .abs())
                    * self.dune_amplitude
                    + self.dune_bias;
                let hills = field.sample(x * self.hill_frequency, y * self.hill_frequency);

                // The blend channel is bipolar noise remapped to [0, 1],
                // then smoothstepped so regime transitions are gradual
                // rather than linear.
                let mix = field.sample(x * self.mix_frequency, y * self.mix_frequency) * 0.5 + 0.5;
                lerp(dune, hills, smoothstep(self.mix_low, self.mix_high, mix))
            }
            Relief::Fbm(params) => fbm(field, x, y, params),
            Relief::Ridged(params) => ridged_fbm(field, x, y, params),
        };
        raw * self.height_scale
    }

    /// Multiplicative edge-falloff factor at a planar coordinate.
    ///
    /// 1.0 over the interior, ramping to exactly 0.0 across the rim band on
    /// each axis. The smoothstep edges are `size - edge_band_start` down to
    /// `size - edge_band_end`, i.e. deliberately descending.
    pub fn edge_factor(&self, size: f64, x: f64, y: f64) -> f64 {
        smoothstep(size - self.edge_band_start, size - self.edge_band_end, x.abs())
            * smoothstep(size - self.edge_band_start, size - self.edge_band_end, y.abs())
    }
}
