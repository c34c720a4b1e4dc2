//! Elevation-driven vertex color classification.

use ridgeline_math::{Rgb, smoothstep};
use serde::{Deserialize, Serialize};

use crate::HeightfieldError;

/// Two-stop color ramp classified by finished elevation.
///
/// Vertices at or below `cutoff` take the `low` color, vertices at or above
/// `cutoff + band` take `high`, with a smoothstepped transition between.
/// The result is then faded to black in lockstep with the edge falloff so
/// the flattened rim visually recedes instead of showing flat colored
/// ground.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Color of low-lying terrain. Default: sand (`0xD7A569`).
    pub low: Rgb,
    /// Color of higher terrain. Default: green (`0x008000`).
    pub high: Rgb,
    /// Elevation at and below which terrain is fully `low`. Default: -5.0.
    pub cutoff: f64,
    /// Width of the transition band above `cutoff`. Default: 5.0.
    pub band: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            low: Rgb::from_hex(0xD7A569),
            high: Rgb::from_hex(0x008000),
            cutoff: -5.0,
            band: 5.0,
        }
    }
}

impl Palette {
    /// Check the palette for degenerate values.
    ///
    /// # Errors
    ///
    /// Returns [`HeightfieldError::InvalidParameter`] when `band` is zero,
    /// which would collapse the classification to a hard step at `cutoff`.
    pub fn validate(&self) -> Result<(), HeightfieldError> {
        if self.band == 0.0 {
            return Err(HeightfieldError::InvalidParameter(
                "palette band must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Classify a finished elevation into a vertex color, faded toward
    /// black by the edge-falloff factor.
    pub fn classify(&self, elevation: f64, edge_factor: f64) -> Rgb {
        let t = smoothstep(self.cutoff, self.cutoff + self.band, elevation);
        Rgb::BLACK.lerp(self.low.lerp(self.high, t), edge_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_band() {
        let palette = Palette {
            band: 0.0,
            ..Palette::default()
        };
        assert!(matches!(
            palette.validate(),
            Err(HeightfieldError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_low_elevation_takes_low_color() {
        let palette = Palette::default();
        let c = palette.classify(-20.0, 1.0);
        assert_eq!(c, Rgb::from_hex(0xD7A569));
    }

    #[test]
    fn test_high_elevation_takes_high_color() {
        let palette = Palette::default();
        let c = palette.classify(10.0, 1.0);
        assert_eq!(c, Rgb::from_hex(0x008000));
    }

    #[test]
    fn test_transition_band_blends() {
        let palette = Palette::default();
        // Midpoint of the [-5, 0] band.
        let c = palette.classify(-2.5, 1.0);
        let expected = Rgb::from_hex(0xD7A569).lerp(Rgb::from_hex(0x008000), 0.5);
        assert!((c.r - expected.r).abs() < 1e-6);
        assert!((c.g - expected.g).abs() < 1e-6);
        assert!((c.b - expected.b).abs() < 1e-6);
    }

    #[test]
    fn test_zero_edge_factor_fades_to_black() {
        let palette = Palette::default();
        assert_eq!(palette.classify(10.0, 0.0), Rgb::BLACK);
        assert_eq!(palette.classify(-20.0, 0.0), Rgb::BLACK);
    }

    #[test]
    fn test_partial_edge_factor_scales_channels() {
        let palette = Palette {
            low: Rgb::WHITE,
            high: Rgb::WHITE,
            ..Palette::default()
        };
        let c = palette.classify(0.0, 0.25);
        assert!((c.r - 0.25).abs() < 1e-6);
        assert!((c.g - 0.25).abs() < 1e-6);
        assert!((c.b - 0.25).abs() < 1e-6);
    }
}
