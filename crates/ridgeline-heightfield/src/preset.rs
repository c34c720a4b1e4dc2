//! Named terrain presets.
//!
//! The production constants ship as a handful of presets rather than
//! alternative code paths: `dunes` is the default blended relief, `glacier`
//! recolors it, `kryptonite` swaps in a plain fBm relief, and `ridges` the
//! ridged variant.

use hashbrown::HashMap;
use ridgeline_math::Rgb;
use ridgeline_noise::FractalParams;
use serde::{Deserialize, Serialize};

use crate::{HeightfieldError, Palette, Relief, ShapeParameters};

/// A shaping policy paired with the palette that colors it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainPreset {
    /// The shaping parameters.
    pub shape: ShapeParameters,
    /// The color classification.
    pub palette: Palette,
}

/// Stores named presets with lookup by name.
pub struct PresetRegistry {
    presets: HashMap<String, TerrainPreset>,
}

impl PresetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            presets: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in presets.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        let dunes = TerrainPreset {
            shape: ShapeParameters::default(),
            palette: Palette::default(),
        };

        let glacier = TerrainPreset {
            shape: ShapeParameters::default(),
            palette: Palette {
                low: Rgb::from_hex(0x808080),
                high: Rgb::from_hex(0x111111),
                ..Palette::default()
            },
        };

        // The kryptonite ground skips elevation-based coloring entirely;
        // both stops white leaves only the rim fade.
        let kryptonite = TerrainPreset {
            shape: ShapeParameters {
                relief: Relief::Fbm(FractalParams {
                    octaves: 10,
                    lacunarity: 2.0,
                    gain: 0.6,
                    frequency: 0.01,
                    ..FractalParams::default()
                }),
                ..ShapeParameters::default()
            },
            palette: Palette {
                low: Rgb::WHITE,
                high: Rgb::WHITE,
                ..Palette::default()
            },
        };

        let ridges = TerrainPreset {
            shape: ShapeParameters {
                relief: Relief::Ridged(FractalParams {
                    octaves: 5,
                    lacunarity: 2.0,
                    gain: 0.5,
                    frequency: 0.005,
                    ..FractalParams::ridged()
                }),
                ..ShapeParameters::default()
            },
            palette: Palette::default(),
        };

        for (name, preset) in [
            ("dunes", dunes),
            ("glacier", glacier),
            ("kryptonite", kryptonite),
            ("ridges", ridges),
        ] {
            // Names are distinct literals; registration cannot collide.
            let _ = registry.register(name, preset);
        }
        registry
    }

    /// Register a preset under a name.
    ///
    /// # Errors
    ///
    /// Returns [`HeightfieldError::DuplicatePreset`] if the name is taken.
    pub fn register(
        &mut self,
        name: &str,
        preset: TerrainPreset,
    ) -> Result<(), HeightfieldError> {
        if self.presets.contains_key(name) {
            return Err(HeightfieldError::DuplicatePreset(name.to_string()));
        }
        self.presets.insert(name.to_string(), preset);
        Ok(())
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&TerrainPreset> {
        self.presets.get(name)
    }

    /// Look up a preset by name, failing with the list of registered names.
    ///
    /// # Errors
    ///
    /// Returns [`HeightfieldError::UnknownPreset`] naming the available
    /// presets.
    pub fn resolve(&self, name: &str) -> Result<&TerrainPreset, HeightfieldError> {
        self.get(name).ok_or_else(|| HeightfieldError::UnknownPreset {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// Registered preset names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
