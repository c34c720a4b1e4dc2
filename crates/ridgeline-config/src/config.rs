//! Run configuration with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use ridgeline_heightfield::{Palette, ShapeParameters};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Top-level configuration for a generation run.
///
/// Every field has a default, so a partial (or absent) config file is
/// valid. The `shape` and `palette` overrides, when present, replace the
/// corresponding half of the named preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Noise field seed. Default: 1.
    pub seed: u64,
    /// Lattice description.
    pub grid: GridConfig,
    /// Name of the preset to generate. Default: `dunes`.
    pub preset: String,
    /// Worker threads for generation; 0 picks a core-count default,
    /// 1 forces the serial path. Default: 0.
    pub threads: usize,
    /// Shape override replacing the preset's shaping parameters.
    pub shape: Option<ShapeParameters>,
    /// Palette override replacing the preset's colors.
    pub palette: Option<Palette>,
    /// Preview output paths.
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            grid: GridConfig::default(),
            preset: "dunes".to_string(),
            threads: 0,
            shape: None,
            palette: None,
            output: OutputConfig::default(),
        }
    }
}

/// Lattice half-extent and subdivision count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Half-extent in world units. Default: 250.0.
    pub size: f64,
    /// Subdivisions per axis. Default: 512.
    pub resolution: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 250.0,
            resolution: 512,
        }
    }
}

/// Where preview images are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Elevation ramp preview path. Default: `elevation.png`.
    pub elevation_png: PathBuf,
    /// Vertex color preview path. Default: `colors.png`.
    pub color_png: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            elevation_png: PathBuf::from("elevation.png"),
            color_png: PathBuf::from("colors.png"),
        }
    }
}

impl Config {
    /// Load a configuration from a RON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read or
    /// [`ConfigError::Parse`] if it is not valid RON for this schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        ron::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Save the configuration as pretty-printed RON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] or [`ConfigError::Write`].
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::Write)
    }
}
