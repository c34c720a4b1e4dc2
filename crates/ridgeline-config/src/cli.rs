//! Command-line argument parsing for the ridgeline binary.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Ridgeline command-line arguments.
///
/// CLI values override settings loaded from the RON config file.
#[derive(Parser, Debug)]
#[command(name = "ridgeline", about = "Procedural heightfield terrain generator")]
pub struct CliArgs {
    /// Noise field seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Grid half-extent in world units.
    #[arg(long)]
    pub size: Option<f64>,

    /// Grid subdivisions per axis.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Preset name (dunes, glacier, kryptonite, ridges).
    #[arg(long)]
    pub preset: Option<String>,

    /// Worker threads (0 = auto, 1 = serial).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Elevation preview output path.
    #[arg(long)]
    pub elevation_out: Option<PathBuf>,

    /// Color preview output path.
    #[arg(long)]
    pub color_out: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to a RON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(size) = args.size {
            self.grid.size = size;
        }
        if let Some(resolution) = args.resolution {
            self.grid.resolution = resolution;
        }
        if let Some(ref preset) = args.preset {
            self.preset = preset.clone();
        }
        if let Some(threads) = args.threads {
            self.threads = threads;
        }
        if let Some(ref path) = args.elevation_out {
            self.output.elevation_png = path.clone();
        }
        if let Some(ref path) = args.color_out {
            self.output.color_png = path.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_leave_config_untouched() {
        let args = CliArgs::try_parse_from(["ridgeline"]).unwrap();
        let mut config = Config::default();
        let before = config.clone();
        config.apply_cli_overrides(&args);
        assert_eq!(config, before);
    }

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::try_parse_from([
            "ridgeline",
            "--seed",
            "9",
            "--resolution",
            "64",
            "--preset",
            "glacier",
            "--elevation-out",
            "out/height.png",
        ])
        .unwrap();

        let mut config = Config::default();
        config.apply_cli_overrides(&args);

        assert_eq!(config.seed, 9);
        assert_eq!(config.grid.resolution, 64);
        assert_eq!(config.preset, "glacier");
        assert_eq!(config.output.elevation_png, PathBuf::from("out/height.png"));
        // Untouched fields keep their defaults.
        assert_eq!(config.grid.size, 250.0);
        assert_eq!(config.output.color_png, PathBuf::from("colors.png"));
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(CliArgs::try_parse_from(["ridgeline", "--seed", "abc"]).is_err());
        assert!(CliArgs::try_parse_from(["ridgeline", "--resolution", "-1"]).is_err());
    }
}
