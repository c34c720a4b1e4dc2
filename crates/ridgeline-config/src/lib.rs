//! Generation run configuration: RON persistence plus CLI overrides.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, GridConfig, OutputConfig};
pub use error::ConfigError;
