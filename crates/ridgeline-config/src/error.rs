//! Configuration error types.

/// Errors that can occur when loading, saving, or parsing a run
/// configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read configuration: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the configuration file to disk.
    #[error("failed to write configuration: {0}")]
    Write(#[source] std::io::Error),

    /// The file is not valid RON for this configuration schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Failed to serialize the configuration to RON.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] ron::Error),
}
