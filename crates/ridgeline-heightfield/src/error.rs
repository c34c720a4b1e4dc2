//! Heightfield error types.

/// Errors that can occur when constructing or running a generation.
///
/// Generation itself cannot fail once inputs are validated; every variant
/// here is raised synchronously before any vertex is computed.
#[derive(Debug, thiserror::Error)]
pub enum HeightfieldError {
    /// A grid, shape, or palette parameter is degenerate.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A preset with this name is already registered.
    #[error("duplicate preset name: {0}")]
    DuplicatePreset(String),

    /// No preset with this name is registered.
    #[error("unknown preset `{name}` (available: {available})")]
    UnknownPreset {
        /// The name that failed to resolve.
        name: String,
        /// Comma-separated registered preset names.
        available: String,
    },

    /// A caller-provided position buffer is not a whole number of
    /// `(x, y, z)` triples.
    #[error("position buffer length {0} is not a multiple of 3")]
    MalformedPositionBuffer(usize),
}
