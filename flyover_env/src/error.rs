//! Error types for the map surface abstraction.

use thiserror::Error;

/// Errors reported by a `MapSurface` implementation.
///
/// These are non-fatal from the animation loop's perspective: a missing
/// source or layer means some external actor removed it mid-run, and the
/// corresponding update is skipped and re-attempted next frame.
#[derive(Debug, Error)]
pub enum MapError {
    /// A geometry source expected to exist is missing.
    #[error("Missing source: {0}")]
    MissingSource(String),

    /// A paint layer expected to exist is missing.
    #[error("Missing layer: {0}")]
    MissingLayer(String),

    /// A source with this id already exists.
    #[error("Duplicate source: {0}")]
    DuplicateSource(String),

    /// A layer with this id already exists.
    #[error("Duplicate layer: {0}")]
    DuplicateLayer(String),
}

impl MapError {
    /// Creates a missing-source error.
    pub fn missing_source(id: impl Into<String>) -> Self {
        Self::MissingSource(id.into())
    }

    /// Creates a missing-layer error.
    pub fn missing_layer(id: impl Into<String>) -> Self {
        Self::MissingLayer(id.into())
    }
}
