//! Error types for the icon generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating the icon set
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel buffer handed to the encoder does not match its dimensions
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// The external resampler could not produce an output file
    #[error("Resize failed: {0}")]
    Resize(String),

    /// The icon-set manifest could not be serialized
    #[error("Manifest serialization failed: {0}")]
    Manifest(String),

    /// Filesystem error while writing outputs
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
