//! Error types for `pbr2gltf`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `pbr2gltf` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    // ==================== Image Errors ====================
    /// An input image could not be decoded.
    ///
    /// The conversion pipeline treats this as a soft failure: the file is
    /// skipped with a warning and the run continues.
    #[error("failed to decode image '{path}': {message}")]
    DecodeFailed {
        /// The image file that could not be decoded.
        path: PathBuf,
        /// The decoder's error message.
        message: String,
    },

    /// Failed to encode a composite image as PNG.
    #[error("failed to encode PNG '{path}': {message}")]
    PngEncodeFailed {
        /// The output path that was being written.
        path: PathBuf,
        /// The encoder's error message.
        message: String,
    },

    // ==================== Output Errors ====================
    /// Failed to read the bytes of a file selected for raw passthrough.
    #[error("failed to read raw image '{path}': {message}")]
    RawReadFailed {
        /// The source file that could not be read.
        path: PathBuf,
        /// The read error message.
        message: String,
    },

    /// Failed to write an output artifact.
    ///
    /// A material document must not reference a missing image file, so any
    /// write failure aborts the whole run.
    #[error("failed to write '{path}': {message}")]
    WriteFailed {
        /// The output path that could not be written.
        path: PathBuf,
        /// The write error message.
        message: String,
    },

    // ==================== Serialization Errors ====================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `pbr2gltf` operations.
pub type Result<T> = std::result::Result<T, Error>;
