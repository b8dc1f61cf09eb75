use std::path::PathBuf;
use thiserror::Error;

/// Failures of the image compressor. Per-file variants are recorded in the
/// batch report; `Walk` and `DirectoryCreationFailed` abort the batch.
#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot identify image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("JPEG encoding failed: {0}")]
    Encode(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid maximum dimension: {0}. Must be greater than zero")]
    InvalidMaxDimension(u32),

    #[error("Image too large to encode as JPEG: {0}x{1}")]
    DimensionsTooLarge(u32, u32),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("Directory listing failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Failures of the name exporter. None of them are isolated: the first one
/// ends the run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory listing failed: {0}")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Error)]
pub enum UnlockError {
    #[error("PDF is password-protected. Cannot unlock without password.")]
    PasswordRequired,

    #[error("failed to open {path}: {message}")]
    Load { path: PathBuf, message: String },

    #[error("failed to save {path}: {message}")]
    Save { path: PathBuf, message: String },

    #[error("refusing to overwrite the input file {0}")]
    WouldOverwriteInput(PathBuf),

    #[error("input has no file name: {0}")]
    MissingFileName(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
