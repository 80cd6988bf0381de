use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading maps, reading configs, or writing results.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to open {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save {}: {source}", .path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid image buffer: {0}")]
    Buffer(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Usage(String),

    #[error("mission line {line}: {message}")]
    Mission { line: usize, message: String },

    #[error("route error: {0}")]
    Route(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
