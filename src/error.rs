//! Crate-level error type and `Result` alias.
//! Configuration problems surface at construction time; axis, crop and channel
//! errors surface per call. Resize backend and config-file failures are wrapped.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Invalid channel axis {axis} for a {ndim}-dimensional array")]
    InvalidAxis { axis: isize, ndim: usize },

    #[error(
        "Crop size {target_height}x{target_width} exceeds image size {height}x{width}"
    )]
    CropSize {
        target_height: usize,
        target_width: usize,
        height: usize,
        width: usize,
    },

    #[error("Expected {expected} color channels, got: {actual}")]
    ChannelCount { expected: usize, actual: usize },

    #[error("Image dimensions must be greater than 0, got: {height}x{width}")]
    ZeroSize { height: usize, width: usize },

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
