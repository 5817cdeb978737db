use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the pixel grid and the engines that mutate it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// A coordinate fell outside `[0, size)` on either axis
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfRange { x: i32, y: i32, size: usize },
}

/// Result type for grid operations
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors from parsing a `#rrggbb` color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    InvalidLength(String),

    #[error("invalid hex digits in {0:?}")]
    InvalidDigit(String),
}

/// Errors that can occur while exporting the grid as an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export scale must be at least 1")]
    ZeroScale,

    #[error("{size}x{size} grid at scale {scale} exceeds the {max} px export limit")]
    TooLarge { size: usize, scale: u32, max: u32 },

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors that can occur while loading the canvas configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
