use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for polygon operations
pub type Result<T> = std::result::Result<T, PolygonError>;

/// Errors raised by operations that need a real polygon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolygonError {
    #[error("Polygon: cannot {operation} with {count} vertices, at least 3 are required")]
    NotEnoughVertices { operation: &'static str, count: usize },

    #[error("Polygon: vertex index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Errors that can occur while loading physics settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("invalid field `{0}`: {1}")]
    InvalidField(&'static str, String),
}
