//! Structure error types

use abacus_core::CoreError;
use thiserror::Error;

/// Errors raised by data-structure operations
#[derive(Error, Debug)]
pub enum StructureError {
    /// An indexed call was given a position outside `0..len`
    #[error("Index out of bounds: {index} (length {len})")]
    IndexOutOfBounds { index: i64, len: usize },

    /// A sliding window does not fit inside the array
    #[error("Invalid window: start {start}, size {size} (length {len})")]
    InvalidWindow {
        start: usize,
        size: usize,
        len: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A theme file is not valid TOML or has unknown keys
    #[error("Failed to parse theme: {0}")]
    ThemeParse(#[from] toml::de::Error),

    #[error("Failed to read theme: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for structure operations
pub type Result<T> = std::result::Result<T, StructureError>;
