//! Animation error types

use abacus_core::CoreError;
use thiserror::Error;

/// Errors raised while building or playing animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A target mobject is missing from the scene
    #[error(transparent)]
    Core(#[from] CoreError),

    /// `play` was called without any animators
    #[error("Called play with no animations")]
    Empty,

    /// Recording needs a positive frame rate
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(u32),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
