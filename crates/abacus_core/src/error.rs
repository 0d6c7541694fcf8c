//! Scene error types

use thiserror::Error;

use crate::scene::MobjectId;

/// Errors raised by scene-graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The handle does not refer to a live mobject
    #[error("Unknown mobject: {0:?}")]
    UnknownMobject(MobjectId),

    /// A color string could not be parsed
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Attaching the child would make it its own ancestor
    #[error("Attaching {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: MobjectId, child: MobjectId },
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, CoreError>;
