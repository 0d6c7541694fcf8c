//! Abacus Animation System
//!
//! Declarative animators, easing curves, and timeline orchestration on top of
//! the [`abacus_core`] scene graph.
//!
//! # Features
//!
//! - **Animators**: record property changes on a mobject without touching it
//! - **Animations**: interpolate a subtree between two snapshots
//! - **Timelines**: orchestrate multiple animations with offsets
//! - **Player**: play batches in sequence and optionally record frames

pub mod animation;
pub mod animator;
pub mod easing;
pub mod error;
pub mod player;
pub mod presets;
pub mod timeline;

pub use animation::{Animation, Track};
pub use animator::{Animate, Animator, PropertyChange, DEFAULT_RUN_TIME_MS};
pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use player::{Frame, Player};
pub use presets::AnimationPreset;
pub use timeline::{Timeline, TimelineEntryId};
