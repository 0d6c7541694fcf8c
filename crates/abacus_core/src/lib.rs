//! Abacus Core
//!
//! This crate provides the scene model that data-structure visualisations are
//! built on:
//!
//! - **Geometry**: points, vectors and rectangles in scene units (y up)
//! - **Colors**: RGBA colors with the default structure palette
//! - **Mobjects**: rectangles, text, arrows and groups
//! - **Scene**: a slot-map arena with relative positioning and display lists
//!
//! # Example
//!
//! ```rust
//! use abacus_core::{Mobject, Scene, Vec2};
//!
//! let mut scene = Scene::new();
//!
//! let body = scene.insert(Mobject::square(1.0));
//! let label = scene.insert(Mobject::text("0"));
//!
//! // Put the label just above the square
//! scene.next_to(label, body, Vec2::UP, 0.25).unwrap();
//!
//! scene.add(body).unwrap();
//! scene.add(label).unwrap();
//! assert_eq!(scene.display_list().texts(), vec!["0"]);
//! ```

pub mod color;
pub mod display;
pub mod error;
pub mod geometry;
pub mod mobject;
pub mod scene;

pub use color::Color;
pub use display::{DisplayList, DrawCommand};
pub use error::{CoreError, Result};
pub use geometry::{Point, Rect, Size, Vec2};
pub use mobject::{FontWeight, Mobject, MobjectKind, MobjectProps};
pub use scene::{MobjectId, Scene};
