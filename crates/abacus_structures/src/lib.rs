//! Abacus Structures
//!
//! Animated data structures built on the Abacus scene graph:
//!
//! - [`MArrayElement`]: one labelled cell (body, value text, index label)
//! - [`MArray`]: an array of cells with configurable index numbering
//! - [`MArrayPointer`]: an arrow pointing at an array element
//! - [`MArraySlidingWindow`]: a frame around consecutive elements
//! - [`MVariable`]: a named single value
//!
//! Every structure hands out [`Animator`](abacus_animation::Animator)s for its
//! parts, which are played with an [`abacus_animation::Player`].
//!
//! # Example
//!
//! ```rust
//! use abacus_animation::Player;
//! use abacus_core::{Color, Scene, Vec2};
//! use abacus_structures::{ArrayOptions, MArray, TextOptions};
//!
//! let mut scene = Scene::new();
//! let mut array = MArray::new(&mut scene, [1, 2, 3], ArrayOptions::new()).unwrap();
//! scene.add(array.group()).unwrap();
//!
//! let mut player = Player::new();
//! player
//!     .play(
//!         &mut scene,
//!         [
//!             array.animate_elem(0).unwrap().shift(Vec2::UP),
//!             array.animate_elem_square(1).unwrap().set_fill_color(Color::RED),
//!         ],
//!     )
//!     .unwrap();
//!
//! array
//!     .update_elem_value(&mut scene, 1, 42, &TextOptions::new())
//!     .unwrap();
//! assert_eq!(array.fetch_arr(), [1, 42, 3]);
//! assert_eq!(scene.display_list().texts(), vec!["1", "0", "42", "1", "3", "2"]);
//! ```

pub mod array;
pub mod direction;
pub mod element;
pub mod error;
pub mod options;
pub mod pointer;
pub mod sliding_window;
pub mod theme;
pub mod variable;

pub use array::{format_index, ArrayOptions, ElementIndex, MArray};
pub use direction::MArrayDirection;
pub use element::MArrayElement;
pub use error::{Result, StructureError};
pub use options::{SquareOptions, SquareStyle, TextOptions, TextStyle};
pub use pointer::{MArrayPointer, PointerOptions};
pub use sliding_window::{MArraySlidingWindow, WindowOptions};
pub use theme::Theme;
pub use variable::{MVariable, VariableOptions};
