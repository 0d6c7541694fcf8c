//! Arrays
//!
//! An [`MArray`] pairs a backing `Vec<T>` with one [`MArrayElement`] per value.
//! Both lists always have the same length and are index-aligned. Each element
//! shows `value.to_string()` and an index label computed when it was appended:
//!
//! ```text
//! label(i) = index_start + index_offset * i
//! ```
//!
//! optionally rendered in hexadecimal. Labels are never recomputed afterwards.
//!
//! ```rust
//! use abacus_core::Scene;
//! use abacus_structures::{ArrayOptions, MArray};
//!
//! let mut scene = Scene::new();
//! let array = MArray::new(
//!     &mut scene,
//!     [10, 20, 30],
//!     ArrayOptions::new().with_index_start(5).with_index_offset(2),
//! )
//! .unwrap();
//!
//! let labels: Vec<&str> = array.fetch_mob_arr().iter().map(|e| e.index_text()).collect();
//! assert_eq!(labels, ["5", "7", "9"]);
//! ```

use std::fmt::Display;
use std::ops::Range;

use abacus_animation::{Animate, Animator};
use abacus_core::{Mobject, MobjectId, Rect, Scene};

use crate::direction::MArrayDirection;
use crate::element::MArrayElement;
use crate::error::{Result, StructureError};
use crate::options::{SquareOptions, TextOptions};
use crate::theme::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Index arguments
// ─────────────────────────────────────────────────────────────────────────────

/// Integer types accepted as element positions.
///
/// Signed types may be negative; negative positions are always out of bounds.
pub trait ElementIndex: Copy {
    fn to_position(self) -> i64;
}

macro_rules! impl_signed_index {
    ($($t:ty),*) => {
        $(impl ElementIndex for $t {
            fn to_position(self) -> i64 {
                self as i64
            }
        })*
    };
}

macro_rules! impl_unsigned_index {
    ($($t:ty),*) => {
        $(impl ElementIndex for $t {
            fn to_position(self) -> i64 {
                i64::try_from(self).unwrap_or(i64::MAX)
            }
        })*
    };
}

impl_signed_index!(i8, i16, i32, i64, isize);
impl_unsigned_index!(u8, u16, u32, u64, usize);

/// Render a displayed index, `0x`-prefixed in hex mode
pub fn format_index(value: i64, hex: bool) -> String {
    if !hex {
        value.to_string()
    } else if value < 0 {
        format!("-{:#x}", value.unsigned_abs())
    } else {
        format!("{value:#x}")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// Construction options for an [`MArray`]
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayOptions {
    /// Difference between successive displayed indices
    pub index_offset: i64,
    /// Displayed index of the first element
    pub index_start: i64,
    pub index_hex_display: bool,
    pub direction: MArrayDirection,
    pub theme: Theme,
    /// Options applied to every appended element
    pub body: SquareOptions,
    pub value: TextOptions,
    pub index: TextOptions,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            index_offset: 1,
            index_start: 0,
            index_hex_display: false,
            direction: MArrayDirection::default(),
            theme: Theme::default(),
            body: SquareOptions::default(),
            value: TextOptions::default(),
            index: TextOptions::default(),
        }
    }
}

impl ArrayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_offset(mut self, offset: i64) -> Self {
        self.index_offset = offset;
        self
    }

    pub fn with_index_start(mut self, start: i64) -> Self {
        self.index_start = start;
        self
    }

    pub fn with_hex_display(mut self, hex: bool) -> Self {
        self.index_hex_display = hex;
        self
    }

    pub fn with_direction(mut self, direction: MArrayDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_body(mut self, body: SquareOptions) -> Self {
        self.body = body;
        self
    }

    pub fn with_value(mut self, value: TextOptions) -> Self {
        self.value = value;
        self
    }

    pub fn with_index(mut self, index: TextOptions) -> Self {
        self.index = index;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MArray
// ─────────────────────────────────────────────────────────────────────────────

/// An animated array of displayable values
#[derive(Clone, Debug)]
pub struct MArray<T> {
    arr: Vec<T>,
    mob_arr: Vec<MArrayElement>,
    group: MobjectId,
    options: ArrayOptions,
}

impl<T: Display> MArray<T> {
    /// Build an array with one element per value.
    ///
    /// The array's group is inserted into the scene but not added as a root;
    /// pass [`MArray::group`] to [`Scene::add`] to show it.
    pub fn new(
        scene: &mut Scene,
        values: impl IntoIterator<Item = T>,
        options: ArrayOptions,
    ) -> Result<Self> {
        let mut array = Self {
            arr: Vec::new(),
            mob_arr: Vec::new(),
            group: scene.insert(Mobject::group()),
            options,
        };
        for value in values {
            array.push(scene, value)?;
        }
        tracing::debug!(group = ?array.group, len = array.len(), "built array");
        Ok(array)
    }

    /// Displayed index for a position, as computed at append time
    pub fn calc_index(&self, position: usize) -> String {
        let position = i64::try_from(position).unwrap_or(i64::MAX);
        let value = self
            .options
            .index_start
            .saturating_add(self.options.index_offset.saturating_mul(position));
        format_index(value, self.options.index_hex_display)
    }

    /// Append with the array's default options
    pub fn push(&mut self, scene: &mut Scene, value: T) -> Result<&MArrayElement> {
        self.append_elem(
            scene,
            value,
            &SquareOptions::default(),
            &TextOptions::default(),
            &TextOptions::default(),
        )
    }

    /// Append a value and build its element.
    ///
    /// The options are layered over the array's defaults. The value text and
    /// index label are always derived from `value` and the new position. The
    /// element is placed flush against the previous one in the growth
    /// direction; the first element sits at the origin.
    pub fn append_elem(
        &mut self,
        scene: &mut Scene,
        value: T,
        body: &SquareOptions,
        value_options: &TextOptions,
        index_options: &TextOptions,
    ) -> Result<&MArrayElement> {
        let position = self.mob_arr.len();
        let value_options = self
            .options
            .value
            .overlay(value_options)
            .with_text(&value);
        let index_options = self
            .options
            .index
            .overlay(index_options)
            .with_text(self.calc_index(position));

        let element = MArrayElement::with_theme(
            scene,
            &self.options.theme,
            &self.options.body.overlay(body),
            &value_options,
            &index_options,
            self.options.direction.label_side(),
        )?;

        if let Some(previous) = self.mob_arr.last() {
            // Align bodies rather than whole groups so wide labels leave no gaps
            let direction = self.options.direction.to_vec();
            let target = scene.bounds(previous.body())?.edge_point(direction);
            let align = scene.bounds(element.body())?.edge_point(-direction);
            scene.shift(element.group(), target - align)?;
        }
        scene.add_child(self.group, element.group())?;

        tracing::trace!(position, value = %value, "appended element");
        self.arr.push(value);
        self.mob_arr.push(element);
        Ok(&self.mob_arr[position])
    }

    /// Replace the value at `index` and rebuild its value text
    pub fn update_elem_value(
        &mut self,
        scene: &mut Scene,
        index: impl ElementIndex,
        value: T,
        options: &TextOptions,
    ) -> Result<MobjectId> {
        let position = self.checked(index)?;
        let options = options.clone().with_text(&value);
        let id = self.mob_arr[position].update_value(scene, &options)?;
        self.arr[position] = value;
        Ok(id)
    }

    /// Rebuild the index label at `index`; the backing list is untouched
    pub fn update_elem_index(
        &mut self,
        scene: &mut Scene,
        index: impl ElementIndex,
        label: impl Display,
        options: &TextOptions,
    ) -> Result<MobjectId> {
        let position = self.checked(index)?;
        let options = options.clone().with_text(label);
        self.mob_arr[position].update_index(scene, &options)
    }
}

impl<T> MArray<T> {
    /// Validate an element position
    pub(crate) fn checked(&self, index: impl ElementIndex) -> Result<usize> {
        let position = index.to_position();
        let len = self.mob_arr.len();
        if position < 0 || position >= len as i64 {
            return Err(StructureError::IndexOutOfBounds {
                index: position,
                len,
            });
        }
        Ok(position as usize)
    }

    /// Element at `index`
    pub fn element(&self, index: impl ElementIndex) -> Result<&MArrayElement> {
        Ok(&self.mob_arr[self.checked(index)?])
    }

    pub fn animate_elem(&self, index: impl ElementIndex) -> Result<Animator> {
        Ok(self.element(index)?.animate())
    }

    pub fn animate_elem_square(&self, index: impl ElementIndex) -> Result<Animator> {
        Ok(self.element(index)?.animate_body())
    }

    pub fn animate_elem_value(&self, index: impl ElementIndex) -> Result<Animator> {
        Ok(self.element(index)?.animate_value())
    }

    pub fn animate_elem_index(&self, index: impl ElementIndex) -> Result<Animator> {
        Ok(self.element(index)?.animate_index())
    }

    /// Backing values
    pub fn fetch_arr(&self) -> &[T] {
        &self.arr
    }

    /// Mutable access to the backing values.
    ///
    /// The length cannot change through the slice, but element visuals are not
    /// rebuilt: use [`MArray::update_elem_value`] to keep them in sync.
    pub fn fetch_arr_mut(&mut self) -> &mut [T] {
        &mut self.arr
    }

    pub fn fetch_mob_arr(&self) -> &[MArrayElement] {
        &self.mob_arr
    }

    pub fn len(&self) -> usize {
        self.arr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    /// Group holding every element
    pub fn group(&self) -> MobjectId {
        self.group
    }

    pub fn direction(&self) -> MArrayDirection {
        self.options.direction
    }

    pub fn options(&self) -> &ArrayOptions {
        &self.options
    }

    /// Union of the element bodies in `range`
    pub(crate) fn bodies_bounds(&self, scene: &Scene, range: Range<usize>) -> Result<Rect> {
        let mut acc: Option<Rect> = None;
        for element in &self.mob_arr[range.clone()] {
            let rect = scene.bounds(element.body())?;
            acc = Some(match acc {
                Some(existing) => existing.union(&rect),
                None => rect,
            });
        }
        acc.ok_or(StructureError::InvalidWindow {
            start: range.start,
            size: range.len(),
            len: self.len(),
        })
    }
}

impl<T> Animate for MArray<T> {
    fn animate(&self) -> Animator {
        self.group.animate()
    }
}
