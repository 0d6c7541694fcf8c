//! Array pointers
//!
//! An [`MArrayPointer`] is an arrow with a label that points at one element of
//! an [`MArray`]. It sits on the side of the array opposite the index labels:
//! below a horizontal array, to the right of a vertical one.

use std::fmt::Display;

use abacus_animation::{Animate, Animator};
use abacus_core::{Color, Mobject, MobjectId, Point, Scene, Vec2};

use crate::array::{ElementIndex, MArray};
use crate::error::Result;
use crate::options::{TextOptions, TextStyle};

/// Construction options for a pointer
#[derive(Clone, Debug, PartialEq)]
pub struct PointerOptions {
    /// Arrow color; the array theme's pointer color when unset
    pub color: Option<Color>,
    pub arrow_length: f32,
    /// Gap between the element body and the arrow tip
    pub buff: f32,
    /// Gap between the arrow tail and the label
    pub label_buff: f32,
    pub label: TextOptions,
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self {
            color: None,
            arrow_length: 0.75,
            buff: 0.25,
            label_buff: 0.1,
            label: TextOptions::default(),
        }
    }
}

impl PointerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_arrow_length(mut self, length: f32) -> Self {
        self.arrow_length = length;
        self
    }

    pub fn with_buff(mut self, buff: f32) -> Self {
        self.buff = buff;
        self
    }

    pub fn with_label_buff(mut self, buff: f32) -> Self {
        self.label_buff = buff;
        self
    }

    pub fn with_label(mut self, label: TextOptions) -> Self {
        self.label = label;
        self
    }
}

/// Arrow and label pointing at an array element
#[derive(Clone, Debug)]
pub struct MArrayPointer {
    group: MobjectId,
    arrow: MobjectId,
    label: MobjectId,
    label_style: TextStyle,
    index: usize,
    /// Direction from the element to the pointer
    side: Vec2,
    options: PointerOptions,
}

impl MArrayPointer {
    pub fn new<T>(
        scene: &mut Scene,
        array: &MArray<T>,
        index: impl ElementIndex,
        label: impl Display,
        options: PointerOptions,
    ) -> Result<Self> {
        let position = array.checked(index)?;
        let element = &array.fetch_mob_arr()[position];
        let side = array.direction().pointer_side();
        let theme = &array.options().theme;
        let color = options.color.unwrap_or(theme.pointer_color);

        let label_style = options
            .label
            .clone()
            .with_text(label)
            .merge(&TextStyle {
                color,
                ..theme.index_style()
            });

        let group = scene.insert(Mobject::group());
        // Tail away from the array, tip towards it
        let tail = Point::ORIGIN + side * options.arrow_length;
        let arrow = scene.insert_child(
            group,
            Mobject::arrow(tail, Point::ORIGIN).with_color(color),
        )?;
        let label = scene.insert_child(group, label_style.to_mobject())?;

        scene.next_to(arrow, element.body(), side, options.buff)?;
        scene.next_to(label, arrow, side, options.label_buff)?;

        tracing::trace!(?group, index = position, "built pointer");
        Ok(Self {
            group,
            arrow,
            label,
            label_style,
            index: position,
            side,
            options,
        })
    }

    /// Index of the element currently pointed at
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn group(&self) -> MobjectId {
        self.group
    }

    pub fn arrow(&self) -> MobjectId {
        self.arrow
    }

    pub fn label(&self) -> MobjectId {
        self.label
    }

    pub fn label_text(&self) -> &str {
        &self.label_style.text
    }

    /// Animator that moves the pointer to the element at `index`.
    ///
    /// The tracked index changes immediately; the scene only changes when the
    /// animator is played.
    pub fn shift_to_elem<T>(
        &mut self,
        scene: &Scene,
        array: &MArray<T>,
        index: impl ElementIndex,
    ) -> Result<Animator> {
        let position = array.checked(index)?;
        let element = &array.fetch_mob_arr()[position];
        let side = self.side;

        let target =
            scene.bounds(element.body())?.edge_point(side) + side * self.options.buff;
        let tip = scene.bounds(self.arrow)?.edge_point(-side);

        self.index = position;
        tracing::debug!(group = ?self.group, index = self.index, "pointer moved");
        Ok(self.group.animate().shift(target - tip))
    }

    /// Rebuild the label with new text, keeping its style
    pub fn update_label(&mut self, scene: &mut Scene, label: impl Display) -> Result<MobjectId> {
        let style = TextOptions::text(label).merge(&self.label_style);
        self.label = scene.replace(self.label, style.to_mobject())?;
        self.label_style = style;
        scene.next_to(self.label, self.arrow, self.side, self.options.label_buff)?;
        Ok(self.label)
    }
}

impl Animate for MArrayPointer {
    fn animate(&self) -> Animator {
        self.group.animate()
    }
}
