//! Style options for element parts
//!
//! Every part of an element (body square, value text, index text) is described
//! by a fully resolved *style* and configured through *options*: the same set
//! of fields, each optional. Options are merged over a style to produce a new
//! style, so callers only spell out what they want to change.
//!
//! ```rust
//! use abacus_core::{Color, FontWeight};
//! use abacus_structures::{TextOptions, TextStyle};
//!
//! let style = TextOptions::text(42)
//!     .with_color(Color::RED)
//!     .merge(&TextStyle::value_default());
//!
//! assert_eq!(style.text, "42");
//! assert_eq!(style.color, Color::RED);
//! assert_eq!(style.weight, FontWeight::Bold);
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use abacus_core::{Color, FontWeight, Mobject};

/// Default side length of an element body
pub const DEFAULT_SIDE_LENGTH: f32 = 1.0;
/// Default font size of value text
pub const DEFAULT_VALUE_FONT_SIZE: f32 = 48.0;
/// Default font size of index text
pub const DEFAULT_INDEX_FONT_SIZE: f32 = 32.0;
/// Default stroke width of an element body
pub const DEFAULT_STROKE_WIDTH: f32 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Resolved styles
// ─────────────────────────────────────────────────────────────────────────────

/// Resolved style of an element body
#[derive(Clone, Debug, PartialEq)]
pub struct SquareStyle {
    pub color: Color,
    pub fill_color: Color,
    pub fill_opacity: f32,
    pub side_length: f32,
    pub stroke_width: f32,
}

impl Default for SquareStyle {
    fn default() -> Self {
        Self {
            color: Color::BLUE_B,
            fill_color: Color::BLUE_D,
            fill_opacity: 1.0,
            side_length: DEFAULT_SIDE_LENGTH,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl SquareStyle {
    pub fn to_mobject(&self) -> Mobject {
        Mobject::square(self.side_length)
            .with_color(self.color)
            .with_fill(self.fill_color, self.fill_opacity)
            .with_stroke_width(self.stroke_width)
    }
}

/// Resolved style of a text part
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub text: String,
    pub color: Color,
    pub weight: FontWeight,
    pub font_size: f32,
}

impl TextStyle {
    /// Style of the text shown inside an element body
    pub fn value_default() -> Self {
        Self {
            text: String::new(),
            color: Color::WHITE,
            weight: FontWeight::Bold,
            font_size: DEFAULT_VALUE_FONT_SIZE,
        }
    }

    /// Style of the index label next to an element body
    pub fn index_default() -> Self {
        Self {
            text: String::new(),
            color: Color::BLUE_D,
            weight: FontWeight::Normal,
            font_size: DEFAULT_INDEX_FONT_SIZE,
        }
    }

    pub fn to_mobject(&self) -> Mobject {
        Mobject::text(self.text.clone())
            .with_color(self.color)
            .with_weight(self.weight)
            .with_font_size(self.font_size)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// Overrides for an element body
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SquareOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_length: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
}

impl SquareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    pub fn with_side_length(mut self, side_length: f32) -> Self {
        self.side_length = Some(side_length);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Fields set here win over `base`
    pub fn merge(&self, base: &SquareStyle) -> SquareStyle {
        SquareStyle {
            color: self.color.unwrap_or(base.color),
            fill_color: self.fill_color.unwrap_or(base.fill_color),
            fill_opacity: self.fill_opacity.unwrap_or(base.fill_opacity),
            side_length: self.side_length.unwrap_or(base.side_length),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
        }
    }

    /// Layer `other` on top of these options
    pub fn overlay(&self, other: &SquareOptions) -> SquareOptions {
        SquareOptions {
            color: other.color.or(self.color),
            fill_color: other.fill_color.or(self.fill_color),
            fill_opacity: other.fill_opacity.or(self.fill_opacity),
            side_length: other.side_length.or(self.side_length),
            stroke_width: other.stroke_width.or(self.stroke_width),
        }
    }
}

/// Overrides for a text part
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextOptions {
    /// Content is always supplied by the owning structure, never by a theme
    #[serde(skip)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that only set the content, rendered with `Display`
    pub fn text(value: impl Display) -> Self {
        Self::new().with_text(value)
    }

    /// Set the content from the value's `Display` output.
    ///
    /// Whole floats render without a fractional part (`1.0` becomes `"1"`);
    /// pass `format!("{:?}", x)` to keep it.
    pub fn with_text(mut self, value: impl Display) -> Self {
        self.text = Some(value.to_string());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Fields set here win over `base`
    pub fn merge(&self, base: &TextStyle) -> TextStyle {
        TextStyle {
            text: self.text.clone().unwrap_or_else(|| base.text.clone()),
            color: self.color.unwrap_or(base.color),
            weight: self.weight.unwrap_or(base.weight),
            font_size: self.font_size.unwrap_or(base.font_size),
        }
    }

    /// Layer `other` on top of these options
    pub fn overlay(&self, other: &TextOptions) -> TextOptions {
        TextOptions {
            text: other.text.clone().or_else(|| self.text.clone()),
            color: other.color.or(self.color),
            weight: other.weight.or(self.weight),
            font_size: other.font_size.or(self.font_size),
        }
    }
}
