//! Mathematical objects: the visual primitives held by a [`Scene`](crate::Scene)
//!
//! A mobject is one of:
//!
//! - **Rectangle**: filled, stroked box (squares are rectangles with equal sides)
//! - **Text**: a single or multi-line label
//! - **Arrow**: a straight arrow between two points
//! - **Group**: no geometry of its own; its bounds are the union of its children
//!
//! Text has no font backend. Its extent is estimated from the character count
//! and font size, which keeps layout deterministic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::Color;
use crate::geometry::{Point, Rect, Size, Vec2};
use crate::scene::MobjectId;

/// Font size that maps to one scene unit per em
pub const FONT_SIZE_PER_UNIT: f32 = 96.0;
/// Horizontal advance of one character, in ems
pub const TEXT_ADVANCE_EM: f32 = 0.6;
/// Height of one line of text, in ems
pub const TEXT_HEIGHT_EM: f32 = 0.7;
/// Default text size, matching the common 48pt label
pub const DEFAULT_FONT_SIZE: f32 = 48.0;

/// Text weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Geometry of a mobject
#[derive(Clone, Debug, PartialEq)]
pub enum MobjectKind {
    Rectangle {
        width: f32,
        height: f32,
    },
    Text {
        content: String,
        weight: FontWeight,
        font_size: f32,
    },
    /// Endpoints are relative to the arrow's centre
    Arrow {
        start: Vec2,
        end: Vec2,
        tip_length: f32,
    },
    Group,
}

/// Animatable properties shared by every mobject
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobjectProps {
    /// Centre of the mobject's own geometry
    pub center: Point,
    /// Uniform scale applied to the intrinsic size
    pub scale: f32,
    /// Stroke color for shapes, glyph color for text
    pub color: Color,
    pub fill_color: Color,
    pub fill_opacity: f32,
    /// Overall opacity multiplier
    pub opacity: f32,
    pub stroke_width: f32,
    /// Paint order; higher is drawn later
    pub z_index: i32,
}

impl Default for MobjectProps {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            scale: 1.0,
            color: Color::WHITE,
            fill_color: Color::TRANSPARENT,
            fill_opacity: 0.0,
            opacity: 1.0,
            stroke_width: 4.0,
            z_index: 0,
        }
    }
}

impl MobjectProps {
    /// Interpolate every property; `z_index` switches at the midpoint
    pub fn lerp(from: &MobjectProps, to: &MobjectProps, t: f32) -> MobjectProps {
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        MobjectProps {
            center: Point::lerp(from.center, to.center, t),
            scale: mix(from.scale, to.scale),
            color: Color::lerp(&from.color, &to.color, t),
            fill_color: Color::lerp(&from.fill_color, &to.fill_color, t),
            fill_opacity: mix(from.fill_opacity, to.fill_opacity),
            opacity: mix(from.opacity, to.opacity),
            stroke_width: mix(from.stroke_width, to.stroke_width),
            z_index: if t < 0.5 { from.z_index } else { to.z_index },
        }
    }
}

/// A node in the scene graph
#[derive(Clone, Debug)]
pub struct Mobject {
    pub kind: MobjectKind,
    pub props: MobjectProps,
    pub(crate) parent: Option<MobjectId>,
    pub(crate) children: SmallVec<[MobjectId; 4]>,
}

impl Mobject {
    fn with_kind(kind: MobjectKind) -> Self {
        Self {
            kind,
            props: MobjectProps::default(),
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn rectangle(width: f32, height: f32) -> Self {
        Self::with_kind(MobjectKind::Rectangle { width, height })
    }

    pub fn square(side_length: f32) -> Self {
        Self::rectangle(side_length, side_length)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::with_kind(MobjectKind::Text {
            content: content.into(),
            weight: FontWeight::Normal,
            font_size: DEFAULT_FONT_SIZE,
        })
    }

    /// Arrow from `start` to `end`, positioned at their midpoint
    pub fn arrow(start: Point, end: Point) -> Self {
        let center = Point::lerp(start, end, 0.5);
        let mut arrow = Self::with_kind(MobjectKind::Arrow {
            start: start - center,
            end: end - center,
            tip_length: 0.25,
        });
        arrow.props.center = center;
        arrow
    }

    pub fn group() -> Self {
        Self::with_kind(MobjectKind::Group)
    }

    // Builders

    pub fn at(mut self, center: Point) -> Self {
        self.props.center = center;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.props.color = color;
        self
    }

    pub fn with_fill(mut self, color: Color, opacity: f32) -> Self {
        self.props.fill_color = color;
        self.props.fill_opacity = opacity;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.props.stroke_width = width;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.props.z_index = z_index;
        self
    }

    /// Set the font size; ignored for non-text mobjects
    pub fn with_font_size(mut self, size: f32) -> Self {
        if let MobjectKind::Text { font_size, .. } = &mut self.kind {
            *font_size = size;
        }
        self
    }

    /// Set the font weight; ignored for non-text mobjects
    pub fn with_weight(mut self, value: FontWeight) -> Self {
        if let MobjectKind::Text { weight, .. } = &mut self.kind {
            *weight = value;
        }
        self
    }

    // Accessors

    pub fn parent(&self) -> Option<MobjectId> {
        self.parent
    }

    pub fn children(&self) -> &[MobjectId] {
        &self.children
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, MobjectKind::Group)
    }

    /// Text content, if this is a text mobject
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            MobjectKind::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Size before `props.scale` is applied
    pub fn intrinsic_size(&self) -> Size {
        match &self.kind {
            MobjectKind::Rectangle { width, height } => Size::new(*width, *height),
            MobjectKind::Text {
                content, font_size, ..
            } => text_extent(content, *font_size),
            MobjectKind::Arrow {
                start,
                end,
                tip_length,
            } => Size::new(
                (end.x - start.x).abs().max(*tip_length),
                (end.y - start.y).abs().max(*tip_length),
            ),
            MobjectKind::Group => Size::ZERO,
        }
    }

    /// Bounds of this mobject's own geometry; `None` for groups
    pub fn own_bounds(&self) -> Option<Rect> {
        if self.is_group() {
            return None;
        }
        let size = self.intrinsic_size();
        Some(Rect::centered(
            self.props.center,
            Size::new(size.width * self.props.scale, size.height * self.props.scale),
        ))
    }
}

/// Estimated extent of a text block at the given font size
pub fn text_extent(content: &str, font_size: f32) -> Size {
    if content.is_empty() {
        return Size::ZERO;
    }
    let em = font_size / FONT_SIZE_PER_UNIT;
    let lines = content.lines().count().max(1);
    let widest = content
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    Size::new(
        widest as f32 * TEXT_ADVANCE_EM * em,
        lines as f32 * TEXT_HEIGHT_EM * em,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_extent_scales_with_font_size() {
        let small = text_extent("10", 48.0);
        let large = text_extent("10", 96.0);
        assert!((small.width - 0.6).abs() < 1e-6);
        assert!((large.width - 2.0 * small.width).abs() < 1e-6);
        assert_eq!(text_extent("", 48.0), Size::ZERO);
    }

    #[test]
    fn test_multiline_text_extent() {
        let size = text_extent("ab\nlonger", 96.0);
        assert!((size.width - 6.0 * TEXT_ADVANCE_EM).abs() < 1e-6);
        assert!((size.height - 2.0 * TEXT_HEIGHT_EM).abs() < 1e-6);
    }

    #[test]
    fn test_own_bounds_applies_scale() {
        let mut square = Mobject::square(2.0).at(Point::new(1.0, 1.0));
        square.props.scale = 0.5;
        assert_eq!(square.own_bounds(), Some(Rect::new(0.5, 0.5, 1.0, 1.0)));
        assert_eq!(Mobject::group().own_bounds(), None);
    }

    #[test]
    fn test_builders_only_touch_text() {
        let text = Mobject::text("x")
            .with_font_size(32.0)
            .with_weight(FontWeight::Bold);
        assert_eq!(
            text.kind,
            MobjectKind::Text {
                content: "x".into(),
                weight: FontWeight::Bold,
                font_size: 32.0,
            }
        );

        let square = Mobject::square(1.0).with_font_size(10.0);
        assert_eq!(
            square.kind,
            MobjectKind::Rectangle {
                width: 1.0,
                height: 1.0
            }
        );
    }

    #[test]
    fn test_props_lerp() {
        let from = MobjectProps::default();
        let to = MobjectProps {
            center: Point::new(2.0, 0.0),
            opacity: 0.0,
            z_index: 3,
            ..from
        };
        let mid = MobjectProps::lerp(&from, &to, 0.5);
        assert_eq!(mid.center, Point::new(1.0, 0.0));
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.z_index, 3);
    }
}
