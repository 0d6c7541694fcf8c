//! Array elements
//!
//! An [`MArrayElement`] is one labelled cell: a square body, the value text
//! centred on it and an index label beside it. All three parts live under one
//! group mobject, so moving the group moves the whole cell.

use abacus_animation::{Animate, Animator};
use abacus_core::{Mobject, MobjectId, Scene, Vec2};

use crate::error::Result;
use crate::options::{SquareOptions, SquareStyle, TextOptions, TextStyle};
use crate::theme::Theme;

/// A single labelled cell
#[derive(Clone, Debug)]
pub struct MArrayElement {
    group: MobjectId,
    body: MobjectId,
    value: MobjectId,
    index: MobjectId,
    body_style: SquareStyle,
    value_style: TextStyle,
    index_style: TextStyle,
    label_side: Vec2,
    index_buff: f32,
}

impl MArrayElement {
    /// Build a cell with the default theme and the index label above the body
    pub fn new(
        scene: &mut Scene,
        body: &SquareOptions,
        value: &TextOptions,
        index: &TextOptions,
    ) -> Result<Self> {
        Self::with_theme(scene, &Theme::default(), body, value, index, Vec2::UP)
    }

    /// Build a cell whose options are merged over the theme's styles.
    ///
    /// `label_side` is the side of the body the index label is placed on.
    pub fn with_theme(
        scene: &mut Scene,
        theme: &Theme,
        body: &SquareOptions,
        value: &TextOptions,
        index: &TextOptions,
        label_side: Vec2,
    ) -> Result<Self> {
        let body_style = body.merge(&theme.body_style());
        let value_style = value.merge(&theme.value_style());
        let index_style = index.merge(&theme.index_style());

        let group = scene.insert(Mobject::group());
        let body = scene.insert_child(group, body_style.to_mobject())?;
        let value = scene.insert_child(group, value_style.to_mobject())?;
        let index = scene.insert_child(group, index_style.to_mobject())?;

        let element = Self {
            group,
            body,
            value,
            index,
            body_style,
            value_style,
            index_style,
            label_side,
            index_buff: theme.index_buff,
        };
        element.place_value(scene)?;
        element.place_index(scene)?;

        tracing::trace!(
            ?group,
            value = %element.value_style.text,
            index = %element.index_style.text,
            "built array element"
        );
        Ok(element)
    }

    fn place_value(&self, scene: &mut Scene) -> Result<()> {
        scene.next_to(self.value, self.body, Vec2::ZERO, 0.0)?;
        Ok(())
    }

    fn place_index(&self, scene: &mut Scene) -> Result<()> {
        scene.next_to(self.index, self.body, self.label_side, self.index_buff)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Parts
    // ─────────────────────────────────────────────────────────────────────────

    /// Group holding the body, value and index
    pub fn group(&self) -> MobjectId {
        self.group
    }

    pub fn body(&self) -> MobjectId {
        self.body
    }

    pub fn value(&self) -> MobjectId {
        self.value
    }

    pub fn index(&self) -> MobjectId {
        self.index
    }

    pub fn value_text(&self) -> &str {
        &self.value_style.text
    }

    pub fn index_text(&self) -> &str {
        &self.index_style.text
    }

    pub fn body_style(&self) -> &SquareStyle {
        &self.body_style
    }

    pub fn value_style(&self) -> &TextStyle {
        &self.value_style
    }

    pub fn index_style(&self) -> &TextStyle {
        &self.index_style
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Updates
    // ─────────────────────────────────────────────────────────────────────────

    /// Rebuild the value text with `options` merged over its current style.
    ///
    /// The old text mobject is removed from the scene; the returned handle
    /// refers to its replacement.
    pub fn update_value(&mut self, scene: &mut Scene, options: &TextOptions) -> Result<MobjectId> {
        let style = options.merge(&self.value_style);
        self.value = scene.replace(self.value, style.to_mobject())?;
        self.value_style = style;
        self.place_value(scene)?;
        Ok(self.value)
    }

    /// Rebuild the index label with `options` merged over its current style
    pub fn update_index(&mut self, scene: &mut Scene, options: &TextOptions) -> Result<MobjectId> {
        let style = options.merge(&self.index_style);
        self.index = scene.replace(self.index, style.to_mobject())?;
        self.index_style = style;
        self.place_index(scene)?;
        Ok(self.index)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn animate_body(&self) -> Animator {
        self.body.animate()
    }

    pub fn animate_value(&self) -> Animator {
        self.value.animate()
    }

    pub fn animate_index(&self) -> Animator {
        self.index.animate()
    }
}

impl Animate for MArrayElement {
    fn animate(&self) -> Animator {
        self.group.animate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StructureError;
    use abacus_core::{Color, CoreError, FontWeight, Point};
    use pretty_assertions::assert_eq;

    fn element(scene: &mut Scene, value: &str, index: &str) -> MArrayElement {
        MArrayElement::new(
            scene,
            &SquareOptions::new(),
            &TextOptions::text(value),
            &TextOptions::text(index),
        )
        .unwrap()
    }

    #[test]
    fn test_parts_are_grouped() {
        let mut scene = Scene::new();
        let cell = element(&mut scene, "7", "0");

        assert_eq!(
            scene.children(cell.group()).unwrap(),
            &[cell.body(), cell.value(), cell.index()]
        );
        assert_eq!(scene.text(cell.value()), Some("7"));
        assert_eq!(scene.text(cell.index()), Some("0"));
    }

    #[test]
    fn test_default_styles() {
        let mut scene = Scene::new();
        let cell = element(&mut scene, "7", "0");

        let body = scene.props(cell.body()).unwrap();
        assert_eq!(body.color, Color::BLUE_B);
        assert_eq!(body.fill_color, Color::BLUE_D);
        assert_eq!(body.fill_opacity, 1.0);
        assert_eq!(cell.value_style().weight, FontWeight::Bold);
        assert_eq!(cell.value_style().color, Color::WHITE);
        assert_eq!(cell.index_style().color, Color::BLUE_D);
        assert_eq!(cell.index_style().font_size, 32.0);
    }

    #[test]
    fn test_layout() {
        let mut scene = Scene::new();
        let cell = element(&mut scene, "7", "0");

        assert_eq!(scene.center(cell.body()).unwrap(), Point::ORIGIN);
        assert_eq!(scene.center(cell.value()).unwrap(), Point::ORIGIN);

        let body = scene.bounds(cell.body()).unwrap();
        let index = scene.bounds(cell.index()).unwrap();
        assert!((index.min_y() - (body.max_y() + 0.25)).abs() < 1e-5);
        assert!(index.center().x.abs() < 1e-6);
    }

    #[test]
    fn test_update_value_keeps_style_and_position() {
        let mut scene = Scene::new();
        let mut cell = element(&mut scene, "7", "0");
        scene.shift(cell.group(), Vec2::RIGHT * 3.0).unwrap();
        let old = cell.value();

        let new = cell
            .update_value(&mut scene, &TextOptions::text("12").with_color(Color::RED))
            .unwrap();

        assert!(!scene.contains(old));
        assert_eq!(cell.value(), new);
        assert_eq!(cell.value_text(), "12");
        assert_eq!(cell.value_style().weight, FontWeight::Bold);
        assert_eq!(scene.props(new).unwrap().color, Color::RED);
        assert_eq!(scene.props(new).unwrap().center, Point::new(3.0, 0.0));
        assert_eq!(scene.children(cell.group()).unwrap()[1], new);

        // Later updates start from the merged style
        cell.update_value(&mut scene, &TextOptions::text("13")).unwrap();
        assert_eq!(cell.value_style().color, Color::RED);
    }

    #[test]
    fn test_update_index_leaves_value_alone() {
        let mut scene = Scene::new();
        let mut cell = element(&mut scene, "7", "0");
        let value = cell.value();

        cell.update_index(&mut scene, &TextOptions::text("i")).unwrap();

        assert_eq!(cell.index_text(), "i");
        assert_eq!(cell.value(), value);
        assert_eq!(scene.text(cell.index()), Some("i"));
    }

    #[test]
    fn test_animators_target_each_part() {
        let mut scene = Scene::new();
        let cell = element(&mut scene, "7", "0");

        assert_eq!(cell.animate().target(), cell.group());
        assert_eq!(cell.animate_body().target(), cell.body());
        assert_eq!(cell.animate_value().target(), cell.value());
        assert_eq!(cell.animate_index().target(), cell.index());
    }

    #[test]
    fn test_update_after_scene_removal_is_a_core_error() {
        let mut scene = Scene::new();
        let mut cell = element(&mut scene, "7", "0");
        scene.remove_subtree(cell.group()).unwrap();

        let err = cell
            .update_value(&mut scene, &TextOptions::text("8"))
            .unwrap_err();
        assert!(matches!(
            err,
            StructureError::Core(CoreError::UnknownMobject(id)) if id == cell.value()
        ));
        assert_eq!(cell.value_text(), "7");
    }
}
