//! Variables
//!
//! An [`MVariable`] is a single cell whose label slot holds the variable name
//! instead of an index.

use std::fmt::Display;

use abacus_animation::{Animate, Animator};
use abacus_core::{MobjectId, Scene, Vec2};

use crate::element::MArrayElement;
use crate::error::Result;
use crate::options::{SquareOptions, TextOptions};
use crate::theme::Theme;

/// Construction options for a variable
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableOptions {
    pub theme: Theme,
    pub body: SquareOptions,
    pub value: TextOptions,
    pub label: TextOptions,
}

impl VariableOptions {
    pub fn new() -> Self {
        Self::default()
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

    pub fn with_label(mut self, label: TextOptions) -> Self {
        self.label = label;
        self
    }
}

/// A named value shown as one labelled cell
#[derive(Clone, Debug)]
pub struct MVariable<T> {
    value: T,
    element: MArrayElement,
}

impl<T: Display> MVariable<T> {
    pub fn new(
        scene: &mut Scene,
        value: T,
        label: impl Display,
        options: VariableOptions,
    ) -> Result<Self> {
        let value_options = options.value.with_text(&value);
        let label_options = options.label.with_text(label);
        let element = MArrayElement::with_theme(
            scene,
            &options.theme,
            &options.body,
            &value_options,
            &label_options,
            Vec2::UP,
        )?;
        Ok(Self { value, element })
    }

    /// Store a new value and rebuild the value text
    pub fn update_value(&mut self, scene: &mut Scene, value: T) -> Result<MobjectId> {
        let id = self
            .element
            .update_value(scene, &TextOptions::text(&value))?;
        self.value = value;
        Ok(id)
    }

    pub fn update_label(&mut self, scene: &mut Scene, label: impl Display) -> Result<MobjectId> {
        self.element.update_index(scene, &TextOptions::text(label))
    }
}

impl<T> MVariable<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn element(&self) -> &MArrayElement {
        &self.element
    }

    pub fn label_text(&self) -> &str {
        self.element.index_text()
    }

    pub fn group(&self) -> MobjectId {
        self.element.group()
    }
}

impl<T> Animate for MVariable<T> {
    fn animate(&self) -> Animator {
        self.element.animate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variable_shows_value_and_name() {
        let mut scene = Scene::new();
        let var = MVariable::new(&mut scene, 3.5, "x", VariableOptions::new()).unwrap();

        assert_eq!(scene.text(var.element().value()), Some("3.5"));
        assert_eq!(var.label_text(), "x");
        assert_eq!(*var.value(), 3.5);
    }

    #[test]
    fn test_update_value_and_label() {
        let mut scene = Scene::new();
        let mut var = MVariable::new(
            &mut scene,
            1,
            "count",
            VariableOptions::new().with_value(TextOptions::new().with_color(Color::GREEN)),
        )
        .unwrap();

        let id = var.update_value(&mut scene, 2).unwrap();
        assert_eq!(scene.text(id), Some("2"));
        assert_eq!(scene.props(id).unwrap().color, Color::GREEN);
        assert_eq!(*var.value(), 2);

        var.update_label(&mut scene, "total").unwrap();
        assert_eq!(var.label_text(), "total");
        assert_eq!(var.animate().target(), var.group());
    }
}
