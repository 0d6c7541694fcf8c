//! Theme configuration
//!
//! A theme holds the style overrides shared by every structure built from it.
//! Themes load from TOML; every section and key is optional:
//!
//! ```toml
//! index_buff = 0.3
//! pointer_color = "#FC6255"
//!
//! [body]
//! fill_color = "#83C167"
//! side_length = 1.2
//!
//! [value]
//! font_size = 40.0
//! weight = "normal"
//!
//! [index]
//! color = "#888888"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use abacus_core::Color;

use crate::error::Result;
use crate::options::{SquareOptions, SquareStyle, TextOptions, TextStyle};

/// Gap between an element body and its index label
pub const DEFAULT_INDEX_BUFF: f32 = 0.25;

/// Shared styling for structures
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    #[serde(default = "default_index_buff")]
    pub index_buff: f32,
    #[serde(default = "default_pointer_color")]
    pub pointer_color: Color,
    #[serde(default = "default_window_color")]
    pub window_color: Color,
    #[serde(default)]
    pub body: SquareOptions,
    #[serde(default)]
    pub value: TextOptions,
    #[serde(default)]
    pub index: TextOptions,
}

fn default_index_buff() -> f32 {
    DEFAULT_INDEX_BUFF
}

fn default_pointer_color() -> Color {
    Color::YELLOW
}

fn default_window_color() -> Color {
    Color::GOLD
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            index_buff: default_index_buff(),
            pointer_color: default_pointer_color(),
            window_color: default_window_color(),
            body: SquareOptions::default(),
            value: TextOptions::default(),
            index: TextOptions::default(),
        }
    }
}

impl Theme {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let theme = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded theme");
        Ok(theme)
    }

    /// A fresh body style with the theme applied
    pub fn body_style(&self) -> SquareStyle {
        self.body.merge(&SquareStyle::default())
    }

    /// A fresh value style with the theme applied
    pub fn value_style(&self) -> TextStyle {
        self.value.merge(&TextStyle::value_default())
    }

    /// A fresh index style with the theme applied
    pub fn index_style(&self) -> TextStyle {
        self.index.merge(&TextStyle::index_default())
    }
}
