//! Display lists
//!
//! A display list is the flattened, paint-ordered form of the visible scene.
//! Renderers and recorders consume it; tests use it to inspect what a frame
//! would show.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::mobject::FontWeight;
use crate::scene::MobjectId;

/// One paint operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        id: MobjectId,
        bounds: Rect,
        stroke: Color,
        stroke_width: f32,
        /// Fill with opacity already folded into alpha
        fill: Color,
    },
    Text {
        id: MobjectId,
        content: String,
        /// Centre of the text block
        position: Point,
        /// Font size after scaling
        font_size: f32,
        weight: FontWeight,
        color: Color,
    },
    Arrow {
        id: MobjectId,
        start: Point,
        end: Point,
        color: Color,
        stroke_width: f32,
        tip_length: f32,
    },
}

impl DrawCommand {
    pub fn id(&self) -> MobjectId {
        match self {
            DrawCommand::Rect { id, .. }
            | DrawCommand::Text { id, .. }
            | DrawCommand::Arrow { id, .. } => *id,
        }
    }
}

/// Paint-ordered commands for one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text contents in paint order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Find the command painted for a mobject
    pub fn find(&self, id: MobjectId) -> Option<&DrawCommand> {
        self.commands.iter().find(|command| command.id() == id)
    }

    pub(crate) fn sort_by_z(&mut self, z_of: impl Fn(MobjectId) -> i32) {
        // Stable: equal z keeps tree order
        self.commands.sort_by_key(|command| z_of(command.id()));
    }
}
