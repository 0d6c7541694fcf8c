//! Sliding windows over arrays
//!
//! An [`MArraySlidingWindow`] is a stroked rectangle framing `size` consecutive
//! element bodies of an [`MArray`], starting at `start`.

use abacus_animation::{Animate, Animator};
use abacus_core::{Color, Mobject, MobjectId, Rect, Scene};

use crate::array::{ElementIndex, MArray};
use crate::error::{Result, StructureError};

/// Stroke width of a window frame
pub const DEFAULT_WINDOW_STROKE_WIDTH: f32 = 8.0;

/// Construction options for a sliding window
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowOptions {
    /// Frame color; the array theme's window color when unset
    pub color: Option<Color>,
    pub stroke_width: Option<f32>,
}

impl WindowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

/// Frame around a run of consecutive elements
#[derive(Clone, Debug)]
pub struct MArraySlidingWindow {
    frame: MobjectId,
    start: usize,
    size: usize,
}

impl MArraySlidingWindow {
    pub fn new<T>(
        scene: &mut Scene,
        array: &MArray<T>,
        start: impl ElementIndex,
        size: usize,
        options: WindowOptions,
    ) -> Result<Self> {
        let start = array.checked(start)?;
        let bounds = span(scene, array, start, size)?;

        let color = options.color.unwrap_or(array.options().theme.window_color);
        let frame = Mobject::rectangle(bounds.width(), bounds.height())
            .at(bounds.center())
            .with_color(color)
            .with_stroke_width(options.stroke_width.unwrap_or(DEFAULT_WINDOW_STROKE_WIDTH))
            .with_z_index(1);
        let frame = scene.insert(frame);

        tracing::trace!(?frame, start, size, "built sliding window");
        Ok(Self { frame, start, size })
    }

    pub fn frame(&self) -> MobjectId {
        self.frame
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Animator sliding the window so it starts at `index`.
    ///
    /// The tracked start changes immediately; the scene only changes when the
    /// animator is played.
    pub fn shift_to_elem<T>(
        &mut self,
        scene: &Scene,
        array: &MArray<T>,
        index: impl ElementIndex,
    ) -> Result<Animator> {
        let start = array.checked(index)?;
        let target = span(scene, array, start, self.size)?.center();
        let delta = target - scene.center(self.frame)?;

        self.start = start;
        tracing::debug!(frame = ?self.frame, start, "window moved");
        Ok(self.frame.animate().shift(delta))
    }

    /// Rebuild the frame to cover `size` elements from the current start
    pub fn resize<T>(
        &mut self,
        scene: &mut Scene,
        array: &MArray<T>,
        size: usize,
    ) -> Result<MobjectId> {
        let bounds = span(scene, array, self.start, size)?;
        let props = *scene.props(self.frame)?;

        let mut frame = Mobject::rectangle(bounds.width(), bounds.height());
        frame.props = props;
        frame.props.center = bounds.center();
        frame.props.scale = 1.0;

        self.frame = scene.replace(self.frame, frame)?;
        self.size = size;
        Ok(self.frame)
    }
}

impl Animate for MArraySlidingWindow {
    fn animate(&self) -> Animator {
        self.frame.animate()
    }
}

fn span<T>(scene: &Scene, array: &MArray<T>, start: usize, size: usize) -> Result<Rect> {
    let end = start.checked_add(size).filter(|end| size > 0 && *end <= array.len());
    match end {
        Some(end) => array.bodies_bounds(scene, start..end),
        None => Err(StructureError::InvalidWindow {
            start,
            size,
            len: array.len(),
        }),
    }
}
