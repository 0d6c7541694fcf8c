//! Animation builders
//!
//! An [`Animator`] is a capability handle for one mobject: it records the
//! property changes a caller wants to see animated, without touching the scene.
//! Nothing happens until the animator is built against a scene (which snapshots
//! the start state) and the resulting [`Animation`] is played.
//!
//! ```rust
//! use abacus_animation::{Animate, Easing};
//! use abacus_core::{Color, Mobject, Scene, Vec2};
//!
//! let mut scene = Scene::new();
//! let square = scene.insert(Mobject::square(1.0));
//!
//! let animation = square
//!     .animate()
//!     .shift(Vec2::RIGHT * 2.0)
//!     .set_color(Color::YELLOW)
//!     .run_time(500)
//!     .easing(Easing::Linear)
//!     .build(&scene)
//!     .unwrap();
//!
//! animation.apply(&mut scene, 0.5).unwrap();
//! assert_eq!(scene.center(square).unwrap().x, 1.0);
//! ```

use abacus_core::{Color, MobjectId, Point, Scene, Vec2};

use crate::animation::{Animation, Track};
use crate::easing::Easing;
use crate::error::Result;

/// Default run time of an animation, in milliseconds
pub const DEFAULT_RUN_TIME_MS: u32 = 1000;

/// A declared change to a mobject subtree
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyChange {
    Shift(Vec2),
    MoveTo(Point),
    Scale(f32),
    SetColor(Color),
    SetFillColor(Color),
    SetFillOpacity(f32),
    SetOpacity(f32),
}

/// Animation-builder proxy for a single mobject
#[derive(Clone, Debug, PartialEq)]
pub struct Animator {
    target: MobjectId,
    changes: Vec<PropertyChange>,
    run_time_ms: u32,
    easing: Easing,
}

impl Animator {
    pub fn new(target: MobjectId) -> Self {
        Self {
            target,
            changes: Vec::new(),
            run_time_ms: DEFAULT_RUN_TIME_MS,
            easing: Easing::default(),
        }
    }

    pub fn target(&self) -> MobjectId {
        self.target
    }

    pub fn changes(&self) -> &[PropertyChange] {
        &self.changes
    }

    pub fn run_time_ms(&self) -> u32 {
        self.run_time_ms
    }

    pub fn easing_curve(&self) -> Easing {
        self.easing
    }

    fn push(mut self, change: PropertyChange) -> Self {
        self.changes.push(change);
        self
    }

    /// Move by a delta
    pub fn shift(self, delta: Vec2) -> Self {
        self.push(PropertyChange::Shift(delta))
    }

    /// Move so the bounding-box centre ends at `point`
    pub fn move_to(self, point: Point) -> Self {
        self.push(PropertyChange::MoveTo(point))
    }

    /// Scale about the bounding-box centre
    pub fn scale(self, factor: f32) -> Self {
        self.push(PropertyChange::Scale(factor))
    }

    pub fn set_color(self, color: Color) -> Self {
        self.push(PropertyChange::SetColor(color))
    }

    pub fn set_fill_color(self, color: Color) -> Self {
        self.push(PropertyChange::SetFillColor(color))
    }

    pub fn set_fill_opacity(self, opacity: f32) -> Self {
        self.push(PropertyChange::SetFillOpacity(opacity))
    }

    pub fn set_opacity(self, opacity: f32) -> Self {
        self.push(PropertyChange::SetOpacity(opacity))
    }

    /// Builder: set run time in milliseconds
    pub fn run_time(mut self, ms: u32) -> Self {
        self.run_time_ms = ms;
        self
    }

    /// Builder: set easing
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Apply the declared changes immediately, without animating
    pub fn apply_to(&self, scene: &mut Scene) -> Result<()> {
        for change in &self.changes {
            match *change {
                PropertyChange::Shift(delta) => scene.shift(self.target, delta)?,
                PropertyChange::MoveTo(point) => scene.move_to(self.target, point)?,
                PropertyChange::Scale(factor) => scene.scale(self.target, factor)?,
                PropertyChange::SetColor(color) => scene.set_color(self.target, color)?,
                PropertyChange::SetFillColor(color) => scene.set_fill(self.target, color, None)?,
                PropertyChange::SetFillOpacity(opacity) => {
                    scene.set_fill_opacity(self.target, opacity)?
                }
                PropertyChange::SetOpacity(opacity) => scene.set_opacity(self.target, opacity)?,
            }
        }
        Ok(())
    }

    /// Snapshot the current state and the declared end state.
    ///
    /// The scene is not modified; changes are applied to a scratch copy.
    pub fn build(&self, scene: &Scene) -> Result<Animation> {
        let nodes = scene.descendants(self.target)?;

        let mut scratch = scene.clone();
        self.apply_to(&mut scratch)?;

        let mut tracks = Vec::with_capacity(nodes.len());
        for node in nodes {
            tracks.push(Track {
                id: node,
                start: *scene.props(node)?,
                end: *scratch.props(node)?,
            });
        }

        tracing::trace!(
            target_id = ?self.target,
            changes = self.changes.len(),
            run_time_ms = self.run_time_ms,
            "built animation"
        );
        Ok(Animation::new(
            self.target,
            tracks,
            self.run_time_ms,
            self.easing,
        ))
    }
}

/// Anything that owns a visual and can hand out an animator for it
pub trait Animate {
    fn animate(&self) -> Animator;
}

impl Animate for MobjectId {
    fn animate(&self) -> Animator {
        Animator::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::Mobject;

    #[test]
    fn test_creating_animator_has_no_side_effects() {
        let mut scene = Scene::new();
        let square = scene.insert(Mobject::square(1.0));
        let before = *scene.props(square).unwrap();

        let animator = square.animate().shift(Vec2::UP).set_color(Color::RED);
        animator.build(&scene).unwrap();

        assert_eq!(*scene.props(square).unwrap(), before);
        assert_eq!(animator.changes().len(), 2);
    }

    #[test]
    fn test_apply_to_runs_changes_in_order() {
        let mut scene = Scene::new();
        let square = scene.insert(Mobject::square(1.0));

        square
            .animate()
            .move_to(Point::new(2.0, 2.0))
            .shift(Vec2::LEFT)
            .scale(2.0)
            .apply_to(&mut scene)
            .unwrap();

        let props = scene.props(square).unwrap();
        assert_eq!(props.center, Point::new(1.0, 2.0));
        assert_eq!(props.scale, 2.0);
    }

    #[test]
    fn test_defaults() {
        let mut scene = Scene::new();
        let id = scene.insert(Mobject::square(1.0));
        let animator = id.animate();
        assert_eq!(animator.run_time_ms(), DEFAULT_RUN_TIME_MS);
        assert_eq!(animator.easing_curve(), Easing::Smooth);
        assert_eq!(animator.target(), id);
    }
}
