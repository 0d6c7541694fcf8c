//! Animation presets for common structure effects
//!
//! Pre-built animators for the effects data-structure walkthroughs use most:
//! fading, indicating a cell, and highlighting a cell body.

use abacus_core::{Color, MobjectId, Scene};

use crate::animator::{Animate, Animator};
use crate::easing::Easing;
use crate::error::Result;

/// Pre-built animation presets
pub struct AnimationPreset;

impl AnimationPreset {
    /// Make the subtree transparent first, then animate it back to opaque
    pub fn fade_in(scene: &mut Scene, id: MobjectId, duration_ms: u32) -> Result<Animator> {
        scene.set_opacity(id, 0.0)?;
        Ok(id
            .animate()
            .set_opacity(1.0)
            .run_time(duration_ms)
            .easing(Easing::EaseOutQuad))
    }

    /// Fade from the current opacity to transparent
    pub fn fade_out(id: MobjectId, duration_ms: u32) -> Animator {
        id.animate()
            .set_opacity(0.0)
            .run_time(duration_ms)
            .easing(Easing::EaseInQuad)
    }

    /// Briefly enlarge and tint, then return to the original state
    pub fn indicate(id: MobjectId, duration_ms: u32) -> Animator {
        id.animate()
            .scale(1.2)
            .set_color(Color::YELLOW)
            .run_time(duration_ms)
            .easing(Easing::ThereAndBack)
    }

    /// Change the fill of every shape in the subtree
    pub fn highlight(id: MobjectId, color: Color, duration_ms: u32) -> Animator {
        id.animate().set_fill_color(color).run_time(duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::Mobject;

    #[test]
    fn test_indicate_returns_to_start() {
        let mut scene = Scene::new();
        let square = scene.insert(Mobject::square(1.0));
        let before = *scene.props(square).unwrap();

        let animation = AnimationPreset::indicate(square, 300)
            .build(&scene)
            .unwrap();

        animation.apply(&mut scene, 0.5).unwrap();
        assert!((scene.props(square).unwrap().scale - 1.2).abs() < 1e-5);

        animation.finish(&mut scene).unwrap();
        assert_eq!(*scene.props(square).unwrap(), before);
    }

    #[test]
    fn test_fade_in_starts_transparent() {
        let mut scene = Scene::new();
        let square = scene.insert(Mobject::square(1.0));

        let animator = AnimationPreset::fade_in(&mut scene, square, 200).unwrap();
        assert_eq!(scene.props(square).unwrap().opacity, 0.0);

        animator.build(&scene).unwrap().finish(&mut scene).unwrap();
        assert_eq!(scene.props(square).unwrap().opacity, 1.0);
    }
}
