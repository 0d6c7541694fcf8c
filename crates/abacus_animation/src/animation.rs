//! Built animations
//!
//! An [`Animation`] holds, for every mobject in the animated subtree, the
//! property snapshot before and after the declared changes. Sampling it at a
//! progress value writes interpolated properties back into the scene.

use abacus_core::{MobjectId, MobjectProps, Scene};

use crate::easing::Easing;
use crate::error::Result;

/// Start and end properties of one mobject
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: MobjectId,
    pub start: MobjectProps,
    pub end: MobjectProps,
}

/// A transition of a mobject subtree between two snapshots
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    target: MobjectId,
    tracks: Vec<Track>,
    duration_ms: u32,
    easing: Easing,
}

impl Animation {
    pub fn new(target: MobjectId, tracks: Vec<Track>, duration_ms: u32, easing: Easing) -> Self {
        Self {
            target,
            tracks,
            duration_ms,
            easing,
        }
    }

    pub fn target(&self) -> MobjectId {
        self.target
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Write the state at `progress` (0.0 to 1.0, clamped) into the scene
    pub fn apply(&self, scene: &mut Scene, progress: f32) -> Result<()> {
        let eased = self.easing.apply(progress);
        for track in &self.tracks {
            *scene.props_mut(track.id)? = MobjectProps::lerp(&track.start, &track.end, eased);
        }
        Ok(())
    }

    /// Progress for a time offset into the animation
    pub fn progress_at(&self, local_time_ms: f32) -> f32 {
        if self.duration_ms == 0 {
            return if local_time_ms >= 0.0 { 1.0 } else { 0.0 };
        }
        (local_time_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Jump to the end state
    pub fn finish(&self, scene: &mut Scene) -> Result<()> {
        self.apply(scene, 1.0)
    }

    /// Restore the start state
    pub fn rewind(&self, scene: &mut Scene) -> Result<()> {
        self.apply(scene, 0.0)
    }

    /// Same transition played backwards
    pub fn reversed(&self) -> Self {
        Self {
            target: self.target,
            tracks: self
                .tracks
                .iter()
                .map(|track| Track {
                    id: track.id,
                    start: track.end,
                    end: track.start,
                })
                .collect(),
            duration_ms: self.duration_ms,
            easing: self.easing,
        }
    }
}
