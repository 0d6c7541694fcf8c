//! Animation player
//!
//! Plays batches of animators against a scene, one batch after another, and
//! optionally records sampled frames as display lists.

use rustc_hash::FxHashSet;

use abacus_core::{DisplayList, Scene};

use crate::animator::Animator;
use crate::error::{AnimationError, Result};
use crate::timeline::Timeline;

/// A sampled frame
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Time since the player started, in milliseconds
    pub time_ms: u64,
    pub display: DisplayList,
}

/// Plays animations to completion and keeps a running clock
pub struct Player {
    fps: u32,
    clock_ms: u64,
    recording: Option<Vec<Frame>>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            fps: 30,
            clock_ms: 0,
            recording: None,
        }
    }

    pub fn set_fps(&mut self, fps: u32) -> Result<()> {
        if fps == 0 {
            return Err(AnimationError::InvalidFrameRate(fps));
        }
        self.fps = fps;
        Ok(())
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Total time played so far
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Start keeping sampled frames
    pub fn start_recording(&mut self) {
        self.recording = Some(Vec::new());
    }

    /// Stop recording and hand back everything recorded
    pub fn take_frames(&mut self) -> Vec<Frame> {
        self.recording.take().unwrap_or_default()
    }

    /// Play animators together from the current scene state.
    ///
    /// Every animator is built against the scene as it is now, so all of them
    /// start simultaneously; the call returns once the longest one finished and
    /// the scene holds the final state. Returns the batch duration.
    pub fn play(
        &mut self,
        scene: &mut Scene,
        animators: impl IntoIterator<Item = Animator>,
    ) -> Result<u32> {
        let animators: Vec<Animator> = animators.into_iter().collect();
        if animators.is_empty() {
            return Err(AnimationError::Empty);
        }

        let mut touched = FxHashSet::default();
        let mut timeline = Timeline::new();
        for animator in &animators {
            let animation = animator.build(scene)?;
            for track in animation.tracks() {
                if !touched.insert(track.id) {
                    tracing::warn!(
                        id = ?track.id,
                        "mobject animated twice in one batch; the later animation wins"
                    );
                }
            }
            timeline.add(0, animation);
        }

        let duration = timeline.duration_ms();
        tracing::debug!(
            animations = animators.len(),
            duration_ms = duration,
            "playing batch"
        );

        if self.recording.is_some() {
            let frame_ms = 1000.0 / self.fps as f32;
            let mut t = 0.0_f32;
            while t < duration as f32 {
                timeline.seek(scene, t)?;
                self.record(scene, t);
                t += frame_ms;
            }
        }
        timeline.seek(scene, duration as f32)?;
        self.clock_ms += duration as u64;
        self.record(scene, 0.0);

        Ok(duration)
    }

    /// Hold the current scene for `duration_ms`
    pub fn wait(&mut self, scene: &Scene, duration_ms: u32) {
        if self.recording.is_some() {
            let frame_ms = 1000.0 / self.fps as f32;
            let mut t = 0.0_f32;
            while t < duration_ms as f32 {
                self.record(scene, t);
                t += frame_ms;
            }
        }
        self.clock_ms += duration_ms as u64;
    }

    fn record(&mut self, scene: &Scene, offset_ms: f32) {
        if let Some(frames) = &mut self.recording {
            frames.push(Frame {
                time_ms: self.clock_ms + offset_ms as u64,
                display: scene.display_list(),
            });
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
