//! Timeline orchestration for multiple animations

use slotmap::{new_key_type, SlotMap};

use abacus_core::Scene;

use crate::animation::Animation;
use crate::error::Result;

new_key_type! {
    pub struct TimelineEntryId;
}

/// An entry in a timeline
struct TimelineEntry {
    /// Offset in milliseconds from timeline start
    offset_ms: u32,
    animation: Animation,
}

impl TimelineEntry {
    /// End time, pinned at `u32::MAX` for entries that would run past it
    fn end_ms(&self) -> u32 {
        self.offset_ms.saturating_add(self.animation.duration_ms())
    }
}

/// A timeline that schedules animations at fixed offsets.
///
/// Entries must be built against the scene state they start from. For
/// sequential entries that means building each one after the previous one was
/// finished, which is what [`Player`](crate::Player) does.
pub struct Timeline {
    entries: SlotMap<TimelineEntryId, TimelineEntry>,
    current_time: f32,
    duration_ms: u32,
    playing: bool,
    loop_count: i32, // -1 for infinite
    current_loop: i32,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            current_time: 0.0,
            duration_ms: 0,
            playing: false,
            loop_count: 1,
            current_loop: 0,
        }
    }

    /// Add an animation at a given offset
    pub fn add(&mut self, offset_ms: u32, animation: Animation) -> TimelineEntryId {
        let entry = TimelineEntry {
            offset_ms,
            animation,
        };
        self.duration_ms = self.duration_ms.max(entry.end_ms());
        self.entries.insert(entry)
    }

    /// Add an animation that starts when everything scheduled so far has ended
    pub fn then(&mut self, animation: Animation) -> TimelineEntryId {
        self.add(self.duration_ms, animation)
    }

    pub fn remove(&mut self, id: TimelineEntryId) -> Option<Animation> {
        let removed = self.entries.remove(id).map(|entry| entry.animation);
        self.duration_ms = self
            .entries
            .values()
            .map(TimelineEntry::end_ms)
            .max()
            .unwrap_or(0);
        removed
    }

    pub fn get(&self, id: TimelineEntryId) -> Option<&Animation> {
        self.entries.get(id).map(|entry| &entry.animation)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.current_loop = 0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn set_loop(&mut self, count: i32) {
        self.loop_count = count;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance the timeline and write the new state into the scene
    pub fn tick(&mut self, scene: &mut Scene, dt_ms: f32) -> Result<()> {
        if !self.playing {
            return Ok(());
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms as f32 {
            if self.loop_count == -1 || self.current_loop < self.loop_count - 1 {
                self.current_time = 0.0;
                self.current_loop += 1;
            } else {
                self.current_time = self.duration_ms as f32;
                self.playing = false;
            }
        }

        self.apply_at(scene, self.current_time)
    }

    /// Jump to `time_ms` and write that state into the scene
    pub fn seek(&mut self, scene: &mut Scene, time_ms: f32) -> Result<()> {
        self.current_time = time_ms.clamp(0.0, self.duration_ms as f32);
        self.apply_at(scene, self.current_time)
    }

    fn apply_at(&self, scene: &mut Scene, time_ms: f32) -> Result<()> {
        let mut ordered: Vec<&TimelineEntry> = self.entries.values().collect();
        ordered.sort_by_key(|entry| entry.offset_ms);

        // Entries that have not started yet show their start state. Walk them
        // latest first so the earliest pending entry wins on shared mobjects.
        for entry in ordered.iter().rev() {
            if time_ms < entry.offset_ms as f32 {
                entry.animation.rewind(scene)?;
            }
        }

        for entry in &ordered {
            let local = time_ms - entry.offset_ms as f32;
            if local >= 0.0 {
                let progress = entry.animation.progress_at(local);
                entry.animation.apply(scene, progress)?;
            }
        }
        Ok(())
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::Animate;
    use crate::easing::Easing;
    use abacus_core::{Mobject, Point, Vec2};

    #[test]
    fn test_sequential_entries() {
        let mut scene = Scene::new();
        let square = scene.insert(Mobject::square(1.0));

        let first = square
            .animate()
            .shift(Vec2::RIGHT)
            .run_time(100)
            .easing(Easing::Linear)
            .build(&scene)
            .unwrap();
        first.finish(&mut scene).unwrap();
        let second = square
            .animate()
            .shift(Vec2::UP)
            .run_time(100)
            .easing(Easing::Linear)
            .build(&scene)
            .unwrap();
        first.rewind(&mut scene).unwrap();

        let mut timeline = Timeline::new();
        timeline.add(0, first);
        timeline.then(second);
        assert_eq!(timeline.duration_ms(), 200);

        timeline.seek(&mut scene, 50.0).unwrap();
        assert_eq!(scene.props(square).unwrap().center, Point::new(0.5, 0.0));

        timeline.seek(&mut scene, 150.0).unwrap();
        assert_eq!(scene.props(square).unwrap().center, Point::new(1.0, 0.5));

        // Seeking backwards restores the earlier state
        timeline.seek(&mut scene, 0.0).unwrap();
        assert_eq!(scene.props(square).unwrap().center, Point::ORIGIN);
    }

    #[test]
    fn test_tick_stops_at_end() {
        let mut scene = Scene::new();
        let square = scene.insert(Mobject::square(1.0));
        let animation = square
            .animate()
            .shift(Vec2::LEFT)
            .run_time(100)
            .build(&scene)
            .unwrap();

        let mut timeline = Timeline::new();
        timeline.add(0, animation);
        timeline.start();
        for _ in 0..5 {
            timeline.tick(&mut scene, 30.0).unwrap();
        }

        assert!(!timeline.is_playing());
        assert_eq!(timeline.current_time(), 100.0);
        assert_eq!(scene.props(square).unwrap().center, Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_loop_restarts() {
        let mut scene = Scene::new();
        let square = scene.insert(Mobject::square(1.0));
        let animation = square.animate().run_time(100).build(&scene).unwrap();

        let mut timeline = Timeline::new();
        timeline.add(0, animation);
        timeline.set_loop(2);
        timeline.start();

        timeline.tick(&mut scene, 120.0).unwrap();
        assert!(timeline.is_playing());
        assert_eq!(timeline.current_time(), 0.0);

        timeline.tick(&mut scene, 120.0).unwrap();
        assert!(!timeline.is_playing());
    }

    #[test]
    fn test_remove_recomputes_duration() {
        let mut scene = Scene::new();
        let square = scene.insert(Mobject::square(1.0));
        let short = square.animate().run_time(100).build(&scene).unwrap();
        let long = square.animate().run_time(300).build(&scene).unwrap();

        let mut timeline = Timeline::new();
        timeline.add(0, short);
        let late = timeline.add(50, long);
        assert_eq!(timeline.duration_ms(), 350);

        assert!(timeline.remove(late).is_some());
        assert_eq!(timeline.duration_ms(), 100);
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_duration_saturates_at_u32_max() {
        let mut scene = Scene::new();
        let square = scene.insert(Mobject::square(1.0));
        let huge = square
            .animate()
            .run_time(u32::MAX - 10)
            .build(&scene)
            .unwrap();
        let short = square.animate().run_time(100).build(&scene).unwrap();

        let mut timeline = Timeline::new();
        timeline.add(0, huge);
        let tail = timeline.then(short);
        assert_eq!(timeline.duration_ms(), u32::MAX);

        let late = square.animate().run_time(100).build(&scene).unwrap();
        timeline.add(u32::MAX, late);
        assert_eq!(timeline.duration_ms(), u32::MAX);

        assert!(timeline.remove(tail).is_some());
        assert_eq!(timeline.duration_ms(), u32::MAX);
        assert_eq!(timeline.len(), 2);
    }
}
