use bevy::prelude::*;

use super::{LookupError, Pose};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Paused,
    Playing,
}

/// Maps wall-clock time onto the recorded timeline.
///
/// While playing, the simulation time is `now - anchor + offset`, clamped to
/// `[0, max_time]`. Pausing folds the elapsed wall time into `offset`, so
/// idle time between pause and play is never counted.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlaybackClock {
    state: PlaybackState,
    /// Current simulation time [s]
    current: f64,
    /// Wall-clock time at which playback last (re)started [s]
    anchor: f64,
    /// Simulation time accumulated before `anchor` [s]
    offset: f64,
    /// Last timestamp of the loaded trajectory [s]
    max_time: f64,
}

impl PlaybackClock {
    pub fn new(max_time: f64) -> Self {
        let mut clock = Self::default();
        clock.load(max_time);
        clock
    }

    /// Reset for a freshly loaded trajectory.
    pub fn load(&mut self, max_time: f64) {
        *self = Self {
            max_time: max_time.max(0.0),
            ..Default::default()
        };
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_time(&self) -> f64 {
        self.current
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    /// Fraction of the timeline already played, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.max_time > 0.0 {
            self.current / self.max_time
        } else {
            0.0
        }
    }

    pub fn play(&mut self, now: f64) {
        if self.state != PlaybackState::Playing {
            self.anchor = now;
            self.state = PlaybackState::Playing;
        }
    }

    pub fn pause(&mut self, now: f64) {
        if self.state == PlaybackState::Playing {
            self.offset = self.clamp(self.offset + now - self.anchor);
            self.current = self.offset;
            self.state = PlaybackState::Paused;
        }
    }

    pub fn toggle(&mut self, now: f64) {
        if self.is_playing() {
            self.pause(now);
        } else {
            self.play(now);
        }
    }

    /// Jump to `target` in any state. Playback, if running, continues from there.
    pub fn scrub(&mut self, target: f64, now: f64) {
        let target = self.clamp(target);
        self.offset = target;
        self.current = target;
        if self.is_playing() {
            self.anchor = now;
        }
    }

    /// Advance to wall-clock time `now`. Playback holds at the end of the
    /// timeline rather than stopping or wrapping.
    pub fn tick(&mut self, now: f64) -> f64 {
        if self.is_playing() {
            self.current = self.clamp(now - self.anchor + self.offset);
        }
        self.current
    }

    fn clamp(&self, time: f64) -> f64 {
        time.clamp(0.0, self.max_time)
    }
}

/// Sample selected on the latest tick and the pose derived from it.
///
/// When a lookup misses, `index` and `pose` keep their previous values and
/// the miss is recorded instead.
#[derive(Resource, Debug, Clone, Default)]
pub struct CurrentFrame {
    pub index: Option<usize>,
    pub pose: Pose,
    pub miss: Option<LookupError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_load_resets() {
        let mut clock = PlaybackClock::new(10.0);
        clock.play(1.0);
        clock.tick(4.0);
        clock.load(20.0);

        assert_eq!(clock.state(), PlaybackState::Stopped);
        assert_eq!(clock.current_time(), 0.0);
        assert_eq!(clock.max_time(), 20.0);
        assert_eq!(clock.tick(100.0), 0.0);
    }

    #[test]
    fn test_scrub_while_stopped_holds() {
        let mut clock = PlaybackClock::new(10.0);
        clock.scrub(5.0, 0.0);
        assert_eq!(clock.tick(42.0), 5.0);
        assert_eq!(clock.current_time(), 5.0);
    }

    #[test]
    fn test_play_advances_from_offset() {
        let mut clock = PlaybackClock::new(10.0);
        clock.scrub(1.5, 0.0);
        clock.play(100.0);
        assert_relative_eq!(clock.tick(102.0), 3.5);
    }

    #[test]
    fn test_play_clamps_at_end() {
        let mut clock = PlaybackClock::new(10.0);
        clock.play(0.0);
        assert_eq!(clock.tick(25.0), 10.0);
        // Still playing: reaching the end does not stop playback
        assert_eq!(clock.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_scrub_beyond_end_clamps() {
        let mut clock = PlaybackClock::new(10.0);
        clock.scrub(12.0, 0.0);
        assert_eq!(clock.current_time(), 10.0);
        clock.scrub(-1.0, 0.0);
        assert_eq!(clock.current_time(), 0.0);
    }

    #[test]
    fn test_pause_ignores_idle_time() {
        let mut clock = PlaybackClock::new(10.0);
        clock.play(50.0);
        clock.tick(53.0);
        clock.pause(53.0);
        assert_relative_eq!(clock.current_time(), 3.0);

        // Two idle seconds without ticking
        clock.play(55.0);
        assert_relative_eq!(clock.tick(55.0), 3.0);
        assert_relative_eq!(clock.tick(56.0), 4.0);
    }

    #[test]
    fn test_scrub_while_playing_reanchors() {
        let mut clock = PlaybackClock::new(10.0);
        clock.play(0.0);
        clock.tick(2.0);
        clock.scrub(7.0, 2.0);
        assert_relative_eq!(clock.tick(3.0), 8.0);
    }

    #[test]
    fn test_toggle() {
        let mut clock = PlaybackClock::new(10.0);
        clock.toggle(0.0);
        assert!(clock.is_playing());
        clock.toggle(1.0);
        assert_eq!(clock.state(), PlaybackState::Paused);
        assert_relative_eq!(clock.current_time(), 1.0);
    }

    #[test]
    fn test_progress() {
        let mut clock = PlaybackClock::new(4.0);
        clock.scrub(1.0, 0.0);
        assert_relative_eq!(clock.progress(), 0.25);
        assert_eq!(PlaybackClock::new(0.0).progress(), 0.0);
    }
}
