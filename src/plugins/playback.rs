use bevy::prelude::*;

use crate::plugins::PlaybackSet;
use crate::resources::{CurrentFrame, PlaybackClock, Trajectory};
use crate::systems::{
    playback_input_system, playback_tick_system, pose_update_system, timeline_scrub_system,
};

/// Drives the playback clock at a fixed rate and keeps [`CurrentFrame`]
/// in step with it once a trajectory is available.
pub struct PlaybackPlugin {
    frame_rate: f64,
}

impl PlaybackPlugin {
    pub fn new(frame_rate: f64) -> Self {
        Self { frame_rate }
    }
}

impl Default for PlaybackPlugin {
    fn default() -> Self {
        Self::new(30.0)
    }
}

impl Plugin for PlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlaybackClock>()
            .init_resource::<CurrentFrame>()
            .insert_resource(Time::<Fixed>::from_hz(self.frame_rate))
            .add_systems(
                Update,
                (playback_input_system, timeline_scrub_system)
                    .run_if(resource_exists::<Trajectory>),
            )
            .add_systems(
                FixedUpdate,
                (
                    playback_tick_system.in_set(PlaybackSet::Tick),
                    pose_update_system.in_set(PlaybackSet::Pose),
                )
                    .run_if(resource_exists::<Trajectory>),
            );
    }
}
