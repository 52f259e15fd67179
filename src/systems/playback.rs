use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::components::TimelineBar;
use crate::resources::{CurrentFrame, FrameConverter, PlaybackClock, Trajectory, ViewerConfig};

/// Space toggles play/pause, Left/Right jump by the scrub step, Home rewinds.
pub fn playback_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time<Real>>,
    config: Res<ViewerConfig>,
    mut clock: ResMut<PlaybackClock>,
) {
    let now = time.elapsed_secs_f64();
    let step = config.playback.scrub_step;

    if keyboard.just_pressed(KeyCode::Space) {
        clock.toggle(now);
        debug!("Playback {:?} at {:.2}s", clock.state(), clock.current_time());
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        let target = clock.current_time() + step;
        clock.scrub(target, now);
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        let target = clock.current_time() - step;
        clock.scrub(target, now);
    }
    if keyboard.just_pressed(KeyCode::Home) {
        clock.scrub(0.0, now);
    }
}

/// Pressing or dragging on the timeline bar scrubs to the cursor position.
pub fn timeline_scrub_system(
    time: Res<Time<Real>>,
    bars: Query<(&Interaction, &RelativeCursorPosition), With<TimelineBar>>,
    mut clock: ResMut<PlaybackClock>,
) {
    for (interaction, cursor) in bars.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if let Some(position) = cursor.normalized {
            let fraction = position.x.clamp(0.0, 1.0) as f64;
            let target = fraction * clock.max_time();
            clock.scrub(target, time.elapsed_secs_f64());
        }
    }
}

pub fn playback_tick_system(time: Res<Time<Real>>, mut clock: ResMut<PlaybackClock>) {
    clock.tick(time.elapsed_secs_f64());
}

/// Select the sample for the current time and recompute the body pose.
/// A miss keeps the previous frame on screen and is reported once.
pub fn pose_update_system(
    trajectory: Res<Trajectory>,
    frames: Res<FrameConverter>,
    config: Res<ViewerConfig>,
    clock: Res<PlaybackClock>,
    mut current: ResMut<CurrentFrame>,
) {
    let time = clock.current_time();
    match trajectory.lookup(time, config.playback.lookup) {
        Ok(index) => {
            if current.index != Some(index) {
                if let Some(pose) = trajectory.pose(index, &frames) {
                    current.pose = pose;
                    current.index = Some(index);
                }
            }
            current.miss = None;
        }
        Err(miss) => {
            if current.miss.is_none() {
                warn!("{}, holding previous frame", miss);
            }
            current.miss = Some(miss);
        }
    }
}
