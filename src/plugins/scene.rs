use bevy::prelude::*;

use crate::plugins::{PlaybackSet, StartupStage};
use crate::systems::{draw_body_axes_system, draw_earth_axes_system, spawn_ground_system};

/// Ground plane plus the earth and body axis triads
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ground_system.in_set(StartupStage::BuildScene))
            .add_systems(
                FixedUpdate,
                (draw_earth_axes_system, draw_body_axes_system).in_set(PlaybackSet::Draw),
            );
    }
}
