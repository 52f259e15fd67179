use bevy::prelude::*;

use crate::plugins::{PlaybackSet, StartupStage};
use crate::systems::{
    spawn_display_system, update_readout_system, update_status_system, update_timeline_system,
};

pub struct DisplayPlugin;

impl Plugin for DisplayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_display_system.in_set(StartupStage::BuildDisplay))
            .add_systems(
                FixedUpdate,
                (
                    update_readout_system,
                    update_status_system,
                    update_timeline_system,
                )
                    .in_set(PlaybackSet::Display),
            );
    }
}
