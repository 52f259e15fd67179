use bevy::prelude::*;

use crate::plugins::StartupStage;
use crate::resources::{LoadRequest, LoadStatus};
use crate::systems::{poll_load_system, reload_key_system, request_initial_load, start_load_system};

/// Reads trajectories off the main thread. The configured data set is
/// requested once at startup and again on R.
pub struct LoaderPlugin;

impl Plugin for LoaderPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<LoadRequest>()
            .init_resource::<LoadStatus>()
            .add_systems(Startup, request_initial_load.in_set(StartupStage::RequestData))
            .add_systems(
                Update,
                (reload_key_system, start_load_system, poll_load_system).chain(),
            );
    }
}
