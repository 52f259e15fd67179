use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildScene,
    BuildCameras,
    BuildDisplay,
    RequestData,
}

/// Per-frame playback pipeline, run on the fixed timestep:
/// Tick -> Pose -> Draw -> Display
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum PlaybackSet {
    Tick,
    Pose,
    Draw,
    Display,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildScene,
                StartupStage::BuildCameras,
                StartupStage::BuildDisplay,
                StartupStage::RequestData,
            )
                .chain(),
        )
        .configure_sets(
            FixedUpdate,
            (
                PlaybackSet::Tick,
                PlaybackSet::Pose,
                PlaybackSet::Draw,
                PlaybackSet::Display,
            )
                .chain(),
        );
    }
}
