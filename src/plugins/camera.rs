use bevy::prelude::*;

use crate::components::FlyCamera;
use crate::plugins::StartupStage;
use crate::resources::ViewerConfig;
use crate::systems::{camera_transform_system, fly_camera_keyboard_system, fly_camera_mouse_system};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera.in_set(StartupStage::BuildCameras))
            .add_systems(
                Update,
                (
                    fly_camera_keyboard_system,
                    fly_camera_mouse_system,
                    camera_transform_system,
                )
                    .chain(),
            );
    }
}

fn spawn_camera(mut commands: Commands, config: Res<ViewerConfig>) {
    let camera = FlyCamera::from_config(&config.camera, &config.render);

    commands.spawn((
        Camera3d::default(),
        camera.projection(config.render.aspect_ratio()),
        camera.transform(),
        camera,
        Name::new("Fly camera"),
    ));
}
