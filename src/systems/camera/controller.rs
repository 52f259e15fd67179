use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::components::{FlyCamera, TimelineBar};

fn axis(keyboard: &ButtonInput<KeyCode>, positive: &[KeyCode], negative: &[KeyCode]) -> f32 {
    let pressed = |keys: &[KeyCode]| keys.iter().any(|k| keyboard.pressed(*k));
    match (pressed(positive), pressed(negative)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Free-fly translation: W/S along the view direction, A/D sideways,
/// Shift/Ctrl up and down.
pub fn fly_camera_keyboard_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut cameras: Query<&mut FlyCamera>,
) {
    let forward = axis(&keyboard, &[KeyCode::KeyW], &[KeyCode::KeyS]);
    let strafe = axis(&keyboard, &[KeyCode::KeyD], &[KeyCode::KeyA]);
    let lift = axis(
        &keyboard,
        &[KeyCode::ShiftLeft, KeyCode::ShiftRight],
        &[KeyCode::ControlLeft, KeyCode::ControlRight],
    );
    if forward == 0.0 && strafe == 0.0 && lift == 0.0 {
        return;
    }

    for mut camera in cameras.iter_mut() {
        camera.translate(forward, strafe, lift, time.delta_secs());
    }
}

/// Mouse-look while the left button is held, unless the drag started on the timeline.
pub fn fly_camera_mouse_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    timeline: Query<&Interaction, With<TimelineBar>>,
    mut cameras: Query<&mut FlyCamera>,
) {
    let delta: Vec2 = motion.read().map(|m| m.delta).sum();
    if !buttons.pressed(MouseButton::Left) || delta == Vec2::ZERO {
        return;
    }
    if timeline.iter().any(|i| *i != Interaction::None) {
        return;
    }

    for mut camera in cameras.iter_mut() {
        camera.look(delta);
    }
}

/// Keep the bevy camera transform in step with the look-at view matrix
pub fn camera_transform_system(
    mut cameras: Query<(&FlyCamera, &mut Transform), Changed<FlyCamera>>,
) {
    for (camera, mut transform) in cameras.iter_mut() {
        *transform = camera.transform();
    }
}
