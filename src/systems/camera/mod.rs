mod controller;

pub use controller::{
    camera_transform_system, fly_camera_keyboard_system, fly_camera_mouse_system,
};
