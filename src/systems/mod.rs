mod camera;
mod display;
mod loader;
mod playback;
mod render;

pub use camera::{camera_transform_system, fly_camera_keyboard_system, fly_camera_mouse_system};
pub use display::{
    spawn_display_system, status_line, update_readout_system, update_status_system,
    update_timeline_system,
};
pub use loader::{poll_load_system, reload_key_system, request_initial_load, start_load_system};
pub use playback::{
    playback_input_system, playback_tick_system, pose_update_system, timeline_scrub_system,
};
pub use render::{
    build_mesh, draw_body_axes_system, draw_earth_axes_system, earth_to_render,
    spawn_ground_system, vertex_color,
};
