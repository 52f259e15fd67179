mod axes;
mod scene;

pub use axes::{draw_body_axes_system, draw_earth_axes_system};
pub use scene::{build_mesh, earth_to_render, spawn_ground_system, vertex_color};
