use bevy::prelude::*;

use super::scene::{earth_to_render, vertex_color};
use crate::components::SceneGeometry;
use crate::resources::{CurrentFrame, FrameConverter};

/// Fixed earth frame triad at the origin
pub fn draw_earth_axes_system(
    mut gizmos: Gizmos,
    geometry: Res<SceneGeometry>,
    frames: Res<FrameConverter>,
) {
    for (start, end) in geometry.earth_axes.segments() {
        gizmos.line_gradient(
            earth_to_render(&frames, start),
            earth_to_render(&frames, end),
            vertex_color(start),
            vertex_color(end),
        );
    }
}

/// Body triad placed by the current pose
pub fn draw_body_axes_system(
    mut gizmos: Gizmos,
    geometry: Res<SceneGeometry>,
    current: Res<CurrentFrame>,
) {
    if current.index.is_none() {
        return;
    }
    for (start, end) in geometry.body_axes.segments() {
        gizmos.line_gradient(
            current.pose.transform_point(Vec3::from_array(start.position)),
            current.pose.transform_point(Vec3::from_array(end.position)),
            vertex_color(start),
            vertex_color(end),
        );
    }
}
