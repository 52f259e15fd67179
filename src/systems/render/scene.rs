use bevy::color::ColorToComponents;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use nalgebra::Vector3;

use crate::components::{ColoredVertex, GeometryBuffer, GroundPlane, SceneGeometry};
use crate::resources::FrameConverter;

/// Earth frame vertex position expressed in the render frame
pub fn earth_to_render(frames: &FrameConverter, vertex: &ColoredVertex) -> Vec3 {
    let [x, y, z] = vertex.position;
    let v = frames.rotation_to_render(&Vector3::new(x as f64, y as f64, z as f64));
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

pub fn vertex_color(vertex: &ColoredVertex) -> Color {
    let [r, g, b] = vertex.color;
    Color::srgb(r, g, b)
}

/// Indexed, vertex-coloured triangle mesh for an earth frame buffer
pub fn build_mesh(buffer: &GeometryBuffer, frames: &FrameConverter) -> Mesh {
    let positions: Vec<[f32; 3]> = buffer
        .vertices
        .iter()
        .map(|v| earth_to_render(frames, v).to_array())
        .collect();
    let colors: Vec<[f32; 4]> = buffer
        .vertices
        .iter()
        .map(|v| vertex_color(v).to_linear().to_f32_array())
        .collect();

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(buffer.indices.clone()))
}

pub fn spawn_ground_system(
    mut commands: Commands,
    geometry: Res<SceneGeometry>,
    frames: Res<FrameConverter>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = build_mesh(&geometry.ground, &frames);
    let material = StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    };

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(material)),
        Transform::IDENTITY,
        GroundPlane,
        Name::new("Ground"),
    ));
}
