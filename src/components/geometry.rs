use bevy::prelude::*;

use crate::resources::GraphicsInitError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

const fn vertex(position: [f32; 3], color: [f32; 3]) -> ColoredVertex {
    ColoredVertex { position, color }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Indexed triangles
    Triangles,
    /// Consecutive vertex pairs
    Lines,
}

/// Static vertex buffer with optional index list.
#[derive(Debug, Clone)]
pub struct GeometryBuffer {
    pub name: &'static str,
    pub topology: Topology,
    pub vertices: Vec<ColoredVertex>,
    pub indices: Vec<u32>,
}

impl GeometryBuffer {
    pub fn validate(&self) -> Result<(), GraphicsInitError> {
        let invalid = |reason: String| GraphicsInitError::InvalidGeometry {
            name: self.name,
            reason,
        };

        if self.vertices.is_empty() {
            return Err(invalid("no vertices".to_string()));
        }
        match self.topology {
            Topology::Triangles => {
                if self.indices.is_empty() || self.indices.len() % 3 != 0 {
                    return Err(invalid(format!(
                        "{} indices do not form whole triangles",
                        self.indices.len()
                    )));
                }
                let count = self.vertices.len();
                if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= count) {
                    return Err(invalid(format!(
                        "index {} out of range for {} vertices",
                        bad,
                        self.vertices.len()
                    )));
                }
            }
            Topology::Lines => {
                if self.vertices.len() % 2 != 0 {
                    return Err(invalid(format!(
                        "{} vertices do not form whole line segments",
                        self.vertices.len()
                    )));
                }
            }
        }
        let bad_value = self
            .vertices
            .iter()
            .flat_map(|v| v.position.iter().chain(v.color.iter()))
            .any(|c| !c.is_finite());
        if bad_value {
            return Err(invalid("non-finite vertex data".to_string()));
        }
        Ok(())
    }

    /// Line segments as (start, end) vertex pairs
    pub fn segments(&self) -> impl Iterator<Item = (&ColoredVertex, &ColoredVertex)> {
        self.vertices.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// The three static buffers drawn every frame: ground quad, earth axes and
/// the body axes template. Positions of the first two are in the earth frame,
/// the template is in the body frame.
#[derive(Resource, Debug, Clone)]
pub struct SceneGeometry {
    pub ground: GeometryBuffer,
    pub earth_axes: GeometryBuffer,
    pub body_axes: GeometryBuffer,
}

const GROUND: [f32; 3] = [0.34, 0.49, 0.275];
const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

impl Default for SceneGeometry {
    fn default() -> Self {
        let ground = GeometryBuffer {
            name: "ground",
            topology: Topology::Triangles,
            vertices: vec![
                vertex([1.0, 1.0, 0.0], GROUND),
                vertex([1.0, -1.0, 0.0], GROUND),
                vertex([-1.0, -1.0, 0.0], GROUND),
                vertex([-1.0, 1.0, 0.0], GROUND),
            ],
            indices: vec![0, 1, 3, 1, 2, 3],
        };

        // The vertical axis points at altitude, against the earth z axis
        let earth_axes = GeometryBuffer {
            name: "earth axes",
            topology: Topology::Lines,
            vertices: vec![
                vertex([0.0, 0.0, 0.0], RED),
                vertex([1.0, 0.0, 0.0], RED),
                vertex([0.0, 0.0, 0.0], GREEN),
                vertex([0.0, 1.0, 0.0], GREEN),
                vertex([0.0, 0.0, 0.0], BLUE),
                vertex([0.0, 0.0, -1.0], BLUE),
            ],
            indices: Vec::new(),
        };

        let body_axes = GeometryBuffer {
            name: "body axes",
            topology: Topology::Lines,
            vertices: vec![
                vertex([0.0, 0.0, 0.0], BLUE),
                vertex([0.0, 0.0, 0.1], BLUE),
                vertex([0.0, 0.0, 0.0], RED),
                vertex([0.1, 0.0, 0.0], RED),
                vertex([0.0, 0.0, 0.0], GREEN),
                vertex([0.0, 0.1, 0.0], GREEN),
            ],
            indices: Vec::new(),
        };

        Self {
            ground,
            earth_axes,
            body_axes,
        }
    }
}

impl SceneGeometry {
    pub fn validate(&self) -> Result<(), GraphicsInitError> {
        self.ground.validate()?;
        self.earth_axes.validate()?;
        self.body_axes.validate()
    }
}
