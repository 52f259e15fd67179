use bevy::prelude::*;

use crate::resources::{CameraConfig, RenderConfig};

/// Free-fly camera state, all in the render frame.
#[derive(Component, Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    /// [deg]
    pub yaw: f32,
    /// [deg], kept inside [-89, 89]
    pub pitch: f32,
    pub fov: f32,
    pub znear: f32,
    pub zfar: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

pub const PITCH_LIMIT: f32 = 89.0;

impl Default for FlyCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), &RenderConfig::default())
    }
}

/// Direction pointed at by a yaw/pitch pair given in degrees.
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
}

impl FlyCamera {
    pub fn from_config(camera: &CameraConfig, render: &RenderConfig) -> Self {
        let pitch = camera.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Self {
            position: Vec3::from_array(camera.position),
            front: look_direction(camera.yaw, pitch),
            up: Vec3::Y,
            yaw: camera.yaw,
            pitch,
            fov: render.fov,
            znear: render.near,
            zfar: render.far,
            speed: camera.speed,
            sensitivity: camera.sensitivity,
        }
    }

    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize_or_zero()
    }

    /// Move along the camera axes. `forward` follows the view direction,
    /// `lift` the world up axis.
    pub fn translate(&mut self, forward: f32, strafe: f32, lift: f32, dt: f32) {
        let step = self.speed * dt;
        self.position += self.front * forward * step;
        self.position += self.right() * strafe * step;
        self.position += self.up * lift * step;
    }

    /// Apply a mouse drag of `delta` pixels.
    pub fn look(&mut self, delta: Vec2) {
        let offset = delta * self.sensitivity;
        self.yaw -= offset.x;
        self.pitch = (self.pitch + offset.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.front = look_direction(self.yaw, self.pitch);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection(&self, aspect_ratio: f32) -> Projection {
        Projection::Perspective(PerspectiveProjection {
            fov: self.fov.to_radians(),
            near: self.znear,
            far: self.zfar,
            aspect_ratio,
        })
    }

    /// World transform of the camera entity matching [`Self::view_matrix`].
    pub fn transform(&self) -> Transform {
        Transform::from_matrix(self.view_matrix().inverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_creation() {
        let camera = FlyCamera::default();
        assert_eq!(camera.position, Vec3::new(0.5, 0.5, 0.8));
        assert_eq!(camera.fov, 45.0);
        assert_relative_eq!(camera.front.length(), 1.0, epsilon = 1e-6);
        // Initial view looks down and back towards the origin
        assert!(camera.front.y < 0.0);
        assert!(camera.front.z < 0.0);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = FlyCamera::default();
        camera.look(Vec2::new(0.0, 10_000.0));
        assert_eq!(camera.pitch, PITCH_LIMIT);
        camera.look(Vec2::new(0.0, -100_000.0));
        assert_eq!(camera.pitch, -PITCH_LIMIT);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn test_look_turns_yaw() {
        let mut camera = FlyCamera::default();
        let yaw = camera.yaw;
        camera.look(Vec2::new(100.0, 0.0));
        assert_relative_eq!(camera.yaw, yaw - 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_translate_moves_along_front() {
        let mut camera = FlyCamera::default();
        let start = camera.position;
        camera.translate(1.0, 0.0, 0.0, 0.4);
        assert_relative_eq!((camera.position - start).length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(
            (camera.position - start).normalize().dot(camera.front),
            1.0,
            epsilon = 1e-5
        );

        let before = camera.position;
        camera.translate(0.0, 0.0, 1.0, 0.4);
        assert_relative_eq!(camera.position.y - before.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_matches_view() {
        let camera = FlyCamera::default();
        let transform = camera.transform();
        assert_relative_eq!(transform.translation.x, camera.position.x, epsilon = 1e-4);
        assert_relative_eq!(transform.forward().dot(camera.front), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_projection_uses_camera_settings() {
        let camera = FlyCamera::default();
        match camera.projection(16.0 / 9.0) {
            Projection::Perspective(p) => {
                assert_relative_eq!(p.fov, 45.0_f32.to_radians());
                assert_eq!((p.near, p.far), (0.1, 100.0));
                assert_relative_eq!(p.aspect_ratio, 16.0 / 9.0);
            }
            other => panic!("Unexpected projection: {:?}", other),
        }
    }
}
