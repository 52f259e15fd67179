use crate::resources::transformations::traits::*;
use bevy::prelude::*;
use nalgebra::{Matrix3, Matrix4, Rotation3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Body,   // Drone body frame: x-forward, y-right, z-down
    Earth,  // Earth-fixed frame: x-forward, y-right, z-down
    Render, // Render frame: y-up
}

/// Resource that converts between the simulation frames and the render frame.
///
/// Rotations are carried over with a pure swap of axes 2 and 3, translations
/// with the same swap plus a sign flip on the depth axis. The two are not the
/// same map and the translation map is not its own inverse.
#[derive(Resource, Debug, Clone)]
pub struct FrameConverter {
    /// Axis permutation used for rotations and directions
    earth_to_render_rotation: Matrix3<f64>,
    /// Axis permutation with sign flip used for translations
    earth_to_render_translation: Matrix3<f64>,
}

impl Default for FrameConverter {
    fn default() -> Self {
        let earth_to_render_rotation = Matrix3::new(
            1.0, 0.0, 0.0, // X (forward) -> X
            0.0, 0.0, 1.0, // Z (down)    -> Y
            0.0, 1.0, 0.0, // Y (right)   -> Z
        );

        let earth_to_render_translation = Matrix3::new(
            1.0, 0.0, 0.0, // X (forward) -> X
            0.0, 0.0, -1.0, // Z (down)   -> Y (up, negated)
            0.0, 1.0, 0.0, // Y (right)   -> Z
        );

        Self {
            earth_to_render_rotation,
            earth_to_render_translation,
        }
    }
}

/// Body to earth rotation for roll, pitch and yaw [rad] (Z-Y-X sequence).
pub fn body_to_earth(attitude: &Vector3<f64>) -> Rotation3<f64> {
    Rotation3::from_euler_angles(attitude.x, attitude.y, attitude.z)
}

impl FrameConverter {
    pub fn rotation_to_render(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.earth_to_render_rotation * v
    }

    pub fn rotation_to_earth(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.earth_to_render_rotation.transpose() * v
    }

    /// Re-express an earth frame rotation matrix in the render frame.
    pub fn rotation_matrix_to_render(&self, m: &Matrix3<f64>) -> Matrix3<f64> {
        self.earth_to_render_rotation * m * self.earth_to_render_rotation.transpose()
    }

    pub fn rotation_matrix_to_earth(&self, m: &Matrix3<f64>) -> Matrix3<f64> {
        self.earth_to_render_rotation.transpose() * m * self.earth_to_render_rotation
    }

    pub fn translation_to_render(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.earth_to_render_translation * v
    }

    /// Explicit inverse of [`Self::translation_to_render`].
    pub fn translation_to_earth(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.earth_to_render_translation.transpose() * v
    }

    /// Convert a homogeneous earth frame transform: the rotation block goes
    /// through the rotation map, the translation column through the
    /// translation map.
    pub fn homogeneous_to_render(&self, m: &Matrix4<f64>) -> Matrix4<f64> {
        let rotation = Matrix3::from_fn(|r, c| m[(r, c)]);
        let translation = Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
        compose(
            &self.rotation_matrix_to_render(&rotation),
            &self.translation_to_render(&translation),
        )
    }

    pub fn homogeneous_to_earth(&self, m: &Matrix4<f64>) -> Matrix4<f64> {
        let rotation = Matrix3::from_fn(|r, c| m[(r, c)]);
        let translation = Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
        compose(
            &self.rotation_matrix_to_earth(&rotation),
            &self.translation_to_earth(&translation),
        )
    }

    /// Model matrix placing the body frame in the render frame. The position
    /// is divided by `scale` before conversion; rotation is applied first.
    pub fn pose_matrix(
        &self,
        attitude: &Vector3<f64>,
        position: &Vector3<f64>,
        scale: f64,
    ) -> Matrix4<f64> {
        let rotation = body_to_earth(attitude).into_inner();
        let earth = compose(&rotation, &(position / scale));
        self.homogeneous_to_render(&earth)
    }

    /// Get the direction transformation matrix between two fixed frames
    fn get_transform_matrix(&self, from: Frame, to: Frame) -> Result<Matrix3<f64>, TransformError> {
        match (from, to) {
            (Frame::Earth, Frame::Render) => Ok(self.earth_to_render_rotation),
            (Frame::Render, Frame::Earth) => Ok(self.earth_to_render_rotation.transpose()),
            (f1, f2) if f1 == f2 => Ok(Matrix3::identity()),
            (from, to) => Err(TransformError::InvalidFrameTransform { from, to }),
        }
    }
}

fn compose(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Matrix4<f64> {
    let mut m = Matrix4::identity();
    for r in 0..3 {
        for c in 0..3 {
            m[(r, c)] = rotation[(r, c)];
        }
        m[(r, 3)] = translation[r];
    }
    m
}

impl PositionTransform for FrameConverter {
    fn transform_position(
        &self,
        position: &Vector3<f64>,
        from: Frame,
        to: Frame,
    ) -> Result<Vector3<f64>, TransformError> {
        match (from, to) {
            (Frame::Earth, Frame::Render) => Ok(self.translation_to_render(position)),
            (Frame::Render, Frame::Earth) => Ok(self.translation_to_earth(position)),
            (f1, f2) if f1 == f2 => Ok(*position),
            // Body positions depend on where the drone is, not only on its attitude
            (from, to) => Err(TransformError::InvalidFrameTransform { from, to }),
        }
    }
}

impl DirectionTransform for FrameConverter {
    fn transform_direction(
        &self,
        direction: &Vector3<f64>,
        attitude: &Vector3<f64>,
        from: Frame,
        to: Frame,
    ) -> Result<Vector3<f64>, TransformError> {
        match (from, to) {
            (Frame::Body, Frame::Body) => Ok(*direction),
            (Frame::Body, to) => {
                let earth = body_to_earth(attitude) * direction;
                self.transform_direction(&earth, attitude, Frame::Earth, to)
            }
            (from, Frame::Body) => {
                let earth = self.transform_direction(direction, attitude, from, Frame::Earth)?;
                Ok(body_to_earth(attitude).inverse() * earth)
            }
            (from, to) => Ok(self.get_transform_matrix(from, to)? * direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_round_trip_is_exact() {
        let frames = FrameConverter::default();
        let v = Vector3::new(0.3, -1.7, 2.25);

        assert_eq!(frames.rotation_to_render(&v), Vector3::new(0.3, 2.25, -1.7));
        assert_eq!(frames.rotation_to_earth(&frames.rotation_to_render(&v)), v);
        // The permutation is an involution, so forward twice also round trips
        assert_eq!(frames.rotation_to_render(&frames.rotation_to_render(&v)), v);
    }

    #[test]
    fn test_translation_needs_explicit_inverse() {
        let frames = FrameConverter::default();
        let v = Vector3::new(1.0, 2.0, -3.0);

        let render = frames.translation_to_render(&v);
        assert_eq!(render, Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(frames.translation_to_earth(&render), v);

        let twice = frames.translation_to_render(&render);
        assert_eq!(twice, Vector3::new(1.0, -2.0, 3.0));
        assert_ne!(twice, v);
    }

    #[test]
    fn test_altitude_maps_to_render_up() {
        let frames = FrameConverter::default();
        // 10 m above ground is z = -10 in the earth frame
        let render = frames.translation_to_render(&Vector3::new(0.0, 0.0, -10.0));
        assert_eq!(render, Vector3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn test_rotation_matrix_round_trip() {
        let frames = FrameConverter::default();
        let r = body_to_earth(&Vector3::new(0.1, -0.2, 0.7)).into_inner();

        let render = frames.rotation_matrix_to_render(&r);
        assert_relative_eq!(render.determinant(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frames.rotation_matrix_to_earth(&render), r, epsilon = 1e-12);
    }

    #[test]
    fn test_homogeneous_round_trip() {
        let frames = FrameConverter::default();
        let attitude = Vector3::new(0.2, 0.1, -0.4);
        let m = frames.pose_matrix(&attitude, &Vector3::new(4.0, -2.0, -6.0), 1.0);
        let earth = frames.homogeneous_to_earth(&m);

        assert_relative_eq!(frames.homogeneous_to_render(&earth), m, epsilon = 1e-12);
        assert_relative_eq!(earth[(2, 3)], -6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pose_matrix_scales_translation() {
        let frames = FrameConverter::default();
        let pose = frames.pose_matrix(&Vector3::zeros(), &Vector3::new(2.0, 4.0, -5.0), 10.0);

        assert_relative_eq!(pose[(0, 3)], 0.2, epsilon = 1e-12);
        assert_relative_eq!(pose[(1, 3)], 0.5, epsilon = 1e-12);
        assert_relative_eq!(pose[(2, 3)], 0.4, epsilon = 1e-12);
        assert_eq!(pose[(3, 3)], 1.0);
    }

    #[test]
    fn test_body_direction_through_yaw() {
        let frames = FrameConverter::default();
        let attitude = Vector3::new(0.0, 0.0, FRAC_PI_2);
        let nose = Vector3::x();

        let earth = frames
            .transform_direction(&nose, &attitude, Frame::Body, Frame::Earth)
            .unwrap();
        assert_relative_eq!(earth, Vector3::y(), epsilon = 1e-12);

        let back = frames
            .transform_direction(&earth, &attitude, Frame::Earth, Frame::Body)
            .unwrap();
        assert_relative_eq!(back, nose, epsilon = 1e-12);
    }

    #[test]
    fn test_body_positions_are_rejected() {
        let frames = FrameConverter::default();
        let result = frames.transform_position(&Vector3::x(), Frame::Body, Frame::Render);
        assert!(matches!(
            result,
            Err(TransformError::InvalidFrameTransform {
                from: Frame::Body,
                to: Frame::Render
            })
        ));
    }
}
