use crate::resources::Frame;
use nalgebra::Vector3;

/// Trait for converting positions between different frames
pub trait PositionTransform {
    /// Transform a position from one frame to another
    fn transform_position(
        &self,
        position: &Vector3<f64>,
        from: Frame,
        to: Frame,
    ) -> Result<Vector3<f64>, TransformError>;
}

/// Trait for converting directions (axes, rates, velocities) between frames
pub trait DirectionTransform {
    /// Transform a direction from one frame to another.
    ///
    /// `attitude` holds roll, pitch and yaw [rad] and is only consulted when
    /// the body frame is involved.
    fn transform_direction(
        &self,
        direction: &Vector3<f64>,
        attitude: &Vector3<f64>,
        from: Frame,
        to: Frame,
    ) -> Result<Vector3<f64>, TransformError>;
}

/// Errors that can occur during transformation
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Invalid frame transformation from {from:?} to {to:?}")]
    InvalidFrameTransform { from: Frame, to: Frame },
}
