mod frames;
mod traits;

pub use frames::{body_to_earth, Frame, FrameConverter};
pub use traits::{DirectionTransform, PositionTransform, TransformError};
