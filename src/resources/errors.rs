use thiserror::Error;

/// Failures detected before the renderer is allowed to start
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphicsInitError {
    #[error("Window size {width}x{height} is not drawable")]
    InvalidViewport { width: u32, height: u32 },
    #[error("Field of view {0} deg must lie strictly between 0 and 180")]
    InvalidFieldOfView(f32),
    #[error("Clip planes near = {near}, far = {far} must satisfy 0 < near < far")]
    InvalidClipPlanes { near: f32, far: f32 },
    #[error("Geometry '{name}': {reason}")]
    InvalidGeometry { name: &'static str, reason: String },
}
