use serde::{Deserialize, Serialize};

use crate::resources::GraphicsInitError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Vertical field of view [deg]
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Background colour as 8-bit sRGB
    pub clear_color: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            clear_color: [0, 191, 255],
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), GraphicsInitError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(GraphicsInitError::InvalidViewport {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(GraphicsInitError::InvalidFieldOfView(self.fov));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(GraphicsInitError::InvalidClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.screen_width as f32 / self.screen_height.max(1) as f32
    }
}
