use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial position in the render frame
    pub position: [f32; 3],
    /// Initial yaw [deg]
    pub yaw: f32,
    /// Initial pitch [deg]
    pub pitch: f32,
    /// Translation speed [units/s]
    pub speed: f32,
    /// Mouse-look sensitivity [deg/px]
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.5, 0.5, 0.8],
            yaw: -122.0,
            pitch: -23.0,
            speed: 2.5,
            sensitivity: 0.05,
        }
    }
}
