pub mod camera;
pub mod data;
pub mod playback;
pub mod render;
pub mod viewer;

pub use camera::CameraConfig;
pub use data::DataConfig;
pub use playback::PlaybackConfig;
pub use render::RenderConfig;
pub use viewer::{ConfigError, ViewerConfig};
