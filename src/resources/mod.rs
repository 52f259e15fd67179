pub mod config;
mod errors;
mod loading;
mod playback;
mod trajectory;
mod transformations;

pub use config::{
    CameraConfig, ConfigError, DataConfig, PlaybackConfig, RenderConfig, ViewerConfig,
};
pub use errors::GraphicsInitError;
pub use loading::{LoadRequest, LoadStatus, PendingLoad};
pub use playback::{CurrentFrame, PlaybackClock, PlaybackState};
pub use trajectory::{
    InputSample, LoadError, LookupError, LookupPolicy, Pose, TableLayout, Trajectory,
    TrajectoryPaths, TrajectorySample, INPUT_WIDTH, STATE_WIDTH,
};
pub use transformations::{
    body_to_earth, DirectionTransform, Frame, FrameConverter, PositionTransform, TransformError,
};
