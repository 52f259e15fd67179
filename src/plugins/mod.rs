mod camera;
mod display;
mod loader;
mod playback;
mod scene;
mod staging;
mod transformation;
mod viewer;

pub use camera::CameraPlugin;
pub use display::DisplayPlugin;
pub use loader::LoaderPlugin;
pub use playback::PlaybackPlugin;
pub use scene::ScenePlugin;
pub use staging::{PlaybackSet, StartupSequencePlugin, StartupStage};
pub use transformation::TransformationPlugin;
pub use viewer::ViewerPlugin;
