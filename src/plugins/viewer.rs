use bevy::prelude::*;

use crate::components::SceneGeometry;
use crate::plugins::{
    CameraPlugin, DisplayPlugin, LoaderPlugin, PlaybackPlugin, ScenePlugin, StartupSequencePlugin,
    TransformationPlugin,
};
use crate::resources::ViewerConfig;

/// Everything needed to play a recorded flight in a window. Expects
/// `DefaultPlugins` to be present.
pub struct ViewerPlugin {
    config: ViewerConfig,
}

impl ViewerPlugin {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        let [r, g, b] = self.config.render.clear_color;

        app.insert_resource(self.config.clone())
            .insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
            .init_resource::<SceneGeometry>()
            .add_plugins((
                StartupSequencePlugin,
                TransformationPlugin,
                PlaybackPlugin::new(self.config.playback.frame_rate),
                LoaderPlugin,
                ScenePlugin,
                CameraPlugin,
                DisplayPlugin,
            ));
    }
}
