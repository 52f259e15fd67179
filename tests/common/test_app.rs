use bevy::input::InputPlugin;
use bevy::prelude::*;
use monocopter::{
    plugins::{LoaderPlugin, PlaybackPlugin, StartupSequencePlugin, TransformationPlugin},
    resources::{LoadStatus, ViewerConfig},
};
use std::path::Path;
use std::time::Duration;

/// Builder for a windowless viewer: loading, playback and pose tracking
/// without the renderer.
pub struct TestAppBuilder {
    config: ViewerConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: ViewerConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.config.data.dir = dir.to_path_buf();
        self
    }

    pub fn with_config(mut self, config: ViewerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(InputPlugin)
            .insert_resource(self.config.clone())
            .add_plugins((
                StartupSequencePlugin,
                TransformationPlugin,
                PlaybackPlugin::new(self.config.playback.frame_rate),
                LoaderPlugin,
            ));

        app.update();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Update until the pending load settles, or give up after a few seconds.
    pub fn wait_for_load(&mut self) -> LoadStatus {
        for _ in 0..500 {
            self.app.update();
            let status = self.app.world().resource::<LoadStatus>();
            if !matches!(status, LoadStatus::Loading(_) | LoadStatus::Idle) {
                return status.clone();
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("Trajectory load did not finish");
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    /// Run one playback step directly, independent of the fixed timestep.
    pub fn run_fixed_tick(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }
}
