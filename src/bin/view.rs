use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;
use std::path::PathBuf;

use monocopter::{
    components::SceneGeometry,
    display::summarize,
    plugins::ViewerPlugin,
    resources::{Trajectory, ViewerConfig},
};

/// Play back a recorded monocopter flight
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Viewer configuration (YAML). Defaults to the user config dir.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding time.csv, state.csv and input.csv
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Print a JSON summary of the flight and exit without opening a window
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ViewerConfig::load_default().context("loading default config")?,
    };
    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
    }

    if args.summary {
        let paths = config.data.paths();
        let trajectory = Trajectory::load(&paths, config.data.layout)
            .with_context(|| format!("loading trajectory from {}", config.data.dir.display()))?;
        println!("{}", serde_json::to_string_pretty(&summarize(&trajectory))?);
        return Ok(());
    }

    config.validate().context("invalid render settings")?;
    SceneGeometry::default()
        .validate()
        .context("invalid scene geometry")?;

    let window = Window {
        title: "Monocopter".to_string(),
        resolution: WindowResolution::new(
            config.render.screen_width as f32,
            config.render.screen_height as f32,
        ),
        ..default()
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(ViewerPlugin::new(config))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("viewer exited with code {}", code),
    }
}
