use bevy::prelude::*;
use bevy::tasks::Task;
use std::path::PathBuf;

use super::{DataConfig, LoadError, TableLayout, Trajectory, TrajectoryPaths};

/// Ask for a trajectory to be read from disk
#[derive(Event, Debug, Clone)]
pub struct LoadRequest {
    pub paths: TrajectoryPaths,
    pub layout: TableLayout,
}

impl LoadRequest {
    pub fn from_config(config: &DataConfig) -> Self {
        Self {
            paths: config.paths(),
            layout: config.layout,
        }
    }
}

/// Load running on the async compute pool. Replacing the resource drops,
/// and so cancels, the previous task.
#[derive(Resource)]
pub struct PendingLoad {
    pub task: Task<Result<Trajectory, LoadError>>,
    pub source: PathBuf,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading(PathBuf),
    Loaded { source: PathBuf, samples: usize },
    Failed(String),
}

impl LoadStatus {
    pub fn describe(&self) -> String {
        match self {
            LoadStatus::Idle => "No trajectory loaded (R to load)".to_string(),
            LoadStatus::Loading(source) => format!("Loading {} ...", source.display()),
            LoadStatus::Loaded { source, samples } => {
                format!("{} samples from {}", samples, source.display())
            }
            LoadStatus::Failed(reason) => format!("Load failed: {}", reason),
        }
    }
}
