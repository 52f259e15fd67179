use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::resources::{TableLayout, TrajectoryPaths};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub time_file: String,
    pub state_file: String,
    pub input_file: String,
    pub layout: TableLayout,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            time_file: "time.csv".to_string(),
            state_file: "state.csv".to_string(),
            input_file: "input.csv".to_string(),
            layout: TableLayout::Auto,
        }
    }
}

impl DataConfig {
    pub fn paths(&self) -> TrajectoryPaths {
        TrajectoryPaths::in_dir(&self.dir, &self.time_file, &self.state_file, &self.input_file)
    }
}
