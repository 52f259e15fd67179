mod error;
mod store;
mod table;

pub use error::{LoadError, LookupError};
pub use store::{
    InputSample, LookupPolicy, Pose, Trajectory, TrajectoryPaths, TrajectorySample, INPUT_WIDTH,
    STATE_WIDTH,
};
pub use table::TableLayout;
