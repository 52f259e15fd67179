use bevy::prelude::*;
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::table::{Table, TableLayout};
use super::{LoadError, LookupError};
use crate::resources::FrameConverter;

/// Number of channels per row of the state table
pub const STATE_WIDTH: usize = 12;
/// Number of channels per row of the input table
pub const INPUT_WIDTH: usize = 6;

/// How a playback time is resolved to a sample index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Timestamp rounded to 2 decimals must match exactly
    Exact,
    /// Closest sample, with the time clamped into the recorded span
    #[default]
    Nearest,
}

/// One recorded state of the drone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Sample time [s]
    pub time: f64,
    /// Position in the earth frame [m]
    pub position: Vector3<f64>,
    /// Roll, pitch, yaw [rad]
    pub attitude: Vector3<f64>,
    /// Body angular rates p, q, r [rad/s]
    pub body_rates: Vector3<f64>,
    /// Body linear velocities u, v, w [m/s]
    pub body_velocity: Vector3<f64>,
}

impl TrajectorySample {
    /// Build a sample from a state table row `[phi, theta, psi, p, q, r, x, y, z, u, v, w]`.
    pub fn from_state_row(time: f64, row: &[f64]) -> Self {
        Self {
            time,
            attitude: Vector3::new(row[0], row[1], row[2]),
            body_rates: Vector3::new(row[3], row[4], row[5]),
            position: Vector3::new(row[6], row[7], row[8]),
            body_velocity: Vector3::new(row[9], row[10], row[11]),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && [
                &self.position,
                &self.attitude,
                &self.body_rates,
                &self.body_velocity,
            ]
            .iter()
            .all(|v| v.iter().all(|c| c.is_finite()))
    }
}

/// Control inputs applied at one sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    /// First gimbal angle [rad]
    pub gimbal_1: f64,
    /// Second gimbal angle [rad]
    pub gimbal_2: f64,
    /// Rotor speed [rad/s]
    pub rotor_speed: f64,
    pub gimbal_1_rate: f64,
    pub gimbal_2_rate: f64,
    pub rotor_acceleration: f64,
}

impl InputSample {
    pub fn from_input_row(row: &[f64]) -> Self {
        Self {
            gimbal_1: row[0],
            gimbal_2: row[1],
            rotor_speed: row[2],
            gimbal_1_rate: row[3],
            gimbal_2_rate: row[4],
            rotor_acceleration: row[5],
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.gimbal_1,
            self.gimbal_2,
            self.rotor_speed,
            self.gimbal_1_rate,
            self.gimbal_2_rate,
            self.rotor_acceleration,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Locations of the three tables making up a recorded flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrajectoryPaths {
    pub time: PathBuf,
    pub state: PathBuf,
    pub input: PathBuf,
}

impl TrajectoryPaths {
    pub fn in_dir(dir: &Path, time: &str, state: &str, input: &str) -> Self {
        Self {
            time: dir.join(time),
            state: dir.join(state),
            input: dir.join(input),
        }
    }
}

/// Loaded flight: aligned samples and inputs indexed by timestamp
#[derive(Resource, Debug, Clone)]
pub struct Trajectory {
    times: Vec<f64>,
    samples: Vec<TrajectorySample>,
    inputs: Vec<InputSample>,
    scale: f64,
}

impl Trajectory {
    /// Read and validate the three tables. Nothing is shared with any
    /// previously loaded trajectory, so a failure leaves the caller's state alone.
    pub fn load(paths: &TrajectoryPaths, layout: TableLayout) -> Result<Self, LoadError> {
        let times = Table::read(&paths.time)?.into_vector(&paths.time)?;
        let count = times.len();

        let state_table = Table::read(&paths.state)?;
        let input_table = Table::read(&paths.input)?;

        // Both tables come from the same writer, so one orientation holds for both
        let layout = match layout {
            TableLayout::Auto => state_table
                .implied_layout(STATE_WIDTH, count)
                .or_else(|| input_table.implied_layout(INPUT_WIDTH, count))
                .unwrap_or(TableLayout::ChannelRows),
            fixed => fixed,
        };

        let states = state_table.into_samples(STATE_WIDTH, count, layout, &paths.state)?;
        let inputs = input_table.into_samples(INPUT_WIDTH, count, layout, &paths.input)?;

        let samples = times
            .iter()
            .zip(&states)
            .map(|(&t, row)| TrajectorySample::from_state_row(t, row))
            .collect();
        let inputs = inputs.iter().map(|row| InputSample::from_input_row(row)).collect();

        Self::from_samples(samples, inputs)
    }

    pub fn from_samples(
        samples: Vec<TrajectorySample>,
        inputs: Vec<InputSample>,
    ) -> Result<Self, LoadError> {
        if samples.is_empty() {
            return Err(LoadError::Empty {
                path: PathBuf::new(),
            });
        }
        if samples.len() != inputs.len() {
            return Err(LoadError::LengthMismatch {
                time: samples.len(),
                states: samples.len(),
                inputs: inputs.len(),
            });
        }

        let non_finite = samples
            .iter()
            .zip(&inputs)
            .position(|(sample, input)| !sample.is_finite() || !input.is_finite());
        if let Some(index) = non_finite {
            return Err(LoadError::NonFinite { index });
        }

        let times: Vec<f64> = samples.iter().map(|s| s.time).collect();
        if let Some(index) = times.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(LoadError::NonMonotonicTime { index: index + 1 });
        }

        let peak = samples
            .iter()
            .map(|s| s.position.z.abs())
            .fold(0.0_f64, f64::max);
        let scale = if peak > 0.0 { 2.0 * peak } else { 1.0 };

        Ok(Self {
            times,
            samples,
            inputs,
            scale,
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn inputs(&self) -> &[InputSample] {
        &self.inputs
    }

    pub fn sample(&self, index: usize) -> Option<&TrajectorySample> {
        self.samples.get(index)
    }

    pub fn input(&self, index: usize) -> Option<&InputSample> {
        self.inputs.get(index)
    }

    pub fn max_time(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Normalisation applied to positions before rendering: twice the
    /// largest vertical excursion.
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Index of the sample whose timestamp, rounded to centiseconds, equals `time`
    /// rounded the same way.
    pub fn nearest_index(&self, time: f64) -> Result<usize, LookupError> {
        let key = centiseconds(time);
        let index = self.times.partition_point(|&t| centiseconds(t) < key);
        match self.times.get(index) {
            Some(&t) if centiseconds(t) == key => Ok(index),
            _ => Err(LookupError::IndexNotFound { time }),
        }
    }

    /// Index of the sample with the closest timestamp. Ties go to the earlier sample.
    pub fn closest_index(&self, time: f64) -> usize {
        let last = self.times.len() - 1;
        let time = time.clamp(self.times[0], self.times[last]);
        let index = self.times.partition_point(|&t| t < time);
        if index == 0 {
            return 0;
        }
        if index > last {
            return last;
        }
        if time - self.times[index - 1] <= self.times[index] - time {
            index - 1
        } else {
            index
        }
    }

    pub fn lookup(&self, time: f64, policy: LookupPolicy) -> Result<usize, LookupError> {
        match policy {
            LookupPolicy::Exact => self.nearest_index(time),
            LookupPolicy::Nearest => Ok(self.closest_index(time)),
        }
    }

    /// Model matrix for the sample at `index`, in the render frame
    pub fn pose(&self, index: usize, frames: &FrameConverter) -> Option<Pose> {
        self.samples.get(index).map(|sample| {
            Pose::from_matrix(&frames.pose_matrix(&sample.attitude, &sample.position, self.scale))
        })
    }
}

fn centiseconds(time: f64) -> i64 {
    (time * 100.0).round() as i64
}

/// Rotation and translation placing the body frame in the render frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub matrix: Mat4,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }
}

impl Pose {
    pub fn from_matrix(m: &Matrix4<f64>) -> Self {
        // nalgebra stores column-major, as does Mat4
        let cols: Vec<f32> = m.iter().map(|&v| v as f32).collect();
        Self {
            matrix: Mat4::from_cols_slice(&cols),
        }
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.matrix.transform_point3(point)
    }

    pub fn translation(&self) -> Vec3 {
        self.matrix.w_axis.truncate()
    }
}
