use monocopter::resources::{TableLayout, TrajectoryPaths};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Recorded flight written to a temporary directory in the producer's
/// comma separated format.
pub struct FlightFixture {
    pub dir: TempDir,
    pub times: Vec<f64>,
    pub states: Vec<[f64; 12]>,
    pub inputs: Vec<[f64; 6]>,
}

/// Straight climb to `peak` metres over `count` samples spaced 10 ms apart,
/// yawing slowly and moving forward at 1 m/s.
pub fn climb(count: usize, peak: f64) -> FlightFixture {
    let times: Vec<f64> = (0..count).map(|i| i as f64 * 0.01).collect();
    let last = (count.max(2) - 1) as f64;

    let states = (0..count)
        .map(|i| {
            let f = i as f64 / last;
            [
                0.0,
                0.0,
                0.1 * f,
                0.0,
                0.0,
                0.1,
                times[i],
                0.0,
                -peak * f,
                1.0,
                0.0,
                0.0,
            ]
        })
        .collect();
    let inputs = (0..count)
        .map(|i| [0.01 * i as f64, -0.01 * i as f64, 2276.9, 0.0, 0.0, 0.0])
        .collect();

    FlightFixture {
        dir: TempDir::new().unwrap(),
        times,
        states,
        inputs,
    }
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn channel_rows<const W: usize>(records: &[[f64; W]]) -> String {
    (0..W)
        .map(|c| join(&records.iter().map(|r| r[c]).collect::<Vec<_>>()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn sample_rows<const W: usize>(records: &[[f64; W]]) -> String {
    records.iter().map(|r| join(r)).collect::<Vec<_>>().join("\n")
}

impl FlightFixture {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> TrajectoryPaths {
        TrajectoryPaths::in_dir(self.path(), "time.csv", "state.csv", "input.csv")
    }

    /// Write all three tables. `SampleRows` writes one sample per line,
    /// anything else one channel per line as the producer does.
    pub fn write(self, layout: TableLayout) -> Self {
        let (time, state, input) = match layout {
            TableLayout::SampleRows => (
                self.times.iter().map(|t| t.to_string()).collect::<Vec<_>>().join("\n"),
                sample_rows(&self.states),
                sample_rows(&self.inputs),
            ),
            _ => (
                join(&self.times),
                channel_rows(&self.states),
                channel_rows(&self.inputs),
            ),
        };
        self.write_file("time.csv", &time);
        self.write_file("state.csv", &state);
        self.write_file("input.csv", &input);
        self
    }

    pub fn write_file(&self, name: &str, contents: &str) {
        fs::write(self.path().join(name), format!("{}\n", contents)).unwrap();
    }
}
