use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: row {row}, column {column}: '{value}' is not a number")]
    Parse {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },
    #[error("{path} contains no samples")]
    Empty { path: PathBuf },
    #[error("{path}: expected {expected}, found {rows} rows x {cols} columns")]
    Shape {
        path: PathBuf,
        expected: String,
        rows: usize,
        cols: usize,
    },
    #[error("Sample count mismatch: {time} timestamps, {states} states, {inputs} inputs")]
    LengthMismatch {
        time: usize,
        states: usize,
        inputs: usize,
    },
    #[error("Sample {index} contains a value that is not finite")]
    NonFinite { index: usize },
    #[error("Timestamps are not strictly increasing at sample {index}")]
    NonMonotonicTime { index: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LookupError {
    #[error("No sample at t = {time:.2} s")]
    IndexNotFound { time: f64 },
}
