use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use super::LoadError;

/// Orientation of a data table on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLayout {
    /// Pick whichever orientation matches the number of timestamps,
    /// channel rows when the shape fits both
    #[default]
    Auto,
    /// One row per channel, one column per sample
    ChannelRows,
    /// One row per sample, one column per channel
    SampleRows,
}

/// Dense numeric table, row-major.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Table {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Table {
    pub fn read(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut data = Vec::new();
        let mut rows = 0;
        let mut cols = 0;
        for record in reader.records() {
            let record = record.map_err(|source| LoadError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            cols = record.len();
            for (column, field) in record.iter().enumerate() {
                let value = field.parse::<f64>().map_err(|_| LoadError::Parse {
                    path: path.to_path_buf(),
                    row: rows,
                    column,
                    value: field.to_string(),
                })?;
                data.push(value);
            }
            rows += 1;
        }

        if data.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Flatten a single row or single column table into a vector.
    pub fn into_vector(self, path: &Path) -> Result<Vec<f64>, LoadError> {
        if self.rows == 1 || self.cols == 1 {
            Ok(self.data)
        } else {
            Err(LoadError::Shape {
                path: path.to_path_buf(),
                expected: "a single row or column".to_string(),
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Orientation implied by the shape alone. `None` when the table is
    /// square or fits neither orientation.
    pub fn implied_layout(&self, width: usize, samples: usize) -> Option<TableLayout> {
        let sample_rows = self.rows == samples && self.cols == width;
        let channel_rows = self.rows == width && self.cols == samples;
        match (sample_rows, channel_rows) {
            (true, false) => Some(TableLayout::SampleRows),
            (false, true) => Some(TableLayout::ChannelRows),
            _ => None,
        }
    }

    /// Split the table into one `width`-long record per sample.
    pub fn into_samples(
        self,
        width: usize,
        samples: usize,
        layout: TableLayout,
        path: &Path,
    ) -> Result<Vec<Vec<f64>>, LoadError> {
        let sample_rows = self.rows == samples && self.cols == width;
        let channel_rows = self.rows == width && self.cols == samples;

        let layout = match layout {
            TableLayout::Auto if channel_rows => TableLayout::ChannelRows,
            TableLayout::Auto if sample_rows => TableLayout::SampleRows,
            TableLayout::SampleRows if sample_rows => TableLayout::SampleRows,
            TableLayout::ChannelRows if channel_rows => TableLayout::ChannelRows,
            _ => {
                return Err(LoadError::Shape {
                    path: path.to_path_buf(),
                    expected: format!("{} channels for {} samples", width, samples),
                    rows: self.rows,
                    cols: self.cols,
                })
            }
        };

        let records = match layout {
            TableLayout::ChannelRows => (0..samples)
                .map(|s| (0..width).map(|c| self.get(c, s)).collect())
                .collect(),
            _ => self.data.chunks(width).map(|row| row.to_vec()).collect(),
        };
        Ok(records)
    }
}
