use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::ExportError;
use crate::profile_analysis::ProfileDerivatives;

/// One exported sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileRow {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

/// Time, position, velocity and acceleration columns of equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileTable {
    pub sampling_time: f64,
    pub time: Vec<f64>,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub acceleration: Vec<f64>,
}

impl ProfileTable {
    /// Builds the table from a sampled position sequence, deriving velocity
    /// and acceleration numerically.
    pub fn from_positions(positions: &[f64], sampling_time: f64) -> Self {
        let ProfileDerivatives {
            velocity,
            acceleration,
        } = ProfileDerivatives::from_positions(positions, sampling_time);
        let time = (0..positions.len())
            .map(|i| i as f64 * sampling_time)
            .collect();

        Self {
            sampling_time,
            time,
            position: positions.to_vec(),
            velocity,
            acceleration,
        }
    }

    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = ProfileRow> + '_ {
        (0..self.len()).map(move |i| ProfileRow {
            time: self.time[i],
            position: self.position[i],
            velocity: self.velocity[i],
            acceleration: self.acceleration[i],
        })
    }

    /// Serializes the table as CSV with a `Time,Position,Velocity,Acceleration`
    /// header line.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), ExportError> {
        if self.is_empty() {
            return Err(ExportError::EmptyTable);
        }

        let mut wtr = csv::Writer::from_writer(writer);
        for row in self.rows() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        if self.is_empty() {
            return Err(ExportError::EmptyTable);
        }
        let file = File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }
}
