//! # Profile parameters and application state
//!
//! Parameters reach the generator either as raw text entries (one per field,
//! as typed by a user) or from a TOML file.
//!
//! ## Example: TOML Configuration
//!
//! ```toml
//! [motion]
//! sampling_time = 0.001
//! position_start = 0.0
//! position_end = 50.0
//! velocity = 50.0
//! acceleration = 500.0
//!
//! [export]
//! output = "profile.csv"
//! ```
//!
//! ## Example: Rust Usage
//!
//! ```rust
//! use fir_motion::ProfileConfig;
//! let config: ProfileConfig = toml::from_str("[motion]\nposition_end = 50.0").unwrap();
//! let request = config.motion.request().unwrap();
//! assert_eq!(request.position_end(), 50.0);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ConfigError, ExportError, InputError, ProfileError};
use crate::motion_request::MotionRequest;
use crate::profile_table::ProfileTable;

/// Field labels, in the order the generator takes them.
pub const FIELDS: [&str; 5] = [
    "Sampling Time",
    "Position Start",
    "Position End",
    "Velocity",
    "Acceleration",
];

/// Raw, unparsed parameter entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileEntries {
    pub sampling_time: String,
    pub position_start: String,
    pub position_end: String,
    pub velocity: String,
    pub acceleration: String,
}

impl ProfileEntries {
    /// Parses every entry as a number and validates the resulting request.
    pub fn parse(&self) -> Result<MotionRequest, AppError> {
        let ts = parse_entry(FIELDS[0], &self.sampling_time)?;
        let p0 = parse_entry(FIELDS[1], &self.position_start)?;
        let p1 = parse_entry(FIELDS[2], &self.position_end)?;
        let v = parse_entry(FIELDS[3], &self.velocity)?;
        let a = parse_entry(FIELDS[4], &self.acceleration)?;

        Ok(MotionRequest::new(ts, p0, p1, v, a)?)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn parse_entry(field: &'static str, value: &str) -> Result<f64, InputError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InputError::Missing { field });
    }
    value.parse::<f64>().map_err(|_| InputError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Motion parameters as stored in a TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MotionConfig {
    #[serde(default = "default_sampling_time")]
    pub sampling_time: f64,
    #[serde(default)]
    pub position_start: f64,
    #[serde(default)]
    pub position_end: f64,
    #[serde(default = "default_velocity")]
    pub velocity: f64,
    #[serde(default = "default_acceleration")]
    pub acceleration: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            sampling_time: default_sampling_time(),
            position_start: 0.0,
            position_end: 0.0,
            velocity: default_velocity(),
            acceleration: default_acceleration(),
        }
    }
}

impl MotionConfig {
    pub fn request(&self) -> Result<MotionRequest, ProfileError> {
        MotionRequest::new(
            self.sampling_time,
            self.position_start,
            self.position_end,
            self.velocity,
            self.acceleration,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl ProfileConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

fn default_sampling_time() -> f64 {
    0.001
}
fn default_velocity() -> f64 {
    50.0
}
fn default_acceleration() -> f64 {
    500.0
}

/// Caller-side state: the current entries and the last computed profile.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub entries: ProfileEntries,
    last: Option<ProfileTable>,
}

impl AppState {
    pub fn new(entries: ProfileEntries) -> Self {
        Self {
            entries,
            last: None,
        }
    }

    /// Parses the entries, generates the profile and keeps its table.
    ///
    /// On error the previously computed table is left untouched.
    pub fn compute(&mut self) -> Result<&ProfileTable, AppError> {
        let request = self.entries.parse()?;
        let positions = request.generate()?;
        let table = ProfileTable::from_positions(&positions, request.sampling_time());
        Ok(&*self.last.insert(table))
    }

    pub fn last(&self) -> Option<&ProfileTable> {
        self.last.as_ref()
    }

    /// Writes the last computed profile to `path`.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        self.last
            .as_ref()
            .ok_or(ExportError::NoProfile)?
            .save_csv(path)
    }

    /// Empties the entries. The last profile stays available for export.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
