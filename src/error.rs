use thiserror::Error;

/// Errors raised by the profile generator for a single request.
///
/// Every variant is fatal for the invocation that produced it; no partial
/// profile is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("parameter `{name}` must be a finite number")]
    NonFinite { name: &'static str },

    #[error("sampling time must be positive, got {0}")]
    InvalidSamplingTime(f64),

    #[error("velocity must be nonzero")]
    ZeroVelocity,

    #[error("acceleration must be nonzero")]
    ZeroAcceleration,

    #[error("velocity {velocity} points against the direction of travel {range}")]
    DirectionMismatch { velocity: f64, range: f64 },

    /// `floor(time_constant / sampling_time)` came out as zero.
    #[error(
        "FIR filter window size is zero (time constant {time_constant}s, sampling time {sampling_time}s)"
    )]
    DegenerateFilterWindow {
        time_constant: f64,
        sampling_time: f64,
    },

    #[error("motion produces an empty profile")]
    EmptyProfile,

    /// A sample count came out above [`crate::MAX_SAMPLES`].
    #[error("profile needs {samples} samples, more than the supported maximum")]
    ProfileTooLong { samples: f64 },
}

/// A parameter entry could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing value for {field}")]
    Missing { field: &'static str },

    #[error("invalid value for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Failures while writing a profile table out.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no trajectory data to save, compute a profile first")]
    NoProfile,

    #[error("trajectory table is empty")]
    EmptyTable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures while loading a TOML parameter file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors surfaced by [`crate::AppState`] operations.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
