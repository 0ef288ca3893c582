//! # fir_motion
//!
//! Jerk-limited point-to-point motion profiles for a single axis, obtained by
//! smoothing a constant-velocity command with a boxcar FIR filter.
//!
//! This library provides the following modules:
//! - `motion_request` for the validated five-scalar description of a move.
//! - `smoothing_kernel` for the boxcar FIR kernel and its convolution.
//! - `fir_profile` for turning a request into a filtered position sequence.
//! - `profile_analysis` for numeric derivatives and the unfiltered reference move.
//! - `profile_table` for the time/position/velocity/acceleration table and CSV export.
//! - `config` for text entries, TOML parameter files and caller-side state.
//! - `error` for the error types shared by all of the above.
//!
//! Author: Anton Khrustalev, creapunk

pub mod config;
pub mod error;
pub mod fir_profile;
pub mod motion_request;
pub mod profile_analysis;
pub mod profile_table;
pub mod smoothing_kernel;

// Re-export main items for convenience:
pub use config::*;
pub use error::*;
pub use fir_profile::*;
pub use motion_request::*;
pub use profile_analysis::*;
pub use profile_table::*;
pub use smoothing_kernel::*;
