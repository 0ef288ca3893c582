use crate::motion_request::MotionRequest;

/// First differences divided by the sample period.
///
/// Returns one sample fewer than the input, or nothing for fewer than two
/// samples.
pub fn diff(values: &[f64], sampling_time: f64) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| (w[1] - w[0]) / sampling_time)
        .collect()
}

/// Numeric derivative with the same length as the input.
///
/// Central differences in the interior, one-sided differences at both ends.
pub fn gradient(values: &[f64], sampling_time: f64) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut out = Vec::with_capacity(n);
    out.push((values[1] - values[0]) / sampling_time);
    out.extend(
        values
            .windows(3)
            .map(|w| (w[2] - w[0]) / (2.0 * sampling_time)),
    );
    out.push((values[n - 1] - values[n - 2]) / sampling_time);
    out
}

/// Velocity and acceleration recovered from a sampled position sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileDerivatives {
    pub velocity: Vec<f64>,
    pub acceleration: Vec<f64>,
}

impl ProfileDerivatives {
    pub fn from_positions(positions: &[f64], sampling_time: f64) -> Self {
        let velocity = gradient(positions, sampling_time);
        let acceleration = gradient(&velocity, sampling_time);
        Self {
            velocity,
            acceleration,
        }
    }

    /// Largest absolute velocity.
    pub fn peak_velocity(&self) -> f64 {
        peak(&self.velocity)
    }

    /// Largest absolute acceleration.
    pub fn peak_acceleration(&self) -> f64 {
        peak(&self.acceleration)
    }
}

fn peak(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |m: f64, v| m.max(v.abs()))
}

/// The unfiltered move, sampled at the same rate, for comparison against the
/// smoothed profile.
///
/// Position ramps linearly from the start in steps of
/// `velocity * sampling_time` and stops before the end position; velocity
/// and acceleration are plain first differences, so each is one sample
/// shorter than the sequence it was taken from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceProfile {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub acceleration: Vec<f64>,
}

impl ReferenceProfile {
    pub fn new(request: &MotionRequest) -> Self {
        let ts = request.sampling_time();
        let start = request.position_start();
        let step = request.velocity() * ts;

        // step shares the sign of the range, so the count is positive
        let count = (request.range() / step).ceil().max(0.0) as usize;
        let position: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
        let velocity = diff(&position, ts);
        let acceleration = diff(&velocity, ts);

        Self {
            position,
            velocity,
            acceleration,
        }
    }
}
