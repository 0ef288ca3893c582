use crate::error::ProfileError;
use crate::motion_request::MotionRequest;
use crate::smoothing_kernel::{SmoothingKernel, MAX_SAMPLES};

/// Generates a jerk-limited position profile for a point-to-point move.
///
/// Shorthand for [`MotionRequest::new`] followed by [`MotionRequest::generate`].
pub fn generate(
    sampling_time: f64,
    position_start: f64,
    position_end: f64,
    velocity: f64,
    acceleration: f64,
) -> Result<Vec<f64>, ProfileError> {
    MotionRequest::new(
        sampling_time,
        position_start,
        position_end,
        velocity,
        acceleration,
    )?
    .generate()
}

impl MotionRequest {
    /// Smooths the constant-velocity command with a boxcar FIR filter and
    /// integrates it into positions.
    ///
    /// # Detailed explanation of the logic:
    ///
    /// 1. **Positive axis**. The move is solved with magnitudes of range,
    ///    velocity and acceleration; the result is mirrored by the direction
    ///    of travel at the very end.
    ///
    /// 2. **Short moves**. If the cruise time `range / velocity` is shorter
    ///    than the filter time constant, the velocity is replaced by
    ///    `range / velocity`. This formula is kept as-is for compatibility
    ///    with existing profiles even though its units differ from velocity.
    ///
    /// 3. **Raw command**. `ceil(duration / sampling_time)` samples of constant
    ///    velocity cover the half-open interval `[0, duration)`.
    ///
    /// 4. **Filter**. Full convolution with the boxcar kernel, scaled by the
    ///    sampling time, padded with one resting sample on each side.
    ///
    /// 5. **Integrate**. Running sum of `velocity * sampling_time`, offset by
    ///    the start position.
    ///
    /// The result holds `raw samples + window + 1` positions.
    pub fn generate(&self) -> Result<Vec<f64>, ProfileError> {
        let ts = self.sampling_time();
        let direction = self.direction();
        let time_constant = self.time_constant();

        let kernel = SmoothingKernel::boxcar(time_constant, ts)?;
        let raw = self.velocity_command()?;
        if raw.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }
        let total = raw.len() + kernel.window() + 1;
        if total > MAX_SAMPLES {
            return Err(ProfileError::ProfileTooLong {
                samples: total as f64,
            });
        }

        let filtered = kernel.convolve_full(&raw);

        // [0, filtered * ts.., 0] integrated sample by sample
        let mut positions = Vec::with_capacity(filtered.len() + 2);
        let mut travelled = 0.0;
        positions.push(self.position_start());
        for vel in filtered.iter().map(|v| v * ts).chain(std::iter::once(0.0)) {
            travelled += vel * ts;
            positions.push(self.position_start() + direction * travelled);
        }
        Ok(positions)
    }

    /// Cruise velocity actually commanded, after the short-move rescale.
    pub fn effective_velocity(&self) -> f64 {
        let range = self.range().abs();
        let velocity = self.velocity().abs();
        if range / velocity < self.time_constant() {
            range / velocity
        } else {
            velocity
        }
    }

    /// Nominal duration of the unfiltered move.
    pub fn duration(&self) -> f64 {
        self.range().abs() / self.effective_velocity()
    }

    /// Number of samples on the half-open grid `[0, duration)`.
    ///
    /// Fails with [`ProfileError::ProfileTooLong`] above [`MAX_SAMPLES`].
    pub fn raw_len(&self) -> Result<usize, ProfileError> {
        let samples = (self.duration() / self.sampling_time()).ceil();
        if samples > MAX_SAMPLES as f64 {
            return Err(ProfileError::ProfileTooLong { samples });
        }
        Ok(if samples > 0.0 { samples as usize } else { 0 })
    }

    /// The unfiltered constant velocity samples, on the positive axis.
    fn velocity_command(&self) -> Result<Vec<f64>, ProfileError> {
        Ok(vec![self.effective_velocity(); self.raw_len()?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_nominal_move() {
        let positions = generate(0.001, 0.0, 50.0, 50.0, 500.0).unwrap();
        // 1000 raw samples, 100 taps, 2 padding samples, minus the convolution overlap
        assert_eq!(positions.len(), 1101);
        assert_eq!(positions[0], 0.0);
        assert!((positions[positions.len() - 1] - 50.0).abs() < 1e-6);
    }

    #[test]
    fn starts_at_offset_start_position() {
        let positions = generate(0.001, 10.0, 60.0, 50.0, 500.0).unwrap();
        assert_eq!(positions[0], 10.0);
        assert!((positions[positions.len() - 1] - 60.0).abs() < 1e-6);
    }

    #[test]
    fn zero_velocity_is_rejected() {
        assert_eq!(
            generate(0.001, 0.0, 50.0, 0.0, 500.0),
            Err(ProfileError::ZeroVelocity)
        );
    }

    #[test]
    fn degenerate_window_is_rejected() {
        let err = generate(1.0, 0.0, 10.0, 1.0, 100000.0).unwrap_err();
        assert!(matches!(err, ProfileError::DegenerateFilterWindow { .. }));
    }

    #[test]
    fn short_move_rescales_velocity() {
        let request = MotionRequest::new(0.001, 0.0, 1.0, 50.0, 500.0).unwrap();
        // cruise time 0.02s is shorter than the 0.1s time constant
        assert!((request.effective_velocity() - 0.02).abs() < 1e-15);
        assert!((request.duration() - 50.0).abs() < 1e-9);

        let positions = request.generate().unwrap();
        assert_eq!(request.raw_len(), Ok(50000));
        assert_eq!(positions.len(), 50000 + 100 + 1);
        assert!((positions[positions.len() - 1] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn oversized_requests_fail_without_allocating() {
        // time constant of one second sampled every 1e-300 s
        let err = generate(1e-300, 0.0, 1.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, ProfileError::ProfileTooLong { .. }));

        // 10 taps, but a billion raw samples
        let request = MotionRequest::new(1e-9, 0.0, 1.0, 1.0, 1e8).unwrap();
        assert!(matches!(
            request.raw_len(),
            Err(ProfileError::ProfileTooLong { .. })
        ));
        assert!(matches!(
            request.generate(),
            Err(ProfileError::ProfileTooLong { .. })
        ));
    }

    #[test]
    fn acceleration_sign_is_ignored() {
        let pos = generate(0.001, 0.0, 50.0, 50.0, 500.0).unwrap();
        let neg = generate(0.001, 0.0, 50.0, 50.0, -500.0).unwrap();
        assert_eq!(pos, neg);
    }

    #[test]
    fn backward_move_mirrors_forward_move() {
        let fwd = generate(0.001, 0.0, 50.0, 50.0, 500.0).unwrap();
        let back = generate(0.001, 0.0, -50.0, -50.0, 500.0).unwrap();
        assert_eq!(fwd.len(), back.len());
        for (f, b) in fwd.iter().zip(&back) {
            assert_eq!(*f, -*b);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = generate(0.002, -3.0, 7.5, 20.0, 150.0).unwrap();
        let b = generate(0.002, -3.0, 7.5, 20.0, 150.0).unwrap();
        assert_eq!(a, b);
    }
}
