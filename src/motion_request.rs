use crate::error::ProfileError;

/// The five scalars describing one point-to-point move.
///
/// A `MotionRequest` can only be obtained through [`MotionRequest::new`], so
/// every instance has already passed the checks the generator relies on:
/// all values finite, a positive sampling time, nonzero velocity and
/// acceleration, a nonzero travel range and a velocity pointing along it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionRequest {
    /// Sample period in seconds.
    sampling_time: f64,

    /// (pos_start, pos_end)
    pos: (f64, f64),

    /// Cruise velocity. Its sign must match `pos.1 - pos.0`.
    velocity: f64,

    /// Acceleration limit. Only the magnitude is used.
    acceleration: f64,
}

impl MotionRequest {
    /// Validates the parameters and builds a request.
    pub fn new(
        sampling_time: f64,
        position_start: f64,
        position_end: f64,
        velocity: f64,
        acceleration: f64,
    ) -> Result<Self, ProfileError> {
        let params = [
            ("sampling_time", sampling_time),
            ("position_start", position_start),
            ("position_end", position_end),
            ("velocity", velocity),
            ("acceleration", acceleration),
        ];
        if let Some((name, _)) = params.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ProfileError::NonFinite { name });
        }

        if sampling_time <= 0.0 {
            return Err(ProfileError::InvalidSamplingTime(sampling_time));
        }
        if velocity == 0.0 {
            return Err(ProfileError::ZeroVelocity);
        }
        if acceleration == 0.0 {
            return Err(ProfileError::ZeroAcceleration);
        }

        let range = position_end - position_start;
        if range == 0.0 {
            return Err(ProfileError::EmptyProfile);
        }
        // +1.0 or -1.0 on both sides, zero was rejected above
        if range.signum() != velocity.signum() {
            return Err(ProfileError::DirectionMismatch { velocity, range });
        }

        Ok(Self {
            sampling_time,
            pos: (position_start, position_end),
            velocity,
            acceleration,
        })
    }

    pub fn sampling_time(&self) -> f64 {
        self.sampling_time
    }

    pub fn position_start(&self) -> f64 {
        self.pos.0
    }

    pub fn position_end(&self) -> f64 {
        self.pos.1
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Signed travel distance, `position_end - position_start`.
    pub fn range(&self) -> f64 {
        self.pos.1 - self.pos.0
    }

    /// +1.0 for forward moves, -1.0 for backward ones.
    pub fn direction(&self) -> f64 {
        self.range().signum()
    }

    /// Rise time of the smoothing filter, `|velocity / acceleration|`.
    pub fn time_constant(&self) -> f64 {
        (self.velocity / self.acceleration).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_forward_and_backward_moves() {
        let fwd = MotionRequest::new(0.001, 0.0, 50.0, 50.0, 500.0).unwrap();
        assert_eq!(fwd.range(), 50.0);
        assert_eq!(fwd.direction(), 1.0);
        assert!((fwd.time_constant() - 0.1).abs() < 1e-12);

        let back = MotionRequest::new(0.001, 50.0, 0.0, -50.0, 500.0).unwrap();
        assert_eq!(back.range(), -50.0);
        assert_eq!(back.direction(), -1.0);
        assert!((back.time_constant() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_divisors() {
        assert_eq!(
            MotionRequest::new(0.001, 0.0, 50.0, 0.0, 500.0),
            Err(ProfileError::ZeroVelocity)
        );
        assert_eq!(
            MotionRequest::new(0.001, 0.0, 50.0, 50.0, 0.0),
            Err(ProfileError::ZeroAcceleration)
        );
    }

    #[test]
    fn rejects_non_positive_sampling_time() {
        assert_eq!(
            MotionRequest::new(0.0, 0.0, 50.0, 50.0, 500.0),
            Err(ProfileError::InvalidSamplingTime(0.0))
        );
        assert_eq!(
            MotionRequest::new(-0.01, 0.0, 50.0, 50.0, 500.0),
            Err(ProfileError::InvalidSamplingTime(-0.01))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(
            MotionRequest::new(0.001, f64::NAN, 50.0, 50.0, 500.0),
            Err(ProfileError::NonFinite {
                name: "position_start"
            })
        );
        assert_eq!(
            MotionRequest::new(0.001, 0.0, 50.0, 50.0, f64::INFINITY),
            Err(ProfileError::NonFinite {
                name: "acceleration"
            })
        );
    }

    #[test]
    fn rejects_zero_range_and_wrong_direction() {
        assert_eq!(
            MotionRequest::new(0.001, 10.0, 10.0, 50.0, 500.0),
            Err(ProfileError::EmptyProfile)
        );
        assert_eq!(
            MotionRequest::new(0.001, 0.0, 50.0, -50.0, 500.0),
            Err(ProfileError::DirectionMismatch {
                velocity: -50.0,
                range: 50.0
            })
        );
    }
}
