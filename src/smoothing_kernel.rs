use crate::error::ProfileError;

/// Upper bound on the number of samples in any sequence the generator
/// builds (raw command, kernel window or filtered output).
pub const MAX_SAMPLES: usize = 10_000_000;

/// Uniform (boxcar) FIR kernel used to smooth a velocity command.
///
/// Each tap weighs `1 / time_constant`, so the taps sum to roughly
/// `1 / sampling_time`; convolving and then scaling by the sampling time gives
/// a unit-gain moving average whose rise time equals the time constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingKernel {
    /// Weight shared by every tap.
    weight: f64,
    window: usize,
}

impl SmoothingKernel {
    /// Builds a kernel of `floor(time_constant / sampling_time)` taps.
    ///
    /// Fails with [`ProfileError::DegenerateFilterWindow`] when the time
    /// constant is shorter than one sample, and with
    /// [`ProfileError::ProfileTooLong`] when the window exceeds [`MAX_SAMPLES`].
    pub fn boxcar(time_constant: f64, sampling_time: f64) -> Result<Self, ProfileError> {
        let window = (time_constant / sampling_time).floor();
        if window < 1.0 {
            return Err(ProfileError::DegenerateFilterWindow {
                time_constant,
                sampling_time,
            });
        }
        if window > MAX_SAMPLES as f64 {
            return Err(ProfileError::ProfileTooLong { samples: window });
        }

        Ok(Self {
            weight: 1.0 / time_constant,
            window: window as usize,
        })
    }

    /// Number of taps.
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn taps(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::repeat(self.weight).take(self.window)
    }

    pub fn tap_sum(&self) -> f64 {
        self.weight * self.window as f64
    }

    /// Full discrete convolution of `signal` with the kernel.
    ///
    /// The output holds `signal.len() + window - 1` samples, or none when the
    /// signal is empty. All taps are equal, so each output is the running sum
    /// of the last `window` inputs times the tap weight.
    pub fn convolve_full(&self, signal: &[f64]) -> Vec<f64> {
        if signal.is_empty() {
            return Vec::new();
        }

        let len = signal.len() + self.window - 1;
        let mut out = Vec::with_capacity(len);
        let mut sum = 0.0_f64;
        for m in 0..len {
            // sample entering the window
            if let Some(&x) = signal.get(m) {
                sum += x;
            }
            // sample leaving it
            if m >= self.window {
                if let Some(&x) = signal.get(m - self.window) {
                    sum -= x;
                }
            }
            out.push(sum * self.weight);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_floor_of_ratio() {
        let kernel = SmoothingKernel::boxcar(0.1, 0.001).unwrap();
        assert_eq!(kernel.window(), 100);
        assert_eq!(kernel.taps().count(), 100);
        assert!(kernel.taps().all(|t| (t - 10.0).abs() < 1e-12));
        assert!((kernel.tap_sum() - 1000.0).abs() < 1e-9);

        let kernel = SmoothingKernel::boxcar(0.0255, 0.01).unwrap();
        assert_eq!(kernel.window(), 2);
    }

    #[test]
    fn zero_window_is_rejected() {
        let err = SmoothingKernel::boxcar(1e-5, 1.0).unwrap_err();
        assert_eq!(
            err,
            ProfileError::DegenerateFilterWindow {
                time_constant: 1e-5,
                sampling_time: 1.0
            }
        );
    }

    #[test]
    fn oversized_window_is_rejected() {
        let err = SmoothingKernel::boxcar(1.0, 1e-300).unwrap_err();
        assert!(matches!(err, ProfileError::ProfileTooLong { .. }));
    }

    #[test]
    fn full_convolution_matches_hand_computation() {
        let kernel = SmoothingKernel::boxcar(2.0, 1.0).unwrap(); // taps [0.5, 0.5]
        let out = kernel.convolve_full(&[1.0, 2.0, 3.0]);
        assert_eq!(out, vec![0.5, 1.5, 2.5, 1.5]);
    }

    #[test]
    fn running_sum_matches_direct_convolution() {
        let kernel = SmoothingKernel::boxcar(0.4, 0.1).unwrap(); // 4 taps of 2.5
        assert_eq!(kernel.window(), 4);
        let signal = [1.0, -2.0, 3.5, 0.25, 8.0, -1.0];

        let mut direct = vec![0.0; signal.len() + 3];
        for (i, x) in signal.iter().enumerate() {
            for (k, tap) in kernel.taps().enumerate() {
                direct[i + k] += x * tap;
            }
        }

        let fast = kernel.convolve_full(&signal);
        assert_eq!(fast.len(), direct.len());
        for (a, b) in fast.iter().zip(&direct) {
            assert!((a - b).abs() < 1e-12, "{a} != {b}");
        }
    }

    #[test]
    fn empty_signal_convolves_to_nothing() {
        let kernel = SmoothingKernel::boxcar(2.0, 1.0).unwrap();
        assert!(kernel.convolve_full(&[]).is_empty());
    }
}
