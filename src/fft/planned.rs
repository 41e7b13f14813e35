//! `rustfft`-backed transform with the same unnormalised convention.

use std::sync::Arc;

use rustfft::{num_complex::Complex64, Fft, FftPlanner};

use super::{Direction, Transform};
use crate::error::{Error, Result};

/// Planned forward/inverse pair for one length.
pub struct PlannedFft {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex64>,
}

impl PlannedFft {
    /// Plan both directions. The length must be a power of two so the
    /// backends stay interchangeable.
    pub fn new(len: usize) -> Result<Self> {
        if !len.is_power_of_two() {
            return Err(Error::FftLength(len));
        }
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);
        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());
        Ok(Self {
            len,
            forward,
            inverse,
            scratch: vec![Complex64::default(); scratch_len],
        })
    }
}

impl Transform for PlannedFft {
    fn len(&self) -> usize {
        self.len
    }

    fn process(&mut self, data: &mut [Complex64], direction: Direction) {
        assert_eq!(
            data.len(),
            self.len,
            "planned FFT built for length {} was given {} samples",
            self.len,
            data.len()
        );
        let fft = match direction {
            Direction::Direct => &self.forward,
            Direction::Reverse => &self.inverse,
        };
        fft.process_with_scratch(data, &mut self.scratch);
    }
}
