//! Radix-2 Cooley–Tukey FFT.
//!
//! Reordering is done as `p - 1` even/odd de-interleaving passes over
//! shrinking sub-blocks (`n = 2^p`), which lands every sample at its
//! bit-reversed index. `p` butterfly passes follow; pass `i` combines samples
//! `2^i` apart with twiddles `e^(∓2πi k / 2^(i+1))`.

use std::f64::consts::PI;

use rustfft::num_complex::Complex64;

use super::{Direction, Transform};
use crate::error::{Error, Result};

/// Radix-2 transform for one power-of-two length, with its own scratch buffer.
#[derive(Debug, Clone)]
pub struct Radix2 {
    len: usize,
    log2: u32,
    /// `e^(-2πi m/len)` for `m` in `0..len/2`
    twiddles: Vec<Complex64>,
    scratch: Vec<Complex64>,
}

impl Radix2 {
    pub fn new(len: usize) -> Result<Self> {
        if !len.is_power_of_two() {
            return Err(Error::FftLength(len));
        }
        let twiddles = (0..len / 2)
            .map(|m| Complex64::from_polar(1.0, -2.0 * PI * m as f64 / len as f64))
            .collect();
        Ok(Self {
            len,
            log2: len.trailing_zeros(),
            twiddles,
            scratch: vec![Complex64::default(); len],
        })
    }

    /// Forward transform in place.
    pub fn direct(&mut self, data: &mut [Complex64]) {
        self.process(data, Direction::Direct);
    }

    /// Inverse transform in place (unnormalised).
    pub fn reverse(&mut self, data: &mut [Complex64]) {
        self.process(data, Direction::Reverse);
    }

    fn sort(&mut self, data: &mut [Complex64]) {
        let mut block = self.len;
        for _ in 1..self.log2 {
            let half = block / 2;
            for (src, dst) in data
                .chunks_exact(block)
                .zip(self.scratch.chunks_exact_mut(block))
            {
                for k in 0..half {
                    dst[k] = src[2 * k];
                    dst[half + k] = src[2 * k + 1];
                }
            }
            data.copy_from_slice(&self.scratch);
            block = half;
        }
    }

    fn butterflies(&mut self, data: &mut [Complex64], direction: Direction) {
        let mut span = 1;
        while span < self.len {
            let stride = self.len / (2 * span);
            for start in (0..self.len).step_by(2 * span) {
                for k in 0..span {
                    let w = match direction {
                        Direction::Direct => self.twiddles[k * stride],
                        Direction::Reverse => self.twiddles[k * stride].conj(),
                    };
                    let index1 = start + k;
                    let index2 = index1 + span;
                    let a = data[index1];
                    let b = w * data[index2];
                    self.scratch[index1] = a + b;
                    self.scratch[index2] = a - b;
                }
            }
            data.copy_from_slice(&self.scratch);
            span *= 2;
        }
    }
}

impl Transform for Radix2 {
    fn len(&self) -> usize {
        self.len
    }

    fn process(&mut self, data: &mut [Complex64], direction: Direction) {
        assert_eq!(
            data.len(),
            self.len,
            "radix-2 FFT built for length {} was given {} samples",
            self.len,
            data.len()
        );
        self.sort(data);
        self.butterflies(data, direction);
    }
}
