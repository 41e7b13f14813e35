//! One-dimensional complex FFTs used by the 2D synthesis.
//!
//! Neither direction is normalised: `reverse(direct(x)) == n · x`. The wave
//! amplitude scale of the ocean depends on this, so callers must not expect
//! a `1/n` factor anywhere.

mod planned;
mod radix2;

use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use planned::PlannedFft;
pub use radix2::Radix2;

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time/space domain to spectrum, twiddles `e^(-2πi k/n)`
    Direct,
    /// Spectrum to time/space domain, twiddles `e^(+2πi k/n)`
    Reverse,
}

/// In-place fixed-length transform.
pub trait Transform: Send {
    /// Sequence length this transform was built for
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transform `data` in place.
    ///
    /// # Panics
    /// If `data.len() != self.len()`.
    fn process(&mut self, data: &mut [Complex64], direction: Direction);
}

/// FFT implementation selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum FftBackend {
    /// Self-contained radix-2 Cooley–Tukey engine
    #[default]
    Radix2,
    /// Planned transforms from `rustfft`
    #[value(name = "rustfft")]
    RustFft,
}

impl FftBackend {
    /// Build a transform of length `len` (must be a power of two).
    pub fn plan(self, len: usize) -> Result<Box<dyn Transform>> {
        Ok(match self {
            Self::Radix2 => Box::new(Radix2::new(len)?),
            Self::RustFft => Box::new(PlannedFft::new(len)?),
        })
    }
}
