//! Time evolution of the spectrum under a dispersion relation.

use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::{Grid, InitialAmplitudes};
use crate::spectrum::GRAVITY;

/// Relation between a wave's spatial frequency `|k|` and its angular frequency `ω`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Dispersion {
    /// Deep water: `ω = sqrt(g·|k|)`
    #[default]
    DeepWater,
    /// Deep water with a capillary correction: `ω = sqrt(g·|k|·(1 + |k|²·L²))`
    Capillary {
        /// Correction length `L` (meters)
        length: f64,
    },
}

impl Dispersion {
    /// Capillary correction length (meters)
    pub const CAPILLARY_LENGTH: f64 = 0.1;

    pub fn capillary() -> Self {
        Self::Capillary {
            length: Self::CAPILLARY_LENGTH,
        }
    }

    /// Angular frequency (rad/s) of a wave with wavenumber `k`.
    pub fn angular_frequency(&self, k: f64) -> f64 {
        match *self {
            Self::DeepWater => (GRAVITY * k).sqrt(),
            Self::Capillary { length } => (GRAVITY * k * (1.0 + k * k * length * length)).sqrt(),
        }
    }
}

/// `H(k, t)` from the fixed `H0` field.
///
/// Each amplitude is `H0(k)·e^(iωt) + conj(H0(-k))·e^(-iωt)`, which keeps
/// `H(-k, t) = conj(H(k, t))` and therefore a real surface after the
/// inverse transform.
#[derive(Debug, Clone)]
pub struct Evolution {
    grid: Grid,
    initial: InitialAmplitudes,
    /// `ω` per grid point, same layout as `initial`
    omega: Vec<f64>,
}

impl Evolution {
    pub fn new(grid: Grid, dispersion: Dispersion, initial: InitialAmplitudes) -> Self {
        let omega = (0..grid.nx)
            .flat_map(|i| (0..grid.ny).map(move |j| (i, j)))
            .map(|(i, j)| dispersion.angular_frequency(grid.wavevector(i, j).length()))
            .collect();
        Self {
            grid,
            initial,
            omega,
        }
    }

    pub fn initial(&self) -> &InitialAmplitudes {
        &self.initial
    }

    /// Complex amplitude at frequency index `(i, j)` and time `t` (seconds).
    pub fn amplitude_at(&self, i: usize, j: usize, t: f64) -> Complex64 {
        let (mi, mj) = self.grid.mirror(i, j);
        let phase = t * self.omega[i * self.grid.ny + j];
        let (sin, cos) = phase.sin_cos();
        let forward = Complex64::new(cos, sin);
        let backward = Complex64::new(cos, -sin);
        self.initial.get(i, j) * forward + self.initial.get(mi, mj).conj() * backward
    }
}
