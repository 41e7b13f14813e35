//! Grid shape and the index → wavevector mapping.

use std::f64::consts::PI;

use glam::DVec2;

/// Sampling of a rectangular ocean patch, shared by the frequency and
/// spatial domains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Samples along x
    pub nx: usize,
    /// Samples along y
    pub ny: usize,
    /// Physical width (meters)
    pub lx: f64,
    /// Physical height (meters)
    pub ly: f64,
}

impl Grid {
    pub fn new(nx: usize, ny: usize, lx: f64, ly: f64) -> Self {
        Self { nx, ny, lx, ly }
    }

    /// Number of samples in one domain (`nx · ny`)
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wavevector of frequency index `(i, j)`.
    ///
    /// Indices are centered: `(nx/2, ny/2)` is the zero wavevector.
    pub fn wavevector(&self, i: usize, j: usize) -> DVec2 {
        let kx = 2.0 * PI * (i as f64 - (self.nx / 2) as f64) / self.lx;
        let ky = 2.0 * PI * (j as f64 - (self.ny / 2) as f64) / self.ly;
        DVec2::new(kx, ky)
    }

    /// Index of the opposite wavevector, wrapped into `0..nx × 0..ny`.
    ///
    /// The wrap folds the Nyquist row and column onto themselves, so the
    /// pairing stays an involution on the transformed range.
    pub fn mirror(&self, i: usize, j: usize) -> (usize, usize) {
        ((self.nx - i % self.nx) % self.nx, (self.ny - j % self.ny) % self.ny)
    }

    /// Distance between neighbouring samples (meters)
    pub fn spacing(&self) -> DVec2 {
        DVec2::new(self.lx / self.nx as f64, self.ly / self.ny as f64)
    }
}
