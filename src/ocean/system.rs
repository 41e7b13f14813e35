//! 2D spectral synthesis: evolves the spectrum and inverse-transforms it into heights.

use rustfft::num_complex::Complex64;

use super::{Evolution, Grid, InitialAmplitudes};
use crate::error::Result;
use crate::fft::{Direction, Transform};
use crate::gaussian::GaussianSampler;
use crate::params::OceanParams;

/// Ocean surface simulation
///
/// Owns the immutable initial spectrum and every per-frame buffer. Each call
/// to [`advance`](Self::advance) rebuilds the full height grid before
/// returning, so readers never see a partially updated frame.
pub struct Ocean {
    params: OceanParams,
    grid: Grid,
    evolution: Evolution,
    column_fft: Box<dyn Transform>,
    row_fft: Box<dyn Transform>,
    /// Column-transformed spectrum, `[x][y]`
    columns: Vec<Complex64>,
    /// One row gathered from `columns`
    row: Vec<Complex64>,
    /// Surface heights, `[y][x]`
    heights: Vec<f64>,
    imaginary_residue: f64,
    time: f64,
}

impl Ocean {
    /// Validate parameters, draw the initial spectrum and synthesize `t = 0`.
    pub fn new(params: OceanParams) -> Result<Self> {
        params.validate()?;
        let grid = params.grid();
        let column_fft = params.fft_backend.plan(grid.ny)?;
        let row_fft = params.fft_backend.plan(grid.nx)?;

        let mut sampler = GaussianSampler::from_seed(params.seed);
        let initial = InitialAmplitudes::build(&grid, &params.spectrum(), &mut sampler);

        log::info!(
            "Ocean {}x{} samples over {}m x {}m (wind {} m/s, alignment {}, seed {}, {:?} FFT)",
            grid.nx,
            grid.ny,
            grid.lx,
            grid.ly,
            params.wind_speed,
            params.wind_alignment,
            params.seed,
            params.fft_backend,
        );
        log::debug!("Initial spectrum energy: {:e}", initial.energy());

        let evolution = Evolution::new(grid, params.dispersion, initial);
        let mut ocean = Self {
            params,
            grid,
            evolution,
            column_fft,
            row_fft,
            columns: vec![Complex64::default(); grid.len()],
            row: vec![Complex64::default(); grid.nx],
            heights: vec![0.0; grid.len()],
            imaginary_residue: 0.0,
            time: 0.0,
        };
        ocean.advance(0.0);
        Ok(ocean)
    }

    /// Recompute the height grid for simulation time `time_s` (seconds).
    ///
    /// # Panics
    /// If `time_s` is NaN or infinite.
    pub fn advance(&mut self, time_s: f64) {
        assert!(time_s.is_finite(), "simulation time must be finite, got {time_s}");
        let (nx, ny) = (self.grid.nx, self.grid.ny);

        // First pass: one inverse FFT per column
        for (x, column) in self.columns.chunks_exact_mut(ny).enumerate() {
            for (y, value) in column.iter_mut().enumerate() {
                *value = self.evolution.amplitude_at(x, y, time_s);
            }
            self.column_fft.process(column, Direction::Reverse);
        }

        // Second pass: one inverse FFT per row, then undo the centered spectrum
        let mut residue: f64 = 0.0;
        for y in 0..ny {
            for (x, value) in self.row.iter_mut().enumerate() {
                *value = self.columns[x * ny + y];
            }
            self.row_fft.process(&mut self.row, Direction::Reverse);

            let heights = &mut self.heights[y * nx..(y + 1) * nx];
            for (x, (height, value)) in heights.iter_mut().zip(&self.row).enumerate() {
                let sign = if (x + y) % 2 == 0 { 1.0 } else { -1.0 };
                *height = sign * value.re;
                residue = residue.max(value.im.abs());
            }
        }

        self.imaginary_residue = residue;
        self.time = time_s;
        log::trace!("Advanced ocean to t = {time_s:.3}s (residue {residue:e})");
    }

    /// Surface height at sample `(x, y)`.
    ///
    /// `x == nx` and `y == ny` wrap to the opposite edge, which closes
    /// tileable strips.
    ///
    /// # Panics
    /// If `x > nx` or `y > ny`.
    pub fn height(&self, x: usize, y: usize) -> f64 {
        let (nx, ny) = (self.grid.nx, self.grid.ny);
        assert!(
            x <= nx && y <= ny,
            "sample ({x}, {y}) outside {nx}x{ny} grid"
        );
        self.heights[(y % ny) * nx + x % nx]
    }

    /// All heights, row-major (`[y][x]`)
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Largest absolute height in the current frame
    pub fn peak_height(&self) -> f64 {
        self.heights.iter().fold(0.0_f64, |peak, h| peak.max(h.abs()))
    }

    /// Largest imaginary magnitude discarded by the last synthesis.
    pub fn imaginary_residue(&self) -> f64 {
        self.imaginary_residue
    }

    /// Time of the last [`advance`](Self::advance) (seconds)
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn nx(&self) -> usize {
        self.grid.nx
    }

    pub fn ny(&self) -> usize {
        self.grid.ny
    }

    pub fn lx(&self) -> f64 {
        self.grid.lx
    }

    pub fn ly(&self) -> f64 {
        self.grid.ly
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn params(&self) -> &OceanParams {
        &self.params
    }
}
