//! Initial complex amplitudes `H0`, drawn once per simulation.

use rand::Rng;
use rustfft::num_complex::Complex64;

use super::Grid;
use crate::gaussian::GaussianSampler;
use crate::spectrum::PhillipsSpectrum;

/// Frequency-domain amplitudes at `t = 0`, indexed `[i][j]` over `0..nx × 0..ny`.
#[derive(Debug, Clone)]
pub struct InitialAmplitudes {
    ny: usize,
    values: Vec<Complex64>,
}

impl InitialAmplitudes {
    /// Sample `sqrt(P(k)/2) · ξ` for the real and imaginary parts independently.
    ///
    /// All real parts are drawn first (x-major), then all imaginary parts, so
    /// a given seed always reproduces the same field.
    pub fn build<R: Rng>(
        grid: &Grid,
        spectrum: &PhillipsSpectrum,
        sampler: &mut GaussianSampler<R>,
    ) -> Self {
        let scales: Vec<f64> = (0..grid.nx)
            .flat_map(|i| (0..grid.ny).map(move |j| (i, j)))
            .map(|(i, j)| (spectrum.density(grid.wavevector(i, j)) / 2.0).sqrt())
            .collect();

        let mut values: Vec<Complex64> = scales
            .iter()
            .map(|scale| Complex64::new(scale * sampler.next_sample(), 0.0))
            .collect();
        for (value, scale) in values.iter_mut().zip(&scales) {
            value.im = scale * sampler.next_sample();
        }

        Self {
            ny: grid.ny,
            values,
        }
    }

    pub fn get(&self, i: usize, j: usize) -> Complex64 {
        self.values[i * self.ny + j]
    }

    /// Sum of squared magnitudes over the grid
    pub fn energy(&self) -> f64 {
        self.values.iter().map(|h| h.norm_sqr()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum() -> PhillipsSpectrum {
        PhillipsSpectrum {
            wind_speed: 10.0,
            wind_alignment: 1,
            min_wave_size: 0.0,
            amplitude: 1e-4,
        }
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let grid = Grid::new(8, 8, 10.0, 10.0);
        let a = InitialAmplitudes::build(&grid, &spectrum(), &mut GaussianSampler::from_seed(3));
        let b = InitialAmplitudes::build(&grid, &spectrum(), &mut GaussianSampler::from_seed(3));
        assert_eq!(a.values, b.values);
    }

    #[test]
    fn test_zero_mode_is_empty() {
        let grid = Grid::new(8, 4, 10.0, 10.0);
        let h0 = InitialAmplitudes::build(&grid, &spectrum(), &mut GaussianSampler::from_seed(1));
        assert_eq!(h0.get(4, 2), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_amplitude_gives_empty_field() {
        let grid = Grid::new(4, 4, 10.0, 10.0);
        let calm = PhillipsSpectrum {
            amplitude: 0.0,
            ..spectrum()
        };
        let h0 = InitialAmplitudes::build(&grid, &calm, &mut GaussianSampler::from_seed(1));
        assert_eq!(h0.energy(), 0.0);
    }

    #[test]
    fn test_real_and_imaginary_parts_are_independent_draws() {
        let grid = Grid::new(4, 4, 10.0, 10.0);
        let s = spectrum();
        let h0 = InitialAmplitudes::build(&grid, &s, &mut GaussianSampler::from_seed(8));

        let mut sampler = GaussianSampler::from_seed(8);
        let re: Vec<f64> = (0..16).map(|_| sampler.next_sample()).collect();
        let im: Vec<f64> = (0..16).map(|_| sampler.next_sample()).collect();
        for i in 0..4 {
            for j in 0..4 {
                let scale = (s.density(grid.wavevector(i, j)) / 2.0).sqrt();
                let h = h0.get(i, j);
                assert_eq!(h.re, scale * re[i * 4 + j]);
                assert_eq!(h.im, scale * im[i * 4 + j]);
            }
        }
    }
}
