//! Standard normal deviates via the polar Box–Muller method.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Gaussian sampler over any uniform source.
///
/// Each call to [`next_sample`](Self::next_sample) draws pairs of uniforms in
/// `[-1, 1]` until one lands strictly inside the unit disc (excluding the
/// origin), then returns `u1 · sqrt(-2 ln s / s)`.
#[derive(Debug, Clone)]
pub struct GaussianSampler<R = ChaCha8Rng> {
    rng: R,
}

impl GaussianSampler<ChaCha8Rng> {
    /// Deterministic sampler: the same seed yields the same sequence on every platform.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GaussianSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one standard normal deviate.
    pub fn next_sample(&mut self) -> f64 {
        loop {
            let u1: f64 = self.rng.random_range(-1.0..=1.0);
            let u2: f64 = self.rng.random_range(-1.0..=1.0);
            let s = u1 * u1 + u2 * u2;
            if s > 0.0 && s < 1.0 {
                return u1 * (-2.0 * s.ln() / s).sqrt();
            }
        }
    }
}

impl<R: Rng> Iterator for GaussianSampler<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_sample())
    }
}
