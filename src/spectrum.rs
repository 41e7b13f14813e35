//! Phillips spectrum: wave energy density over wavevectors.

use glam::DVec2;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Phillips spectrum parameters
///
/// The wind blows along +x; `wind_alignment` is the exponent applied to
/// `cos²` of the angle between the wavevector and the wind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhillipsSpectrum {
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Directional sharpening exponent (0 = isotropic)
    pub wind_alignment: u32,
    /// Small-wave cutoff length (m)
    pub min_wave_size: f64,
    /// Phillips constant "A"
    pub amplitude: f64,
}

impl PhillipsSpectrum {
    /// Largest wave length sustained by the wind, `V²/g` (meters)
    pub fn largest_wave(&self) -> f64 {
        self.wind_speed * self.wind_speed / GRAVITY
    }

    /// Spectral density at wavevector `k`.
    ///
    /// Always non-negative; the zero mode carries no energy.
    pub fn density(&self, k: DVec2) -> f64 {
        let k_sq = k.length_squared();
        if k_sq == 0.0 {
            return 0.0;
        }
        let l = self.largest_wave();

        // wind_speed = 0 gives exp(-inf) = 0, not NaN
        let mut density = self.amplitude * (-1.0 / (k_sq * l * l)).exp();
        density *= (-k_sq * self.min_wave_size * self.min_wave_size).exp();
        density *= directional(k.x * k.x / k_sq, self.wind_alignment);
        density / (k_sq * k_sq)
    }
}

fn directional(cos_sq: f64, alignment: u32) -> f64 {
    // Exponents past i32::MAX underflow to zero anyway
    cos_sq.powi(alignment.min(i32::MAX as u32) as i32)
}
