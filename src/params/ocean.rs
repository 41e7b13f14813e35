//! Ocean simulation parameters: grid, physical extents and spectrum shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fft::FftBackend;
use crate::ocean::{Dispersion, Grid};
use crate::spectrum::PhillipsSpectrum;

/// Ocean simulation parameters
///
/// Immutable for the lifetime of an [`Ocean`](crate::ocean::Ocean); changing
/// anything here means building a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanParams {
    /// Physical width spanned by the grid along x (meters)
    pub lx: f64,

    /// Physical height spanned by the grid along y (meters)
    pub ly: f64,

    /// Samples along x (must be a power of 2)
    pub nx: usize,

    /// Samples along y (must be a power of 2)
    pub ny: usize,

    /// Wind speed (meters per second), sets the largest wave length V²/g
    pub wind_speed: f64,

    /// Directional exponent: 0 = isotropic, larger values keep waves along the wind (x) axis
    pub wind_alignment: u32,

    /// Waves shorter than this are damped out (meters)
    pub min_wave_size: f64,

    /// Phillips constant "A", overall spectral energy (dimensionless)
    pub amplitude: f64,

    /// Seed for the Gaussian noise that picks the initial wave phases
    pub seed: u64,

    /// Dispersion relation used to evolve the spectrum in time
    pub dispersion: Dispersion,

    /// FFT implementation used for the 2D synthesis
    pub fft_backend: FftBackend,
}

impl Default for OceanParams {
    fn default() -> Self {
        Self {
            lx: 130.0,
            ly: 350.0,
            nx: 128,
            ny: 256,
            wind_speed: 25.0,
            wind_alignment: 1,
            min_wave_size: 0.0,
            amplitude: 0.000005,
            seed: 42,
            dispersion: Dispersion::DeepWater,
            fft_backend: FftBackend::Radix2,
        }
    }
}

impl OceanParams {
    /// Check every construction-time constraint.
    pub fn validate(&self) -> Result<()> {
        for (axis, value) in [("nx", self.nx), ("ny", self.ny)] {
            if !value.is_power_of_two() {
                return Err(Error::NotPowerOfTwo { axis, value });
            }
        }
        for (axis, value) in [("lx", self.lx), ("ly", self.ly)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::NonPositiveExtent { axis, value });
            }
        }
        for (name, value) in [
            ("wind_speed", self.wind_speed),
            ("min_wave_size", self.min_wave_size),
            ("amplitude", self.amplitude),
        ] {
            non_negative(name, value)?;
        }
        if let Dispersion::Capillary { length } = self.dispersion {
            non_negative("dispersion.length", length)?;
        }
        Ok(())
    }

    /// Grid shape described by these parameters.
    pub fn grid(&self) -> Grid {
        Grid::new(self.nx, self.ny, self.lx, self.ly)
    }

    /// Phillips spectrum described by these parameters.
    pub fn spectrum(&self) -> PhillipsSpectrum {
        PhillipsSpectrum {
            wind_speed: self.wind_speed,
            wind_alignment: self.wind_alignment,
            min_wave_size: self.min_wave_size,
            amplitude: self.amplitude,
        }
    }

    /// Parse parameters from RON text. Missing fields keep their defaults.
    pub fn from_ron_str(contents: &str) -> Result<Self> {
        ron::from_str(contents).map_err(Error::ConfigParse)
    }

    /// Load parameters from a RON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::ConfigRead)?;
        let params = Self::from_ron_str(&contents)?;
        log::info!("Loaded ocean parameters from {}", path.display());
        Ok(params)
    }

    pub fn to_ron_string(&self) -> Result<String> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, pretty).map_err(Error::ConfigSerialize)
    }

    /// Write parameters to a RON file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::ConfigWrite)?;
        }
        let serialized = self.to_ron_string()?;
        std::fs::write(path, serialized).map_err(Error::ConfigWrite)
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(OceanParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let params = OceanParams {
            nx: 96,
            ..OceanParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::NotPowerOfTwo { axis: "nx", value: 96 })
        ));

        let params = OceanParams {
            ny: 0,
            ..OceanParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::NotPowerOfTwo { axis: "ny", value: 0 })
        ));
    }

    #[test]
    fn test_rejects_bad_extents() {
        let params = OceanParams {
            lx: 0.0,
            ..OceanParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::NonPositiveExtent { axis: "lx", .. })
        ));

        let params = OceanParams {
            ly: f64::NAN,
            ..OceanParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::NonPositiveExtent { axis: "ly", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_spectrum_parameters() {
        let params = OceanParams {
            wind_speed: -1.0,
            ..OceanParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParameter { name: "wind_speed", .. })
        ));

        let params = OceanParams {
            dispersion: Dispersion::Capillary { length: -0.1 },
            ..OceanParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParameter {
                name: "dispersion.length",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_amplitude_is_allowed() {
        let params = OceanParams {
            amplitude: 0.0,
            ..OceanParams::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let params = OceanParams::from_ron_str("(nx: 64, wind_speed: 10.0)").unwrap();
        assert_eq!(params.nx, 64);
        assert_eq!(params.wind_speed, 10.0);
        assert_eq!(params.ny, OceanParams::default().ny);
        assert_eq!(params.dispersion, Dispersion::DeepWater);
    }

    #[test]
    fn test_ron_string_round_trip() {
        let params = OceanParams {
            dispersion: Dispersion::Capillary { length: 0.1 },
            fft_backend: FftBackend::RustFft,
            ..OceanParams::default()
        };
        let text = params.to_ron_string().unwrap();
        assert_eq!(OceanParams::from_ron_str(&text).unwrap(), params);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ocean.ron");
        let params = OceanParams {
            seed: 7,
            ..OceanParams::default()
        };
        params.save(&path).unwrap();
        assert_eq!(OceanParams::load(&path).unwrap(), params);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = OceanParams::load(&dir.path().join("absent.ron"));
        assert!(matches!(result, Err(Error::ConfigRead(_))));
    }

    #[test]
    fn test_invalid_ron_fails() {
        assert!(matches!(
            OceanParams::from_ron_str("{{not valid}}"),
            Err(Error::ConfigParse(_))
        ));
    }
}
