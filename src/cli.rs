//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use fftocean::fft::FftBackend;
use fftocean::ocean::Dispersion;
use fftocean::params::{ExportConfig, OceanParams};

/// Command line arguments
///
/// Ocean flags override values loaded from `--config`.
#[derive(Parser, Debug)]
#[command(name = "fftocean")]
#[command(about = "Tessendorf FFT ocean height map generator", long_about = None)]
pub struct Args {
    /// RON file with ocean parameters
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Actual width of the ocean (meters)
    #[arg(long, value_name = "METERS")]
    pub lx: Option<f64>,

    /// Actual height of the ocean (meters)
    #[arg(long, value_name = "METERS")]
    pub ly: Option<f64>,

    /// Number of samples along x (power of 2)
    #[arg(long)]
    pub nx: Option<usize>,

    /// Number of samples along y (power of 2)
    #[arg(long)]
    pub ny: Option<usize>,

    /// Wind speed (meters per second)
    #[arg(long, value_name = "M_PER_S")]
    pub wind_speed: Option<f64>,

    /// How strongly waves follow the wind direction (integer exponent)
    #[arg(long)]
    pub wind_alignment: Option<u32>,

    /// Waves shorter than this are damped out (meters)
    #[arg(long, value_name = "METERS")]
    pub min_wave_size: Option<f64>,

    /// Phillips constant, scales wave height
    #[arg(long)]
    pub amplitude: Option<f64>,

    /// Random seed for the initial spectrum
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dispersion relation
    #[arg(long, value_enum)]
    pub dispersion: Option<DispersionArg>,

    /// FFT implementation
    #[arg(long, value_enum)]
    pub fft: Option<FftBackend>,

    /// Simulated duration to export (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 1.0)]
    pub duration: f64,

    /// Frames per simulated second
    #[arg(long, default_value_t = 35)]
    pub fps: u32,

    /// Output directory
    #[arg(long, value_name = "DIR", default_value = "ocean")]
    pub output: PathBuf,

    /// Print the effective parameters as RON and exit
    #[arg(long)]
    pub dump_config: bool,
}

/// Dispersion relation choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DispersionArg {
    /// ω = sqrt(g·k)
    Deep,
    /// ω = sqrt(g·k·(1 + k²L²)), L = 0.1m
    Capillary,
}

impl From<DispersionArg> for Dispersion {
    fn from(arg: DispersionArg) -> Self {
        match arg {
            DispersionArg::Deep => Dispersion::DeepWater,
            DispersionArg::Capillary => Dispersion::capillary(),
        }
    }
}

impl Args {
    /// Apply CLI overrides to loaded parameters.
    pub fn apply_overrides(&self, params: &mut OceanParams) {
        if let Some(lx) = self.lx {
            params.lx = lx;
        }
        if let Some(ly) = self.ly {
            params.ly = ly;
        }
        if let Some(nx) = self.nx {
            params.nx = nx;
        }
        if let Some(ny) = self.ny {
            params.ny = ny;
        }
        if let Some(wind_speed) = self.wind_speed {
            params.wind_speed = wind_speed;
        }
        if let Some(wind_alignment) = self.wind_alignment {
            params.wind_alignment = wind_alignment;
        }
        if let Some(min_wave_size) = self.min_wave_size {
            params.min_wave_size = min_wave_size;
        }
        if let Some(amplitude) = self.amplitude {
            params.amplitude = amplitude;
        }
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if let Some(dispersion) = self.dispersion {
            params.dispersion = dispersion.into();
        }
        if let Some(fft) = self.fft {
            params.fft_backend = fft;
        }
    }

    /// Defaults, then the config file, then flags.
    pub fn ocean_params(&self) -> fftocean::Result<OceanParams> {
        let mut params = match &self.config {
            Some(path) => OceanParams::load(path)?,
            None => OceanParams::default(),
        };
        self.apply_overrides(&mut params);
        Ok(params)
    }

    /// Frame export settings; rejects a non-finite or negative duration.
    pub fn export_config(&self) -> fftocean::Result<ExportConfig> {
        let export = ExportConfig {
            duration_secs: self.duration,
            output_dir: self.output.clone(),
            fps: self.fps,
        };
        export.validate()?;
        Ok(export)
    }
}
