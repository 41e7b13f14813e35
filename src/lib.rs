//! FFTOcean library - Tessendorf ocean surface synthesis

pub mod error;
pub mod export;
pub mod fft;
pub mod gaussian;
pub mod ocean;
pub mod params;
pub mod spectrum;

pub use error::{Error, Result};
pub use ocean::Ocean;
pub use params::OceanParams;
