//! Ocean surface synthesis from a Phillips spectrum.
//!
//! The initial spectrum is sampled once; every frame it is evolved in time
//! and turned into heights by a 2D inverse FFT.

mod amplitude;
mod evolution;
mod grid;
mod mesh;
mod system;

// Re-export public types
pub use amplitude::InitialAmplitudes;
pub use evolution::{Dispersion, Evolution};
pub use grid::Grid;
pub use mesh::{SurfaceMesh, Vertex};
pub use system::Ocean;
