//! Parameter definitions with physical units and documented semantics.
//!
//! All parameters follow these conventions:
//! - Physical units (meters, seconds)
//! - Documented ranges and meanings
//! - Validation before any simulation state is built

mod ocean;
mod render;

// Re-export all types
pub use ocean::OceanParams;
pub use render::ExportConfig;
