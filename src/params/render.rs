//! Frame export configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Height map export configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Simulated duration to export (seconds)
    pub duration_secs: f64,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS); frame `i` is sampled at `t = i / fps`
    pub fps: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.0,
            output_dir: PathBuf::from("ocean"),
            fps: 35,
        }
    }
}

impl ExportConfig {
    /// Check that the frame schedule is finite.
    pub fn validate(&self) -> Result<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(Error::InvalidParameter {
                name: "duration",
                value: self.duration_secs,
            });
        }
        Ok(())
    }

    /// Total number of frames to write
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f64).ceil() as usize
    }

    /// Simulation time of a frame (seconds)
    pub fn frame_time(&self, frame: usize) -> f64 {
        frame as f64 / self.fps as f64
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of a single frame image
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_schedule() {
        let config = ExportConfig {
            duration_secs: 1.5,
            fps: 10,
            ..ExportConfig::default()
        };
        assert_eq!(config.total_frames(), 15);
        assert!((config.frame_time(5) - 0.5).abs() < 1e-12);
        assert_eq!(config.frame_time(0), 0.0);
    }

    #[test]
    fn test_rejects_unbounded_duration() {
        for duration_secs in [f64::INFINITY, f64::NAN, -1.0] {
            let config = ExportConfig {
                duration_secs,
                ..ExportConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidParameter { name: "duration", .. })
            ));
        }
        assert!(ExportConfig::default().validate().is_ok());
    }

    #[test]
    fn test_frame_paths() {
        let config = ExportConfig {
            output_dir: PathBuf::from("out"),
            ..ExportConfig::default()
        };
        assert_eq!(
            config.frame_path(12),
            PathBuf::from("out").join("frames").join("frame_00012.png")
        );
    }
}
