//! Headless run configuration.

use std::path::PathBuf;

/// Settings for the fixed-step host loop
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Simulated duration (seconds)
    pub duration_secs: f32,

    /// Frame rate (FPS); each frame is one tick
    pub fps: u32,

    /// Simulated seconds between stats log lines
    pub log_interval_secs: f32,

    /// Raw little-endian f32 heights written after the run
    pub export_heights: Option<PathBuf>,

    /// Grayscale PNG heightmap written after the run
    pub snapshot: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            duration_secs: 10.0,
            fps: 60,
            log_interval_secs: 1.0,
            export_heights: None,
            snapshot: None,
        }
    }
}

impl RunConfig {
    /// Seconds per tick
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Number of ticks covering the configured duration
    pub fn total_frames(&self) -> u32 {
        (self.duration_secs.max(0.0) * self.fps as f32).round() as u32
    }

    /// Ticks between stats log lines (at least one)
    pub fn log_every(&self) -> u32 {
        ((self.log_interval_secs * self.fps as f32).round() as u32).max(1)
    }
}
