//! Camera capture configuration.

use serde::{Deserialize, Serialize};

/// Configuration for camera capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Camera device index or identifier.
    pub device_id: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Target frames per second for the preview poll loop.
    pub fps: u32,
    /// Mirror delivered frames horizontally (selfie-style preview).
    pub mirror: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            width: 640,
            height: 480,
            fps: 30,
            mirror: true,
        }
    }
}

impl CaptureConfig {
    /// Creates a new configuration with the specified dimensions.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Returns the poll interval matching the target frame rate.
    ///
    /// The shell waits this long between poll ticks, including after a
    /// transient "no frame" result, so a stalled device never busy-spins.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), CaptureConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptureConfigError::InvalidDimensions);
        }
        if self.fps == 0 || self.fps > 120 {
            return Err(CaptureConfigError::InvalidFrameRate);
        }
        Ok(())
    }
}

/// Capture configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CaptureConfigError {
    #[error("invalid frame dimensions")]
    InvalidDimensions,
    #[error("invalid frame rate (must be 1-120 fps)")]
    InvalidFrameRate,
}
