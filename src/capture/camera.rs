//! Camera abstraction for frame acquisition.
//!
//! This module provides a trait-based abstraction over camera hardware,
//! allowing for both real camera input and mock implementations for testing.

use super::{CaptureConfig, Frame};
use thiserror::Error;

/// Errors that can occur during camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    /// The device could not be bound. Recoverable: the caller decides
    /// whether to retry, back off, or surface it to the operator.
    #[error("camera unavailable: {0}")]
    Unavailable(String),
}

/// Trait for camera implementations.
///
/// Transient read failures are reported as `None` from [`read_frame`],
/// never as a hang: the poll loop is expected to run at a fixed cadence
/// and simply try again on the next tick. No retry policy lives here.
///
/// [`read_frame`]: CameraSource::read_frame
pub trait CameraSource {
    /// Opens and binds the capture device. Idempotent.
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError>;

    /// Returns the most recent available frame, or `None` on transient
    /// failure. Must not block the caller indefinitely.
    fn read_frame(&mut self) -> Option<Frame>;

    /// Checks if the device is currently bound.
    fn is_open(&self) -> bool;

    /// Releases the device. Idempotent; safe on a never-opened source.
    fn release(&mut self);
}

/// Mock camera for testing that generates synthetic frames.
///
/// Frames are produced in device-native BGR order and converted at the
/// boundary, exactly like a real device path would be.
#[derive(Debug, Default)]
pub struct MockCamera {
    config: Option<CaptureConfig>,
    sequence: u64,
    drop_next: bool,
}

impl MockCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `read_frame` call report a transient failure.
    pub fn drop_next_frame(&mut self) {
        self.drop_next = true;
    }
}

impl CameraSource for MockCamera {
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError> {
        config
            .validate()
            .map_err(|e| CameraError::Unavailable(e.to_string()))?;
        if self.config.is_none() {
            self.sequence = 0;
        }
        self.config = Some(config.clone());
        tracing::info!("MockCamera opened with config: {:?}", config);
        Ok(())
    }

    fn read_frame(&mut self) -> Option<Frame> {
        let config = self.config.as_ref()?;
        if self.drop_next {
            self.drop_next = false;
            return None;
        }

        // Deterministic gradient pattern, varied by sequence number so
        // successive frames are distinguishable in tests.
        let count = (config.width as usize) * (config.height as usize);
        let mut pixels = Vec::with_capacity(count * 3);
        for i in 0..count {
            let v = ((i as u64 + self.sequence * 7) % 256) as u8;
            pixels.extend_from_slice(&[v, v.wrapping_add(85), v.wrapping_add(170)]);
        }
        self.sequence += 1;

        let frame = Frame::from_bgr(pixels, config.width, config.height);
        Some(if config.mirror {
            frame.mirror_horizontal()
        } else {
            frame
        })
    }

    fn is_open(&self) -> bool {
        self.config.is_some()
    }

    fn release(&mut self) {
        if self.config.take().is_some() {
            tracing::info!("MockCamera released");
        }
    }
}

/// Real camera backed by `nokhwa` (enabled with the `camera` feature).
#[cfg(feature = "camera")]
pub struct DeviceCamera {
    inner: Option<nokhwa::Camera>,
    mirror: bool,
}

#[cfg(feature = "camera")]
impl DeviceCamera {
    pub fn new() -> Self {
        Self {
            inner: None,
            mirror: true,
        }
    }
}

#[cfg(feature = "camera")]
impl Default for DeviceCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "camera")]
impl CameraSource for DeviceCamera {
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError> {
        use nokhwa::pixel_format::RgbFormat;
        use nokhwa::utils::{
            CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType,
            Resolution,
        };

        if self.inner.is_some() {
            return Ok(());
        }
        config
            .validate()
            .map_err(|e| CameraError::Unavailable(e.to_string()))?;

        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(
                Resolution::new(config.width, config.height),
                FrameFormat::MJPEG,
                config.fps,
            ),
        ));
        let mut camera = nokhwa::Camera::new(CameraIndex::Index(config.device_id), requested)
            .map_err(|e| CameraError::Unavailable(e.to_string()))?;
        camera
            .open_stream()
            .map_err(|e| CameraError::Unavailable(e.to_string()))?;

        self.mirror = config.mirror;
        self.inner = Some(camera);
        tracing::info!(device = config.device_id, "camera stream opened");
        Ok(())
    }

    fn read_frame(&mut self) -> Option<Frame> {
        let camera = self.inner.as_mut()?;
        let buffer = camera.frame().ok()?;
        let decoded = buffer.decode_image::<nokhwa::pixel_format::RgbFormat>().ok()?;
        let (width, height) = (decoded.width(), decoded.height());
        let frame = Frame::new(decoded.into_raw(), width, height);
        Some(if self.mirror {
            frame.mirror_horizontal()
        } else {
            frame
        })
    }

    fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    fn release(&mut self) {
        if let Some(mut camera) = self.inner.take() {
            let _ = camera.stop_stream();
            tracing::info!("camera stream released");
        }
    }
}
