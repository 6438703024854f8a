//! Camera input and frame handling.
//!
//! This module provides abstractions for acquiring frames from a camera
//! and managing camera configuration. Pixel data crosses this boundary
//! in canonical RGB order; device-native BGR is converted on the way in.

mod camera;
mod config;
mod frame;

pub use camera::{CameraError, CameraSource, MockCamera};
#[cfg(feature = "camera")]
pub use camera::DeviceCamera;
pub use config::{CaptureConfig, CaptureConfigError};
pub use frame::{Frame, CHANNELS};
