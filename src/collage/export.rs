//! Composite export: JPEG encoding and the filename convention.

use crate::capture::Frame;
use chrono::{DateTime, Local};
use image::{ImageFormat, RgbImage};
use std::path::Path;
use thiserror::Error;

/// strftime format of the human-readable timestamp overlay.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filename prefix of exported collages.
pub const FILENAME_PREFIX: &str = "gaze_collage";

/// Errors from composite export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("frame buffer does not match its dimensions")]
    MalformedFrame,
    #[error("failed to encode composite: {0}")]
    Encode(#[from] image::ImageError),
}

/// Formats the timestamp text rendered onto the collage.
pub fn timestamp_text(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Returns the export filename for a collage: `gaze_collage_YYYYMMDD_HHMMSS.jpg`.
pub fn collage_filename(at: DateTime<Local>) -> String {
    format!("{}_{}.jpg", FILENAME_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

/// Encodes a composite frame as JPEG at `path`.
pub fn write_jpeg(frame: &Frame, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let image = RgbImage::from_raw(frame.width(), frame.height(), frame.pixels().to_vec())
        .ok_or(ExportError::MalformedFrame)?;
    image.save_with_format(path.as_ref(), ImageFormat::Jpeg)?;
    tracing::info!(path = %path.as_ref().display(), "collage exported");
    Ok(())
}
