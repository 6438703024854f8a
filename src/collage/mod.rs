//! Collage compositing and export.
//!
//! Turns the nine captured frames into one labeled 1200x900 composite
//! and encodes it for export. Compositing is a pure, bounded
//! computation over already-resident data.

mod compositor;
mod export;
mod layout;
mod resample;
mod text;

pub use compositor::{compose, CollageOptions, ComposeError};
pub use export::{
    collage_filename, timestamp_text, write_jpeg, ExportError, FILENAME_PREFIX, TIMESTAMP_FORMAT,
};
pub use layout::{CollageLayout, Rect, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE};
pub use resample::resize_bilinear;
pub use text::{draw_text, text_width};
