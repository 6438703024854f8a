//! Collage compositing.
//!
//! A pure function over already-captured frames: nine cells resampled
//! and blitted onto a fixed 1200x900 canvas, plus the timestamp and
//! optional position-number overlays. Given identical frame bytes and
//! identical options the output is byte-identical.

use super::layout::{CollageLayout, Rect, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, TIMESTAMP_ANCHOR};
use super::resample::resize_bilinear;
use super::text::draw_text;
use crate::capture::{Frame, CHANNELS};
use crate::session::{CapturedFrame, GazePosition};
use std::collections::BTreeMap;
use thiserror::Error;

/// Overlay color for the timestamp text.
const TIMESTAMP_COLOR: [u8; 3] = [255, 255, 255];
/// Overlay color for position-number labels (red, RGB order).
const LABEL_COLOR: [u8; 3] = [255, 0, 0];
/// Font scale for the timestamp.
const TIMESTAMP_SCALE: u32 = 3;
/// Font scale for position-number labels.
const LABEL_SCALE: u32 = 6;

/// Errors from collage compositing.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Fewer than nine positions were captured. No partial output is
    /// produced.
    #[error("incomplete capture: {captured} of 9 positions present")]
    IncompleteCapture { captured: usize },
}

/// Per-invocation compositing options.
///
/// Supplied fresh on every call; the compositor stores nothing.
#[derive(Debug, Clone)]
pub struct CollageOptions {
    /// Render the decimal position number inside each cell.
    pub show_position_labels: bool,
    /// Text rendered at the bottom-left timestamp anchor.
    pub timestamp_text: String,
}

/// Assembles nine captured frames into one labeled composite image.
///
/// Requires exactly the nine gaze positions in `frames`; otherwise
/// fails with [`ComposeError::IncompleteCapture`]. Each source frame is
/// resampled to the 300x300 cell size with bilinear interpolation and
/// copied to its layout rectangle.
pub fn compose(
    frames: &BTreeMap<GazePosition, CapturedFrame>,
    layout: &CollageLayout,
    options: &CollageOptions,
) -> Result<Frame, ComposeError> {
    if frames.len() != GazePosition::ALL.len() {
        return Err(ComposeError::IncompleteCapture {
            captured: frames.len(),
        });
    }

    let mut canvas =
        vec![0u8; (CANVAS_WIDTH as usize) * (CANVAS_HEIGHT as usize) * (CHANNELS as usize)];

    for position in GazePosition::ALL {
        // Map keys are validated GazePositions, so after the length
        // check every position is present.
        let captured = &frames[&position];
        let cell = resize_bilinear(captured.frame(), CELL_SIZE, CELL_SIZE);
        blit(&mut canvas, &cell, layout.cell(position));
    }

    draw_text(
        &mut canvas,
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        &options.timestamp_text,
        TIMESTAMP_ANCHOR,
        TIMESTAMP_SCALE,
        TIMESTAMP_COLOR,
    );

    if options.show_position_labels {
        for position in GazePosition::ALL {
            draw_text(
                &mut canvas,
                CANVAS_WIDTH,
                CANVAS_HEIGHT,
                &position.number().to_string(),
                layout.label_anchor(position),
                LABEL_SCALE,
                LABEL_COLOR,
            );
        }
    }

    tracing::debug!(
        labels = options.show_position_labels,
        "collage composited"
    );
    Ok(Frame::new(canvas, CANVAS_WIDTH, CANVAS_HEIGHT))
}

/// Copies a cell-sized frame into the canvas at the given rectangle.
fn blit(canvas: &mut [u8], cell: &Frame, rect: Rect) {
    let c = CHANNELS as usize;
    let canvas_stride = (CANVAS_WIDTH as usize) * c;
    let cell_stride = (cell.width() as usize) * c;
    let src = cell.pixels();

    for row in 0..rect.height.min(cell.height()) as usize {
        let dst_start = (rect.y as usize + row) * canvas_stride + (rect.x as usize) * c;
        let src_start = row * cell_stride;
        canvas[dst_start..dst_start + cell_stride]
            .copy_from_slice(&src[src_start..src_start + cell_stride]);
    }
}
