//! Capture session state machine.
//!
//! Tracks which of the nine gaze positions have been captured and the
//! active cursor. All mutation goes through the operations defined here;
//! stored frames are never modified in place, only removed by an explicit
//! `retake` or `reset`.
//!
//! The session performs no internal locking. Callers that share one
//! session across execution contexts must serialize access themselves.

use super::gaze::GazePosition;
use crate::capture::Frame;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors from capture session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No frame was available at the instant of the capture command.
    /// Transient: the shell retries on the next poll tick.
    #[error("no camera frame available to capture")]
    NoFrameAvailable,
    /// A second capture was attempted on an already-captured position
    /// without an intervening retake. Never silently overwrites.
    #[error("position {0} already captured; retake it first")]
    PositionAlreadyCaptured(GazePosition),
    /// The supplied frame has no pixels or a buffer that does not match
    /// its dimensions. Such a frame can never be composited.
    #[error("frame is empty or does not match its dimensions")]
    MalformedFrame,
}

/// Per-position capture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionState {
    /// No frame stored for the position yet.
    AwaitingCapture,
    /// A frame has been stored and is awaiting compositing.
    Captured,
}

/// A frame bound to the gaze position it was captured at.
///
/// Immutable once created: the buffer is an owned snapshot, independent
/// of anything the camera may later overwrite.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    position: GazePosition,
    frame: Frame,
    captured_at: DateTime<Local>,
}

impl CapturedFrame {
    fn new(position: GazePosition, frame: Frame) -> Self {
        Self {
            position,
            frame,
            captured_at: Local::now(),
        }
    }

    /// Returns the gaze position this frame belongs to.
    #[inline]
    pub fn position(&self) -> GazePosition {
        self.position
    }

    /// Returns the stored pixel data.
    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Returns the capture timestamp.
    #[inline]
    pub fn captured_at(&self) -> DateTime<Local> {
        self.captured_at
    }
}

/// State machine over the nine gaze positions.
///
/// Holds a cursor (the position the operator is currently working on)
/// and at most one [`CapturedFrame`] per position. The session is
/// complete when all nine positions are captured.
#[derive(Debug, Default)]
pub struct CaptureSession {
    /// Current cursor position, always within 1..=9.
    cursor: GazePosition,
    /// Stored frames, keyed by position.
    frames: BTreeMap<GazePosition, CapturedFrame>,
}

impl CaptureSession {
    /// Creates a fresh session with the cursor at position 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current cursor position.
    #[inline]
    pub fn cursor(&self) -> GazePosition {
        self.cursor
    }

    /// Returns the capture state of a position.
    pub fn state_of(&self, position: GazePosition) -> PositionState {
        if self.frames.contains_key(&position) {
            PositionState::Captured
        } else {
            PositionState::AwaitingCapture
        }
    }

    /// Returns the stored frame for a position, if captured.
    pub fn captured(&self, position: GazePosition) -> Option<&CapturedFrame> {
        self.frames.get(&position)
    }

    /// Returns the number of captured positions.
    #[inline]
    pub fn captured_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the full position → frame map, for compositing.
    #[inline]
    pub fn frames(&self) -> &BTreeMap<GazePosition, CapturedFrame> {
        &self.frames
    }

    /// True iff all nine positions are captured.
    pub fn is_complete(&self) -> bool {
        self.frames.len() == GazePosition::ALL.len()
    }

    /// Captures the supplied (already brightness-adjusted) frame at the
    /// cursor position.
    ///
    /// Fails with [`SessionError::NoFrameAvailable`] when the camera had
    /// no frame to offer, [`SessionError::MalformedFrame`] when the frame
    /// is empty or inconsistent with its dimensions, and
    /// [`SessionError::PositionAlreadyCaptured`] when the cursor position
    /// already holds a frame. Other positions are never affected.
    pub fn capture(&mut self, frame: Option<Frame>) -> Result<GazePosition, SessionError> {
        let frame = frame.ok_or(SessionError::NoFrameAvailable)?;
        if frame.width() == 0 || frame.height() == 0 || !frame.is_valid() {
            return Err(SessionError::MalformedFrame);
        }
        let position = self.cursor;
        if self.frames.contains_key(&position) {
            return Err(SessionError::PositionAlreadyCaptured(position));
        }

        self.frames.insert(position, CapturedFrame::new(position, frame));
        tracing::debug!(
            position = position.number(),
            captured = self.frames.len(),
            "frame captured"
        );
        Ok(position)
    }

    /// Removes the stored frame at the cursor position, returning it to
    /// `AwaitingCapture`. Idempotent: a no-op when nothing is stored.
    pub fn retake(&mut self) -> Option<CapturedFrame> {
        let removed = self.frames.remove(&self.cursor);
        if removed.is_some() {
            tracing::debug!(position = self.cursor.number(), "frame discarded for retake");
        }
        removed
    }

    /// Moves the cursor one position backward (`step < 0`) or forward
    /// (`step > 0`), clamped to 1..=9.
    ///
    /// Only the sign of `step` is used: a single call never moves more
    /// than one position, and `step == 0` is a no-op. Never reads or
    /// writes captured data; moving past either boundary leaves the
    /// cursor where it is.
    pub fn advance(&mut self, step: i8) -> GazePosition {
        self.cursor = self.cursor.stepped(step.signum());
        self.cursor
    }

    /// Clears all captured frames and resets the cursor to position 1.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.cursor = GazePosition::FIRST;
        tracing::info!("capture session reset");
    }
}
