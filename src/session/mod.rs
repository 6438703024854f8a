//! Gaze capture session state machine.
//!
//! The session owns the captured frames and enforces the capture,
//! retake, and navigation rules. It is invoked by the shell and is
//! fully decoupled from rendering.

mod gaze;
mod state;

pub use gaze::{GazePosition, InvalidPosition};
pub use state::{CaptureSession, CapturedFrame, PositionState, SessionError};
