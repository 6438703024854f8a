//! Gaze Collage Library
//!
//! Guides an operator through capturing one still image per each of
//! nine fixed gaze directions from a live camera feed, then
//! deterministically assembles the nine images into a single labeled
//! composite ("collage").
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! capture → adjust → session → collage
//!    ↑                            ↓
//!  camera                    JPEG export
//! ```
//!
//! # Design Principles
//!
//! - **Explicit state machine**: all session mutation goes through
//!   [`session::CaptureSession`] operations, decoupled from rendering
//! - **Immutable snapshots**: configuration and captured frames are
//!   passed by value or borrowed, never shared mutable globals
//! - **Deterministic compositing**: fixed frame bytes and fixed options
//!   produce byte-identical collages
//! - **Plain pixel buffers**: the core exposes [`capture::Frame`], not
//!   renderable objects; the shell owns all presentation
//!
//! # Example
//!
//! ```no_run
//! use gaze_collage::{
//!     adjust::adjust_brightness,
//!     capture::{CameraSource, CaptureConfig, MockCamera},
//!     collage::{compose, timestamp_text, CollageLayout, CollageOptions},
//!     session::CaptureSession,
//! };
//!
//! // Bind a camera and start a session
//! let mut camera = MockCamera::new();
//! camera.open(&CaptureConfig::default()).unwrap();
//! let mut session = CaptureSession::new();
//!
//! // Capture all nine gaze positions
//! while !session.is_complete() {
//!     let frame = camera.read_frame().map(|f| adjust_brightness(&f, 50));
//!     session.capture(frame).unwrap();
//!     session.advance(1);
//! }
//!
//! // Assemble the labeled composite
//! let options = CollageOptions {
//!     show_position_labels: true,
//!     timestamp_text: timestamp_text(chrono::Local::now()),
//! };
//! let collage = compose(session.frames(), &CollageLayout, &options).unwrap();
//! assert_eq!((collage.width(), collage.height()), (1200, 900));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod adjust;
pub mod capture;
pub mod collage;
pub mod config;
pub mod session;

// Re-export commonly used types at crate root
pub use adjust::adjust_brightness;
pub use capture::{CameraError, CameraSource, CaptureConfig, Frame, MockCamera};
pub use collage::{compose, CollageLayout, CollageOptions, ComposeError};
pub use config::Settings;
pub use session::{CaptureSession, CapturedFrame, GazePosition, PositionState, SessionError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
