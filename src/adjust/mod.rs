//! Pure frame transforms applied between capture and storage.

mod brightness;

pub use brightness::{adjust_brightness, NEUTRAL_BRIGHTNESS};
