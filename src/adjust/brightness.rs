//! Brightness adjustment as an affine per-channel remapping.
//!
//! The operator's brightness slider maps 0..=100 onto a signed delta;
//! 50 is the neutral point and leaves the frame byte-identical.

use crate::capture::Frame;

/// The neutral slider value that maps to an identity transform.
pub const NEUTRAL_BRIGHTNESS: u8 = 50;

/// Applies a brightness adjustment, returning a new frame.
///
/// `percent` is clamped to 0..=100 and mapped to
/// `delta = (percent - 50) * 2`. A zero delta returns an exact copy.
/// Otherwise every channel is remapped as
/// `out = clamp(alpha * in + shadow)` with `shadow = max(delta, 0)` and
/// `alpha = (highlight - shadow) / 255`, `highlight = 255 + min(delta, 0)`.
///
/// Width, height, and channel count are preserved, and the output is
/// pixel-wise monotonic in `percent`.
pub fn adjust_brightness(frame: &Frame, percent: u8) -> Frame {
    let delta = (percent.min(100) as i32 - NEUTRAL_BRIGHTNESS as i32) * 2;
    if delta == 0 {
        return frame.clone();
    }

    let shadow = delta.max(0) as f32;
    let highlight = (255 + delta.min(0)) as f32;
    let alpha = (highlight - shadow) / 255.0;

    let pixels = frame
        .pixels()
        .iter()
        .map(|&v| (alpha * v as f32 + shadow).round().clamp(0.0, 255.0) as u8)
        .collect();

    Frame::new(pixels, frame.width(), frame.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn gradient_frame() -> Frame {
        let pixels: Vec<u8> = (0..16 * 12 * 3).map(|i| (i % 256) as u8).collect();
        Frame::new(pixels, 16, 12)
    }

    #[test]
    fn test_neutral_is_identity() {
        let frame = gradient_frame();
        let adjusted = adjust_brightness(&frame, NEUTRAL_BRIGHTNESS);
        assert_eq!(frame.pixels(), adjusted.pixels());
    }

    #[test]
    fn test_full_brightness_saturates() {
        let frame = gradient_frame();
        let adjusted = adjust_brightness(&frame, 100);
        // delta 100: out = in * 155/255 + 100, so the floor rises to 100.
        assert!(adjusted.pixels().iter().all(|&v| v >= 100));
    }

    #[test]
    fn test_zero_brightness_darkens() {
        let frame = gradient_frame();
        let adjusted = adjust_brightness(&frame, 0);
        // delta -100: out = in * 155/255, so the ceiling drops to 155.
        assert!(adjusted.pixels().iter().all(|&v| v <= 155));
        assert_eq!(adjusted.pixel(0, 0), [0, 1, 1]);
    }

    #[test]
    fn test_out_of_range_percent_clamped() {
        let frame = gradient_frame();
        assert_eq!(
            adjust_brightness(&frame, 200).pixels(),
            adjust_brightness(&frame, 100).pixels()
        );
    }

    proptest! {
        #[test]
        fn prop_dimensions_preserved(percent in 0u8..=100) {
            let frame = gradient_frame();
            let adjusted = adjust_brightness(&frame, percent);

            prop_assert_eq!(adjusted.width(), frame.width());
            prop_assert_eq!(adjusted.height(), frame.height());
            prop_assert_eq!(adjusted.channels(), frame.channels());
            prop_assert!(adjusted.is_valid());
        }

        #[test]
        fn prop_monotonic_in_percent(lo in 0u8..=100, hi in 0u8..=100) {
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            let frame = gradient_frame();
            let darker = adjust_brightness(&frame, lo);
            let brighter = adjust_brightness(&frame, hi);

            // Raising the slider never darkens any channel.
            for (a, b) in darker.pixels().iter().zip(brighter.pixels()) {
                prop_assert!(a <= b);
            }
        }

        #[test]
        fn prop_deterministic(percent in 0u8..=100) {
            let frame = gradient_frame();
            let first = adjust_brightness(&frame, percent);
            let second = adjust_brightness(&frame, percent);
            prop_assert_eq!(first.pixels(), second.pixels());
        }
    }
}
