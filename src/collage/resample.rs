//! Deterministic bilinear resampling.
//!
//! Collage cells are a fixed 300x300 while capture resolutions vary, so
//! every source frame is resampled on the way in. Bilinear interpolation
//! with pixel-center alignment; the same bytes in always produce the
//! same bytes out.

use crate::capture::{Frame, CHANNELS};

/// Resamples `src` to the given dimensions with bilinear interpolation.
///
/// Source coordinates are sampled at pixel centers
/// (`sx = (dx + 0.5) * sw/dw - 0.5`), clamped at the edges. A source
/// with no pixels has nothing to sample and yields a black output.
pub fn resize_bilinear(src: &Frame, dst_width: u32, dst_height: u32) -> Frame {
    if src.width() == dst_width && src.height() == dst_height {
        return src.clone();
    }
    if src.width() == 0 || src.height() == 0 {
        let len = (dst_width as usize) * (dst_height as usize) * (CHANNELS as usize);
        return Frame::new(vec![0u8; len], dst_width, dst_height);
    }

    let sw = src.width() as usize;
    let sh = src.height() as usize;
    let c = CHANNELS as usize;
    let pixels = src.pixels();

    let x_ratio = src.width() as f32 / dst_width as f32;
    let y_ratio = src.height() as f32 / dst_height as f32;

    let mut out = Vec::with_capacity((dst_width as usize) * (dst_height as usize) * c);

    for dy in 0..dst_height {
        let sy = ((dy as f32 + 0.5) * y_ratio - 0.5).max(0.0);
        let y0 = (sy as usize).min(sh - 1);
        let y1 = (y0 + 1).min(sh - 1);
        let fy = sy - y0 as f32;

        for dx in 0..dst_width {
            let sx = ((dx as f32 + 0.5) * x_ratio - 0.5).max(0.0);
            let x0 = (sx as usize).min(sw - 1);
            let x1 = (x0 + 1).min(sw - 1);
            let fx = sx - x0 as f32;

            let base00 = (y0 * sw + x0) * c;
            let base01 = (y0 * sw + x1) * c;
            let base10 = (y1 * sw + x0) * c;
            let base11 = (y1 * sw + x1) * c;

            for ch in 0..c {
                let top = pixels[base00 + ch] as f32 * (1.0 - fx) + pixels[base01 + ch] as f32 * fx;
                let bottom =
                    pixels[base10 + ch] as f32 * (1.0 - fx) + pixels[base11 + ch] as f32 * fx;
                let value = top * (1.0 - fy) + bottom * fy;
                out.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    Frame::new(out, dst_width, dst_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_when_sizes_match() {
        let src = Frame::solid([9, 8, 7], 300, 300);
        let out = resize_bilinear(&src, 300, 300);
        assert_eq!(src.pixels(), out.pixels());
    }

    #[test]
    fn test_solid_color_survives_resampling() {
        let src = Frame::solid([120, 30, 200], 640, 480);
        let out = resize_bilinear(&src, 300, 300);

        assert_eq!(out.width(), 300);
        assert_eq!(out.height(), 300);
        assert!(out
            .pixels()
            .chunks_exact(3)
            .all(|px| px == [120, 30, 200]));
    }

    #[test]
    fn test_upscaling_interpolates_between_neighbors() {
        // Two-pixel gradient: values in the output stay within the
        // source range and trend left-to-right.
        let src = Frame::new(vec![0, 0, 0, 200, 200, 200], 2, 1);
        let out = resize_bilinear(&src, 8, 1);

        assert_eq!(out.width(), 8);
        let first = out.pixel(0, 0)[0];
        let last = out.pixel(7, 0)[0];
        assert!(first < last);
        assert!(out.pixels().iter().all(|&v| v <= 200));
    }

    #[test]
    fn test_zero_size_source_yields_black() {
        let empty = Frame::new(Vec::new(), 0, 0);
        let out = resize_bilinear(&empty, 300, 300);

        assert_eq!(out.width(), 300);
        assert_eq!(out.height(), 300);
        assert!(out.is_valid());
        assert!(out.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_deterministic() {
        let pixels: Vec<u8> = (0..64 * 48 * 3).map(|i| (i * 31 % 256) as u8).collect();
        let src = Frame::new(pixels, 64, 48);

        let a = resize_bilinear(&src, 300, 300);
        let b = resize_bilinear(&src, 300, 300);
        assert_eq!(a.pixels(), b.pixels());
    }
}
