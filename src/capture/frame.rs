//! Frame type representing a single image buffer.

/// Number of channels in a canonical frame (RGB).
pub const CHANNELS: u32 = 3;

/// An immutable pixel buffer in canonical RGB order.
///
/// Pixels are stored row-major, three bytes per pixel. Everything
/// downstream of the camera boundary (brightness adjustment, the
/// capture session, the compositor) operates on this representation.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    /// Raw pixel data, row-major RGB.
    pixels: Vec<u8>,
    /// Frame width in pixels.
    width: u32,
    /// Frame height in pixels.
    height: u32,
}

impl Frame {
    /// Creates a new frame from RGB pixel data.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Creates a frame from device-native BGR pixel data.
    ///
    /// Capture devices commonly deliver BGR; everything past the camera
    /// boundary expects RGB, so the swap happens exactly once, here.
    pub fn from_bgr(mut pixels: Vec<u8>, width: u32, height: u32) -> Self {
        for px in pixels.chunks_exact_mut(CHANNELS as usize) {
            px.swap(0, 2);
        }
        Self::new(pixels, width, height)
    }

    /// Creates a solid-color frame. Used by tests and the mock camera.
    pub fn solid(color: [u8; 3], width: u32, height: u32) -> Self {
        let count = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(count * CHANNELS as usize);
        for _ in 0..count {
            pixels.extend_from_slice(&color);
        }
        Self::new(pixels, width, height)
    }

    /// Returns a reference to the raw pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the frame width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the channel count (always 3).
    #[inline]
    pub fn channels(&self) -> u32 {
        CHANNELS
    }

    /// Returns the RGB pixel at (x, y). Panics if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y as usize * self.width as usize) + x as usize) * CHANNELS as usize;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Consumes the frame and returns the underlying buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Returns a horizontally mirrored copy (selfie-style preview).
    pub fn mirror_horizontal(&self) -> Self {
        let w = self.width as usize;
        let c = CHANNELS as usize;
        let mut out = Vec::with_capacity(self.pixels.len());
        for row in self.pixels.chunks_exact(w * c) {
            for x in (0..w).rev() {
                out.extend_from_slice(&row[x * c..x * c + c]);
            }
        }
        Self::new(out, self.width, self.height)
    }

    /// Validates that the pixel buffer size matches the dimensions.
    pub fn is_valid(&self) -> bool {
        self.pixels.len() == (self.width as usize) * (self.height as usize) * (CHANNELS as usize)
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_bytes", &self.pixels.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation() {
        let frame = Frame::solid([10, 20, 30], 640, 480);

        assert_eq!(frame.width(), 640);
        assert_eq!(frame.height(), 480);
        assert_eq!(frame.channels(), 3);
        assert!(frame.is_valid());
        assert_eq!(frame.pixel(0, 0), [10, 20, 30]);
        assert_eq!(frame.pixel(639, 479), [10, 20, 30]);
    }

    #[test]
    fn test_frame_invalid_size() {
        let pixels = vec![0u8; 100]; // Wrong size
        let frame = Frame::new(pixels, 640, 480);

        assert!(!frame.is_valid());
    }

    #[test]
    fn test_bgr_conversion() {
        let frame = Frame::from_bgr(vec![1, 2, 3, 4, 5, 6], 2, 1);

        assert_eq!(frame.pixel(0, 0), [3, 2, 1]);
        assert_eq!(frame.pixel(1, 0), [6, 5, 4]);
    }

    #[test]
    fn test_mirror_horizontal() {
        let frame = Frame::new(vec![1, 1, 1, 2, 2, 2, 3, 3, 3], 3, 1);
        let mirrored = frame.mirror_horizontal();

        assert_eq!(mirrored.pixel(0, 0), [3, 3, 3]);
        assert_eq!(mirrored.pixel(1, 0), [2, 2, 2]);
        assert_eq!(mirrored.pixel(2, 0), [1, 1, 1]);
        assert_eq!(frame, mirrored.mirror_horizontal());
    }
}
