//! Minimal deterministic text rendering for collage overlays.
//!
//! Labels and timestamps only ever contain digits, dashes, colons, and
//! spaces, so a tiny embedded 5x7 bitmap font is enough. No font files,
//! no platform text stack, and byte-identical output everywhere.

/// Glyph cell width in font units.
const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font units.
const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance (glyph plus one column of spacing).
const GLYPH_ADVANCE: u32 = 6;

/// 5x7 glyph rows, top to bottom; bit 4 is the leftmost column.
const fn glyph(ch: char) -> Option<[u8; 7]> {
    match ch {
        '0' => Some([0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]),
        '1' => Some([0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]),
        '2' => Some([0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F]),
        '3' => Some([0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E]),
        '4' => Some([0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]),
        '5' => Some([0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]),
        '6' => Some([0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E]),
        '7' => Some([0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
        '8' => Some([0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]),
        '9' => Some([0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C]),
        '-' => Some([0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
        ':' => Some([0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00]),
        '.' => Some([0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C]),
        '/' => Some([0x01, 0x02, 0x02, 0x04, 0x08, 0x08, 0x10]),
        ' ' => Some([0x00; 7]),
        _ => None,
    }
}

/// Draws `text` onto an RGB canvas at a baseline-left anchor.
///
/// `scale` multiplies the 5x7 glyph cell. Characters outside the font
/// and pixels outside the canvas are skipped silently.
pub fn draw_text(
    pixels: &mut [u8],
    canvas_width: u32,
    canvas_height: u32,
    text: &str,
    anchor: (u32, u32),
    scale: u32,
    color: [u8; 3],
) {
    let scale = scale.max(1);
    let top = anchor.1 as i64 - (GLYPH_HEIGHT * scale) as i64;
    let mut pen_x = anchor.0 as i64;

    for ch in text.chars() {
        let Some(rows) = glyph(ch) else {
            pen_x += (GLYPH_ADVANCE * scale) as i64;
            continue;
        };

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                fill_block(
                    pixels,
                    canvas_width,
                    canvas_height,
                    pen_x + (col * scale) as i64,
                    top + (row as u32 * scale) as i64,
                    scale,
                    color,
                );
            }
        }
        pen_x += (GLYPH_ADVANCE * scale) as i64;
    }
}

/// Returns the rendered width of `text` in pixels at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_ADVANCE * scale.max(1)
}

fn fill_block(
    pixels: &mut [u8],
    canvas_width: u32,
    canvas_height: u32,
    x: i64,
    y: i64,
    size: u32,
    color: [u8; 3],
) {
    for py in y..y + size as i64 {
        if py < 0 || py >= canvas_height as i64 {
            continue;
        }
        for px in x..x + size as i64 {
            if px < 0 || px >= canvas_width as i64 {
                continue;
            }
            let i = ((py as usize) * (canvas_width as usize) + px as usize) * 3;
            pixels[i..i + 3].copy_from_slice(&color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u32, height: u32) -> Vec<u8> {
        vec![0u8; (width * height * 3) as usize]
    }

    #[test]
    fn test_draws_only_requested_color() {
        let mut canvas = blank(60, 20);
        draw_text(&mut canvas, 60, 20, "1", (2, 16), 2, [255, 0, 0]);

        let mut lit = 0;
        for px in canvas.chunks_exact(3) {
            if px != [0, 0, 0] {
                assert_eq!(px, [255, 0, 0]);
                lit += 1;
            }
        }
        assert!(lit > 0);
    }

    #[test]
    fn test_clipped_at_canvas_edges() {
        // Anchor hangs off the top-left corner; must not panic.
        let mut canvas = blank(10, 10);
        draw_text(&mut canvas, 10, 10, "2025", (0, 2), 3, [255, 255, 255]);
    }

    #[test]
    fn test_unknown_characters_skipped() {
        let mut blank_run = blank(100, 20);
        draw_text(&mut blank_run, 100, 20, "??", (0, 15), 1, [9, 9, 9]);
        assert!(blank_run.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_width_accounts_for_advance() {
        assert_eq!(text_width("12:34", 1), 30);
        assert_eq!(text_width("7", 3), 18);
    }

    #[test]
    fn test_deterministic() {
        let mut a = blank(120, 30);
        let mut b = blank(120, 30);
        draw_text(&mut a, 120, 30, "2025-08-24 10:00:00", (2, 25), 1, [255, 255, 255]);
        draw_text(&mut b, 120, 30, "2025-08-24 10:00:00", (2, 25), 1, [255, 255, 255]);
        assert_eq!(a, b);
    }
}
