//! Fixed collage geometry.
//!
//! The canvas is a 3x3 grid of 300x300 cells. Positions 1-8 spiral
//! around the perimeter starting at the top-middle cell; position 9
//! takes the single interior cell. The mapping is static data, never
//! derived at runtime.

use crate::session::GazePosition;

/// Output canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1200;
/// Output canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 900;
/// Side length of each destination cell in pixels.
pub const CELL_SIZE: u32 = 300;
/// Baseline-left anchor of the timestamp text.
pub const TIMESTAMP_ANCHOR: (u32, u32) = (10, 890);

/// A destination rectangle within the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Cell origins, indexed by position number - 1.
const CELL_ORIGINS: [(u32, u32); 9] = [
    (300, 0),   // 1: top middle
    (600, 0),   // 2: top right
    (600, 300), // 3: middle right
    (600, 600), // 4: bottom right
    (300, 600), // 5: bottom middle
    (0, 600),   // 6: bottom left
    (0, 300),   // 7: middle left
    (0, 0),     // 8: top left
    (300, 300), // 9: center
];

/// Baseline-left label anchors, indexed by position number - 1.
const LABEL_ANCHORS: [(u32, u32); 9] = [
    (450, 50),
    (750, 50),
    (750, 350),
    (750, 650),
    (450, 650),
    (150, 650),
    (150, 350),
    (150, 50),
    (450, 350),
];

/// The fixed mapping from gaze position to canvas geometry.
#[derive(Debug, Clone, Default)]
pub struct CollageLayout;

impl CollageLayout {
    /// Returns the destination cell for a position.
    pub fn cell(&self, position: GazePosition) -> Rect {
        let (x, y) = CELL_ORIGINS[(position.number() - 1) as usize];
        Rect {
            x,
            y,
            width: CELL_SIZE,
            height: CELL_SIZE,
        }
    }

    /// Returns the baseline-left anchor for a position's number label.
    pub fn label_anchor(&self, position: GazePosition) -> (u32, u32) {
        LABEL_ANCHORS[(position.number() - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_cover_canvas_without_overlap() {
        let layout = CollageLayout;
        let mut covered = vec![false; 9];

        for position in GazePosition::ALL {
            let cell = layout.cell(position);
            assert_eq!(cell.width, CELL_SIZE);
            assert_eq!(cell.height, CELL_SIZE);
            assert!(cell.x + cell.width <= CANVAS_WIDTH);
            assert!(cell.y + cell.height <= CANVAS_HEIGHT);

            let grid_index = (cell.y / CELL_SIZE) * 3 + cell.x / CELL_SIZE;
            assert!(!covered[grid_index as usize], "cell used twice");
            covered[grid_index as usize] = true;
        }

        // Cells occupy the left 900px of the canvas as a full 3x3 grid;
        // the rightmost 300px column stays black.
        assert!(covered.iter().all(|&c| c));
    }

    #[test]
    fn test_center_position_takes_interior_cell() {
        let layout = CollageLayout;
        let cell = layout.cell(GazePosition::LAST);
        assert_eq!((cell.x, cell.y), (300, 300));
    }

    #[test]
    fn test_label_anchor_inside_cell() {
        let layout = CollageLayout;
        for position in GazePosition::ALL {
            let cell = layout.cell(position);
            let (x, y) = layout.label_anchor(position);
            assert!(x >= cell.x && x < cell.x + cell.width);
            assert!(y >= cell.y && y < cell.y + cell.height);
        }
    }
}
