//! The nine fixed gaze directions.
//!
//! Positions are numbered 1 through 9. The instruction text and
//! direction glyph for each position are static lookup data.

use thiserror::Error;

/// Error for a position number outside the valid 1..=9 range.
///
/// Reaching this is a programming error in the caller, not an operator
/// condition; internal code only ever uses the validated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid gaze position {0} (must be 1-9)")]
pub struct InvalidPosition(pub u8);

/// One of the nine fixed examination directions, numbered 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GazePosition(u8);

/// Instruction text per position, indexed by position number - 1.
const INSTRUCTIONS: [&str; 9] = [
    "Ask the patient to focus on the illuminated light straight ahead.\n\
     Ensure both eyes are clearly visible and centered.",
    "Ask the patient to focus on the illuminated light UP and to the RIGHT.\n\
     Maintain eye contact with the light source.",
    "Ask the patient to focus on the illuminated light to the RIGHT.\n\
     Keep the head steady, only eyes should move.",
    "Ask the patient to focus on the illuminated light DOWN and to the RIGHT.\n\
     Check for clear eyelid and sclera visibility.",
    "Ask the patient to focus on the illuminated light straight DOWN.\n\
     Ensure lower eyelids and iris are visible.",
    "Ask the patient to focus on the illuminated light DOWN and to the LEFT.\n\
     Maintain consistent lighting on both eyes.",
    "Ask the patient to focus on the illuminated light to the LEFT.\n\
     Keep the light source in clear view.",
    "Ask the patient to focus on the illuminated light UP and to the LEFT.\n\
     Ensure upper eyelids don't obstruct the view.",
    "Ask the patient to focus on the illuminated light straight UP.\n\
     Check for complete iris visibility.",
];

/// Direction glyph per position, indexed by position number - 1.
const GLYPHS: [&str; 9] = ["◎", "↗", "→", "↘", "↓", "↙", "←", "↖", "↑"];

impl GazePosition {
    /// All nine positions in numeric order.
    pub const ALL: [GazePosition; 9] = [
        GazePosition(1),
        GazePosition(2),
        GazePosition(3),
        GazePosition(4),
        GazePosition(5),
        GazePosition(6),
        GazePosition(7),
        GazePosition(8),
        GazePosition(9),
    ];

    /// The first position (straight-ahead gaze).
    pub const FIRST: GazePosition = GazePosition(1);

    /// The last position.
    pub const LAST: GazePosition = GazePosition(9);

    /// Creates a position from its number, validating the 1..=9 range.
    pub fn new(number: u8) -> Result<Self, InvalidPosition> {
        if (1..=9).contains(&number) {
            Ok(Self(number))
        } else {
            Err(InvalidPosition(number))
        }
    }

    /// Returns the position number (1-9).
    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns the operator instruction for this position.
    pub fn instruction(self) -> &'static str {
        INSTRUCTIONS[(self.0 - 1) as usize]
    }

    /// Returns the direction glyph shown for this position.
    pub fn glyph(self) -> &'static str {
        GLYPHS[(self.0 - 1) as usize]
    }

    /// Moves by `step` positions, clamped to the valid range.
    ///
    /// Stepping past either end is a no-op: the result stays at 1 or 9.
    pub fn stepped(self, step: i8) -> Self {
        let n = (self.0 as i16 + step as i16).clamp(1, 9);
        Self(n as u8)
    }
}

impl Default for GazePosition {
    /// Defaults to the first position (the session's starting cursor).
    fn default() -> Self {
        GazePosition::FIRST
    }
}

impl std::fmt::Display for GazePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
