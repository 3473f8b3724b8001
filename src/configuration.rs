//! Geometric constants shared by the grid and frame transforms

/// Degrees in one clockwise quarter turn
pub const QUARTER_TURN_DEGREES: u32 = 90;

/// Quarter turns in a full revolution
pub const QUARTER_TURNS_PER_REVOLUTION: u32 = 4;

// 4 rotations times 2 mirror states
/// Number of distinct orientations of a square tile
pub const ORIENTATION_COUNT: usize = 8;

/// Width of the border stripped from a full tile to produce its interior
pub const FRAME_BORDER_WIDTH: usize = 1;
