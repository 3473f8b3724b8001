//! The eight orientations of a tile: four rotations times two mirror states
//!
//! Mirroring is applied first, across the horizontal axis, then the rotation.
//! The horizontal flip carries the interior matrices, so every orientation of
//! a frame keeps its edges and interiors consistent.

use crate::configuration::{ORIENTATION_COUNT, QUARTER_TURN_DEGREES, QUARTER_TURNS_PER_REVOLUTION};
use crate::error::Result;
use crate::spatial::grid::{Grid, flip_grid_x, quarter_turns, rotate_grid_turns};
use crate::tiles::frame::Frame;
use crate::tiles::transform::{flip_frame_x, rotate_frame_turns, unmatched};

/// A rotation by whole quarter turns, optionally preceded by a mirror
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    quarter_turns: u8,
    mirrored: bool,
}

impl Orientation {
    /// The untransformed orientation
    pub const IDENTITY: Self = Self::new(0, false);

    /// Every orientation: the four rotations, then the four mirrored rotations
    pub const ALL: [Self; ORIENTATION_COUNT] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Create an orientation; quarter turns wrap at a full revolution
    pub const fn new(quarter_turns: u8, mirrored: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % QUARTER_TURNS_PER_REVOLUTION as u8,
            mirrored,
        }
    }

    /// Clockwise quarter turns, in `0..4`
    pub const fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    /// Whether the tile is mirrored across its horizontal axis before rotating
    pub const fn mirrored(self) -> bool {
        self.mirrored
    }

    /// Clockwise rotation in degrees
    pub const fn degrees(self) -> u32 {
        self.quarter_turns as u32 * QUARTER_TURN_DEGREES
    }
}

/// Transform a frame into the given orientation
pub fn orient_frame<Id: Clone>(frame: &Frame<Id>, orientation: Orientation) -> Frame<Id> {
    let base = if orientation.mirrored {
        flip_frame_x(frame)
    } else {
        unmatched(frame)
    };
    rotate_frame_turns(&base, u32::from(orientation.quarter_turns))
}

/// Every orientation of a frame, index-aligned with [`Orientation::ALL`]
pub fn frame_orientations<Id: Clone>(frame: &Frame<Id>) -> [Frame<Id>; ORIENTATION_COUNT] {
    Orientation::ALL.map(|orientation| orient_frame(frame, orientation))
}

/// Transform a grid into the given orientation
pub fn orient_grid<T: Clone>(grid: &Grid<T>, orientation: Orientation) -> Grid<T> {
    let base = if orientation.mirrored {
        flip_grid_x(grid)
    } else {
        grid.clone()
    };
    rotate_grid_turns(&base, u32::from(orientation.quarter_turns))
}

/// Every orientation of a grid, index-aligned with [`Orientation::ALL`]
pub fn grid_orientations<T: Clone>(grid: &Grid<T>) -> [Grid<T>; ORIENTATION_COUNT] {
    Orientation::ALL.map(|orientation| orient_grid(grid, orientation))
}

/// Orientation for a rotation in degrees and a mirror flag
///
/// # Errors
///
/// Returns `TransformError::InvalidRotation` if `degrees` is not a multiple of 90
pub fn orientation_for(degrees: u32, mirrored: bool) -> Result<Orientation> {
    let turns = quarter_turns(degrees)?;
    Ok(Orientation::new(turns as u8, mirrored))
}
