//! Mirror and quarter-turn transforms for frames
//!
//! Each transform builds a new frame; the input is never touched. The tile
//! identifier is carried through and recorded matches are dropped, since they
//! describe neighbours of the old orientation.
//!
//! Edge reversal follows from the traversal directions: an edge is reversed
//! exactly when the transform flips the axis it is read along.

use crate::error::Result;
use crate::spatial::grid::{flip_rows, quarter_turns, rotate_cells};
use crate::tiles::frame::Frame;

/// Mirror a frame across its vertical axis, swapping left and right
///
/// `top` and `bottom` are reversed; `left` and `right` swap places unreversed.
/// This is an edge-only transform: `mid` and `full` are not mirrored and the
/// result carries neither. Use [`flip_frame_x`] combined with rotation when
/// the interior matters.
pub fn flip_frame_y<Id: Clone>(frame: &Frame<Id>) -> Frame<Id> {
    Frame::from_parts(
        frame.tile().clone(),
        reversed(frame.top()),
        reversed(frame.bottom()),
        frame.right().to_owned(),
        frame.left().to_owned(),
        None,
        None,
    )
}

/// Mirror a frame across its horizontal axis, swapping top and bottom
///
/// `top` and `bottom` swap places unreversed; `left` and `right` are reversed;
/// `mid` and `full` have their row order reversed.
pub fn flip_frame_x<Id: Clone>(frame: &Frame<Id>) -> Frame<Id> {
    Frame::from_parts(
        frame.tile().clone(),
        frame.bottom().to_owned(),
        frame.top().to_owned(),
        reversed(frame.left()),
        reversed(frame.right()),
        frame.mid().map(flip_rows),
        frame.full().map(flip_rows),
    )
}

/// Rotate a frame clockwise by a multiple of 90 degrees
///
/// Per quarter turn: the new top is the old left reversed, the new bottom is
/// the old right reversed, the new left is the old bottom and the new right is
/// the old top. Interiors rotate with the same quarter turn as grids.
///
/// # Errors
///
/// Returns `TransformError::InvalidRotation` if `degrees` is not a multiple of 90
pub fn rotate_frame<Id: Clone>(frame: &Frame<Id>, degrees: u32) -> Result<Frame<Id>> {
    let turns = quarter_turns(degrees)?;
    Ok(rotate_frame_turns(frame, turns))
}

/// Apply `turns` clockwise quarter turns to a frame
pub(crate) fn rotate_frame_turns<Id: Clone>(frame: &Frame<Id>, turns: u32) -> Frame<Id> {
    (0..turns).fold(unmatched(frame), |rotated, _| quarter_turn(&rotated))
}

fn quarter_turn<Id: Clone>(frame: &Frame<Id>) -> Frame<Id> {
    Frame::from_parts(
        frame.tile().clone(),
        reversed(frame.left()),
        reversed(frame.right()),
        frame.bottom().to_owned(),
        frame.top().to_owned(),
        frame.mid().map(|mid| rotate_cells(mid, 1)),
        frame.full().map(|full| rotate_cells(full, 1)),
    )
}

/// Copy of a frame with its matches cleared
pub(crate) fn unmatched<Id: Clone>(frame: &Frame<Id>) -> Frame<Id> {
    Frame::from_parts(
        frame.tile().clone(),
        frame.top().to_owned(),
        frame.bottom().to_owned(),
        frame.left().to_owned(),
        frame.right().to_owned(),
        frame.mid().cloned(),
        frame.full().cloned(),
    )
}

fn reversed(edge: &str) -> String {
    edge.chars().rev().collect()
}
