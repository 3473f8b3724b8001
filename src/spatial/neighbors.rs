//! Neighbourhood enumeration over the 4- and 8-connected offset tables
//!
//! Two policies exist for candidates that fall outside the grid. Filtering
//! ([`get_adjacent`] with bounds) drops them, so edge cells yield fewer
//! neighbours. Clamping ([`get_adjacent_in_grid`], [`get_surrounding_in_grid`])
//! collapses them onto the nearest boundary cell, so the count is fixed and
//! duplicates appear at edges and corners. Output order always follows the
//! offset table.

use crate::spatial::grid::Bounds;
use crate::spatial::point::{ADJACENT_OFFSETS, Point, SURROUNDING_OFFSETS, shift_point};

/// 4-connected neighbours of a point, optionally filtered to a grid
///
/// Without bounds all four shifted points are returned, possibly negative.
/// With bounds, candidates outside `[0, rows) x [0, cols)` are dropped.
/// Bounds may be passed as `None`, a [`Bounds`], `Some(bounds)` or a `&Grid`.
pub fn get_adjacent(point: Point, bounds: impl Into<Option<Bounds>>) -> Vec<Point> {
    let candidates = ADJACENT_OFFSETS
        .iter()
        .map(|&shift| shift_point(point, shift));

    match bounds.into() {
        Some(bounds) => candidates.filter(|&p| bounds.contains(p)).collect(),
        None => candidates.collect(),
    }
}

/// 4-connected neighbours of a point, each clamped into the grid
pub fn get_adjacent_in_grid(bounds: impl Into<Bounds>, point: Point) -> [Point; 4] {
    let bounds = bounds.into();
    ADJACENT_OFFSETS.map(|shift| bounds.shift_clamped(point, shift))
}

/// 8-connected neighbours of a point, unfiltered
pub fn get_surrounding(point: Point) -> [Point; 8] {
    SURROUNDING_OFFSETS.map(|shift| shift_point(point, shift))
}

/// 8-connected neighbours of a point, each clamped into the grid
pub fn get_surrounding_in_grid(bounds: impl Into<Bounds>, point: Point) -> [Point; 8] {
    let bounds = bounds.into();
    SURROUNDING_OFFSETS.map(|shift| bounds.shift_clamped(point, shift))
}
