//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - The `(row, col)` coordinate model and direction tables
//! - Rectangular grids and quarter-turn rotation
//! - Neighbourhood enumeration with filtering or clamping

/// Rectangular grids, bounds and rotation
pub mod grid;
/// 4- and 8-neighbourhood enumeration
pub mod neighbors;
/// Points, shift vectors and direction tables
pub mod point;

pub use grid::{Bounds, Grid};
pub use point::{Direction, Point};
