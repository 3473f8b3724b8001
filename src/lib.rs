//! Quarter-turn geometry for grids and edge-matched tile frames
//!
//! Grids are rectangular matrices of cells; frames describe a tile by its four
//! edge strings plus optional interior matrices. Every operation rotates or
//! mirrors by multiples of 90 degrees and keeps edges and interiors consistent,
//! so a consumer matching tiles by edge strings sees the same geometry as one
//! reading the cells. Neighbourhood helpers share the same `(row, col)`
//! coordinate model with the origin at the top-left.

#![forbid(unsafe_code)]

/// Geometric constants
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Points, grids, rotation and neighbourhoods
pub mod spatial;
/// Frames and their transforms
pub mod tiles;

pub use error::{Result, TransformError};
