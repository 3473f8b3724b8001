//! Error types for grid and frame construction and transformation

use std::fmt;

use crate::tiles::frame::Side;

/// Main error type for all transformation operations
#[derive(Debug)]
pub enum TransformError {
    /// Grid or tile text has no rows or no columns
    EmptyGrid,

    /// Lengths or dimensions that must agree do not
    ///
    /// Raised for ragged grid rows, edge strings of different lengths, and
    /// interior matrices whose shape disagrees with the edges.
    ShapeMismatch {
        /// Which row, edge or matrix disagrees
        field: String,
        /// Length or dimension implied by the rest of the value
        expected: usize,
        /// Length or dimension actually supplied
        actual: usize,
    },

    /// Rotation amount is not a multiple of 90 degrees
    InvalidRotation {
        /// The rejected rotation in degrees
        degrees: u32,
    },

    /// Edge string disagrees with the border of the full tile matrix
    EdgeMismatch {
        /// Side whose edge string differs from the matrix border
        side: Side,
    },

    /// Matrix construction rejected the cell layout
    Layout {
        /// Underlying ndarray shape error
        source: ndarray::ShapeError,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "Grid must have at least one row and one column"),
            Self::ShapeMismatch {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Shape mismatch in {field}: expected {expected}, found {actual}"
                )
            }
            Self::InvalidRotation { degrees } => {
                write!(
                    f,
                    "Rotation of {degrees} degrees is not a multiple of 90 degrees"
                )
            }
            Self::EdgeMismatch { side } => {
                write!(f, "The {side} edge does not match the tile border")
            }
            Self::Layout { source } => write!(f, "Invalid matrix layout: {source}"),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout { source } => Some(source),
            _ => None,
        }
    }
}

impl From<ndarray::ShapeError> for TransformError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Layout { source: err }
    }
}

/// Convenience type alias for transformation results
pub type Result<T> = std::result::Result<T, TransformError>;

/// Create a shape mismatch error
pub fn shape_mismatch(field: &impl ToString, expected: usize, actual: usize) -> TransformError {
    TransformError::ShapeMismatch {
        field: field.to_string(),
        expected,
        actual,
    }
}

/// Create an invalid rotation error
pub const fn invalid_rotation(degrees: u32) -> TransformError {
    TransformError::InvalidRotation { degrees }
}
