//! Frame descriptors for edge-matched tile assembly
//!
//! A frame describes one rectangular tile by its four edge strings and,
//! optionally, its interior (`mid`, border stripped) and its complete cell
//! matrix (`full`). Top and bottom edges read left to right; left and right
//! edges read top to bottom. Shapes are validated on construction so every
//! transform can assume a consistent frame.

use std::fmt;

use ndarray::{Array2, ArrayView1, Axis, Slice};
use tracing::debug;

use crate::configuration::FRAME_BORDER_WIDTH;
use crate::error::{Result, TransformError, shape_mismatch};
use crate::spatial::grid::Grid;

/// One side of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First row, read left to right
    Top,
    /// Last column, read top to bottom
    Right,
    /// Last row, read left to right
    Bottom,
    /// First column, read top to bottom
    Left,
}

impl Side {
    /// All sides, clockwise from the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side facing this one across the tile
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// Adjacency result recorded against a frame by an assembling consumer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeMatch<Id> {
    /// Side of this frame that matched
    pub side: Side,
    /// Tile whose edge matched
    pub neighbor: Id,
}

/// A tile described by its edges and optional interior matrices
///
/// Invariant: `top` and `bottom` have the same length (the width), `left` and
/// `right` have the same length (the height), `full` is `height x width` and
/// `mid` is the same with the border stripped from every side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<Id = u64> {
    tile: Id,
    top: String,
    bottom: String,
    left: String,
    right: String,
    mid: Option<Array2<char>>,
    full: Option<Array2<char>>,
    matches: Vec<EdgeMatch<Id>>,
}

impl<Id> Frame<Id> {
    /// Create a frame from its four edges, without interior matrices
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EmptyGrid` if the top or left edge is empty,
    /// and `TransformError::ShapeMismatch` if opposite edges differ in length
    pub fn new(
        tile: Id,
        top: impl Into<String>,
        bottom: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Result<Self> {
        let frame = Self::from_parts(
            tile,
            top.into(),
            bottom.into(),
            left.into(),
            right.into(),
            None,
            None,
        );
        frame.check_edges()?;
        Ok(frame)
    }

    /// Parse a frame from the rows of its complete tile text
    ///
    /// The edges are read off the border, `full` holds every cell and `mid`
    /// holds the cells inside the border.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EmptyGrid` for empty input and
    /// `TransformError::ShapeMismatch` for rows of differing length
    pub fn from_rows<S: AsRef<str>>(tile: Id, rows: &[S]) -> Result<Self> {
        let cells: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();
        let full = Grid::from_rows(cells)?.into_array();

        let [top, bottom, left, right] = border_edges(&full);
        let mid = interior(&full);
        Ok(Self::from_parts(
            tile,
            top,
            bottom,
            left,
            right,
            Some(mid),
            Some(full),
        ))
    }

    /// Attach the interior matrix (border stripped)
    ///
    /// # Errors
    ///
    /// Returns `TransformError::ShapeMismatch` unless the matrix is the edge
    /// dimensions minus the border on every side
    pub fn with_mid(mut self, mid: Array2<char>) -> Result<Self> {
        let border = 2 * FRAME_BORDER_WIDTH;
        let expected = (
            self.height().saturating_sub(border),
            self.width().saturating_sub(border),
        );
        check_dim("mid", expected, mid.dim())?;
        self.mid = Some(mid);
        Ok(self)
    }

    /// Attach the complete tile matrix
    ///
    /// # Errors
    ///
    /// Returns `TransformError::ShapeMismatch` unless the matrix is
    /// `height x width`
    pub fn with_full(mut self, full: Array2<char>) -> Result<Self> {
        check_dim("full", (self.height(), self.width()), full.dim())?;
        self.full = Some(full);
        Ok(self)
    }

    /// Assemble a frame from already-consistent parts with no matches
    pub(crate) const fn from_parts(
        tile: Id,
        top: String,
        bottom: String,
        left: String,
        right: String,
        mid: Option<Array2<char>>,
        full: Option<Array2<char>>,
    ) -> Self {
        Self {
            tile,
            top,
            bottom,
            left,
            right,
            mid,
            full,
            matches: Vec::new(),
        }
    }

    /// Tile identifier
    pub const fn tile(&self) -> &Id {
        &self.tile
    }

    /// Top edge, read left to right
    pub fn top(&self) -> &str {
        &self.top
    }

    /// Bottom edge, read left to right
    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    /// Left edge, read top to bottom
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Right edge, read top to bottom
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Edge string for a side
    pub fn edge(&self, side: Side) -> &str {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Interior matrix with the border stripped, if known
    pub const fn mid(&self) -> Option<&Array2<char>> {
        self.mid.as_ref()
    }

    /// Complete tile matrix including the border, if known
    pub const fn full(&self) -> Option<&Array2<char>> {
        self.full.as_ref()
    }

    /// Adjacency results recorded since this frame was produced
    pub fn matches(&self) -> &[EdgeMatch<Id>] {
        &self.matches
    }

    /// Record that `neighbor` matches this frame along `side`
    pub fn record_match(&mut self, side: Side, neighbor: Id) {
        self.matches.push(EdgeMatch { side, neighbor });
    }

    /// Tile width in cells (length of the top edge)
    pub fn width(&self) -> usize {
        self.top.chars().count()
    }

    /// Tile height in cells (length of the left edge)
    pub fn height(&self) -> usize {
        self.left.chars().count()
    }

    /// Check that the edge strings agree with the border of `full`
    ///
    /// Frames without a `full` matrix have nothing to compare and pass.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EdgeMismatch` naming the first side whose edge
    /// differs from the matrix border
    pub fn verify_border(&self) -> Result<()> {
        let Some(full) = &self.full else {
            return Ok(());
        };

        let [top, bottom, left, right] = border_edges(full);
        let borders = [
            (Side::Top, top),
            (Side::Right, right),
            (Side::Bottom, bottom),
            (Side::Left, left),
        ];
        match borders
            .into_iter()
            .find(|(side, border)| self.edge(*side) != border.as_str())
        {
            Some((side, _)) => Err(TransformError::EdgeMismatch { side }),
            None => Ok(()),
        }
    }

    fn check_edges(&self) -> Result<()> {
        let width = self.width();
        let height = self.height();
        if width == 0 || height == 0 {
            return Err(TransformError::EmptyGrid);
        }

        let bottom = self.bottom.chars().count();
        if bottom != width {
            debug!(width, bottom, "bottom edge length differs from top");
            return Err(shape_mismatch(&"bottom edge", width, bottom));
        }

        let right = self.right.chars().count();
        if right != height {
            debug!(height, right, "right edge length differs from left");
            return Err(shape_mismatch(&"right edge", height, right));
        }
        Ok(())
    }
}

fn check_dim(field: &str, expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected.0 != actual.0 {
        debug!(field, expected = expected.0, actual = actual.0, "row count mismatch");
        return Err(shape_mismatch(&format!("{field} rows"), expected.0, actual.0));
    }
    if expected.1 != actual.1 {
        debug!(field, expected = expected.1, actual = actual.1, "column count mismatch");
        return Err(shape_mismatch(&format!("{field} columns"), expected.1, actual.1));
    }
    Ok(())
}

/// Read the `[top, bottom, left, right]` edges off a matrix border
fn border_edges(full: &Array2<char>) -> [String; 4] {
    let read = |lane: ArrayView1<'_, char>| lane.iter().collect::<String>();

    let mut rows = full.outer_iter();
    let top = rows.next().map(read).unwrap_or_default();
    let bottom = rows.next_back().map(read).unwrap_or_else(|| top.clone());

    let mut columns = full.axis_iter(Axis(1));
    let left = columns.next().map(read).unwrap_or_default();
    let right = columns.next_back().map(read).unwrap_or_else(|| left.clone());

    [top, bottom, left, right]
}

fn interior(full: &Array2<char>) -> Array2<char> {
    let span = |len: usize| {
        let start = FRAME_BORDER_WIDTH.min(len);
        start..len.saturating_sub(FRAME_BORDER_WIDTH).max(start)
    };
    let (rows, cols) = full.dim();
    full.slice_axis(Axis(0), Slice::from(span(rows)))
        .slice_axis(Axis(1), Slice::from(span(cols)))
        .to_owned()
}
