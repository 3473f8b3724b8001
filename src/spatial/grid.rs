//! Rectangular grids, their bounds, and quarter-turn rotation
//!
//! A [`Grid`] wraps an `ndarray::Array2` so rectangularity holds by
//! construction and the grid is never empty. Rotation composes clockwise
//! quarter turns; each quarter turn is a transpose followed by reversing the
//! column axis, which handles non-square grids without special cases.

use ndarray::{Array2, Axis};
use tracing::debug;

use crate::configuration::{QUARTER_TURN_DEGREES, QUARTER_TURNS_PER_REVOLUTION};
use crate::error::{Result, TransformError, invalid_rotation, shape_mismatch};
use crate::spatial::point::{Point, clamp, shift_point};

/// Row and column extent of a non-empty grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    rows: usize,
    cols: usize,
}

impl Bounds {
    /// Create bounds for a `rows x cols` grid
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EmptyGrid` if either dimension is zero
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(TransformError::EmptyGrid);
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Check whether a point addresses a cell inside the grid
    pub fn contains(self, point: Point) -> bool {
        let row_ok = usize::try_from(point.row).is_ok_and(|row| row < self.rows);
        let col_ok = usize::try_from(point.col).is_ok_and(|col| col < self.cols);
        row_ok && col_ok
    }

    /// Force a point onto the nearest cell inside the grid
    pub fn clamp(self, point: Point) -> Point {
        Point::new(
            clamp(point.row, 0, last_index(self.rows)),
            clamp(point.col, 0, last_index(self.cols)),
        )
    }

    /// Shift a point and clamp the result into the grid
    pub fn shift_clamped(self, point: Point, shift: Point) -> Point {
        self.clamp(shift_point(point, shift))
    }
}

// Dimensions past i32::MAX saturate; no point can address them anyway
fn last_index(len: usize) -> i32 {
    i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX)
}

/// A non-empty rectangular grid of cells, indexed `(row, col)` from the top-left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    /// Build a grid from a sequence of rows
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EmptyGrid` if there are no rows or the first
    /// row is empty, and `TransformError::ShapeMismatch` if any row length
    /// differs from the first
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(TransformError::EmptyGrid);
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != col_count)
        {
            debug!(index, expected = col_count, actual = row.len(), "ragged grid row");
            return Err(shape_mismatch(&format!("row {index}"), col_count, row.len()));
        }

        let cells = Array2::from_shape_vec(
            (row_count, col_count),
            rows.into_iter().flatten().collect(),
        )?;
        Ok(Self { cells })
    }

    /// Wrap an existing matrix
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EmptyGrid` if the matrix has no cells
    pub fn from_array(cells: Array2<T>) -> Result<Self> {
        if cells.is_empty() {
            return Err(TransformError::EmptyGrid);
        }
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Extent of this grid
    pub fn bounds(&self) -> Bounds {
        Bounds {
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    /// Cell at a point, or `None` if the point lies outside the grid
    pub fn get(&self, point: Point) -> Option<&T> {
        let row = usize::try_from(point.row).ok()?;
        let col = usize::try_from(point.col).ok()?;
        self.cells.get((row, col))
    }

    /// Borrow the underlying matrix
    pub const fn as_array(&self) -> &Array2<T> {
        &self.cells
    }

    /// Take the underlying matrix
    pub fn into_array(self) -> Array2<T> {
        self.cells
    }
}

impl<T: Clone> Grid<T> {
    /// Copy the grid out as a sequence of rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells.outer_iter().map(|row| row.to_vec()).collect()
    }
}

impl<T> From<&Grid<T>> for Bounds {
    fn from(grid: &Grid<T>) -> Self {
        grid.bounds()
    }
}

impl<T> From<&Grid<T>> for Option<Bounds> {
    fn from(grid: &Grid<T>) -> Self {
        Some(grid.bounds())
    }
}

/// Rotate a grid clockwise by a multiple of 90 degrees
///
/// One quarter turn makes output row `c` the input column `c` read bottom to
/// top, so an `r x c` grid becomes `c x r`. Rotating by 0 (or any whole
/// revolution) returns an unchanged copy.
///
/// # Errors
///
/// Returns `TransformError::InvalidRotation` if `degrees` is not a multiple of 90
pub fn rotate_grid<T: Clone>(grid: &Grid<T>, degrees: u32) -> Result<Grid<T>> {
    let turns = quarter_turns(degrees)?;
    Ok(rotate_grid_turns(grid, turns))
}

/// Apply `turns` clockwise quarter turns to a grid
pub(crate) fn rotate_grid_turns<T: Clone>(grid: &Grid<T>, turns: u32) -> Grid<T> {
    Grid {
        cells: rotate_cells(&grid.cells, turns),
    }
}

/// Mirror a grid across its horizontal axis (row order reversed)
pub fn flip_grid_x<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    Grid {
        cells: flip_rows(&grid.cells),
    }
}

/// Mirror a grid across its vertical axis (each row reversed)
pub fn flip_grid_y<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let mut view = grid.cells.view();
    view.invert_axis(Axis(1));
    Grid {
        cells: view.to_owned(),
    }
}

/// Convert a rotation in degrees into a number of quarter turns in `0..4`
pub(crate) fn quarter_turns(degrees: u32) -> Result<u32> {
    if degrees % QUARTER_TURN_DEGREES != 0 {
        debug!(degrees, "rejecting rotation that is not a quarter-turn multiple");
        return Err(invalid_rotation(degrees));
    }
    Ok((degrees / QUARTER_TURN_DEGREES) % QUARTER_TURNS_PER_REVOLUTION)
}

/// Apply `turns` clockwise quarter turns to a matrix
pub(crate) fn rotate_cells<T: Clone>(cells: &Array2<T>, turns: u32) -> Array2<T> {
    (0..turns).fold(cells.clone(), |rotated, _| quarter_turn(&rotated))
}

/// Reverse the row order of a matrix
pub(crate) fn flip_rows<T: Clone>(cells: &Array2<T>) -> Array2<T> {
    let mut view = cells.view();
    view.invert_axis(Axis(0));
    view.to_owned()
}

// new[r][c] = old[rows - 1 - c][r]
fn quarter_turn<T: Clone>(cells: &Array2<T>) -> Array2<T> {
    let mut view = cells.view().reversed_axes();
    view.invert_axis(Axis(1));
    view.to_owned()
}
