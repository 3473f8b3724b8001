//! Tests for 4- and 8-neighbourhood enumeration with filtering and clamping

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tileframe::spatial::grid::{Bounds, Grid};
    use tileframe::spatial::neighbors::{
        get_adjacent, get_adjacent_in_grid, get_surrounding, get_surrounding_in_grid,
    };
    use tileframe::spatial::point::Point;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    // Tests unfiltered adjacency keeps table order and out-of-range points
    // Verified by filtering negatives without bounds
    #[test]
    fn test_get_adjacent_unfiltered() {
        assert_eq!(
            get_adjacent(p(0, 0), None),
            vec![p(-1, 0), p(1, 0), p(0, -1), p(0, 1)]
        );
    }

    // Tests filtered adjacency drops out-of-bounds candidates in order
    // Verified by clamping instead of filtering
    #[test]
    fn test_get_adjacent_filtered() {
        let bounds = Bounds::new(3, 3).unwrap();
        assert_eq!(get_adjacent(p(0, 0), Some(bounds)), vec![p(1, 0), p(0, 1)]);
        assert_eq!(get_adjacent(p(1, 1), Some(bounds)).len(), 4);
        assert_eq!(get_adjacent(p(2, 1), Some(bounds)), vec![p(1, 1), p(2, 0), p(2, 2)]);

        let single = Bounds::new(1, 1).unwrap();
        assert!(get_adjacent(p(0, 0), Some(single)).is_empty());
    }

    // Tests filtered adjacency accepts a grid or bare bounds like the clamped forms
    // Verified by ignoring the grid passed by reference
    #[test]
    fn test_get_adjacent_accepts_grid() {
        let grid = Grid::from_rows(vec![vec![0u8; 3]; 2]).unwrap();
        let bounds = grid.bounds();

        assert_eq!(get_adjacent(p(0, 0), &grid), vec![p(1, 0), p(0, 1)]);
        assert_eq!(get_adjacent(p(1, 2), &grid), get_adjacent(p(1, 2), bounds));
        assert_eq!(get_adjacent(p(1, 2), bounds), get_adjacent(p(1, 2), Some(bounds)));
        assert_eq!(get_adjacent(p(1, 2), &grid), vec![p(0, 2), p(1, 1)]);
    }

    // Tests clamped adjacency collapses onto the boundary at corners
    // Verified by dropping clamped duplicates
    #[test]
    fn test_get_adjacent_in_grid_corners() {
        let grid = Grid::from_rows(vec![vec![0u8; 3]; 3]).unwrap();

        assert_eq!(
            get_adjacent_in_grid(&grid, p(0, 0)),
            [p(0, 0), p(1, 0), p(0, 0), p(0, 1)]
        );
        assert_eq!(
            get_adjacent_in_grid(&grid, p(2, 2)),
            [p(1, 2), p(2, 2), p(2, 1), p(2, 2)]
        );
    }

    // Tests clamping uses the column count for non-square grids
    // Verified by clamping columns against the row count
    #[test]
    fn test_get_adjacent_in_grid_non_square() {
        let bounds = Bounds::new(2, 5).unwrap();
        assert_eq!(
            get_adjacent_in_grid(bounds, p(1, 4)),
            [p(0, 4), p(1, 4), p(1, 3), p(1, 4)]
        );
    }

    // Tests the 8-neighbourhood order around an interior point
    // Verified by listing offsets column-major
    #[test]
    fn test_get_surrounding_order() {
        assert_eq!(
            get_surrounding(p(5, 5)),
            [
                p(4, 4),
                p(4, 5),
                p(4, 6),
                p(5, 4),
                p(5, 6),
                p(6, 4),
                p(6, 5),
                p(6, 6)
            ]
        );
    }

    // Tests the 8-neighbourhood is distinct and excludes the centre
    // Verified by including the zero offset
    #[test]
    fn test_get_surrounding_distinct() {
        let centre = p(-3, 12);
        let around = get_surrounding(centre);
        let unique: HashSet<Point> = around.into_iter().collect();
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&centre));
    }

    // Tests clamped surrounding cells on a small grid
    // Verified by filtering instead of clamping
    #[test]
    fn test_get_surrounding_in_grid() {
        let bounds = Bounds::new(2, 2).unwrap();
        assert_eq!(
            get_surrounding_in_grid(bounds, p(0, 0)),
            [
                p(0, 0),
                p(0, 0),
                p(0, 1),
                p(0, 0),
                p(0, 1),
                p(1, 0),
                p(1, 0),
                p(1, 1)
            ]
        );
        for point in get_surrounding_in_grid(bounds, p(1, 1)) {
            assert!(bounds.contains(point));
        }
    }
}
