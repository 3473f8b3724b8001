//! Tests for points, shifting, clamping and direction tables

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tileframe::spatial::point::{
        ADJACENT_OFFSETS, COMPASS_TABLE, DIRECTIONAL_TABLE, Direction, Point,
        SURROUNDING_OFFSETS, clamp, compass_shift, directional_shift, shift_point,
    };

    // Tests shifting adds components independently
    // Verified by swapping row and column in the sum
    #[test]
    fn test_shift_point_adds_components() {
        assert_eq!(
            shift_point(Point::new(3, 7), Point::new(-1, 2)),
            Point::new(2, 9)
        );
        assert_eq!(
            shift_point(Point::new(0, 0), Point::new(-4, -5)),
            Point::new(-4, -5)
        );
    }

    // Tests the addition operator matches shift_point
    // Verified by subtracting in the Add impl
    #[test]
    fn test_add_operator() {
        let point = Point::new(5, -2);
        let shift = Point::new(1, 1);
        assert_eq!(point + shift, shift_point(point, shift));
    }

    // Tests shifting never overflows
    // Verified by using plain addition
    #[test]
    fn test_shift_point_wraps_at_extremes() {
        let shifted = shift_point(Point::new(i32::MAX, 0), Point::new(1, 0));
        assert_eq!(shifted, Point::new(i32::MIN, 0));
    }

    // Tests clamp below, inside and above the range
    // Verified by swapping the min and max branches
    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-3, 0, 5), 0);
        assert_eq!(clamp(3, 0, 5), 3);
        assert_eq!(clamp(9, 0, 5), 5);
        assert!((clamp(0.75_f64, 0.0, 0.5) - 0.5).abs() < f64::EPSILON);
    }

    // Tests clamp with an inverted range returns min instead of panicking
    // Verified by delegating to Ord::clamp
    #[test]
    fn test_clamp_inverted_range() {
        assert_eq!(clamp(3, 5, 0), 5);
        assert_eq!(clamp(-1, 5, 0), 5);
    }

    // Tests the 4-neighbourhood order
    // Verified by reordering the offset table
    #[test]
    fn test_adjacent_offsets_order() {
        assert_eq!(
            ADJACENT_OFFSETS,
            [
                Point::new(-1, 0),
                Point::new(1, 0),
                Point::new(0, -1),
                Point::new(0, 1)
            ]
        );
    }

    // Tests compass and directional tables are index-aligned with the offsets
    // Verified by swapping two entries of the directional table
    #[test]
    fn test_tables_are_index_aligned() {
        for ((offset, (compass, compass_vec)), (directional, directional_vec)) in ADJACENT_OFFSETS
            .iter()
            .zip(COMPASS_TABLE)
            .zip(DIRECTIONAL_TABLE)
        {
            assert_eq!(*offset, compass_vec);
            assert_eq!(*offset, directional_vec);
            assert_eq!(compass_shift(compass), Some(*offset));
            assert_eq!(directional_shift(directional), Some(*offset));
        }

        let compass_keys: String = COMPASS_TABLE.iter().map(|(key, _)| key).collect();
        let directional_keys: String = DIRECTIONAL_TABLE.iter().map(|(key, _)| key).collect();
        assert_eq!(compass_keys, "NSWE");
        assert_eq!(directional_keys, "UDLR");
    }

    // Tests unknown letters have no shift
    // Verified by mapping unknown letters to the zero vector
    #[test]
    fn test_unknown_letters() {
        assert_eq!(compass_shift('U'), None);
        assert_eq!(directional_shift('N'), None);
        assert_eq!(compass_shift('n'), None);
    }

    // Tests direction letters round-trip and opposites cancel
    // Verified by pairing North with East as opposites
    #[test]
    fn test_direction_round_trip_and_opposite() {
        for direction in Direction::ALL {
            assert_eq!(
                Direction::from_compass(direction.compass_letter()),
                Some(direction)
            );
            assert_eq!(
                Direction::from_directional(direction.directional_letter()),
                Some(direction)
            );
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(
                direction.shift() + direction.opposite().shift(),
                Point::ORIGIN
            );
        }
    }

    // Tests the 8-neighbourhood has eight distinct non-zero offsets
    // Verified by including the zero vector
    #[test]
    fn test_surrounding_offsets() {
        let unique: HashSet<Point> = SURROUNDING_OFFSETS.into_iter().collect();
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&Point::ORIGIN));
        for offset in SURROUNDING_OFFSETS {
            assert!(offset.row.abs() <= 1 && offset.col.abs() <= 1);
        }
    }

    // Tests conversions and display
    // Verified by printing column first
    #[test]
    fn test_conversions_and_display() {
        let point = Point::from((1, -2));
        assert_eq!(point, Point::from([1, -2]));
        assert_eq!(<[i32; 2]>::from(point), [1, -2]);
        assert_eq!(point.to_string(), "(1, -2)");
    }
}
