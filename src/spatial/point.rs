//! Coordinate model: points, shift vectors and the fixed direction tables
//!
//! A point is a `(row, col)` pair with the origin at the top-left cell and the
//! row axis first. The same type doubles as a relative shift vector, so moving
//! one step in any direction is plain component-wise addition.

use std::fmt;
use std::ops::Add;

/// A `(row, col)` pair, either an absolute cell coordinate or a shift vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// Row index, growing downwards
    pub row: i32,
    /// Column index, growing to the right
    pub col: i32,
}

impl Point {
    /// The top-left cell, also the zero shift
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a point from its row and column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, shift: Self) -> Self {
        shift_point(self, shift)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<[i32; 2]> for Point {
    fn from([row, col]: [i32; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Point> for [i32; 2] {
    fn from(point: Point) -> Self {
        [point.row, point.col]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Shift a point by a relative vector
///
/// Component-wise addition with no bounds; wraps on `i32` overflow so the
/// operation never fails.
pub const fn shift_point(point: Point, shift: Point) -> Point {
    Point::new(
        point.row.wrapping_add(shift.row),
        point.col.wrapping_add(shift.col),
    )
}

/// Clamp a value into `[min, max]`
///
/// Unlike `Ord::clamp` this never panics: if `min > max` the result is `min`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0
    North,
    /// Towards higher rows
    South,
    /// Towards column 0
    West,
    /// Towards higher columns
    East,
}

impl Direction {
    /// All directions in table order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// Shift vector for a single step in this direction
    pub const fn shift(self) -> Point {
        match self {
            Self::North => Point::new(-1, 0),
            Self::South => Point::new(1, 0),
            Self::West => Point::new(0, -1),
            Self::East => Point::new(0, 1),
        }
    }

    /// Compass letter (`N`, `S`, `W`, `E`)
    pub const fn compass_letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::West => 'W',
            Self::East => 'E',
        }
    }

    /// Directional letter (`U`, `D`, `L`, `R`)
    pub const fn directional_letter(self) -> char {
        match self {
            Self::North => 'U',
            Self::South => 'D',
            Self::West => 'L',
            Self::East => 'R',
        }
    }

    /// Look up a direction by compass letter
    pub const fn from_compass(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            'E' => Some(Self::East),
            _ => None,
        }
    }

    /// Look up a direction by directional letter
    pub const fn from_directional(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Self::North),
            'D' => Some(Self::South),
            'L' => Some(Self::West),
            'R' => Some(Self::East),
            _ => None,
        }
    }

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }
}

/// 4-neighbourhood shift vectors, index-aligned with [`Direction::ALL`]
pub const ADJACENT_OFFSETS: [Point; 4] = [
    Direction::North.shift(),
    Direction::South.shift(),
    Direction::West.shift(),
    Direction::East.shift(),
];

/// 8-neighbourhood shift vectors in row-major order, zero vector excluded
pub const SURROUNDING_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// Compass letters mapped to shift vectors, index-aligned with [`ADJACENT_OFFSETS`]
pub const COMPASS_TABLE: [(char, Point); 4] = [
    ('N', Direction::North.shift()),
    ('S', Direction::South.shift()),
    ('W', Direction::West.shift()),
    ('E', Direction::East.shift()),
];

/// Directional letters mapped to shift vectors, index-aligned with [`ADJACENT_OFFSETS`]
pub const DIRECTIONAL_TABLE: [(char, Point); 4] = [
    ('U', Direction::North.shift()),
    ('D', Direction::South.shift()),
    ('L', Direction::West.shift()),
    ('R', Direction::East.shift()),
];

/// Shift vector for a compass letter, if it is one of `N`, `S`, `W`, `E`
pub fn compass_shift(letter: char) -> Option<Point> {
    Direction::from_compass(letter).map(Direction::shift)
}

/// Shift vector for a directional letter, if it is one of `U`, `D`, `L`, `R`
pub fn directional_shift(letter: char) -> Option<Point> {
    Direction::from_directional(letter).map(Direction::shift)
}
