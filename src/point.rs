use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A cell on the unbounded integer lattice. `y` grows downward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

/// True if `a` and `b` touch, including diagonally or overlapping.
pub fn adjacent(a: Point, b: Point) -> bool {
    a.chebyshev_distance(b) <= 1
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: isize, y: isize) -> Point {
        Point { x, y }
    }

    pub fn manhattan_distance(&self, other: Point) -> isize {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn chebyshev_distance(&self, other: Point) -> isize {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    pub fn is_adjacent(&self, other: Point) -> bool {
        adjacent(*self, other)
    }

    /// Move one unit toward `target` on each axis that differs.
    ///
    /// Axis-aligned gaps close along that axis only, anything else closes
    /// diagonally.
    pub fn step_toward(self, target: Point) -> Point {
        let delta = target - self;
        self + Point {
            x: delta.x.signum(),
            y: delta.y.signum(),
        }
    }

    /// Componentwise minimum, used to grow bounding boxes.
    pub fn component_min(self, other: Point) -> Point {
        Point {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    pub fn component_max(self, other: Point) -> Point {
        Point {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign<Point> for Point {
    fn add_assign(&mut self, other: Point) {
        *self = *self + other;
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_includes_self_and_diagonals() {
        let p = Point::new(3, -2);

        assert!(adjacent(p, p));
        assert!(adjacent(p, Point::new(4, -1)));
        assert!(adjacent(p, Point::new(2, -3)));
        assert!(adjacent(p, Point::new(3, -1)));
    }

    #[test]
    fn test_not_adjacent_at_distance_two() {
        let p = Point::ORIGIN;

        assert!(!adjacent(p, Point::new(2, 0)));
        assert!(!adjacent(p, Point::new(0, -2)));
        assert!(!adjacent(p, Point::new(2, 1)));
        assert!(!adjacent(p, Point::new(-2, -2)));
    }

    #[test]
    fn test_distances() {
        let a = Point::new(-1, 4);
        let b = Point::new(2, 2);

        assert_eq!(a.chebyshev_distance(b), 3);
        assert_eq!(a.manhattan_distance(b), 5);
    }

    #[test]
    fn test_step_toward_axis() {
        assert_eq!(
            Point::new(0, 0).step_toward(Point::new(0, 2)),
            Point::new(0, 1)
        );
        assert_eq!(
            Point::new(5, 3).step_toward(Point::new(3, 3)),
            Point::new(4, 3)
        );
    }

    #[test]
    fn test_step_toward_diagonal() {
        assert_eq!(
            Point::new(2, 1).step_toward(Point::new(0, 0)),
            Point::new(1, 0)
        );
        assert_eq!(
            Point::new(-2, -2).step_toward(Point::new(0, 0)),
            Point::new(-1, -1)
        );
    }

    #[test]
    fn test_arithmetic() {
        let mut p = Point::new(1, 2);
        p += Point::new(3, -3);

        assert_eq!(p, Point::new(4, -1));
        assert_eq!(p - Point::new(4, -1), Point::ORIGIN);
    }
}
