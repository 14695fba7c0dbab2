use fxhash::FxHashSet;

use crate::point::Point;

/// Every distinct cell some knot has occupied. Only ever grows.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    points: FxHashSet<Point>,
}

impl VisitedSet {
    /// A knot has always visited the cell it starts on.
    pub fn new(start: Point) -> VisitedSet {
        let mut points = FxHashSet::default();
        points.insert(start);
        VisitedSet { points }
    }

    /// Returns true if `point` had not been visited before.
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Smallest and largest corners of the box holding every visited cell.
    pub fn bounds(&self) -> (Point, Point) {
        let mut points = self.points.iter().copied();
        let first = points.next().unwrap_or_default();

        points.fold((first, first), |(lo, hi), p| {
            (lo.component_min(p), hi.component_max(p))
        })
    }
}

impl Extend<Point> for VisitedSet {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}
