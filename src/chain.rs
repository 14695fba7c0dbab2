use crate::direction::Direction;
use crate::error::{Result, RopeError};
use crate::point::{adjacent, Point};

/// Where `follower` ends up after one catch-up step behind `leader`.
///
/// Touching knots stay put. Otherwise the follower closes one unit on each
/// axis where it differs from the leader, so a gap of 2 (straight or
/// diagonal) always becomes a gap of 1.
pub fn catch_up(leader: Point, follower: Point) -> Point {
    if adjacent(leader, follower) {
        follower
    } else {
        follower.step_toward(leader)
    }
}

/// A rope of fixed length. Index 0 is the head, the last index is the tail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain {
    knots: Vec<Point>,
}

impl Chain {
    /// All knots start stacked on `start`.
    pub fn new(length: usize, start: Point) -> Result<Chain> {
        if length < 2 {
            return Err(RopeError::ChainTooShort(length));
        }

        Ok(Chain {
            knots: vec![start; length],
        })
    }

    pub fn move_head(&mut self, direction: Direction) {
        self.knots[0] += Point::from(direction);

        for i in 1..self.knots.len() {
            let follower = catch_up(self.knots[i - 1], self.knots[i]);

            // Nothing further back can move if this knot didn't
            if follower == self.knots[i] {
                break;
            }
            self.knots[i] = follower;
        }

        debug_assert!(self.is_connected());
    }

    pub fn head(&self) -> Point {
        self.knots[0]
    }

    pub fn tail(&self) -> Point {
        self.knots[self.knots.len() - 1]
    }

    pub fn knots(&self) -> &[Point] {
        &self.knots
    }

    /// Every knot touches the one ahead of it.
    pub fn is_connected(&self) -> bool {
        self.knots.windows(2).all(|pair| adjacent(pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with(knots: Vec<Point>) -> Chain {
        Chain { knots }
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            Chain::new(1, Point::ORIGIN),
            Err(RopeError::ChainTooShort(1))
        ));
        assert!(Chain::new(0, Point::ORIGIN).is_err());
        assert!(Chain::new(2, Point::ORIGIN).is_ok());
    }

    #[test]
    fn test_starts_collapsed() {
        let chain = Chain::new(10, Point::new(3, 3)).unwrap();

        assert_eq!(chain.knots().len(), 10);
        assert!(chain.knots().iter().all(|&p| p == Point::new(3, 3)));
        assert_eq!(chain.head(), chain.tail());
    }

    #[test]
    fn test_catch_up_touching_does_not_move() {
        assert_eq!(
            catch_up(Point::new(0, 0), Point::new(1, 1)),
            Point::new(1, 1)
        );
        assert_eq!(catch_up(Point::new(0, 0), Point::ORIGIN), Point::ORIGIN);
    }

    #[test]
    fn test_catch_up_straight() {
        assert_eq!(
            catch_up(Point::new(2, 0), Point::new(0, 0)),
            Point::new(1, 0)
        );
        assert_eq!(
            catch_up(Point::new(0, -2), Point::new(0, 0)),
            Point::new(0, -1)
        );
    }

    #[test]
    fn test_catch_up_diagonal() {
        let leader = Point::new(0, 0);
        let follower = catch_up(leader, Point::new(2, 1));

        // Both axes close toward the leader, including the one only 1 apart
        assert_eq!(follower, Point::new(1, 0));
        assert!(adjacent(leader, follower));

        assert_eq!(
            catch_up(Point::new(0, 0), Point::new(1, 2)),
            Point::new(0, 1)
        );

        assert_eq!(
            catch_up(Point::new(2, 2), Point::new(0, 0)),
            Point::new(1, 1)
        );
    }

    #[test]
    fn test_head_moves_one_unit() {
        let mut chain = Chain::new(2, Point::ORIGIN).unwrap();

        chain.move_head(Direction::Right);
        assert_eq!(chain.head(), Point::new(1, 0));
        assert_eq!(chain.tail(), Point::ORIGIN);

        chain.move_head(Direction::Right);
        assert_eq!(chain.head(), Point::new(2, 0));
        assert_eq!(chain.tail(), Point::new(1, 0));
    }

    #[test]
    fn test_tail_follows_diagonally() {
        let mut chain = chain_with(vec![Point::new(1, -1), Point::ORIGIN]);

        chain.move_head(Direction::Up);
        assert_eq!(chain.head(), Point::new(1, -2));
        assert_eq!(chain.tail(), Point::new(1, -1));
    }

    #[test]
    fn test_long_chain_stays_connected() {
        let mut chain = Chain::new(10, Point::ORIGIN).unwrap();
        let moves = [
            (Direction::Right, 5),
            (Direction::Up, 8),
            (Direction::Left, 8),
            (Direction::Down, 3),
            (Direction::Right, 17),
        ];

        for (direction, count) in moves {
            for _ in 0..count {
                chain.move_head(direction);
                assert!(chain.is_connected(), "broken chain: {:?}", chain.knots());
            }
        }
    }

    #[test]
    fn test_knots_pulled_in_order() {
        let mut chain = Chain::new(3, Point::ORIGIN).unwrap();
        for _ in 0..3 {
            chain.move_head(Direction::Down);
        }

        assert_eq!(
            chain.knots(),
            &[Point::new(0, 3), Point::new(0, 2), Point::new(0, 1)]
        );
    }
}
