//! Text pictures of a simulation, for eyeballing only.
//!
//! Rows run top to bottom in increasing `y`. The frame covers every visited
//! cell, the start and every knot.

use std::fmt::{self, Display, Formatter};

use crate::point::Point;
use crate::simulation::Simulation;

fn knot_char(index: usize) -> char {
    match index {
        0 => 'H',
        1..=9 => (b'0' + index as u8) as char,
        10..=35 => (b'a' + (index - 10) as u8) as char,
        _ => '*',
    }
}

fn fmt_grid(
    f: &mut Formatter,
    simulation: &Simulation,
    get_char: impl Fn(Point) -> Option<char>,
) -> fmt::Result {
    let start = simulation.config().start;
    let (mut lo, mut hi) = simulation.visited().bounds();
    for &p in simulation.chain().knots().iter().chain([start].iter()) {
        lo = lo.component_min(p);
        hi = hi.component_max(p);
    }

    for y in lo.y..=hi.y {
        if y != lo.y {
            writeln!(f)?;
        }

        for x in lo.x..=hi.x {
            let p = Point { x, y };
            let c = if let Some(c) = get_char(p) {
                c
            } else if p == start {
                's'
            } else {
                '.'
            };
            write!(f, "{c}")?;
        }
    }
    Ok(())
}

/// Knots by index (`H` for the head) drawn over the tail's trail.
pub struct RopePrinter<'a> {
    simulation: &'a Simulation,
}

impl Display for RopePrinter<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let knots = self.simulation.chain().knots();
        let visited = self.simulation.visited();
        let start = self.simulation.config().start;

        fmt_grid(f, self.simulation, |p| {
            if let Some(i) = knots.iter().position(|&k| k == p) {
                Some(knot_char(i))
            } else if p != start && visited.contains(&p) {
                Some('#')
            } else {
                None
            }
        })
    }
}

/// Only the cells the tail has visited.
pub struct TrailPrinter<'a> {
    simulation: &'a Simulation,
}

impl Display for TrailPrinter<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let visited = self.simulation.visited();
        let start = self.simulation.config().start;

        fmt_grid(f, self.simulation, |p| {
            if p != start && visited.contains(&p) {
                Some('#')
            } else {
                None
            }
        })
    }
}

impl Simulation {
    pub fn display_rope(&self) -> RopePrinter<'_> {
        RopePrinter { simulation: self }
    }

    pub fn display_trail(&self) -> TrailPrinter<'_> {
        TrailPrinter { simulation: self }
    }
}
