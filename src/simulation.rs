use std::time::Instant;

use derive_builder::Builder;
use lazy_static::lazy_static;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::direction::Direction;
use crate::error::Result;
use crate::instruction::Instruction;
use crate::point::Point;
use crate::visited::VisitedSet;

lazy_static! {
    static ref TRACE_EVERY: usize = std::env::var("ROPE_BRIDGE_TRACE_EVERY")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of knots including the head.
    pub knots: usize,
    pub start: Point,
    /// Emit a progress event every this many unit steps, 0 to disable.
    pub trace_every: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            knots: 2,
            start: Point::ORIGIN,
            trace_every: *TRACE_EVERY,
        }
    }
}

impl SimulationConfig {
    pub fn with_knots(knots: usize) -> Self {
        SimulationConfig {
            knots,
            ..Default::default()
        }
    }
}

/// Outcome of a run, in a form that serializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub knots: usize,
    pub steps: usize,
    pub visited: usize,
    pub head: Point,
    pub tail: Point,
}

/// Drives a [`Chain`] through instructions and records every cell its tail touches.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    chain: Chain,
    visited: VisitedSet,
    steps: usize,
    time_spent: f32,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Simulation> {
        let chain = Chain::new(config.knots, config.start)?;
        let visited = VisitedSet::new(chain.tail());

        Ok(Simulation {
            config,
            chain,
            visited,
            steps: 0,
            time_spent: 0 as f32,
        })
    }

    /// Move the head a single unit and record where the tail lands.
    pub fn step(&mut self, direction: Direction) {
        self.chain.move_head(direction);
        self.visited.insert(self.chain.tail());
        self.steps += 1;

        if self.config.trace_every > 0 && self.steps % self.config.trace_every == 0 {
            tracing::debug!(
                "[DEBUG] steps: {}, head: {:?}, tail: {:?}, visited: {}",
                self.steps,
                self.chain.head(),
                self.chain.tail(),
                self.visited.size()
            );
        }
    }

    pub fn apply(&mut self, instruction: &Instruction) -> Result<()> {
        instruction.validate()?;
        tracing::trace!("applying {instruction}");

        for direction in instruction.unit_steps() {
            self.step(direction);
        }
        Ok(())
    }

    /// Apply every instruction in order and return how many cells the tail visited.
    ///
    /// The first invalid instruction aborts the run; everything before it has
    /// already been applied.
    pub fn run<'a, I>(&mut self, instructions: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Instruction>,
    {
        let start = Instant::now();

        for instruction in instructions {
            if let Err(e) = self.apply(instruction) {
                self.time_spent += start.elapsed().as_secs_f32();
                return Err(e);
            }
        }

        self.time_spent += start.elapsed().as_secs_f32();
        Ok(self.visited.size())
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn time_spent(&self) -> f32 {
        self.time_spent
    }

    pub fn summary(&self) -> Summary {
        Summary {
            knots: self.chain.knots().len(),
            steps: self.steps,
            visited: self.visited.size(),
            head: self.chain.head(),
            tail: self.chain.tail(),
        }
    }
}

/// Run `instructions` on a fresh rope of `knots` knots starting at the origin.
pub fn simulate(instructions: &[Instruction], knots: usize) -> Result<usize> {
    Simulation::new(SimulationConfig::with_knots(knots))?.run(instructions)
}

/// Run the same instructions once per rope length, in parallel.
///
/// Each run owns its own chain and visited set. Results come back in the
/// order of `lengths`.
pub fn run_many(instructions: &[Instruction], lengths: &[usize]) -> Vec<Result<Simulation>> {
    lengths
        .par_iter()
        .map(|&knots| {
            let mut simulation = Simulation::new(SimulationConfig::with_knots(knots))?;
            simulation.run(instructions)?;

            log::info!(
                "{} knots: {} visited in {} steps, {} seconds",
                knots,
                simulation.visited().size(),
                simulation.steps(),
                simulation.time_spent()
            );
            Ok(simulation)
        })
        .collect()
}

/// Like [`run_many`], keeping only the summary of each run.
pub fn simulate_many(instructions: &[Instruction], lengths: &[usize]) -> Vec<Result<Summary>> {
    run_many(instructions, lengths)
        .into_iter()
        .map(|result| result.map(|simulation| simulation.summary()))
        .collect()
}
