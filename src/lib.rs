//! Simulate a rope of knots dragged around an integer grid by its head and
//! count the distinct cells its tail passes over.

pub mod chain;
pub mod direction;
pub mod error;
pub mod instruction;
pub mod point;
pub mod render;
pub mod simulation;
pub mod visited;

pub use chain::{catch_up, Chain};
pub use direction::Direction;
pub use error::{Result, RopeError};
pub use instruction::{parse_instructions, read_instructions, Instruction};
pub use point::{adjacent, Point};
pub use simulation::{
    run_many, simulate, simulate_many, Simulation, SimulationConfig, SimulationConfigBuilder,
    Summary,
};
pub use visited::VisitedSet;
