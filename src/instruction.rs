use std::fmt;
use std::io::BufRead;
use std::iter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{Result, RopeError};

/// Move the head `count` unit steps in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub direction: Direction,
    pub count: usize,
}

impl Instruction {
    pub fn new(direction: Direction, count: usize) -> Result<Instruction> {
        let instruction = Instruction { direction, count };
        instruction.validate()?;
        Ok(instruction)
    }

    /// Fields are public (and deserializable), so anything built without
    /// `new` is checked again before it is run.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(RopeError::InvalidCount(0));
        }
        Ok(())
    }

    /// The direction, repeated once per unit step.
    pub fn unit_steps(&self) -> impl Iterator<Item = Direction> {
        iter::repeat(self.direction).take(self.count)
    }
}

impl FromStr for Instruction {
    type Err = RopeError;

    // "R 4"
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (direction, count) = match (parts.next(), parts.next(), parts.next()) {
            (Some(direction), Some(count), None) => (direction, count),
            _ => return Err(RopeError::MalformedInstruction(s.to_string())),
        };

        let direction = Direction::try_from(direction)?;
        let count: i64 = count
            .parse()
            .map_err(|_| RopeError::MalformedInstruction(s.to_string()))?;
        if count <= 0 {
            return Err(RopeError::InvalidCount(count));
        }

        let count =
            usize::try_from(count).map_err(|_| RopeError::MalformedInstruction(s.to_string()))?;
        Instruction::new(direction, count)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.count)
    }
}

/// Read one instruction per line until EOF.
///
/// Trailing blank lines are ignored, a blank line with more input after it is
/// malformed. Stops at the first malformed line; the error carries its
/// 1-based line number.
pub fn read_instructions<R: BufRead>(reader: &mut R) -> Result<Vec<Instruction>> {
    let mut instructions = Vec::new();
    let mut first_blank = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            if first_blank.is_none() {
                first_blank = Some(i + 1);
            }
            continue;
        }

        if let Some(blank) = first_blank {
            return Err(RopeError::AtLine {
                line: blank,
                source: Box::new(RopeError::MalformedInstruction(String::new())),
            });
        }

        let instruction = line.parse::<Instruction>().map_err(|e| RopeError::AtLine {
            line: i + 1,
            source: Box::new(e),
        })?;
        instructions.push(instruction);
    }

    log::debug!("Read {} instructions", instructions.len());
    Ok(instructions)
}

/// Convenience wrapper over [`read_instructions`] for in-memory input.
pub fn parse_instructions(input: &str) -> Result<Vec<Instruction>> {
    read_instructions(&mut input.as_bytes())
}
