use thiserror::Error;

/// Everything that can go wrong between raw input and a finished run.
#[derive(Debug, Error)]
pub enum RopeError {
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("invalid step count: {0} (must be a positive integer)")]
    InvalidCount(i64),

    #[error("malformed instruction: {0:?} (expected \"<direction> <count>\")")]
    MalformedInstruction(String),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<RopeError>,
    },

    #[error("a rope needs at least 2 knots, got {0}")]
    ChainTooShort(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RopeError>;

impl RopeError {
    /// True for errors caused by bad instruction input rather than I/O or setup.
    pub fn is_malformed_input(&self) -> bool {
        match self {
            RopeError::InvalidDirection(_)
            | RopeError::InvalidCount(_)
            | RopeError::MalformedInstruction(_) => true,
            RopeError::AtLine { source, .. } => source.is_malformed_input(),
            RopeError::ChainTooShort(_) | RopeError::Io(_) => false,
        }
    }
}
