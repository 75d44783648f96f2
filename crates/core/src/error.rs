//! Error types for the search engine and the session.
//!
//! Two families are kept apart:
//!
//! - [`CommandError`]: a command was rejected (bad square, wrong phase). The session
//!   is left untouched and callers are free to ignore the error.
//! - [`EngineError`]: the engine was driven incorrectly or one of its internal
//!   invariants broke. These must be propagated, not swallowed.

use thiserror::Error;

use crate::types::Position;

/// A rejected command. No state was mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Position outside the configured board
    #[error("position {position} is off the {size}x{size} board")]
    OutOfBounds { position: Position, size: u8 },

    /// Goal equal to the start square
    #[error("goal {0} is the start square")]
    SameAsStart(Position),

    /// Command not accepted in the current phase
    #[error("`{command}` is not accepted while {phase}")]
    WrongPhase {
        command: &'static str,
        phase: &'static str,
    },
}

/// Engine misuse or internal invariant breach.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("search is not running (phase: {0})")]
    NotRunning(&'static str),

    #[error("cannot animate an empty path")]
    EmptyPath,

    /// The predecessor chain from the goal never reached the origin.
    #[error("parent chain from {goal} did not reach {origin} within {limit} hops")]
    BrokenParentChain {
        origin: Position,
        goal: Position,
        limit: usize,
    },

    #[error("search did not terminate within {0} steps")]
    StepLimit(usize),

    #[error(transparent)]
    Rejected(#[from] CommandError),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
