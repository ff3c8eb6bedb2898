//! Error types for chess-core

use thiserror::Error;

use crate::types::{Coords, Side};

/// Why a well-formed move intent was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    #[error("there is no piece at the start cell")]
    EmptySource,

    #[error("it is not {0}'s turn")]
    WrongTurn(Side),

    #[error("a king cannot be captured")]
    KingCapture,

    #[error("cannot capture a piece of the same side")]
    SameSideCapture,

    #[error("the piece cannot be placed on the target cell")]
    CannotPlace,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinates outside the 8x8 grid. Defensive; a well-behaved caller
    /// never produces these.
    #[error("coordinates {0} are outside the board")]
    OutOfRange(Coords),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMoveReason),

    /// A path-blocking query between cells that share no line or diagonal.
    /// Signals a logic defect in the caller, not an illegal move.
    #[error("no straight or diagonal path between {start} and {target}")]
    AmbiguousGeometry { start: Coords, target: Coords },
}

pub type Result<T> = std::result::Result<T, ChessError>;
