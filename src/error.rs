//! Rejection reasons.

use thiserror::Error;

use crate::{Pos, Side};

/// Why a requested move or placement was refused.
///
/// A refused action never changes the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("position {0} is off the board")]
    OutOfBounds(Pos),

    #[error("no stack at {0}")]
    EmptySource(Pos),

    #[error("move from {from} to {to} is not along a single row or column")]
    NotAxisAligned { from: Pos, to: Pos },

    #[error("stack at {0} is not controlled by the moving player")]
    WrongMoverColor(Pos),

    #[error("cannot move {count} units from a stack of height {height}")]
    InsufficientHeight { count: u8, height: usize },

    #[error("cannot move {0} units at once (at most 5)")]
    CountTooLarge(u8),

    #[error("moving {count} units must travel {count} cells, not {distance}")]
    DistanceMismatch { count: u8, distance: u8 },

    #[error("it is not {0:?}'s turn")]
    OutOfTurn(Side),

    #[error("cell {0} is already occupied")]
    DestinationOccupied(Pos),

    #[error("{0:?} has no units in reserve")]
    EmptyReserve(Side),
}

/// Why a game could not be created.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("both players use color {0}")]
    SameColor(char),

    #[error("both players are named {0:?}")]
    SameName(String),
}

/// A stack was built from no units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("a stack must hold at least one unit")]
pub struct EmptyStack;
