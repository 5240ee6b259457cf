//! Focus (Domination) game logic with stack-based board representation.
//!
//! # Board Layout (6×6)
//!
//! ```text
//! Every cell holds at most one stack of colored units, bottom to top.
//! The starting position is one unit per cell:
//!
//!        col 0  1  2  3  4  5
//!   row 0    A  A  B  B  A  A
//!   row 1    B  B  A  A  B  B
//!   row 2    A  A  B  B  A  A
//!   row 3    B  B  A  A  B  B
//!   row 4    A  A  B  B  A  A
//!   row 5    B  B  A  A  B  B
//!
//!   A = first player's color, B = second player's color
//! ```
//!
//! # Moves
//!
//! ```text
//! Shift: take the top `count` units of a stack you control and move them
//!        exactly `count` cells along a row or a column.
//! Place: put one unit from your reserve on an empty cell.
//! ```
//!
//! A stack taller than [`MAX_HEIGHT`] sheds units from its bottom: the
//! mover's own units go to their reserve, enemy units are captured.
//! Capturing [`CAPTURES_TO_WIN`] units wins the game.

#[cfg(feature = "wasm")]
pub mod wasm;

mod board;
mod error;
mod game;
mod player;
mod stack;
mod turn;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use board::Board;
pub use error::{EmptyStack, IllegalMove, SetupError};
pub use game::{Game, Outcome};
pub use player::Player;
pub use stack::Stack;
pub use turn::Turn;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 6;

/// Tallest stack allowed to remain on the board.
pub const MAX_HEIGHT: usize = 5;

/// Captures needed to win.
pub const CAPTURES_TO_WIN: u8 = 6;

/// Units in play at the start of a game (one per cell).
pub const TOTAL_UNITS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Seat identifier for one of the two players.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Get the opponent side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Index into per-player arrays (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// Both sides, seat order.
    pub fn all() -> impl Iterator<Item = Side> {
        [Side::One, Side::Two].into_iter()
    }
}

/// A player's color label, e.g. `R` or `G`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Color(pub char);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single piece. Units never change color once created.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Unit(Color);

impl Unit {
    #[inline]
    pub fn new(color: Color) -> Unit {
        Unit(color)
    }

    #[inline]
    pub fn color(self) -> Color {
        self.0
    }
}

/// A board coordinate.
///
/// Rows and columns run 0-5. A `Pos` may point off the board; callers that
/// accept positions from outside check [`Pos::is_valid`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Create a position from row and column.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Pos {
        Pos { row, col }
    }

    /// Check if this position lies on the board.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Step `distance` cells in a direction, if the result stays on the board.
    pub fn offset(self, d_row: i8, d_col: i8, distance: u8) -> Option<Pos> {
        let row = self.row as i16 + d_row as i16 * distance as i16;
        let col = self.col as i16 + d_col as i16 * distance as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over all 36 positions, row-major.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An action a player can take on their turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Move {
    /// Move the top `count` units of the stack at `from` onto `to`.
    Shift { from: Pos, to: Pos, count: u8 },
    /// Place one unit from the reserve onto the empty cell `to`.
    Place { to: Pos },
}
