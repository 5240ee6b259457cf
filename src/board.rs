//! The 6×6 grid of stacks.

use serde::{Deserialize, Serialize};

use crate::{Color, Pos, Stack, Unit, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// Board state: each cell holds one stack or nothing.
///
/// Indexed `cells[row][col]`. Lookups with off-board positions behave like
/// empty cells; writes require a valid position.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Stack>; SIZE]; SIZE],
}

impl Board {
    /// Create a board with no stacks.
    pub fn empty() -> Board {
        Board {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    /// Create the starting position.
    ///
    /// Even rows read `first first second second first first`, odd rows
    /// the reverse banding. Every cell starts as a singleton.
    pub fn starting(first: Color, second: Color) -> Board {
        let mut board = Board::empty();
        for pos in Pos::all() {
            let outer_band = pos.col < 2 || pos.col >= 4;
            let color = if (pos.row % 2 == 0) == outer_band { first } else { second };
            board.put(pos, Stack::singleton(Unit::new(color)));
        }
        board
    }

    /// Get the stack at a position.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&Stack> {
        if !pos.is_valid() {
            return None;
        }
        self.cells[pos.row as usize][pos.col as usize].as_ref()
    }

    /// Check if a cell holds no stack.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Height of the stack at a position (0 if none).
    #[inline]
    pub fn height(&self, pos: Pos) -> usize {
        self.get(pos).map_or(0, Stack::height)
    }

    /// Remove and return the stack at a position, leaving the cell empty.
    pub fn take(&mut self, pos: Pos) -> Option<Stack> {
        debug_assert!(pos.is_valid());
        self.cells[pos.row as usize][pos.col as usize].take()
    }

    /// Put a stack on a cell, replacing whatever was there.
    pub fn put(&mut self, pos: Pos, stack: Stack) {
        debug_assert!(pos.is_valid());
        self.cells[pos.row as usize][pos.col as usize] = Some(stack);
    }

    /// Set a cell from an optional stack.
    pub fn set(&mut self, pos: Pos, stack: Option<Stack>) {
        debug_assert!(pos.is_valid());
        self.cells[pos.row as usize][pos.col as usize] = stack;
    }

    /// Iterate over occupied cells, row-major.
    pub fn stacks(&self) -> impl Iterator<Item = (Pos, &Stack)> + '_ {
        Pos::all().filter_map(move |pos| self.get(pos).map(|s| (pos, s)))
    }

    /// Total number of units on the board.
    pub fn unit_count(&self) -> usize {
        self.stacks().map(|(_, s)| s.height()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Color = Color('R');
    const G: Color = Color('G');

    #[test]
    fn test_board_empty() {
        let board = Board::empty();
        assert!(Pos::all().all(|p| board.is_empty(p)));
        assert_eq!(board.unit_count(), 0);
    }

    #[test]
    fn test_starting_layout() {
        let board = Board::starting(R, G);
        let even = [R, R, G, G, R, R];
        let odd = [G, G, R, R, G, G];

        for pos in Pos::all() {
            let stack = board.get(pos).unwrap();
            let expected = if pos.row % 2 == 0 { even } else { odd };
            assert_eq!(stack.height(), 1, "height at {}", pos);
            assert_eq!(stack.top_color(), expected[pos.col as usize], "color at {}", pos);
        }
    }

    #[test]
    fn test_starting_counts() {
        let board = Board::starting(R, G);
        assert_eq!(board.unit_count(), 36);
        let reds = board.stacks().filter(|(_, s)| s.top_color() == R).count();
        assert_eq!(reds, 18);
    }

    #[test]
    fn test_off_board_reads_as_empty() {
        let board = Board::starting(R, G);
        assert!(board.get(Pos::new(6, 0)).is_none());
        assert_eq!(board.height(Pos::new(0, 9)), 0);
    }

    #[test]
    fn test_take_and_put() {
        let mut board = Board::starting(R, G);
        let pos = Pos::new(2, 2);

        let stack = board.take(pos).unwrap();
        assert!(board.is_empty(pos));
        assert_eq!(board.unit_count(), 35);

        let target = board.take(Pos::new(2, 3)).unwrap();
        board.put(Pos::new(2, 3), stack.merge_onto(target));
        assert_eq!(board.height(Pos::new(2, 3)), 2);
        assert_eq!(board.unit_count(), 36);
    }
}
