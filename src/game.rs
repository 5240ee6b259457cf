//! Move validation and execution.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::{
    Board, Color, IllegalMove, Move, Player, Pos, SetupError, Side, Stack, Turn, Unit,
    CAPTURES_TO_WIN, MAX_HEIGHT,
};

/// The four directions a stack can travel in: up, down, left, right.
const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Result of an accepted action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// The action was applied; play continues.
    Moved,
    /// The action was applied and the given side has just won.
    Won(Side),
}

/// A complete two-player game.
///
/// Every action either applies fully or is rejected with the game left
/// untouched.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: Turn,
    winner: Option<Side>,
}

impl Game {
    /// Create a game in the starting position.
    ///
    /// Each player is given as `(name, color)`. Names and colors must differ,
    /// since either may be used to tell the players apart.
    pub fn new(first: (&str, Color), second: (&str, Color)) -> Result<Game, SetupError> {
        let (first_name, first_color) = first;
        let (second_name, second_color) = second;
        if first_color == second_color {
            return Err(SetupError::SameColor(first_color.0));
        }
        if first_name == second_name {
            return Err(SetupError::SameName(first_name.to_string()));
        }

        Ok(Game {
            board: Board::starting(first_color, second_color),
            players: [
                Player::new(first_name, first_color),
                Player::new(second_name, second_color),
            ],
            turn: Turn::NotStarted,
            winner: None,
        })
    }

    // ========== Queries ==========

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Find the side a player sits on by name.
    pub fn side_of(&self, name: &str) -> Option<Side> {
        Side::all().find(|&side| self.player(side).name() == name)
    }

    pub fn whose_turn(&self) -> Turn {
        self.turn
    }

    /// The side that reached the capture threshold first, if any.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Height of the stack at a position (0 for an empty or off-board cell).
    pub fn stack_height(&self, pos: Pos) -> usize {
        self.board.height(pos)
    }

    pub fn top_color_at(&self, pos: Pos) -> Option<Color> {
        self.board.get(pos).map(Stack::top_color)
    }

    /// Colors of the units at a position, bottom to top.
    /// Returns None if the cell is empty.
    pub fn units_at(&self, pos: Pos) -> Option<Vec<Color>> {
        self.board
            .get(pos)
            .map(|stack| stack.units().iter().map(|u| u.color()).collect())
    }

    pub fn reserve_count(&self, side: Side) -> usize {
        self.player(side).reserve_count()
    }

    pub fn capture_count(&self, side: Side) -> u8 {
        self.player(side).captured()
    }

    // ========== Validation ==========

    /// Check a stack move without applying it.
    ///
    /// Checks run in a fixed order and the first failure is reported.
    pub fn validate_shift(&self, side: Side, from: Pos, to: Pos, count: u8) -> Result<(), IllegalMove> {
        if !from.is_valid() {
            return Err(IllegalMove::OutOfBounds(from));
        }
        let stack = self.board.get(from).ok_or(IllegalMove::EmptySource(from))?;
        if !to.is_valid() {
            return Err(IllegalMove::OutOfBounds(to));
        }

        let same_row = from.row == to.row;
        let same_col = from.col == to.col;
        if same_row == same_col {
            return Err(IllegalMove::NotAxisAligned { from, to });
        }

        if stack.top_color() != self.player(side).color() {
            return Err(IllegalMove::WrongMoverColor(from));
        }

        // Oversized counts are rejected before the height check.
        if count as usize > MAX_HEIGHT {
            return Err(IllegalMove::CountTooLarge(count));
        }
        if count as usize > stack.height() {
            return Err(IllegalMove::InsufficientHeight { count, height: stack.height() });
        }

        let distance = if same_row {
            from.col.abs_diff(to.col)
        } else {
            from.row.abs_diff(to.row)
        };
        if distance != count {
            return Err(IllegalMove::DistanceMismatch { count, distance });
        }

        if !self.turn.allows(side) {
            return Err(IllegalMove::OutOfTurn(side));
        }
        Ok(())
    }

    /// Check a reserve placement without applying it.
    pub fn validate_place(&self, side: Side, to: Pos) -> Result<(), IllegalMove> {
        // Nobody holds reserve units before the first move, so an unstarted
        // game never accepts a placement.
        if self.turn.side() != Some(side) {
            return Err(IllegalMove::OutOfTurn(side));
        }
        if !to.is_valid() {
            return Err(IllegalMove::OutOfBounds(to));
        }
        if !self.board.is_empty(to) {
            return Err(IllegalMove::DestinationOccupied(to));
        }
        if self.player(side).reserve_count() == 0 {
            return Err(IllegalMove::EmptyReserve(side));
        }
        Ok(())
    }

    /// Check any action without applying it.
    pub fn validate(&self, side: Side, mov: Move) -> Result<(), IllegalMove> {
        match mov {
            Move::Shift { from, to, count } => self.validate_shift(side, from, to, count),
            Move::Place { to } => self.validate_place(side, to),
        }
    }

    /// Generate every action `side` may take right now.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let color = self.player(side).color();
        let mut moves = Vec::new();

        for (from, stack) in self.board.stacks() {
            if stack.top_color() != color {
                continue;
            }
            let max = stack.height().min(MAX_HEIGHT) as u8;
            for count in 1..=max {
                for (d_row, d_col) in DIRECTIONS {
                    if let Some(to) = from.offset(d_row, d_col, count) {
                        let mov = Move::Shift { from, to, count };
                        if self.validate(side, mov).is_ok() {
                            moves.push(mov);
                        }
                    }
                }
            }
        }

        if self.player(side).reserve_count() > 0 {
            for to in Pos::all() {
                let mov = Move::Place { to };
                if self.validate(side, mov).is_ok() {
                    moves.push(mov);
                }
            }
        }

        moves
    }

    // ========== Apply ==========

    /// Apply any action.
    pub fn apply(&mut self, side: Side, mov: Move) -> Result<Outcome, IllegalMove> {
        match mov {
            Move::Shift { from, to, count } => self.move_stack(side, from, to, count),
            Move::Place { to } => self.place_from_reserve(side, to),
        }
    }

    /// Move the top `count` units of the stack at `from` onto `to`.
    ///
    /// If the destination ends up taller than [`MAX_HEIGHT`], units are
    /// peeled off its bottom: the mover's own units go to their reserve and
    /// enemy units are captured.
    #[instrument(level = "debug", skip(self))]
    pub fn move_stack(&mut self, side: Side, from: Pos, to: Pos, count: u8) -> Result<Outcome, IllegalMove> {
        self.validate_shift(side, from, to, count)
            .inspect_err(|err| debug!(%err, "move rejected"))?;

        let source = self.board.take(from).expect("validated source stack");
        let entire = count as usize == source.height();
        let (remainder, moving) = source.split_from_top(count as usize);
        debug_assert_eq!(entire, remainder.is_none());
        self.board.set(from, remainder);

        let mut landed = match self.board.take(to) {
            Some(target) => moving.merge_onto(target),
            None => moving,
        };
        let overflow = landed.shed_bottom(MAX_HEIGHT);
        self.board.put(to, landed);
        let captured_before = self.capture_count(side);
        self.resolve_overflow(side, overflow);

        self.turn = self.turn.advance(side);
        debug!(entire, height = self.board.height(to), "move applied");
        Ok(self.check_win(side, captured_before))
    }

    /// Place the oldest reserve unit of `side` on the empty cell `to`.
    #[instrument(level = "debug", skip(self))]
    pub fn place_from_reserve(&mut self, side: Side, to: Pos) -> Result<Outcome, IllegalMove> {
        self.validate_place(side, to)
            .inspect_err(|err| debug!(%err, "placement rejected"))?;

        let unit = self.players[side.index()]
            .take_from_reserve()
            .expect("validated non-empty reserve");
        self.board.put(to, Stack::singleton(unit));

        self.turn = self.turn.advance(side);
        debug!(reserve = self.reserve_count(side), "placement applied");
        Ok(Outcome::Moved)
    }

    /// Hand overflowed units to the mover, bottom-most first.
    fn resolve_overflow(&mut self, side: Side, units: Vec<Unit>) {
        if units.is_empty() {
            return;
        }
        let player = &mut self.players[side.index()];
        let mut reserved = 0;
        let mut captured = 0;
        for unit in units {
            if unit.color() == player.color() {
                player.add_to_reserve(unit);
                reserved += 1;
            } else {
                player.record_capture();
                captured += 1;
            }
        }
        trace!(?side, reserved, captured, total_captured = player.captured(), "overflow resolved");
    }

    /// Report a win when this move took `side` across the capture threshold.
    ///
    /// `winner` keeps the first side to get there.
    fn check_win(&mut self, side: Side, captured_before: u8) -> Outcome {
        let crossed = captured_before < CAPTURES_TO_WIN && self.capture_count(side) >= CAPTURES_TO_WIN;
        if !crossed {
            return Outcome::Moved;
        }
        let first = *self.winner.get_or_insert(side);
        info!(?side, ?first, name = self.player(side).name(), "game won");
        Outcome::Won(side)
    }
}
