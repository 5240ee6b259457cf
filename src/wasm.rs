//! WASM bindings for focus-core
//!
//! Provides a JavaScript-friendly API for the game logic. Players are
//! addressed by name and colors by their one-letter label.

use wasm_bindgen::prelude::*;
use crate::{Color, Game, Move, Outcome, Pos, Side, Turn};

/// WASM-friendly wrapper around Game
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a game in the starting position
    #[wasm_bindgen(constructor)]
    pub fn new(
        first_name: &str,
        first_color: char,
        second_name: &str,
        second_color: char,
    ) -> Result<WasmGame, JsValue> {
        let inner = Game::new((first_name, Color(first_color)), (second_name, Color(second_color)))
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(WasmGame { inner })
    }

    /// Move `count` units. Returns "moved" or "won"; throws the reason on an illegal move.
    #[wasm_bindgen(js_name = moveStack)]
    pub fn move_stack(
        &mut self,
        player: &str,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
        count: u8,
    ) -> Result<String, JsValue> {
        let side = self.side(player)?;
        let outcome = self
            .inner
            .move_stack(side, Pos::new(from_row, from_col), Pos::new(to_row, to_col), count)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(outcome_name(outcome))
    }

    /// Place a reserve unit. Returns "moved"; throws the reason on an illegal placement.
    #[wasm_bindgen(js_name = placeFromReserve)]
    pub fn place_from_reserve(&mut self, player: &str, row: u8, col: u8) -> Result<String, JsValue> {
        let side = self.side(player)?;
        let outcome = self
            .inner
            .place_from_reserve(side, Pos::new(row, col))
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(outcome_name(outcome))
    }

    /// Stack colors at a cell, bottom to top, as a string (empty if no stack)
    #[wasm_bindgen(js_name = unitsAt)]
    pub fn units_at(&self, row: u8, col: u8) -> String {
        self.inner
            .units_at(Pos::new(row, col))
            .map(|colors| colors.iter().map(|c| c.0).collect())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = stackHeight)]
    pub fn stack_height(&self, row: u8, col: u8) -> usize {
        self.inner.stack_height(Pos::new(row, col))
    }

    #[wasm_bindgen(js_name = reserveCount)]
    pub fn reserve_count(&self, player: &str) -> Result<usize, JsValue> {
        Ok(self.inner.reserve_count(self.side(player)?))
    }

    #[wasm_bindgen(js_name = captureCount)]
    pub fn capture_count(&self, player: &str) -> Result<u8, JsValue> {
        Ok(self.inner.capture_count(self.side(player)?))
    }

    /// Name of the player to act, or undefined before the first move
    #[wasm_bindgen(js_name = whoseTurn)]
    pub fn whose_turn(&self) -> Option<String> {
        match self.inner.whose_turn() {
            Turn::NotStarted => None,
            Turn::Of(side) => Some(self.inner.player(side).name().to_string()),
        }
    }

    /// Name of the winner, or undefined while nobody has won
    pub fn winner(&self) -> Option<String> {
        self.inner
            .winner()
            .map(|side| self.inner.player(side).name().to_string())
    }

    /// Get legal moves for a player as JSON array
    /// Each move is { to: [row, col], from: [row, col] | null, count: n | null }
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, player: &str) -> Result<JsValue, JsValue> {
        let moves: Vec<WasmMove> = self
            .inner
            .legal_moves(self.side(player)?)
            .into_iter()
            .map(WasmMove::from)
            .collect();
        serde_wasm_bindgen::to_value(&moves).map_err(JsValue::from)
    }

    /// Full game snapshot (board, players, turn, winner)
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(JsValue::from)
    }

    /// Clone the game
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_game(&self) -> WasmGame {
        WasmGame { inner: self.inner.clone() }
    }
}

impl WasmGame {
    fn side(&self, player: &str) -> Result<Side, JsValue> {
        self.inner
            .side_of(player)
            .ok_or_else(|| JsValue::from_str(&format!("unknown player {:?}", player)))
    }
}

fn outcome_name(outcome: Outcome) -> String {
    match outcome {
        Outcome::Moved => "moved".to_string(),
        Outcome::Won(_) => "won".to_string(),
    }
}

/// Serializable move for JavaScript
#[derive(serde::Serialize)]
struct WasmMove {
    to: [u8; 2],
    from: Option<[u8; 2]>,
    count: Option<u8>,
}

impl From<Move> for WasmMove {
    fn from(mov: Move) -> Self {
        match mov {
            Move::Shift { from, to, count } => WasmMove {
                to: [to.row, to.col],
                from: Some([from.row, from.col]),
                count: Some(count),
            },
            Move::Place { to } => WasmMove {
                to: [to.row, to.col],
                from: None,
                count: None,
            },
        }
    }
}
