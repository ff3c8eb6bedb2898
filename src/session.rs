use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{ChessError, Result};
use crate::game::ChessGame;
use crate::types::{Coords, MoveOutcome};

/// One game owned by the JavaScript side.
///
/// Rule violations come back as serialized `MoveOutcome` values, never as
/// exceptions; only internal defects and serialization failures reject.
#[wasm_bindgen]
pub struct ChessSession {
    game: ChessGame,
}

#[wasm_bindgen]
impl ChessSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            game: ChessGame::new(),
        }
    }

    /// Serialized `GameSnapshot` of the current state.
    pub fn snapshot(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.game.to_snapshot())
    }

    /// Attempts one ply for the side to move.
    pub fn try_move(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> std::result::Result<JsValue, JsValue> {
        let start = Coords::new(from_row, from_col);
        let target = Coords::new(to_row, to_col);
        let outcome = recover(self.game.make_move(start, target))?;
        to_js(&outcome)
    }

    /// Replays one ply mechanically into the analyze branch.
    pub fn try_forward(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> std::result::Result<JsValue, JsValue> {
        let start = Coords::new(from_row, from_col);
        let target = Coords::new(to_row, to_col);
        let outcome = recover(self.game.forward(Some((start, target))))?;
        to_js(&outcome)
    }

    pub fn back(&mut self) {
        self.game.back();
    }

    pub fn reset_history(&mut self) {
        self.game.reset_history();
    }

    pub fn turn(&self) -> String {
        self.game.turn().to_string()
    }

    pub fn is_analyzing(&self) -> bool {
        self.game.is_analyzing()
    }

    /// Move/attack classification for the piece on (row, col); the
    /// renderer's highlight input.
    pub fn move_map(&self, row: u8, col: u8) -> std::result::Result<JsValue, JsValue> {
        let map = self
            .game
            .move_map(Coords::new(row, col))
            .map_err(reject)?;
        to_js(&map)
    }
}

impl Default for ChessSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Rule violations become rejected outcomes. `AmbiguousGeometry` marks a
/// logic defect and escapes as a JS error.
fn recover(result: Result<()>) -> std::result::Result<MoveOutcome, JsValue> {
    match result {
        Ok(()) => Ok(MoveOutcome::committed()),
        Err(err @ ChessError::AmbiguousGeometry { .. }) => Err(reject(err)),
        Err(err) => Ok(MoveOutcome::rejected(err.to_string())),
    }
}

fn to_js<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn reject(err: ChessError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
