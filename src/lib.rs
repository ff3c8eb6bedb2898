use wasm_bindgen::prelude::*;

pub mod board;
pub mod cell;
pub mod error;
pub mod game;
pub mod icons;
pub mod pieces;
pub mod session;
pub mod types;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
