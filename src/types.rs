use std::fmt;

use serde::Serialize;

/// A board coordinate. Row 0 is White's back rank, row 7 Black's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coords {
    pub row: u8,
    pub col: u8,
}

impl Coords {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// True when the coordinate lies on the 8x8 grid.
    pub fn in_bounds(self) -> bool {
        self.row < 8 && self.col < 8
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The side a piece belongs to; also identifies whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// The six piece kinds of the movement grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        };
        write!(f, "{name}")
    }
}

/// Rendering tint of a square. Pure (row+col) parity, never consulted by
/// the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellShade {
    Light,
    Dark,
}

/// How a piece may act on a square, as shown by the renderer's highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveAction {
    Move,
    Attack,
}

/// One piece as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub side: Side,
    /// Display-resource handle resolved from the icon table.
    pub icon: &'static str,
}

/// One square as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSnapshot {
    pub row: u8,
    pub col: u8,
    pub shade: CellShade,
    pub piece: Option<PieceSnapshot>,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// 8x8 grid, row-major, row 0 first.
    pub rows: Vec<Vec<CellSnapshot>>,
    pub turn: Side,
    /// Contract:
    /// - `true` while a speculative branch or back-navigation is active.
    /// - `false` on the committed main line.
    pub analyzing: bool,
    /// Declared for the renderer's status panel; nothing computes it yet.
    pub checkmate: Option<Side>,
    /// Pieces removed from play, oldest capture first.
    pub captured: Vec<PieceSnapshot>,
}

/// Result of a move intent at the session boundary.
///
/// Contract:
/// - `ok == true`: the intent was committed, `reason` is `None`.
/// - `ok == false`: state is unchanged, `reason` names the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub ok: bool,
    pub reason: Option<String>,
}

impl MoveOutcome {
    pub fn committed() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}
