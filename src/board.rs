use crate::cell::Cell;
use crate::error::{ChessError, IllegalMoveReason, Result};
use crate::pieces::Piece;
use crate::types::{Coords, PieceKind, Side};

pub const BOARD_SIZE: usize = 8;

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Chess position: an 8x8 grid of cells plus the pieces removed from play.
///
/// Boards are immutable values. `rows[r][c]` always holds the cell whose
/// coordinates are (r, c); every transform clones and returns a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    captured: Vec<Piece>,
}

impl Board {
    /// Creates the standard starting position:
    /// White on rows 0-1, Black on rows 6-7, back rank R-N-B-Q-K-B-N-R.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.rows[0][col] = board.rows[0][col].with_occupant(Some(Piece::new(kind, Side::White)));
            board.rows[7][col] = board.rows[7][col].with_occupant(Some(Piece::new(kind, Side::Black)));
        }
        for col in 0..BOARD_SIZE {
            board.rows[1][col] =
                board.rows[1][col].with_occupant(Some(Piece::new(PieceKind::Pawn, Side::White)));
            board.rows[6][col] =
                board.rows[6][col].with_occupant(Some(Piece::new(PieceKind::Pawn, Side::Black)));
        }
        board
    }

    /// Creates a board with no pieces on it.
    pub fn empty() -> Self {
        let rows = std::array::from_fn(|row| {
            std::array::from_fn(|col| Cell::new(Coords::new(row as u8, col as u8), None))
        });
        Self {
            rows,
            captured: Vec::new(),
        }
    }

    /// Returns the cell at `coords`, or `OutOfRange` off the grid.
    pub fn cell_at(&self, coords: Coords) -> Result<Cell> {
        if !coords.in_bounds() {
            return Err(ChessError::OutOfRange(coords));
        }
        Ok(self.rows[coords.row as usize][coords.col as usize])
    }

    /// Returns a board with exactly the cell at `coords` replaced.
    /// The stored cell takes the addressed coordinate.
    pub fn with_cell(&self, coords: Coords, cell: Cell) -> Result<Board> {
        self.cell_at(coords)?;
        let mut next = self.clone();
        next.rows[coords.row as usize][coords.col as usize] = Cell::new(coords, cell.occupant());
        Ok(next)
    }

    /// Pieces removed from play, oldest capture first.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.rows
    }

    /// Iterates every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Locates the King of the given side, if one is on the board.
    pub fn find_king(&self, side: Side) -> Option<Coords> {
        self.cells()
            .find(|cell| cell.occupant() == Some(Piece::new(PieceKind::King, side)))
            .map(|cell| cell.coords())
    }

    /// Relocates the piece on `start` to `target`, capturing any occupant.
    ///
    /// Mechanical guards only: the start cell must be occupied, the target
    /// must not hold a King nor a piece of the mover's own side. Geometry,
    /// path, and self-check belong to the piece layer; this primitive is
    /// also what the self-check simulation applies to cloned boards.
    pub fn apply_move(&self, start: Coords, target: Coords) -> Result<Board> {
        let start_cell = self.cell_at(start)?;
        let target_cell = self.cell_at(target)?;
        let mover = start_cell
            .occupant()
            .ok_or(IllegalMoveReason::EmptySource)?;

        if let Some(victim) = target_cell.occupant() {
            if victim.kind() == PieceKind::King {
                return Err(IllegalMoveReason::KingCapture.into());
            }
            if victim.side() == mover.side() {
                return Err(IllegalMoveReason::SameSideCapture.into());
            }
        }

        let mut next = self.clone();
        if let Some(victim) = target_cell.occupant() {
            next.captured.push(victim);
        }
        next.rows[start.row as usize][start.col as usize] = start_cell.with_occupant(None);
        next.rows[target.row as usize][target.col as usize] = target_cell.with_occupant(Some(mover));
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
