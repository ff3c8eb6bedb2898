use crate::board::Board;
use crate::error::{ChessError, Result};
use crate::types::Coords;

/// Reports whether any square strictly between `start` and `target` is
/// occupied.
///
/// The two cells must share a row, a column, or a diagonal; any other pair
/// is a caller bug reported as `AmbiguousGeometry`. Targets at most one
/// step away have no squares between them.
pub fn blocked_between(board: &Board, start: Coords, target: Coords) -> Result<bool> {
    board.cell_at(start)?;
    board.cell_at(target)?;

    let row_delta = i32::from(target.row) - i32::from(start.row);
    let col_delta = i32::from(target.col) - i32::from(start.col);

    if row_delta.abs() <= 1 && col_delta.abs() <= 1 {
        return Ok(false);
    }
    if row_delta != 0 && col_delta != 0 && row_delta.abs() != col_delta.abs() {
        return Err(ChessError::AmbiguousGeometry { start, target });
    }

    let row_step = row_delta.signum();
    let col_step = col_delta.signum();
    let steps = row_delta.abs().max(col_delta.abs());

    for i in 1..steps {
        let between = Coords::new(
            (i32::from(start.row) + row_step * i) as u8,
            (i32::from(start.col) + col_step * i) as u8,
        );
        if !board.cell_at(between)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::pieces::Piece;
    use crate::types::{PieceKind, Side};

    fn put(board: &Board, row: u8, col: u8) -> Board {
        let coords = Coords::new(row, col);
        let pawn = Piece::new(PieceKind::Pawn, Side::White);
        board
            .with_cell(coords, Cell::new(coords, Some(pawn)))
            .unwrap()
    }

    #[test]
    fn open_lines_and_diagonals_are_clear() {
        let board = Board::empty();

        assert!(!blocked_between(&board, Coords::new(0, 0), Coords::new(0, 7)).unwrap());
        assert!(!blocked_between(&board, Coords::new(7, 3), Coords::new(2, 3)).unwrap());
        assert!(!blocked_between(&board, Coords::new(0, 0), Coords::new(7, 7)).unwrap());
        assert!(!blocked_between(&board, Coords::new(6, 1), Coords::new(1, 6)).unwrap());
    }

    #[test]
    fn an_occupied_intervening_square_blocks_the_line() {
        let board = put(&Board::empty(), 0, 3);

        assert!(blocked_between(&board, Coords::new(0, 0), Coords::new(0, 7)).unwrap());
        assert!(blocked_between(&board, Coords::new(0, 7), Coords::new(0, 0)).unwrap());

        let diagonal = put(&Board::empty(), 4, 4);
        assert!(blocked_between(&diagonal, Coords::new(1, 1), Coords::new(6, 6)).unwrap());
    }

    #[test]
    fn endpoints_do_not_count_as_blockers() {
        let board = put(&put(&Board::empty(), 2, 2), 5, 5);

        assert!(!blocked_between(&board, Coords::new(2, 2), Coords::new(5, 5)).unwrap());
    }

    #[test]
    fn adjacent_targets_have_nothing_between() {
        let board = put(&Board::empty(), 4, 4);

        assert!(!blocked_between(&board, Coords::new(4, 4), Coords::new(4, 5)).unwrap());
        assert!(!blocked_between(&board, Coords::new(4, 4), Coords::new(3, 3)).unwrap());
    }

    #[test]
    fn unaligned_cells_are_a_caller_bug() {
        let board = Board::empty();
        let start = Coords::new(0, 0);
        let target = Coords::new(2, 5);

        assert_eq!(
            blocked_between(&board, start, target).unwrap_err(),
            ChessError::AmbiguousGeometry { start, target }
        );
    }
}
