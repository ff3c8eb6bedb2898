use crate::board::{Board, BOARD_SIZE};
use crate::cell::Cell;
use crate::error::{IllegalMoveReason, Result};
use crate::pieces::Piece;
use crate::types::{CellSnapshot, Coords, GameSnapshot, MoveAction, PieceSnapshot, Side};

/// Status panel data. `checkmate` is declared for the renderer and never
/// computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub checkmate: Option<Side>,
    pub captured: Vec<Piece>,
}

/// Turn and history state machine around an immutable board.
///
/// The committed game is the main line. Stepping back or replaying plies
/// opens a speculative analyze branch; `reset_history` abandons it and
/// returns to the last committed main-line position.
pub struct ChessGame {
    board: Board,
    main_board: Board,
    main_history: Vec<(Coords, Coords)>,
    analyze_history: Vec<(Coords, Coords)>,
    back_offset: usize,
}

impl ChessGame {
    pub fn new() -> Self {
        let board = Board::new();
        Self {
            main_board: board.clone(),
            board,
            main_history: Vec::new(),
            analyze_history: Vec::new(),
            back_offset: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is, by half-move parity. Back-navigation and analyze
    /// plies count toward parity, and the offset may run past the start of
    /// the recorded game.
    pub fn turn(&self) -> Side {
        let plies = self.main_history.len() as i64 - self.back_offset as i64
            + self.analyze_history.len() as i64;
        if plies.rem_euclid(2) == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    pub fn is_analyzing(&self) -> bool {
        !self.analyze_history.is_empty() || self.back_offset > 0
    }

    /// Plays one ply for the side whose turn it is.
    ///
    /// Contract:
    /// - the start cell holds a piece, the piece belongs to the side to
    ///   move, and its `can_place` gate accepts the target, in that order.
    /// - on the main line the ply is committed to `main_history`; while
    ///   analyzing it goes to the analyze branch and the main line stays
    ///   untouched.
    /// - on `Err` nothing changes; repeating the same illegal intent
    ///   yields the same rejection.
    pub fn make_move(&mut self, start: Coords, target: Coords) -> Result<()> {
        if let Err(err) = self.commit_move(start, target) {
            log::warn!("move {start} to {target} rejected: {err}");
            return Err(err);
        }
        Ok(())
    }

    fn commit_move(&mut self, start: Coords, target: Coords) -> Result<()> {
        let mover = self
            .board
            .cell_at(start)?
            .occupant()
            .ok_or(IllegalMoveReason::EmptySource)?;
        if mover.side() != self.turn() {
            return Err(IllegalMoveReason::WrongTurn(mover.side()).into());
        }
        if !mover.can_place(&self.board, start, target)? {
            return Err(IllegalMoveReason::CannotPlace.into());
        }

        self.board = self.board.apply_move(start, target)?;
        if self.is_analyzing() {
            self.analyze_history.push((start, target));
        } else {
            self.main_history.push((start, target));
            self.main_board = self.board.clone();
        }
        Ok(())
    }

    /// Steps one ply backwards: pops the analyze branch when it has
    /// entries, otherwise deepens the back-offset (not clamped to the
    /// recorded history). Counters only; the presented board does not
    /// rewind, `reset_history` is the way back to a concrete position.
    pub fn back(&mut self) {
        if self.analyze_history.pop().is_none() {
            self.back_offset += 1;
        }
    }

    /// Replays one explicitly supplied ply into the analyze branch,
    /// applied mechanically with no piece-legality re-validation.
    /// `None` is a no-op.
    pub fn forward(&mut self, replay: Option<(Coords, Coords)>) -> Result<()> {
        let Some((start, target)) = replay else {
            return Ok(());
        };
        match self.board.apply_move(start, target) {
            Ok(next) => {
                self.board = next;
                self.analyze_history.push((start, target));
                Ok(())
            }
            Err(err) => {
                log::warn!("forward {start} to {target} rejected: {err}");
                Err(err)
            }
        }
    }

    /// Abandons the analyze branch and back-navigation; the board returns
    /// to the last committed main-line position.
    pub fn reset_history(&mut self) {
        self.board = self.main_board.clone();
        self.analyze_history.clear();
        self.back_offset = 0;
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            checkmate: None,
            captured: self.board.captured_pieces().to_vec(),
        }
    }

    /// Classifies every square for the piece on `start`: a legal
    /// relocation, a legal capture, or neither. All `None` when `start`
    /// is empty.
    pub fn move_map(&self, start: Coords) -> Result<Vec<Vec<Option<MoveAction>>>> {
        let mut map = vec![vec![None; BOARD_SIZE]; BOARD_SIZE];
        let Some(piece) = self.board.cell_at(start)?.occupant() else {
            return Ok(map);
        };

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let target = Coords::new(row as u8, col as u8);
                if piece.can_move(&self.board, start, target)? {
                    map[row][col] = Some(MoveAction::Move);
                } else if piece.can_attack(&self.board, start, target, false)? {
                    map[row][col] = Some(MoveAction::Attack);
                }
            }
        }
        Ok(map)
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        let rows = self
            .board
            .rows()
            .iter()
            .map(|row| row.iter().map(cell_snapshot).collect())
            .collect();
        GameSnapshot {
            rows,
            turn: self.turn(),
            analyzing: self.is_analyzing(),
            checkmate: None,
            captured: self
                .board
                .captured_pieces()
                .iter()
                .map(piece_snapshot)
                .collect(),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.main_board = board.clone();
        self.board = board;
        self.main_history.clear();
        self.analyze_history.clear();
        self.back_offset = 0;
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

fn piece_snapshot(piece: &Piece) -> PieceSnapshot {
    PieceSnapshot {
        kind: piece.kind(),
        side: piece.side(),
        icon: piece.icon(),
    }
}

fn cell_snapshot(cell: &Cell) -> CellSnapshot {
    CellSnapshot {
        row: cell.coords().row,
        col: cell.coords().col,
        shade: cell.shade(),
        piece: cell.occupant().as_ref().map(piece_snapshot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChessError;
    use crate::types::PieceKind;

    fn put(board: &Board, row: u8, col: u8, kind: PieceKind, side: Side) -> Board {
        let coords = Coords::new(row, col);
        board
            .with_cell(coords, Cell::new(coords, Some(Piece::new(kind, side))))
            .unwrap()
    }

    fn occupant(game: &ChessGame, row: u8, col: u8) -> Option<Piece> {
        game.board()
            .cell_at(Coords::new(row, col))
            .unwrap()
            .occupant()
    }

    #[test]
    fn initial_state_is_correct() {
        let game = ChessGame::new();
        let snapshot = game.to_snapshot();

        assert_eq!(game.turn(), Side::White);
        assert!(!game.is_analyzing());
        assert_eq!(game.status(), GameStatus { checkmate: None, captured: Vec::new() });
        assert_eq!(snapshot.rows.len(), 8);
        assert!(snapshot.rows.iter().all(|row| row.len() == 8));
        assert_eq!(snapshot.turn, Side::White);
        assert!(!snapshot.analyzing);
        assert!(snapshot.captured.is_empty());
    }

    #[test]
    fn t02_pawn_two_step_opening_is_committed() {
        let mut game = ChessGame::new();

        game.make_move(Coords::new(1, 4), Coords::new(3, 4)).unwrap();

        assert_eq!(occupant(&game, 1, 4), None);
        assert_eq!(
            occupant(&game, 3, 4),
            Some(Piece::new(PieceKind::Pawn, Side::White))
        );
        assert_eq!(game.turn(), Side::Black);
        assert!(!game.is_analyzing());
    }

    #[test]
    fn t03_repeating_the_same_move_is_rejected_and_state_kept() {
        let mut game = ChessGame::new();
        game.make_move(Coords::new(1, 4), Coords::new(3, 4)).unwrap();
        let before = game.to_snapshot();

        let err = game
            .make_move(Coords::new(1, 4), Coords::new(3, 4))
            .unwrap_err();

        assert_eq!(
            err,
            ChessError::IllegalMove(IllegalMoveReason::EmptySource)
        );
        assert_eq!(game.to_snapshot(), before);

        // the identical intent keeps producing the identical rejection
        let again = game
            .make_move(Coords::new(1, 4), Coords::new(3, 4))
            .unwrap_err();
        assert_eq!(again, err);
        assert_eq!(game.to_snapshot(), before);
    }

    #[test]
    fn turn_alternates_with_committed_plies() {
        let mut game = ChessGame::new();

        game.make_move(Coords::new(1, 4), Coords::new(2, 4)).unwrap();
        assert_eq!(game.turn(), Side::Black);

        game.make_move(Coords::new(6, 4), Coords::new(5, 4)).unwrap();
        assert_eq!(game.turn(), Side::White);
    }

    #[test]
    fn moving_out_of_turn_is_rejected() {
        let mut game = ChessGame::new();

        let err = game
            .make_move(Coords::new(6, 0), Coords::new(5, 0))
            .unwrap_err();

        assert_eq!(
            err,
            ChessError::IllegalMove(IllegalMoveReason::WrongTurn(Side::Black))
        );
        assert_eq!(game.turn(), Side::White);
        assert_eq!(
            occupant(&game, 6, 0),
            Some(Piece::new(PieceKind::Pawn, Side::Black))
        );
    }

    #[test]
    fn a_move_failing_the_legality_gate_is_rejected() {
        let mut game = ChessGame::new();
        let before = game.to_snapshot();

        // own pawn on (1, 0) blocks the rook
        let err = game
            .make_move(Coords::new(0, 0), Coords::new(3, 0))
            .unwrap_err();

        assert_eq!(
            err,
            ChessError::IllegalMove(IllegalMoveReason::CannotPlace)
        );
        assert_eq!(game.to_snapshot(), before);
    }

    #[test]
    fn back_pops_the_analyze_branch_before_deepening_the_offset() {
        let mut game = ChessGame::new();
        game.make_move(Coords::new(1, 4), Coords::new(3, 4)).unwrap();

        game.back();
        assert!(game.is_analyzing());
        assert_eq!(game.turn(), Side::White);

        // a branch ply, then back pops it and parity returns
        game.make_move(Coords::new(1, 0), Coords::new(2, 0)).unwrap();
        assert_eq!(game.turn(), Side::Black);
        game.back();
        assert_eq!(game.turn(), Side::White);
        assert!(game.is_analyzing());

        // with the branch empty the offset deepens, past the start if need be
        game.back();
        assert_eq!(game.turn(), Side::Black);

        game.reset_history();
        assert!(!game.is_analyzing());
        assert_eq!(game.turn(), Side::Black);
    }

    #[test]
    fn analyze_moves_stay_off_the_main_line() {
        let mut game = ChessGame::new();
        game.make_move(Coords::new(1, 4), Coords::new(3, 4)).unwrap();

        game.back();
        // parity makes it White's turn again inside the branch
        game.make_move(Coords::new(1, 0), Coords::new(2, 0)).unwrap();
        assert!(game.is_analyzing());
        assert_eq!(occupant(&game, 2, 0), Some(Piece::new(PieceKind::Pawn, Side::White)));

        game.reset_history();
        assert_eq!(occupant(&game, 2, 0), None);
        assert_eq!(
            occupant(&game, 1, 0),
            Some(Piece::new(PieceKind::Pawn, Side::White))
        );
        // the committed pawn ply is still in place
        assert_eq!(
            occupant(&game, 3, 4),
            Some(Piece::new(PieceKind::Pawn, Side::White))
        );
        assert_eq!(game.turn(), Side::Black);
    }

    #[test]
    fn forward_replays_explicit_plies_mechanically() {
        let mut game = ChessGame::new();

        // a black ply replayed out of turn: forward does not re-validate
        game.forward(Some((Coords::new(6, 0), Coords::new(5, 0))))
            .unwrap();
        assert!(game.is_analyzing());
        assert_eq!(
            occupant(&game, 5, 0),
            Some(Piece::new(PieceKind::Pawn, Side::Black))
        );

        let before = game.to_snapshot();
        game.forward(None).unwrap();
        assert_eq!(game.to_snapshot(), before);

        let err = game
            .forward(Some((Coords::new(4, 4), Coords::new(5, 5))))
            .unwrap_err();
        assert_eq!(
            err,
            ChessError::IllegalMove(IllegalMoveReason::EmptySource)
        );
        assert_eq!(game.to_snapshot(), before);
    }

    #[test]
    fn captures_flow_into_status_and_snapshot() {
        let mut game = ChessGame::new();
        let mut board = put(&Board::empty(), 0, 0, PieceKind::Rook, Side::White);
        board = put(&board, 0, 5, PieceKind::Knight, Side::Black);
        game.set_board_for_test(board);

        game.make_move(Coords::new(0, 0), Coords::new(0, 5)).unwrap();

        let knight = Piece::new(PieceKind::Knight, Side::Black);
        assert_eq!(game.status().captured, vec![knight]);

        let snapshot = game.to_snapshot();
        assert_eq!(snapshot.captured.len(), 1);
        assert_eq!(snapshot.captured[0].icon, "figures/knight_b.png");
    }

    #[test]
    fn move_map_classifies_pushes_and_attacks() {
        let game = ChessGame::new();

        let map = game.move_map(Coords::new(1, 4)).unwrap();
        assert_eq!(map[2][4], Some(MoveAction::Move));
        assert_eq!(map[3][4], Some(MoveAction::Move));
        let marked = map.iter().flatten().filter(|entry| entry.is_some()).count();
        assert_eq!(marked, 2);

        // blocked rook: nothing to highlight
        let rook_map = game.move_map(Coords::new(0, 0)).unwrap();
        assert!(rook_map.iter().flatten().all(|entry| entry.is_none()));

        // empty start cell: nothing to highlight
        let empty_map = game.move_map(Coords::new(4, 4)).unwrap();
        assert!(empty_map.iter().flatten().all(|entry| entry.is_none()));
    }

    #[test]
    fn move_map_marks_capturable_enemies_as_attacks() {
        let mut game = ChessGame::new();
        let mut board = put(&Board::empty(), 0, 0, PieceKind::Rook, Side::White);
        board = put(&board, 0, 5, PieceKind::Knight, Side::Black);
        game.set_board_for_test(board);

        let map = game.move_map(Coords::new(0, 0)).unwrap();
        assert_eq!(map[0][5], Some(MoveAction::Attack));
        assert_eq!(map[0][4], Some(MoveAction::Move));
        assert_eq!(map[0][6], None);
    }
}
