//! Piece identity and the move/attack legality predicates.

mod bishop;
mod king;
mod knight;
mod path;
mod pawn;
mod queen;
mod rook;

use crate::board::Board;
use crate::error::Result;
use crate::types::{Coords, PieceKind, Side};

/// One chess piece: a kind and the side that owns it. Carries no position;
/// the board says where pieces stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
}

impl Piece {
    /// The single factory for every piece kind.
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Display-resource handle for this piece.
    pub fn icon(&self) -> &'static str {
        crate::icons::icon_for(self.kind, self.side)
    }

    /// Converts a Pawn into another kind. Returns `None` when the receiver
    /// is not a Pawn or the requested kind is King or Pawn. Not wired into
    /// the move pipeline.
    pub fn turn_into(self, kind: PieceKind) -> Option<Piece> {
        if self.kind != PieceKind::Pawn {
            return None;
        }
        match kind {
            PieceKind::King | PieceKind::Pawn => None,
            _ => Some(Piece::new(kind, self.side)),
        }
    }

    /// True when this piece may relocate from `start` onto an empty square.
    ///
    /// Contract:
    /// - `start` holds a piece equal to `self`.
    /// - the kind's movement pattern accepts the step.
    /// - any required path is unobstructed (the Knight has none).
    /// - `target` is empty; captures go through `can_attack`.
    /// - the relocation does not leave the mover's own King in check.
    pub fn can_move(&self, board: &Board, start: Coords, target: Coords) -> Result<bool> {
        let start_cell = board.cell_at(start)?;
        let target_cell = board.cell_at(target)?;

        if start_cell.occupant() != Some(*self) {
            return Ok(false);
        }
        if !target_cell.is_empty() {
            return Ok(false);
        }
        if !self.move_pattern(start, target) {
            return Ok(false);
        }
        if self.kind != PieceKind::Knight && path::blocked_between(board, start, target)? {
            return Ok(false);
        }
        self.keeps_own_king_safe(board, start, target)
    }

    /// True when this piece may capture the piece on `target`.
    ///
    /// Contract:
    /// - `start` holds a piece equal to `self`; `target` holds an enemy.
    /// - a playable attack never takes a King; the probe form lifts that
    ///   exclusion.
    /// - the kind's attack geometry accepts the step (the Pawn attacks one
    ///   forward diagonal; every other kind attacks the way it moves).
    /// - any required path is unobstructed.
    /// - unless `ignore_self_check`, the simulated capture does not leave
    ///   the mover's own King in check.
    ///
    /// `ignore_self_check` is set only when check detection probes the
    /// King's square; it skips the simulation so detection cannot recurse.
    pub fn can_attack(
        &self,
        board: &Board,
        start: Coords,
        target: Coords,
        ignore_self_check: bool,
    ) -> Result<bool> {
        let start_cell = board.cell_at(start)?;
        let target_cell = board.cell_at(target)?;

        if start_cell.occupant() != Some(*self) {
            return Ok(false);
        }
        let victim = match target_cell.occupant() {
            Some(piece) if piece.side != self.side => piece,
            _ => return Ok(false),
        };
        if !ignore_self_check && victim.kind == PieceKind::King {
            return Ok(false);
        }
        if !self.attack_pattern(start, target) {
            return Ok(false);
        }
        if self.kind != PieceKind::Knight && path::blocked_between(board, start, target)? {
            return Ok(false);
        }
        if ignore_self_check {
            return Ok(true);
        }
        self.keeps_own_king_safe(board, start, target)
    }

    /// The single legality gate: a legal relocation or a legal capture.
    pub fn can_place(&self, board: &Board, start: Coords, target: Coords) -> Result<bool> {
        Ok(self.can_move(board, start, target)? || self.can_attack(board, start, target, false)?)
    }

    fn move_pattern(&self, start: Coords, target: Coords) -> bool {
        match self.kind {
            PieceKind::King => king::pattern(start, target),
            PieceKind::Queen => queen::pattern(start, target),
            PieceKind::Rook => rook::pattern(start, target),
            PieceKind::Bishop => bishop::pattern(start, target),
            PieceKind::Knight => knight::pattern(start, target),
            PieceKind::Pawn => pawn::move_pattern(self.side, start, target),
        }
    }

    fn attack_pattern(&self, start: Coords, target: Coords) -> bool {
        match self.kind {
            PieceKind::Pawn => pawn::attack_pattern(self.side, start, target),
            _ => self.move_pattern(start, target),
        }
    }

    /// Applies the relocation to a cloned board and reports whether the
    /// mover's King is still safe afterwards.
    fn keeps_own_king_safe(&self, board: &Board, start: Coords, target: Coords) -> Result<bool> {
        let next = board.apply_move(start, target)?;
        Ok(!king_in_check(&next, self.side)?)
    }
}

/// True when any enemy piece attacks `side`'s King.
///
/// A side with no King on the board is never in check; positions without
/// kings are legal analysis setups.
pub fn king_in_check(board: &Board, side: Side) -> Result<bool> {
    let Some(king_at) = board.find_king(side) else {
        return Ok(false);
    };
    for cell in board.cells() {
        let Some(piece) = cell.occupant() else {
            continue;
        };
        if piece.side == side {
            continue;
        }
        if piece.can_attack(board, cell.coords(), king_at, true)? {
            return Ok(true);
        }
    }
    Ok(false)
}
