use crate::pieces::{bishop, rook};
use crate::types::Coords;

/// Rook and Bishop movement combined.
pub fn pattern(start: Coords, target: Coords) -> bool {
    rook::pattern(start, target) || bishop::pattern(start, target)
}
