use crate::types::{Coords, Side};

fn forward(side: Side) -> i32 {
    match side {
        Side::White => 1,
        Side::Black => -1,
    }
}

fn home_row(side: Side) -> u8 {
    match side {
        Side::White => 1,
        Side::Black => 6,
    }
}

/// Straight ahead one square, or two from the home rank.
pub fn move_pattern(side: Side, start: Coords, target: Coords) -> bool {
    if start.col != target.col {
        return false;
    }
    let advance = forward(side) * (i32::from(target.row) - i32::from(start.row));
    advance == 1 || (advance == 2 && start.row == home_row(side))
}

/// One square diagonally ahead.
pub fn attack_pattern(side: Side, start: Coords, target: Coords) -> bool {
    let advance = forward(side) * (i32::from(target.row) - i32::from(start.row));
    let sideways = (i32::from(target.col) - i32::from(start.col)).abs();
    advance == 1 && sideways == 1
}
