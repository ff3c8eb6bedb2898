use crate::types::Coords;

/// Any distance along a diagonal.
pub fn pattern(start: Coords, target: Coords) -> bool {
    let row_delta = (i32::from(start.row) - i32::from(target.row)).abs();
    let col_delta = (i32::from(start.col) - i32::from(target.col)).abs();
    row_delta == col_delta && row_delta != 0
}
