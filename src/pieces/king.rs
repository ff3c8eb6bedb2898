use crate::types::Coords;

/// One step in any direction.
pub fn pattern(start: Coords, target: Coords) -> bool {
    let row_delta = (i32::from(start.row) - i32::from(target.row)).abs();
    let col_delta = (i32::from(start.col) - i32::from(target.col)).abs();
    row_delta.max(col_delta) == 1
}
