use crate::types::Coords;

/// The (2,1) jump. Occupancy of the squares in between never matters.
pub fn pattern(start: Coords, target: Coords) -> bool {
    let row_delta = (i32::from(start.row) - i32::from(target.row)).abs();
    let col_delta = (i32::from(start.col) - i32::from(target.col)).abs();
    (row_delta == 2 && col_delta == 1) || (row_delta == 1 && col_delta == 2)
}
