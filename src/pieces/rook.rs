use crate::types::Coords;

/// Any distance along exactly one axis.
pub fn pattern(start: Coords, target: Coords) -> bool {
    let same_row = start.row == target.row;
    let same_col = start.col == target.col;
    same_row != same_col
}
