use crate::pieces::Piece;
use crate::types::{CellShade, Coords};

/// One board square: a fixed coordinate plus an optional occupant.
///
/// Cells are immutable values. The coordinate never changes after
/// construction; occupancy changes only by producing a new cell with
/// [`Cell::with_occupant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coords: Coords,
    occupant: Option<Piece>,
}

impl Cell {
    pub fn new(coords: Coords, occupant: Option<Piece>) -> Self {
        Self { coords, occupant }
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Returns a copy of this cell holding `occupant`, same coordinate.
    pub fn with_occupant(self, occupant: Option<Piece>) -> Cell {
        Cell {
            coords: self.coords,
            occupant,
        }
    }

    pub fn same_coordinates(&self, other: &Cell) -> bool {
        self.coords == other.coords
    }

    /// Rendering tint of the square: (row+col) even is dark, odd is light.
    pub fn shade(&self) -> CellShade {
        if (u16::from(self.coords.row) + u16::from(self.coords.col)) % 2 == 0 {
            CellShade::Dark
        } else {
            CellShade::Light
        }
    }
}
