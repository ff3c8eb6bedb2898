use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::{PieceKind, Side};

/// Asset handle per (kind, side), shaped like the front end's image paths.
static ICONS: Lazy<HashMap<(PieceKind, Side), &'static str>> = Lazy::new(|| {
    HashMap::from([
        ((PieceKind::King, Side::White), "figures/king_w.png"),
        ((PieceKind::King, Side::Black), "figures/king_b.png"),
        ((PieceKind::Queen, Side::White), "figures/queen_w.png"),
        ((PieceKind::Queen, Side::Black), "figures/queen_b.png"),
        ((PieceKind::Rook, Side::White), "figures/rook_w.png"),
        ((PieceKind::Rook, Side::Black), "figures/rook_b.png"),
        ((PieceKind::Bishop, Side::White), "figures/bishop_w.png"),
        ((PieceKind::Bishop, Side::Black), "figures/bishop_b.png"),
        ((PieceKind::Knight, Side::White), "figures/knight_w.png"),
        ((PieceKind::Knight, Side::Black), "figures/knight_b.png"),
        ((PieceKind::Pawn, Side::White), "figures/pawn_w.png"),
        ((PieceKind::Pawn, Side::Black), "figures/pawn_b.png"),
    ])
});

/// Display-resource handle for a piece kind and side. Total over the
/// twelve combinations.
pub fn icon_for(kind: PieceKind, side: Side) -> &'static str {
    ICONS[&(kind, side)]
}
