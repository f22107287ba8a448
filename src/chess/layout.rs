use crate::chess::piece::{Color, PieceKind};
use crate::core::square::{Square, BOARD_SIZE};

/// Back-rank order by file, a through h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard starting placement in a fixed, predictable order:
///
/// Black pawns, White pawns, then Black and White back ranks file by file.
pub fn standard_placement() -> Vec<(PieceKind, Color, Square)> {
    let mut out = Vec::with_capacity(32);
    for color in [Color::Black, Color::White] {
        for file in 0..BOARD_SIZE {
            if let Ok(sq) = Square::new(color.pawn_rank(), file) {
                out.push((PieceKind::Pawn, color, sq));
            }
        }
    }
    for file in 0..BOARD_SIZE {
        for color in [Color::Black, Color::White] {
            if let Ok(sq) = Square::new(color.back_rank(), file) {
                out.push((BACK_RANK[file as usize], color, sq));
            }
        }
    }
    out
}
