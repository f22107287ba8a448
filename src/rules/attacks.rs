use crate::chess::board::Board;
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::coord::Delta;
use crate::core::square::Square;

use super::movegen::Destinations;

/// True iff any piece of color `by` attacks `target`.
///
/// A piece standing on `target` does not block attacks onto it; only squares strictly
/// between attacker and target do.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|p| p.square != target && piece_attacks(p, target, board))
}

/// True iff `color` has a king and it is attacked.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_attacked(board, king, color.opponent()),
        None => false,
    }
}

/// Every square `piece` attacks, regardless of who stands there.
pub fn attacked_squares(piece: &Piece, board: &Board) -> Destinations {
    Square::all()
        .filter(|&sq| sq != piece.square && piece_attacks(piece, sq, board))
        .collect()
}

fn piece_attacks(piece: &Piece, target: Square, board: &Board) -> bool {
    let d = Delta::new(
        target.rank() as i8 - piece.square.rank() as i8,
        target.file() as i8 - piece.square.file() as i8,
    );

    match piece.kind {
        // Pawns attack diagonally forward even when the square is empty.
        PieceKind::Pawn => d.rank == piece.color.forward() && d.file.abs() == 1,
        PieceKind::King => d.chebyshev_norm() == 1,
        PieceKind::Knight => {
            let ar = d.rank.abs();
            let af = d.file.abs();
            (ar == 2 && af == 1) || (ar == 1 && af == 2)
        }
        PieceKind::Rook => (d.rank == 0 || d.file == 0) && ray_clear(piece.square, d, board),
        PieceKind::Bishop => d.rank.abs() == d.file.abs() && ray_clear(piece.square, d, board),
        PieceKind::Queen => {
            (d.rank == 0 || d.file == 0 || d.rank.abs() == d.file.abs())
                && ray_clear(piece.square, d, board)
        }
    }
}

/// No piece strictly between `from` and `from + v` along a rook or bishop line.
fn ray_clear(from: Square, v: Delta, board: &Board) -> bool {
    if v == Delta::ZERO {
        return false;
    }
    let step = Delta::new(v.rank.signum(), v.file.signum());
    let dist = v.chebyshev_norm();

    let mut cur = from;
    for _ in 1..dist {
        let Some(next) = cur.offset(step) else {
            return false;
        };
        if !board.is_empty(next) {
            return false;
        }
        cur = next;
    }
    true
}
