use rustc_hash::FxHashSet;

use crate::chess::board::Board;
use crate::chess::piece::{Piece, PieceKind, BISHOP_DIRS, KNIGHT_DELTAS, ROOK_DIRS};
use crate::core::coord::{Delta, KING_STEPS};
use crate::core::square::Square;

pub type Destinations = FxHashSet<Square>;

/// Squares `piece` may move to given the current occupancy.
///
/// King safety is not considered here; see [`crate::rules::legal`] for the filtered set.
pub fn legal_destinations(piece: &Piece, board: &Board) -> Destinations {
    let out = match piece.kind {
        PieceKind::Pawn => pawn_destinations(piece, board),
        PieceKind::Rook => slide(piece, board, &ROOK_DIRS),
        PieceKind::Knight => step(piece, board, &KNIGHT_DELTAS),
        PieceKind::Bishop => slide(piece, board, &BISHOP_DIRS),
        PieceKind::Queen => queen_destinations(piece, board),
        PieceKind::King => step(piece, board, &KING_STEPS),
    };
    log::trace!(
        "{:?} {:?} on {}: {} destinations",
        piece.color,
        piece.kind,
        piece.square,
        out.len()
    );
    out
}

fn pawn_destinations(piece: &Piece, board: &Board) -> Destinations {
    let mut out = Destinations::default();
    let forward = Delta::new(piece.color.forward(), 0);

    if let Some(one) = piece.square.offset(forward) {
        if board.is_empty(one) {
            out.insert(one);
            if !piece.has_moved {
                // Both the skipped and the landing square must be empty.
                if let Some(two) = piece.square.offset(forward * 2) {
                    if board.is_empty(two) {
                        out.insert(two);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let Some(target) = piece.square.offset(forward + Delta::new(0, side)) else {
            continue;
        };
        if board.color_at(target) == Some(piece.color.opponent()) {
            out.insert(target);
        }
    }

    out
}

/// Walks each ray until the edge or the first occupied square; that square is kept
/// only when it holds an opponent.
fn slide(piece: &Piece, board: &Board, dirs: &[Delta]) -> Destinations {
    let mut out = Destinations::default();
    for &dir in dirs {
        let mut cur = piece.square;
        while let Some(next) = cur.offset(dir) {
            match board.color_at(next) {
                None => {
                    out.insert(next);
                    cur = next;
                }
                Some(color) => {
                    if color != piece.color {
                        out.insert(next);
                    }
                    break;
                }
            }
        }
    }
    out
}

/// Single jumps; any in-bounds square not holding an own piece.
fn step(piece: &Piece, board: &Board, deltas: &[Delta]) -> Destinations {
    deltas
        .iter()
        .filter_map(|&d| piece.square.offset(d))
        .filter(|&to| board.color_at(to) != Some(piece.color))
        .collect()
}

fn queen_destinations(piece: &Piece, board: &Board) -> Destinations {
    let mut out = slide(piece, board, &ROOK_DIRS);
    out.extend(slide(piece, board, &BISHOP_DIRS));
    out
}
