//! Castling, en passant and promotion: the moves the core generator leaves out.

use crate::chess::board::Board;
use crate::chess::config::RuleOptions;
use crate::chess::piece::{Piece, PieceKind};
use crate::core::coord::Delta;
use crate::core::square::{Square, BOARD_SIZE};
use crate::record::{MoveRecord, SpecialMove};

use super::attacks::is_attacked;

const KING_FILE: u8 = 4;

/// A castling move available to a king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castle {
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// Castling moves for an unmoved king.
///
/// The king must stand on its home square and, on each side, the first piece along the rank
/// must be the unmoved own rook in the corner. The king may not be in check, cross an attacked
/// square or land on one.
pub fn castles(king: &Piece, board: &Board) -> Vec<Castle> {
    let mut out = Vec::new();
    if king.kind != PieceKind::King
        || king.has_moved
        || king.square.rank() != king.color.back_rank()
        || king.square.file() != KING_FILE
    {
        return out;
    }
    let enemy = king.color.opponent();
    if is_attacked(board, king.square, enemy) {
        return out;
    }

    for side in [-1i8, 1] {
        let dir = Delta::new(0, side);
        let mut cur = king.square;
        let rook = loop {
            let Some(next) = cur.offset(dir) else {
                break None;
            };
            if let Some(p) = board.piece_at(next) {
                break Some(*p);
            }
            cur = next;
        };
        let Some(rook) = rook else {
            continue;
        };
        let corner = if side < 0 { 0 } else { BOARD_SIZE - 1 };
        if rook.kind != PieceKind::Rook
            || rook.color != king.color
            || rook.has_moved
            || rook.square.file() != corner
        {
            continue;
        }
        let (Some(crossed), Some(king_to)) = (king.square.offset(dir), king.square.offset(dir * 2))
        else {
            continue;
        };
        if is_attacked(board, crossed, enemy) || is_attacked(board, king_to, enemy) {
            continue;
        }
        out.push(Castle {
            king_to,
            rook_from: rook.square,
            rook_to: crossed,
        });
    }
    out
}

/// The en passant capture open to `pawn`, as `(destination, captured pawn square)`.
///
/// Only available right after the enemy pawn's double step lands beside `pawn`.
pub fn en_passant(pawn: &Piece, board: &Board, last: Option<&MoveRecord>) -> Option<(Square, Square)> {
    let last = last?;
    if pawn.kind != PieceKind::Pawn || last.color == pawn.color || !last.is_double_step() {
        return None;
    }
    if last.to.rank() != pawn.square.rank() || last.to.file().abs_diff(pawn.square.file()) != 1 {
        return None;
    }
    let victim = board.piece_at(last.to)?;
    if victim.kind != PieceKind::Pawn || victim.color == pawn.color {
        return None;
    }
    let dest = last.to.offset(Delta::new(pawn.color.forward(), 0))?;
    board.is_empty(dest).then_some((dest, last.to))
}

/// The side effect moving `from -> to` would have under the enabled options.
pub fn classify(
    board: &Board,
    from: Square,
    to: Square,
    rules: &RuleOptions,
    last: Option<&MoveRecord>,
) -> Option<SpecialMove> {
    let piece = board.piece_at(from)?;
    match piece.kind {
        PieceKind::King if rules.castling => castles(piece, board)
            .into_iter()
            .find(|c| c.king_to == to)
            .map(|c| SpecialMove::Castle {
                rook_from: c.rook_from,
                rook_to: c.rook_to,
            }),
        PieceKind::Pawn => {
            if rules.en_passant {
                if let Some((dest, captured)) = en_passant(piece, board, last) {
                    if dest == to {
                        return Some(SpecialMove::EnPassant { captured });
                    }
                }
            }
            match rules.promotion {
                Some(kind) if to.rank() == piece.color.promotion_rank() => {
                    Some(SpecialMove::Promotion(kind))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::Color;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn both_castles_when_clear() {
        let board = Board::from_diagram(
            "\
r...k..r
........
........
........
........
........
........
R...K..R",
        )
        .unwrap();
        let king = board.piece_at(sq("e1")).unwrap();
        let mut targets: Vec<String> = castles(king, &board)
            .iter()
            .map(|c| format!("{}{}{}", c.king_to, c.rook_from, c.rook_to))
            .collect();
        targets.sort();
        assert_eq!(targets, vec!["c1a1d1", "g1h1f1"]);
    }

    #[test]
    fn no_castle_through_attacked_square_or_past_blocker() {
        let board = Board::from_diagram(
            "\
....k...
........
........
........
........
........
.....r..
RN..K..R",
        )
        .unwrap();
        // f2 rook covers f1; b1 knight blocks the long side.
        let king = board.piece_at(sq("e1")).unwrap();
        assert!(castles(king, &board).is_empty());
    }

    #[test]
    fn castling_needs_home_king_and_corner_rook() {
        let board = Board::from_diagram(
            "\
....k...
........
........
........
........
........
........
rR..K...",
        )
        .unwrap();
        // b1 rook is not in its corner; c1 would be exposed to the a1 rook.
        let king = board.piece_at(sq("e1")).unwrap();
        assert!(castles(king, &board).is_empty());

        let board = Board::from_diagram(
            "\
....k...
........
........
........
........
........
........
R..K...R",
        )
        .unwrap();
        let king = board.piece_at(sq("d1")).unwrap();
        assert!(castles(king, &board).is_empty());
    }

    #[test]
    fn moved_rook_cannot_castle() {
        let mut board = Board::from_diagram(
            "\
....k...
........
........
........
........
........
........
....K..R",
        )
        .unwrap();
        board.apply_move(sq("h1"), sq("h2")).unwrap();
        board.apply_move(sq("h2"), sq("h1")).unwrap();
        let king = *board.piece_at(sq("e1")).unwrap();
        assert!(castles(&king, &board).is_empty());
    }

    #[test]
    fn en_passant_needs_the_double_step_last() {
        let board = Board::from_diagram(
            "\
....k...
........
........
...pP...
........
........
........
....K...",
        )
        .unwrap();
        let pawn = board.piece_at(sq("e5")).unwrap();
        let double = MoveRecord {
            color: Color::Black,
            kind: PieceKind::Pawn,
            from: sq("d7"),
            to: sq("d5"),
            captured: None,
            special: None,
        };
        assert_eq!(en_passant(pawn, &board, Some(&double)), Some((sq("d6"), sq("d5"))));

        let single = MoveRecord {
            from: sq("d6"),
            ..double
        };
        assert_eq!(en_passant(pawn, &board, Some(&single)), None);
        assert_eq!(en_passant(pawn, &board, None), None);
    }

    #[test]
    fn promotion_only_on_far_rank() {
        let board = Board::from_diagram(
            "\
....k...
P.......
........
........
........
........
.......p
....K...",
        )
        .unwrap();
        let queen = RuleOptions::new().with_promotion(Some(PieceKind::Queen));
        let knight = RuleOptions::new().with_promotion(Some(PieceKind::Knight));
        assert_eq!(
            classify(&board, sq("a7"), sq("a8"), &queen, None),
            Some(SpecialMove::Promotion(PieceKind::Queen))
        );
        assert_eq!(
            classify(&board, sq("h2"), sq("h1"), &knight, None),
            Some(SpecialMove::Promotion(PieceKind::Knight))
        );
        assert_eq!(classify(&board, sq("a6"), sq("a7"), &queen, None), None);
        assert_eq!(classify(&board, sq("a7"), sq("a8"), &RuleOptions::new(), None), None);
    }
}
