//! Destinations and move application under a set of [`RuleOptions`].
//!
//! The core generator's output is the starting point. Castling and en passant add
//! destinations when enabled; king safety then filters out anything that leaves the mover's
//! king attacked, by playing the move on a scratch board.

use crate::chess::board::Board;
use crate::chess::config::RuleOptions;
use crate::chess::piece::{Color, PieceKind};
use crate::core::square::Square;
use crate::error::{ChessError, Result};
use crate::record::{MoveRecord, SpecialMove};

use super::attacks::in_check;
use super::movegen::{legal_destinations, Destinations};
use super::special::{castles, classify, en_passant};

/// Destinations for the piece on `from`; empty when the square is empty.
pub fn destinations(
    board: &Board,
    from: Square,
    rules: &RuleOptions,
    last: Option<&MoveRecord>,
) -> Destinations {
    let Some(piece) = board.piece_at(from) else {
        return Destinations::default();
    };

    let mut out = legal_destinations(piece, board);
    if rules.castling && piece.kind == PieceKind::King {
        out.extend(castles(piece, board).into_iter().map(|c| c.king_to));
    }
    if rules.en_passant && piece.kind == PieceKind::Pawn {
        if let Some((dest, _)) = en_passant(piece, board, last) {
            out.insert(dest);
        }
    }

    if rules.king_safety {
        let color = piece.color;
        out.retain(|&to| {
            let mut scratch = board.clone();
            match apply(&mut scratch, from, to, rules, last) {
                Ok(_) => !in_check(&scratch, color),
                Err(_) => false,
            }
        });
    }
    out
}

/// True iff `color` has at least one destination for any of its pieces.
pub fn has_any_move(
    board: &Board,
    color: Color,
    rules: &RuleOptions,
    last: Option<&MoveRecord>,
) -> bool {
    board
        .pieces_of(color)
        .any(|p| !destinations(board, p.square, rules, last).is_empty())
}

/// Plays `from -> to` with its side effects, without checking legality.
///
/// Validation happens before the board is touched, so a failed call leaves it unchanged.
pub fn apply(
    board: &mut Board,
    from: Square,
    to: Square,
    rules: &RuleOptions,
    last: Option<&MoveRecord>,
) -> Result<MoveRecord> {
    let piece = *board.piece_at(from).ok_or(ChessError::EmptySource(from))?;
    let special = classify(board, from, to, rules, last);

    let mut captured = board.apply_move(from, to)?.map(|p| p.kind);
    match special {
        Some(SpecialMove::Castle { rook_from, rook_to }) => {
            board.apply_move(rook_from, rook_to)?;
        }
        Some(SpecialMove::EnPassant { captured: victim }) => {
            captured = board.remove_piece(victim).map(|p| p.kind);
        }
        Some(SpecialMove::Promotion(kind)) => {
            board.promote(to, kind)?;
        }
        None => {}
    }

    Ok(MoveRecord {
        color: piece.color,
        kind: piece.kind,
        from,
        to,
        captured,
        special,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn core_rules_leave_pinned_piece_free() {
        let board = Board::from_diagram(
            "\
....r...
........
........
........
........
........
....N...
....K...",
        )
        .unwrap();
        let core = destinations(&board, sq("e2"), &RuleOptions::default(), None);
        assert_eq!(core.len(), 6);
        let safe = destinations(&board, sq("e2"), &RuleOptions::standard(), None);
        assert!(safe.is_empty());
    }

    #[test]
    fn castling_moves_the_rook() {
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
        let rules = RuleOptions::standard();
        assert!(destinations(&board, sq("e1"), &rules, None).contains(&sq("g1")));

        let record = apply(&mut board, sq("e1"), sq("g1"), &rules, None).unwrap();
        assert_eq!(
            record.special,
            Some(SpecialMove::Castle {
                rook_from: sq("h1"),
                rook_to: sq("f1"),
            })
        );
        assert_eq!(board.piece_at(sq("f1")).unwrap().kind, PieceKind::Rook);
        assert!(board.piece_at(sq("h1")).is_none());
        assert!(board.is_consistent());
    }

    #[test]
    fn castling_is_off_in_core_rules() {
        let board = Board::from_diagram(
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
        assert!(!destinations(&board, sq("e1"), &RuleOptions::default(), None).contains(&sq("g1")));
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::from_diagram(
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
        let last = MoveRecord {
            color: Color::Black,
            kind: PieceKind::Pawn,
            from: sq("d7"),
            to: sq("d5"),
            captured: None,
            special: None,
        };
        let rules = RuleOptions::standard();
        let dests = destinations(&board, sq("e5"), &rules, Some(&last));
        assert!(dests.contains(&sq("d6")));

        let record = apply(&mut board, sq("e5"), sq("d6"), &rules, Some(&last)).unwrap();
        assert_eq!(record.captured, Some(PieceKind::Pawn));
        assert!(board.piece_at(sq("d5")).is_none());
        assert_eq!(board.pieces_of(Color::Black).count(), 1);
    }

    #[test]
    fn failed_apply_leaves_board_untouched() {
        let mut board = Board::standard();
        let before = board.clone();
        let err = apply(&mut board, sq("e4"), sq("e5"), &RuleOptions::standard(), None);
        assert!(matches!(err, Err(ChessError::EmptySource(_))));
        assert_eq!(board, before);
    }
}
