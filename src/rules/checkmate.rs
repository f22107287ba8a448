use serde::{Deserialize, Serialize};

use crate::chess::board::Board;
use crate::chess::config::RuleOptions;
use crate::chess::piece::Color;
use crate::record::MoveRecord;

use super::attacks::in_check;
use super::legal::has_any_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a move.
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Status of the position with `to_move` on turn.
///
/// Checkmate and stalemate are only reported when king safety is enabled; under the core
/// rules a king can simply be captured, so there is no terminal state and the result is
/// `InProgress` or `Check`.
pub fn status(
    board: &Board,
    to_move: Color,
    rules: &RuleOptions,
    last: Option<&MoveRecord>,
) -> GameStatus {
    let checked = in_check(board, to_move);
    if rules.king_safety && !has_any_move(board, to_move, rules, last) {
        return if checked {
            GameStatus::Checkmate {
                winner: to_move.opponent(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if checked {
        GameStatus::Check
    } else {
        GameStatus::InProgress
    }
}
