//! A two-player chess rules engine for an 8×8 board.
//!
//! The engine tracks the board, generates the squares each piece may move to, and applies
//! moves through a click-driven [`GameState`](game::GameState). Rendering and input devices
//! belong to the host; the host feeds clicks in and reads the board back out.
//!
//! The core follows occupancy rules only. King safety, castling, en passant and promotion
//! are opt-in through [`RuleOptions`](chess::config::RuleOptions).

pub mod chess;
pub mod core;
pub mod error;
pub mod game;
pub mod record;
pub mod rules;

pub use crate::chess::board::Board;
pub use crate::chess::config::RuleOptions;
pub use crate::chess::piece::{Color, Piece, PieceKind};
pub use crate::core::square::Square;
pub use crate::error::{ChessError, Result};
pub use crate::game::{GameState, Phase, SelectOutcome};
pub use crate::record::{MoveRecord, SpecialMove};
pub use crate::rules::checkmate::GameStatus;
pub use crate::rules::movegen::{legal_destinations, Destinations};
