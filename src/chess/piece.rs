use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::Delta;
use crate::core::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color moves by.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The rank a pawn of this color promotes on.
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        self.opponent().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Delta] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }

    #[inline]
    pub fn is_slider(self) -> bool {
        !self.slide_dirs().is_empty()
    }

    /// Upper-case diagram letter.
    pub fn letter(self) -> char {
        use PieceKind::*;
        match self {
            Pawn => 'P',
            Rook => 'R',
            Knight => 'N',
            Bishop => 'B',
            Queen => 'Q',
            King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        use PieceKind::*;
        match c.to_ascii_uppercase() {
            'P' => Some(Pawn),
            'R' => Some(Rook),
            'N' => Some(Knight),
            'B' => Some(Bishop),
            'Q' => Some(Queen),
            'K' => Some(King),
            _ => None,
        }
    }
}

/// A piece on the board.
///
/// `square` mirrors the slot holding the piece; only [`Board`](crate::chess::board::Board)
/// writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    /// Diagram letter: upper case for White, lower case for Black.
    pub fn letter(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

pub const ROOK_DIRS: [Delta; 4] = [
    Delta { rank: 1, file: 0 },
    Delta { rank: -1, file: 0 },
    Delta { rank: 0, file: 1 },
    Delta { rank: 0, file: -1 },
];

pub const BISHOP_DIRS: [Delta; 4] = [
    Delta { rank: 1, file: 1 },
    Delta { rank: 1, file: -1 },
    Delta { rank: -1, file: 1 },
    Delta { rank: -1, file: -1 },
];

pub const QUEEN_DIRS: [Delta; 8] = [
    Delta { rank: 1, file: 0 },
    Delta { rank: -1, file: 0 },
    Delta { rank: 0, file: 1 },
    Delta { rank: 0, file: -1 },
    Delta { rank: 1, file: 1 },
    Delta { rank: 1, file: -1 },
    Delta { rank: -1, file: 1 },
    Delta { rank: -1, file: -1 },
];

pub const KNIGHT_DELTAS: [Delta; 8] = [
    Delta { rank: -2, file: -1 },
    Delta { rank: -2, file: 1 },
    Delta { rank: -1, file: -2 },
    Delta { rank: -1, file: 2 },
    Delta { rank: 1, file: -2 },
    Delta { rank: 1, file: 2 },
    Delta { rank: 2, file: -1 },
    Delta { rank: 2, file: 1 },
];
