use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::coord::Delta;
use crate::error::{ChessError, Result};

/// Number of ranks and files on the board.
pub const BOARD_SIZE: u8 = 8;

/// A board square packed into a single `u8` (`rank * 8 + file`).
///
/// Rank 0 is Black's back rank and rank 7 is White's, so `e2` is rank 6, file 4.
/// A `Square` is always on the board; candidates that would leave it are never built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    pub fn new(rank: u8, file: u8) -> Result<Square> {
        if rank >= BOARD_SIZE || file >= BOARD_SIZE {
            return Err(ChessError::OutOfBounds {
                rank: rank as i32,
                file: file as i32,
            });
        }
        Ok(Square(rank * BOARD_SIZE + file))
    }

    /// Like [`Square::new`] but for signed host coordinates.
    pub fn from_coords(rank: i32, file: i32) -> Result<Square> {
        let size = BOARD_SIZE as i32;
        if !(0..size).contains(&rank) || !(0..size).contains(&file) {
            return Err(ChessError::OutOfBounds { rank, file });
        }
        Ok(Square((rank * size + file) as u8))
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `delta` away, or `None` when that would leave the board.
    #[inline]
    pub fn offset(self, delta: Delta) -> Option<Square> {
        let rank = self.rank() as i8 + delta.rank;
        let file = self.file() as i8 + delta.file;
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&rank) && (0..size).contains(&file) {
            Some(Square(rank as u8 * BOARD_SIZE + file as u8))
        } else {
            None
        }
    }

    /// Every square, rank 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = BOARD_SIZE - self.rank();
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    /// Parses algebraic notation (`a1`..`h8`).
    fn from_str(s: &str) -> Result<Square> {
        let bytes = s.trim().as_bytes();
        let invalid = || ChessError::InvalidSquare(s.to_string());
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Square::new(BOARD_SIZE - (rank - b'0'), file - b'a')
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(s: String) -> Result<Square> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_maps_to_rank_file() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!((e2.rank(), e2.file()), (6, 4));
        let a8: Square = "a8".parse().unwrap();
        assert_eq!((a8.rank(), a8.file()), (0, 0));
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        assert!(matches!(
            Square::new(8, 0),
            Err(ChessError::OutOfBounds { rank: 8, file: 0 })
        ));
        assert!(Square::from_coords(-1, 3).is_err());
        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn offset_filters_off_board() {
        let a1 = Square::new(7, 0).unwrap();
        assert_eq!(a1.offset(Delta::new(1, 0)), None);
        assert_eq!(a1.offset(Delta::new(0, -1)), None);
        assert_eq!(a1.offset(Delta::new(-1, 1)), Some(Square::new(6, 1).unwrap()));
    }

    #[test]
    fn all_covers_board_once() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a8");
        assert_eq!(squares[63].to_string(), "h1");
    }
}
