use std::fmt;

use crate::chess::layout::standard_placement;
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::square::{Square, BOARD_SIZE};
use crate::error::{ChessError, Result};

const SLOTS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// 8×8 grid of owned piece slots.
///
/// The board stores pieces and moves them; it knows nothing about legality.
/// Invariant: a piece's `square` always equals the slot that holds it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    slots: [Option<Piece>; SLOTS],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            slots: [None; SLOTS],
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (kind, color, sq) in standard_placement() {
            board.slots[sq.index()] = Some(Piece::new(kind, color, sq));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.slots[sq.index()].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.slots[sq.index()].is_none()
    }

    /// Color of the piece on `sq`, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Setup-time placement. The piece's `square` is overwritten with `sq`.
    pub fn place_piece(&mut self, mut piece: Piece, sq: Square) -> Result<()> {
        if !self.is_empty(sq) {
            return Err(ChessError::SquareOccupied(sq));
        }
        piece.square = sq;
        self.slots[sq.index()] = Some(piece);
        Ok(())
    }

    /// Setup-time placement from raw host coordinates.
    pub fn place_at(&mut self, kind: PieceKind, color: Color, rank: i32, file: i32) -> Result<()> {
        let sq = Square::from_coords(rank, file)?;
        self.place_piece(Piece::new(kind, color, sq), sq)
    }

    /// Moves whatever stands on `from` to `to`, discarding any piece on `to`.
    ///
    /// No legality check is made. Returns the captured piece.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>> {
        let Some(mut piece) = self.slots[from.index()].take() else {
            return Err(ChessError::EmptySource(from));
        };
        piece.square = to;
        piece.has_moved = true;
        Ok(self.slots[to.index()].replace(piece))
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.slots[sq.index()].take()
    }

    /// Changes the kind of the piece on `sq` in place.
    pub fn promote(&mut self, sq: Square, kind: PieceKind) -> Result<()> {
        match self.slots[sq.index()].as_mut() {
            Some(piece) => {
                piece.kind = kind;
                Ok(())
            }
            None => Err(ChessError::EmptySource(sq)),
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }

    /// True iff every piece's `square` matches its slot.
    pub fn is_consistent(&self) -> bool {
        Square::all().all(|sq| match self.piece_at(sq) {
            Some(p) => p.square == sq,
            None => true,
        })
    }

    /// Parses the diagram format produced by `Display`.
    ///
    /// Eight non-blank lines, rank 0 (Black's back rank) first, eight cells each:
    /// `.` for empty, `PRNBQK` for White and `prnbqk` for Black. Whitespace between
    /// cells is ignored, and so are a trailing rank number and anything after the eighth
    /// row. Pawns off their starting rank are marked as having moved.
    pub fn from_diagram(text: &str) -> Result<Board> {
        let mut board = Board::empty();
        let rows: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .take(BOARD_SIZE as usize)
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(ChessError::InvalidDiagram {
                line: text.lines().count(),
                reason: format!("expected {BOARD_SIZE} rows, found {}", rows.len()),
            });
        }

        for (rank, (line_no, line)) in rows.into_iter().enumerate() {
            let cells: Vec<char> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .take(BOARD_SIZE as usize)
                .collect();
            if cells.len() != BOARD_SIZE as usize {
                return Err(ChessError::InvalidDiagram {
                    line: line_no + 1,
                    reason: format!("expected {BOARD_SIZE} cells, found {}", cells.len()),
                });
            }
            for (file, c) in cells.into_iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let Some(kind) = PieceKind::from_letter(c) else {
                    return Err(ChessError::InvalidDiagram {
                        line: line_no + 1,
                        reason: format!("unknown piece {c:?}"),
                    });
                };
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(rank as u8, file as u8)?;
                let mut piece = Piece::new(kind, color, sq);
                piece.has_moved = kind == PieceKind::Pawn && sq.rank() != color.pawn_rank();
                board.place_piece(piece, sq)?;
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..BOARD_SIZE {
            for file in 0..BOARD_SIZE {
                if file > 0 {
                    f.write_str(" ")?;
                }
                let c = Square::new(rank, file)
                    .ok()
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.letter());
                write!(f, "{c}")?;
            }
            writeln!(f, "  {}", BOARD_SIZE - rank)?;
        }
        f.write_str("a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}
