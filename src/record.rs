use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::piece::{Color, PieceKind};
use crate::core::square::Square;

/// Side effect of a move beyond relocating the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialMove {
    /// The rook hops over the king.
    Castle { rook_from: Square, rook_to: Square },
    /// The captured pawn stood beside the mover, not on `to`.
    EnPassant { captured: Square },
    Promotion(PieceKind),
}

/// One applied move, as kept in a game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub color: Color,
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub special: Option<SpecialMove>,
}

impl MoveRecord {
    /// A pawn advancing two ranks.
    pub fn is_double_step(&self) -> bool {
        self.kind == PieceKind::Pawn && self.from.rank().abs_diff(self.to.rank()) == 2
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special {
            Some(SpecialMove::Castle { rook_from, .. }) if rook_from.file() < self.from.file() => {
                return f.write_str("O-O-O")
            }
            Some(SpecialMove::Castle { .. }) => return f.write_str("O-O"),
            _ => {}
        }
        if self.kind != PieceKind::Pawn {
            write!(f, "{}", self.kind.letter())?;
        }
        let sep = if self.captured.is_some() { 'x' } else { '-' };
        write!(f, "{}{sep}{}", self.from, self.to)?;
        match self.special {
            Some(SpecialMove::Promotion(kind)) => write!(f, "={}", kind.letter()),
            Some(SpecialMove::EnPassant { .. }) => f.write_str(" e.p."),
            _ => Ok(()),
        }
    }
}
