use std::ops::{Add, Mul, Neg};

/// A signed (rank, file) step between two squares.
///
/// Generators walk the board in `Delta`s and only turn a result back into a
/// [`Square`](crate::core::square::Square) once it is known to be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub rank: i8,
    pub file: i8,
}

impl Delta {
    pub const ZERO: Delta = Delta { rank: 0, file: 0 };

    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i8 {
        self.rank.abs().max(self.file.abs())
    }
}

impl Add for Delta {
    type Output = Delta;

    #[inline]
    fn add(self, rhs: Delta) -> Self::Output {
        Delta::new(self.rank + rhs.rank, self.file + rhs.file)
    }
}

impl Neg for Delta {
    type Output = Delta;

    #[inline]
    fn neg(self) -> Self::Output {
        Delta::new(-self.rank, -self.file)
    }
}

impl Mul<i8> for Delta {
    type Output = Delta;

    #[inline]
    fn mul(self, rhs: i8) -> Delta {
        Delta {
            rank: self.rank * rhs,
            file: self.file * rhs,
        }
    }
}

/// The 8 king steps around a square.
pub const KING_STEPS: [Delta; 8] = [
    Delta { rank: -1, file: -1 },
    Delta { rank: -1, file: 0 },
    Delta { rank: -1, file: 1 },
    Delta { rank: 0, file: -1 },
    Delta { rank: 0, file: 1 },
    Delta { rank: 1, file: -1 },
    Delta { rank: 1, file: 0 },
    Delta { rank: 1, file: 1 },
];
