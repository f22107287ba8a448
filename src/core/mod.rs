//! Low-level board geometry.
//!
//! - [`coord`]: signed steps between squares plus the king step set.
//! - [`square`]: a validated square packed into one byte, with algebraic parsing.

pub mod coord;
pub mod square;
