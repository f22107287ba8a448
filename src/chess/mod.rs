//! Chess pieces, the board that owns them, and rule options.

pub mod board;
pub mod config;
pub mod layout;
pub mod piece;
