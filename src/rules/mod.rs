//! Move rules.
//!
//! - [`movegen`]: the core per-kind destination generator (occupancy only).
//! - [`attacks`]: attack and check detection.
//! - [`special`]: castling, en passant, promotion.
//! - [`legal`]: destinations and move application under [`RuleOptions`](crate::chess::config::RuleOptions).
//! - [`checkmate`]: game status.

pub mod attacks;
pub mod checkmate;
pub mod legal;
pub mod movegen;
pub mod special;
