use serde::{Deserialize, Serialize};

use crate::chess::piece::PieceKind;
use crate::error::Result;

/// Optional rules layered around the core move generator.
///
/// `RuleOptions::default()` is the bare core: no king safety, castling, en passant or
/// promotion, and no terminal game state. [`RuleOptions::standard`] switches all of them on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOptions {
    /// Drop destinations that leave the mover's own king attacked; enables checkmate and
    /// stalemate detection.
    pub king_safety: bool,

    pub castling: bool,

    pub en_passant: bool,

    /// Kind a pawn becomes on the far rank. `None` leaves it a pawn.
    pub promotion: Option<PieceKind>,
}

impl RuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self {
            king_safety: true,
            castling: true,
            en_passant: true,
            promotion: Some(PieceKind::Queen),
        }
    }

    pub fn with_king_safety(mut self, enabled: bool) -> Self {
        self.king_safety = enabled;
        self
    }

    pub fn with_castling(mut self, enabled: bool) -> Self {
        self.castling = enabled;
        self
    }

    pub fn with_en_passant(mut self, enabled: bool) -> Self {
        self.en_passant = enabled;
        self
    }

    pub fn with_promotion(mut self, kind: Option<PieceKind>) -> Self {
        self.promotion = kind;
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Compact, deterministic description for logs.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.king_safety {
            parts.push("king-safety".to_string());
        }
        if self.castling {
            parts.push("castling".to_string());
        }
        if self.en_passant {
            parts.push("en-passant".to_string());
        }
        if let Some(kind) = self.promotion {
            parts.push(format!("promotion={kind:?}"));
        }
        if parts.is_empty() {
            "core".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_core() {
        let opts = RuleOptions::default();
        assert!(!opts.king_safety && !opts.castling && !opts.en_passant);
        assert_eq!(opts.promotion, None);
        assert_eq!(opts.summary(), "core");
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let opts = RuleOptions::from_json(r#"{ "castling": true, "promotion": "knight" }"#).unwrap();
        assert_eq!(
            opts,
            RuleOptions::new()
                .with_castling(true)
                .with_promotion(Some(PieceKind::Knight))
        );
    }

    #[test]
    fn json_rejects_unknown_fields() {
        assert!(RuleOptions::from_json(r#"{ "castle": true }"#).is_err());
    }

    #[test]
    fn standard_survives_json() {
        let text = serde_json::to_string(&RuleOptions::standard()).unwrap();
        assert_eq!(RuleOptions::from_json(&text).unwrap(), RuleOptions::standard());
    }
}
