//! Collaborator asked for the new piece kind when a pawn promotes.

use crate::game_state::chess_types::{Color, PieceKind, Square};

pub trait PromotionPrompt {
    /// Returns the chosen kind, or `None` to cancel the move.
    fn choose_promotion(&mut self, color: Color, square: Square) -> Option<PieceKind>;
}

/// Always answers with the same choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPromotion(pub Option<PieceKind>);

impl FixedPromotion {
    pub const QUEEN: FixedPromotion = FixedPromotion(Some(PieceKind::Queen));
    pub const CANCEL: FixedPromotion = FixedPromotion(None);
}

impl PromotionPrompt for FixedPromotion {
    fn choose_promotion(&mut self, _color: Color, _square: Square) -> Option<PieceKind> {
        self.0
    }
}

/// Maps a prompt answer (`N`, `B`, `R`, `Q` or `C`, any case) to a choice.
///
/// The outer `None` means the answer was not understood; `Some(None)` is a
/// cancel.
pub fn parse_promotion_answer(answer: &str) -> Option<Option<PieceKind>> {
    match answer.trim().to_ascii_uppercase().as_str() {
        "N" => Some(Some(PieceKind::Knight)),
        "B" => Some(Some(PieceKind::Bishop)),
        "R" => Some(Some(PieceKind::Rook)),
        "Q" => Some(Some(PieceKind::Queen)),
        "C" => Some(None),
        _ => None,
    }
}
