//! Move classification produced by the per-piece generators.

use std::collections::BTreeMap;

use crate::game_state::chess_types::{CastleSide, Square};

/// How a generated destination must be executed.
///
/// Quiet moves and plain captures share `Normal`; the destination occupant
/// decides between them when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTag {
    Normal,
    TwoSquareAdvance,
    Promotion,
    EnPassant,
    ShortCastle,
    LongCastle,
}

impl MoveTag {
    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            MoveTag::ShortCastle => Some(CastleSide::Short),
            MoveTag::LongCastle => Some(CastleSide::Long),
            _ => None,
        }
    }
}

/// Destination square to move classification for one piece.
pub type MoveMap = BTreeMap<Square, MoveTag>;
