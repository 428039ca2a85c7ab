//! King steps and castling candidates.
//!
//! Castling here only looks at occupancy and `has_moved`; whether the king
//! starts in, passes through, or lands in check is settled when the move is
//! dispatched.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Piece, PieceKind, Square};
use crate::moves::move_descriptions::{MoveMap, MoveTag};
use crate::moves::ray_walk::{walk_rays, ALL_STEPS};

pub fn king_moves(board: &Board, from: Square, king: Piece, out: &mut MoveMap) {
    walk_rays(board, from, king.color, &ALL_STEPS, 1, out);

    if !king.has_moved {
        for side in [CastleSide::Short, CastleSide::Long] {
            if let Some(to) = castling_destination(board, from, king, side) {
                let tag = match side {
                    CastleSide::Short => MoveTag::ShortCastle,
                    CastleSide::Long => MoveTag::LongCastle,
                };
                out.insert(to, tag);
            }
        }
    }
}

/// Destination of the king when castling toward `side` is available by
/// occupancy: the rook stands unmoved at the expected file and every square
/// between king and rook is empty.
pub fn castling_destination(
    board: &Board,
    from: Square,
    king: Piece,
    side: CastleSide,
) -> Option<Square> {
    let rook_square = from.offset(0, side.rook_offset())?;
    let rook = board.piece_at(rook_square)?;
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved {
        return None;
    }

    let gap = side.rook_offset().unsigned_abs() - 1;
    for step in 1..=gap as i8 {
        let between = from.offset(0, step * side.step())?;
        if !board.is_empty(between) {
            return None;
        }
    }

    from.offset(0, 2 * side.step())
}

/// Where the castling rook ends up: the square the king passed over.
#[inline]
pub fn castling_rook_squares(king_from: Square, side: CastleSide) -> Option<(Square, Square)> {
    Some((
        king_from.offset(0, side.rook_offset())?,
        king_from.offset(0, side.step())?,
    ))
}
