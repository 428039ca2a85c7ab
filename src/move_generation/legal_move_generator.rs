//! Per-piece move generation entry point.
//!
//! The generated destinations are pseudo-legal: they follow piece geometry
//! and capture rules on the current occupancy but do not filter moves that
//! would leave the mover's king attacked. Check detection reuses these same
//! sets for the opposing side, so a self-check filter here would recurse.
//! Legality is settled by the trial/rollback protocol at application time.

use tracing::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::move_descriptions::MoveMap;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Destinations for the piece standing on `from`, or an empty map when the
/// square is empty.
pub fn legal_moves(board: &Board, from: Square, last_move: Option<Square>) -> MoveMap {
    let mut out = MoveMap::new();
    let Some(piece) = board.piece_at(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, last_move, &mut out),
        PieceKind::Knight => knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => king_moves(board, from, piece, &mut out),
    }

    trace!(%from, kind = %piece.kind, count = out.len(), "generated destinations");
    out
}
