//! Pawn pushes, captures, en passant and promotion tagging.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::move_descriptions::{MoveMap, MoveTag};

pub fn pawn_moves(
    board: &Board,
    from: Square,
    pawn: Piece,
    last_move: Option<Square>,
    out: &mut MoveMap,
) {
    let color = pawn.color;
    let forward = color.forward();
    let promotion_rank = color.promotion_rank();
    let advance_tag = |to: Square| {
        if to.rank() == promotion_rank {
            MoveTag::Promotion
        } else {
            MoveTag::Normal
        }
    };

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.insert(one_step, advance_tag(one_step));

            if !pawn.has_moved {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty(two_step) {
                        out.insert(two_step, MoveTag::TwoSquareAdvance);
                    }
                }
            }
        }
    }

    for d_file in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_file) else {
            continue;
        };
        if board.occupant(to).is_enemy_of(color) {
            out.insert(to, advance_tag(to));
        }
    }

    // The pawn that just advanced two squares stands beside us; we land
    // behind it. The last-move square must still hold an opposing pawn,
    // which a real game always satisfies but a hand-built board may not.
    let Some(last_move) = last_move else {
        return;
    };
    for d_file in [-1i8, 1i8] {
        if from.offset(0, d_file) != Some(last_move) {
            continue;
        }
        let victim_is_pawn = board.piece_at(last_move).is_some_and(|victim| {
            victim.kind == PieceKind::Pawn && victim.color != color
        });
        if !victim_is_pawn {
            continue;
        }
        if let Some(to) = from.offset(forward, d_file) {
            out.insert(to, MoveTag::EnPassant);
        }
    }
}
