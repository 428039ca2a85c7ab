use crate::game_state::board::Board;
use crate::game_state::chess_rules::MAX_RAY_LENGTH;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::MoveMap;
use crate::moves::ray_walk::{walk_rays, DIAGONAL_STEPS};

#[inline]
pub fn bishop_moves(board: &Board, from: Square, color: Color, out: &mut MoveMap) {
    walk_rays(board, from, color, &DIAGONAL_STEPS, MAX_RAY_LENGTH, out);
}
