//! Step-vector ray walking shared by the sliding pieces and the king.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Occupant, Square};
use crate::moves::move_descriptions::{MoveMap, MoveTag};

pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ALL_STEPS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Walks one ray from `from`, taking at most `max_steps` steps.
///
/// Empty squares are added and the walk continues; the first occupied square
/// ends the walk and is added only when it holds an opposing piece.
pub fn walk_ray(
    board: &Board,
    from: Square,
    color: Color,
    (d_rank, d_file): (i8, i8),
    max_steps: u8,
    out: &mut MoveMap,
) {
    let mut current = from;
    for _ in 0..max_steps {
        let Some(next) = current.offset(d_rank, d_file) else {
            return;
        };
        match board.occupant(next) {
            Occupant::Empty => {
                out.insert(next, MoveTag::Normal);
            }
            Occupant::Occupied(piece) => {
                if piece.color != color {
                    out.insert(next, MoveTag::Normal);
                }
                return;
            }
        }
        current = next;
    }
}

pub fn walk_rays(
    board: &Board,
    from: Square,
    color: Color,
    steps: &[(i8, i8)],
    max_steps: u8,
    out: &mut MoveMap,
) {
    for &step in steps {
        walk_ray(board, from, color, step, max_steps, out);
    }
}
