use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::{MoveMap, MoveTag};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_moves(board: &Board, from: Square, color: Color, out: &mut MoveMap) {
    for (d_rank, d_file) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_rank, d_file) else {
            continue;
        };
        if board.occupant(to).color() != Some(color) {
            out.insert(to, MoveTag::Normal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};
    use crate::moves::move_descriptions::MoveMap;

    #[test]
    fn knight_in_corner_has_two_targets() {
        let board = Board::empty();
        let mut out = MoveMap::new();
        knight_moves(&board, Square::at(7, 0), Color::Light, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn starting_knight_jumps_over_pawns() {
        let board = Board::new_game();
        let mut out = MoveMap::new();
        knight_moves(&board, Square::at(7, 1), Color::Light, &mut out);

        let squares: Vec<Square> = out.keys().copied().collect();
        assert_eq!(squares, vec![Square::at(5, 0), Square::at(5, 2)]);
    }
}
