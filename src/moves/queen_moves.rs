use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::move_descriptions::MoveMap;
use crate::moves::rook_moves::rook_moves;

#[inline]
pub fn queen_moves(board: &Board, from: Square, color: Color, out: &mut MoveMap) {
    rook_moves(board, from, color, out);
    bishop_moves(board, from, color, out);
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::moves::move_descriptions::MoveMap;

    #[test]
    fn queen_from_d4_has_twenty_seven_squares() {
        let board = Board::empty();
        let mut out = MoveMap::new();
        queen_moves(&board, Square::at(4, 3), Color::Dark, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn queen_moves_match_union_with_blockers() {
        let mut board = Board::empty();
        board.place(Square::at(2, 3), Piece::new(PieceKind::Pawn, Color::Light));
        board.place(Square::at(4, 6), Piece::new(PieceKind::Pawn, Color::Dark));

        let mut out = MoveMap::new();
        queen_moves(&board, Square::at(4, 3), Color::Dark, &mut out);

        assert!(out.contains_key(&Square::at(2, 3)));
        assert!(!out.contains_key(&Square::at(1, 3)));
        assert!(out.contains_key(&Square::at(4, 5)));
        assert!(!out.contains_key(&Square::at(4, 6)));
        assert!(!out.contains_key(&Square::at(4, 7)));
    }
}
