use crate::game_state::board::Board;
use crate::game_state::chess_types::{Occupant, Square};

/// Saved cells for one trial application.
///
/// Restoring writes the cells back in reverse order, so a square listed twice
/// ends up with its earliest saved value.
#[derive(Debug, Clone)]
pub struct UndoState {
    saved: Vec<(Square, Occupant)>,
}

impl UndoState {
    pub fn capture(board: &Board, squares: &[Square]) -> Self {
        Self {
            saved: squares
                .iter()
                .map(|&square| (square, board.occupant(square)))
                .collect(),
        }
    }

    pub fn restore(self, board: &mut Board) {
        for (square, occupant) in self.saved.into_iter().rev() {
            board.set(square, occupant);
        }
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.saved.iter().map(|(square, _)| *square)
    }
}

#[cfg(test)]
mod tests {
    use super::UndoState;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastleSide, PieceKind, Square};
    use crate::move_generation::legal_move_apply::{castle, en_passant, promote};

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).expect("placement should parse")
    }

    #[test]
    fn restore_undoes_every_saved_cell() {
        let mut board = Board::new_game();
        let before = board.clone();
        let from = Square::at(6, 4);
        let to = Square::at(4, 4);

        let undo = UndoState::capture(&board, &[from, to]);
        let pawn = board.take(from);
        board.set(to, pawn);
        assert_ne!(board, before);

        undo.restore(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn restore_reverses_a_completed_castle() {
        let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R");
        let before = board.clone();
        let squares = [
            Square::at(7, 4),
            Square::at(7, 6),
            Square::at(7, 7),
            Square::at(7, 5),
        ];

        let undo = UndoState::capture(&board, &squares);
        castle(&mut board, Square::at(7, 4), CastleSide::Short, None)
            .expect("short castle should be legal");
        assert_ne!(board, before);

        undo.restore(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn restore_reverses_a_completed_en_passant() {
        let mut board = board("4k3/8/8/3pP3/8/8/8/4K3");
        let before = board.clone();
        let (from, to, victim) = (Square::at(3, 4), Square::at(2, 3), Square::at(3, 3));

        let undo = UndoState::capture(&board, &[from, to, victim]);
        en_passant(&mut board, from, to, Some(victim)).expect("en passant should be legal");
        assert!(board.is_empty(victim));

        undo.restore(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn restore_reverses_a_completed_promotion() {
        let mut board = board("3r3k/4P3/8/8/8/8/8/4K3");
        let before = board.clone();
        let (from, to) = (Square::at(1, 4), Square::at(0, 3));

        let undo = UndoState::capture(&board, &[from, to]);
        promote(&mut board, from, to, PieceKind::Knight, None)
            .expect("capturing promotion should be legal");
        assert_eq!(board.piece_at(to).map(|p| p.kind), Some(PieceKind::Knight));

        undo.restore(&mut board);
        assert_eq!(board, before);
    }
}
