//! Check detection by simulating every opposing piece's move set.
//!
//! Attack sets are recomputed from scratch on each query; nothing is cached
//! between plies.

use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};
use crate::move_generation::legal_move_generator::legal_moves;

/// Union of the pseudo-legal destinations of every piece of `attacker`.
pub fn attacked_squares(
    board: &Board,
    attacker: Color,
    last_move: Option<Square>,
) -> BTreeSet<Square> {
    let mut squares = BTreeSet::new();
    for (from, _) in board.pieces(attacker) {
        squares.extend(legal_moves(board, from, last_move).into_keys());
    }
    squares
}

/// True when any opposing destination holds a king of `color`.
pub fn is_in_check(board: &Board, color: Color, last_move: Option<Square>) -> bool {
    attacked_squares(board, color.opposite(), last_move)
        .into_iter()
        .any(|square| {
            board
                .piece_at(square)
                .is_some_and(|piece| piece.kind == PieceKind::King && piece.color == color)
        })
}

/// True when the square the `color` king passes over while castling toward
/// `side` is an opposing destination.
///
/// The starting square is covered by a direct `is_in_check` call and the
/// landing square by the trial inside the castle itself.
pub fn castle_through_check(
    board: &Board,
    color: Color,
    side: CastleSide,
    last_move: Option<Square>,
) -> bool {
    let Some(transit) = board
        .king_square(color)
        .and_then(|king| king.offset(0, side.step()))
    else {
        return false;
    };
    attacked_squares(board, color.opposite(), last_move).contains(&transit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_quiet() {
        let board = Board::new_game();
        assert!(!is_in_check(&board, Color::Light, None));
        assert!(!is_in_check(&board, Color::Dark, None));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let board = Board::from_placement("4r1k1/8/8/8/8/8/8/4K3").expect("placement should parse");
        assert!(is_in_check(&board, Color::Light, None));
        assert!(!is_in_check(&board, Color::Dark, None));
    }

    #[test]
    fn blocked_rook_gives_no_check() {
        let board =
            Board::from_placement("4r1k1/8/8/8/4N3/8/8/4K3").expect("placement should parse");
        assert!(!is_in_check(&board, Color::Light, None));
    }

    #[test]
    fn pawn_checks_diagonally_but_not_straight_ahead() {
        let board = Board::from_placement("6k1/8/8/8/8/3p4/4K3/8").expect("placement should parse");
        assert!(is_in_check(&board, Color::Light, None));

        let board = Board::from_placement("6k1/8/8/8/8/4p3/4K3/8").expect("placement should parse");
        assert!(!is_in_check(&board, Color::Light, None));
    }

    #[test]
    fn knight_check_ignores_blockers() {
        let board =
            Board::from_placement("4k3/8/8/8/8/3n4/3PPP2/4K3").expect("placement should parse");
        assert!(is_in_check(&board, Color::Light, None));
    }

    #[test]
    fn transit_square_attack_is_detected_per_side() {
        let board =
            Board::from_placement("4k3/8/8/8/8/8/5r2/R3K2R").expect("placement should parse");
        assert!(castle_through_check(&board, Color::Light, CastleSide::Short, None));
        assert!(!castle_through_check(&board, Color::Light, CastleSide::Long, None));
    }

    #[test]
    fn attacked_squares_cover_pawn_pushes_in_start_position() {
        let board = Board::new_game();
        let attacked = attacked_squares(&board, Color::Light, None);
        assert!(attacked.contains(&Square::at(4, 4)));
        assert!(attacked.contains(&Square::at(5, 0)));
        assert_eq!(attacked.len(), 16);
    }
}
