//! Classification of the side to move: still playing, in check, mated, or
//! stalemated.

use tracing::info;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::turn_control::promotion_prompt::FixedPromotion;
use crate::turn_control::turn_controller::dispatch_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// True when at least one own move of `color` survives its trial.
///
/// Each candidate is tried on a scratch copy of the board through the same
/// dispatch the turn controller uses, promotions answered with a queen.
pub fn has_legal_move(board: &Board, color: Color, last_move: Option<Square>) -> bool {
    board.pieces(color).any(|(from, _)| {
        legal_moves(board, from, last_move)
            .into_iter()
            .any(|(to, tag)| {
                let mut scratch = board.clone();
                dispatch_move(
                    &mut scratch,
                    from,
                    to,
                    tag,
                    last_move,
                    &mut FixedPromotion::QUEEN,
                )
                .is_ok()
            })
    })
}

pub fn game_status(board: &Board, color: Color, last_move: Option<Square>) -> GameStatus {
    let in_check = is_in_check(board, color, last_move);
    let can_move = has_legal_move(board, color, last_move);

    let status = match (in_check, can_move) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Ongoing,
        (false, false) => GameStatus::Stalemate,
    };
    if status.is_over() {
        info!(%color, ?status, "game decided");
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(placement: &str, color: Color) -> GameStatus {
        let board = Board::from_placement(placement).expect("placement should parse");
        game_status(&board, color, None)
    }

    #[test]
    fn start_position_is_ongoing() {
        let board = Board::new_game();
        assert_eq!(game_status(&board, Color::Light, None), GameStatus::Ongoing);
    }

    #[test]
    fn back_rank_mate_is_detected() {
        assert_eq!(
            status_of("3R2k1/5ppp/8/8/8/8/8/6K1", Color::Dark),
            GameStatus::Checkmate
        );
    }

    #[test]
    fn check_with_escape_is_not_mate() {
        assert_eq!(
            status_of("3R2k1/5pp1/8/8/8/8/8/6K1", Color::Dark),
            GameStatus::Check
        );
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        assert_eq!(
            status_of("7k/5Q2/6K1/8/8/8/8/8", Color::Dark),
            GameStatus::Stalemate
        );
    }

    #[test]
    fn capturing_the_checker_rescues_king() {
        assert_eq!(
            status_of("3R2k1/5ppp/8/8/8/8/7K/3r4", Color::Dark),
            GameStatus::Check
        );
    }
}
