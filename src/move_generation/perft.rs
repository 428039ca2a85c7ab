//! Leaf-ply counting over the full rules.
//!
//! Every pseudo-legal destination is played on a copy of the board through
//! the same tag dispatch the turn controller uses, so castling pre-checks and
//! the trial/rollback protocol decide which plies count. Promotion
//! destinations expand into one ply per promotion choice.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::MoveTag;
use crate::turn_control::promotion_prompt::FixedPromotion;
use crate::turn_control::turn_controller::{dispatch_move, PlayedMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// A legal ply together with the position it leads to.
#[derive(Debug, Clone)]
pub struct PlyResult {
    pub played: PlayedMove,
    pub captured: bool,
    pub board_after: Board,
}

/// Every ply `color` can legally play from `board`.
pub fn legal_plies(board: &Board, color: Color, last_move: Option<Square>) -> Vec<PlyResult> {
    let mut plies = Vec::new();

    for (from, _) in board.pieces(color) {
        for (to, tag) in legal_moves(board, from, last_move) {
            let choices: Vec<Option<PieceKind>> = if tag == MoveTag::Promotion {
                PieceKind::PROMOTION_CHOICES.map(Some).to_vec()
            } else {
                vec![None]
            };

            for choice in choices {
                let mut next = board.clone();
                let captured = !board.is_empty(to) || tag == MoveTag::EnPassant;
                let mut prompt = FixedPromotion(choice);
                if let Ok(played) = dispatch_move(&mut next, from, to, tag, last_move, &mut prompt)
                {
                    plies.push(PlyResult {
                        played,
                        captured,
                        board_after: next,
                    });
                }
            }
        }
    }

    plies
}

pub fn perft(board: &Board, color: Color, last_move: Option<Square>, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for ply in legal_plies(board, color, last_move) {
        let next_last_move = ply.played.next_last_move();
        if depth == 1 {
            total.merge(leaf_counts(&ply, color, next_last_move));
        } else {
            total.merge(perft(
                &ply.board_after,
                color.opposite(),
                next_last_move,
                depth - 1,
            ));
        }
    }
    total
}

fn leaf_counts(ply: &PlyResult, mover: Color, next_last_move: Option<Square>) -> PerftCounts {
    let tag = ply.played.tag;
    PerftCounts {
        nodes: 1,
        captures: usize::from(ply.captured),
        en_passant: usize::from(tag == MoveTag::EnPassant),
        castles: usize::from(tag.castle_side().is_some()),
        promotions: usize::from(ply.played.promotion.is_some()),
        checks: usize::from(is_in_check(
            &ply.board_after,
            mover.opposite(),
            next_last_move,
        )),
    }
}
