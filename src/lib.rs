//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the board model, per-piece move generation, the
//! check-aware move application layer, the turn controller, and the text
//! helpers used by the console front-end, so binaries, benches and tests can
//! import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_walk;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod turn_control {
    pub mod game_status;
    pub mod promotion_prompt;
    pub mod turn_controller;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
