//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout used to initialize a new board.

use crate::game_state::chess_types::PieceKind;

/// Standard starting layout as the board field of a FEN string.
///
/// The first FEN rank is grid rank 0 (the dark back rank).
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Back-rank layout from the `a` file to the `h` file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Sliding rays never exceed this many steps on an 8x8 board.
pub const MAX_RAY_LENGTH: u8 = 7;
