//! Errors used throughout the rules engine.
//!
//! Two families live here:
//! - `IllegalMove` is the only failure a move attempt can produce. It is
//!   never fatal: whenever an operation returns it, the board is exactly as it
//!   was before the call, and the turn controller always has a defined next
//!   state (deselect, or retry the click as a fresh selection).
//! - `ChessErrors` covers setup and input problems such as a malformed
//!   placement string or an unknown square name.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Why a move attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("there is no piece on {0}")]
    EmptyOrigin(Square),

    #[error("{0} is occupied")]
    DestinationOccupied(Square),

    #[error("there is no opposing piece to capture on {0}")]
    NothingToCapture(Square),

    #[error("{0} holds a piece of the moving side")]
    OwnPieceOnTarget(Square),

    /// The trial application left the mover's own king attacked and was
    /// rolled back.
    #[error("the move would leave the {0} king in check")]
    LeavesKingInCheck(Color),

    #[error("cannot castle while in check")]
    CastleOutOfCheck,

    #[error("cannot castle through an attacked square")]
    CastleThroughCheck,

    #[error("no unmoved castling rook beside the king on {0}")]
    MissingCastleRook(Square),

    #[error("no pawn to capture en passant beside {0}")]
    NoEnPassantVictim(Square),

    #[error("a pawn cannot promote to a {0}")]
    InvalidPromotion(PieceKind),

    #[error("promotion was cancelled")]
    PromotionCancelled,
}

/// Setup and input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square name such as `e9` or `k2` failed to parse.
    #[error("invalid square name: {0}")]
    InvalidAlgebraicString(String),

    /// Rank or file index outside `0..=7`.
    #[error("rank {0} / file {1} is off the board")]
    InvalidFileOrRank(u8, u8),

    /// Unexpected character in a placement string.
    #[error("invalid placement token '{0}'")]
    InvalidPlacementToken(char),

    /// Placement string with the wrong shape (rank count or rank width).
    #[error("malformed placement: {0}")]
    InvalidPlacementForm(String),
}
