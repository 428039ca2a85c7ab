//! Turn and selection state machine.
//!
//! The controller owns the board, whose turn it is, the current selection and
//! the last-move cell used for en passant. Input arrives as square clicks.
//! With nothing selected, clicking an own piece selects it and computes its
//! candidate destinations; with a piece selected, clicking a candidate
//! dispatches the tagged move, clicking another own piece selects that piece
//! instead, and clicking anywhere else deselects. A failed attempt clears the
//! selection and replays the click as a fresh selection.
//!
//! The selection stores only a square. The selected piece is read from the
//! grid again when a move is attempted.

use tracing::{debug, info};

use crate::chess_errors::IllegalMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{
    capture_piece, castle, en_passant, move_piece, promote,
};
use crate::move_generation::legal_move_checks::{castle_through_check, is_in_check};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::{MoveMap, MoveTag};
use crate::turn_control::game_status::{game_status, GameStatus};
use crate::turn_control::promotion_prompt::PromotionPrompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub from: Square,
    pub to: Square,
    pub tag: MoveTag,
    pub promotion: Option<PieceKind>,
}

impl PlayedMove {
    /// Value of the last-move cell after this move: the destination of a
    /// two-square advance, otherwise nothing.
    #[inline]
    pub fn next_last_move(&self) -> Option<Square> {
        match self.tag {
            MoveTag::TwoSquareAdvance => Some(self.to),
            _ => None,
        }
    }
}

/// Executes the move `from -> to` according to its generated tag.
///
/// Castling is refused when the mover is in check or the king's transit
/// square is attacked; the landing square is covered by the castle trial.
/// Promotions ask `prompt` first, and a cancel leaves the board untouched.
/// A `Normal` move becomes a quiet move or a capture depending on the
/// destination occupant.
pub fn dispatch_move(
    board: &mut Board,
    from: Square,
    to: Square,
    tag: MoveTag,
    last_move: Option<Square>,
    prompt: &mut dyn PromotionPrompt,
) -> Result<PlayedMove, IllegalMove> {
    let mover = board
        .piece_at(from)
        .ok_or(IllegalMove::EmptyOrigin(from))?;
    let mut promotion = None;

    match tag {
        MoveTag::ShortCastle | MoveTag::LongCastle => {
            let side = if tag == MoveTag::ShortCastle {
                CastleSide::Short
            } else {
                CastleSide::Long
            };
            if is_in_check(board, mover.color, last_move) {
                return Err(IllegalMove::CastleOutOfCheck);
            }
            if castle_through_check(board, mover.color, side, last_move) {
                return Err(IllegalMove::CastleThroughCheck);
            }
            castle(board, from, side, last_move)?;
        }
        MoveTag::TwoSquareAdvance => move_piece(board, from, to, last_move)?,
        MoveTag::EnPassant => en_passant(board, from, to, last_move)?,
        MoveTag::Promotion => {
            let kind = prompt
                .choose_promotion(mover.color, to)
                .ok_or(IllegalMove::PromotionCancelled)?;
            promote(board, from, to, kind, last_move)?;
            promotion = Some(kind);
        }
        MoveTag::Normal => match board.occupant(to) {
            Occupant::Empty => move_piece(board, from, to, last_move)?,
            Occupant::Occupied(target) if target.color != mover.color => {
                capture_piece(board, from, to, last_move)?
            }
            Occupant::Occupied(_) => return Err(IllegalMove::OwnPieceOnTarget(to)),
        },
    }

    Ok(PlayedMove {
        from,
        to,
        tag,
        promotion,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub from: Square,
    pub candidates: MoveMap,
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing selectable there, or the game is over.
    Ignored,
    Selected(Square),
    Deselected,
    Moved(PlayedMove),
    /// The move attempt failed; the click was then replayed as a fresh
    /// selection, which may have picked up another own piece.
    Rejected {
        reason: IllegalMove,
        reselected: Option<Square>,
    },
}

#[derive(Debug, Clone)]
pub struct TurnController {
    board: Board,
    turn: Color,
    selection: Option<Selection>,
    last_move: Option<Square>,
    in_check: bool,
    status: GameStatus,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Standard starting layout, light to move.
    pub fn new() -> Self {
        Self::from_position(Board::new_game(), Color::Light, None)
    }

    pub fn from_position(board: Board, turn: Color, last_move: Option<Square>) -> Self {
        let in_check = is_in_check(&board, turn, last_move);
        let status = game_status(&board, turn, last_move);
        Self {
            board,
            turn,
            selection: None,
            last_move,
            in_check,
            status,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn last_move(&self) -> Option<Square> {
        self.last_move
    }

    /// Whether the side to move was in check when its turn began.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Square> {
        self.selection.as_ref().map(|selection| selection.from)
    }

    #[inline]
    pub fn candidates(&self) -> Option<&MoveMap> {
        self.selection.as_ref().map(|selection| &selection.candidates)
    }

    /// The deselect event. Returns whether anything was selected.
    pub fn cancel_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }

    pub fn click(&mut self, square: Square, prompt: &mut dyn PromotionPrompt) -> ClickOutcome {
        if self.status.is_over() {
            return ClickOutcome::Ignored;
        }

        let Some(selection) = self.selection.take() else {
            return self.select(square);
        };

        let Some(&tag) = selection.candidates.get(&square) else {
            debug!(from = %selection.from, %square, "click outside candidates");
            return match self.select(square) {
                ClickOutcome::Selected(from) => ClickOutcome::Selected(from),
                _ => ClickOutcome::Deselected,
            };
        };

        match dispatch_move(
            &mut self.board,
            selection.from,
            square,
            tag,
            self.last_move,
            prompt,
        ) {
            Ok(played) => {
                self.finish_turn(played);
                ClickOutcome::Moved(played)
            }
            Err(reason) => {
                debug!(from = %selection.from, to = %square, %reason, "move rejected");
                let reselected = match self.select(square) {
                    ClickOutcome::Selected(from) => Some(from),
                    _ => None,
                };
                ClickOutcome::Rejected { reason, reselected }
            }
        }
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.turn => {
                let candidates = legal_moves(&self.board, square, self.last_move);
                debug!(%square, kind = %piece.kind, count = candidates.len(), "piece selected");
                self.selection = Some(Selection {
                    from: square,
                    candidates,
                });
                ClickOutcome::Selected(square)
            }
            _ => ClickOutcome::Ignored,
        }
    }

    fn finish_turn(&mut self, played: PlayedMove) {
        info!(
            side = %self.turn,
            from = %played.from,
            to = %played.to,
            tag = ?played.tag,
            promotion = ?played.promotion,
            "ply played"
        );
        self.last_move = played.next_last_move();
        self.turn = self.turn.opposite();
        self.selection = None;
        self.in_check = is_in_check(&self.board, self.turn, self.last_move);
        self.status = game_status(&self.board, self.turn, self.last_move);
    }
}
