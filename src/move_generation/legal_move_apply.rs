//! Board mutations under the trial/rollback protocol.
//!
//! Every operation snapshots the cells it touches, applies the change to the
//! grid, and asks whether the mover's own king is now attacked. If it is, the
//! snapshot is restored and `IllegalMove::LeavesKingInCheck` is returned;
//! otherwise piece metadata (`has_moved`, and the kind on promotion) is
//! finalized. An `Err` from any function here means the board is unchanged.

use tracing::{debug, trace};

use crate::chess_errors::IllegalMove;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::king_moves::castling_rook_squares;

/// Quiet move onto an empty square.
pub fn move_piece(
    board: &mut Board,
    from: Square,
    to: Square,
    last_move: Option<Square>,
) -> Result<(), IllegalMove> {
    let mover = piece_on(board, from)?;
    if !board.is_empty(to) {
        return Err(IllegalMove::DestinationOccupied(to));
    }

    let undo = UndoState::capture(board, &[from, to]);
    let occupant = board.take(from);
    board.set(to, occupant);
    commit_trial(board, undo, mover.color, last_move)?;

    mark_moved(board, to);
    Ok(())
}

/// Move onto a square held by an opposing piece, removing it.
pub fn capture_piece(
    board: &mut Board,
    from: Square,
    to: Square,
    last_move: Option<Square>,
) -> Result<(), IllegalMove> {
    let mover = piece_on(board, from)?;
    check_capture_target(board, mover, to)?;

    let undo = UndoState::capture(board, &[from, to]);
    let occupant = board.take(from);
    board.set(to, occupant);
    commit_trial(board, undo, mover.color, last_move)?;

    mark_moved(board, to);
    Ok(())
}

#[inline]
pub fn short_castle(
    board: &mut Board,
    king_from: Square,
    last_move: Option<Square>,
) -> Result<(), IllegalMove> {
    castle(board, king_from, CastleSide::Short, last_move)
}

#[inline]
pub fn long_castle(
    board: &mut Board,
    king_from: Square,
    last_move: Option<Square>,
) -> Result<(), IllegalMove> {
    castle(board, king_from, CastleSide::Long, last_move)
}

/// Moves the king two files toward `side` and the rook onto the square the
/// king passed over.
pub fn castle(
    board: &mut Board,
    king_from: Square,
    side: CastleSide,
    last_move: Option<Square>,
) -> Result<(), IllegalMove> {
    let king = piece_on(board, king_from)?;
    let (rook_from, rook_to) =
        castling_rook_squares(king_from, side).ok_or(IllegalMove::MissingCastleRook(king_from))?;
    let king_to = king_from
        .offset(0, 2 * side.step())
        .ok_or(IllegalMove::MissingCastleRook(king_from))?;

    let rook_present = board
        .piece_at(rook_from)
        .is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        });
    if !rook_present {
        return Err(IllegalMove::MissingCastleRook(king_from));
    }
    if !board.is_empty(king_to) {
        return Err(IllegalMove::DestinationOccupied(king_to));
    }
    if !board.is_empty(rook_to) {
        return Err(IllegalMove::DestinationOccupied(rook_to));
    }

    let undo = UndoState::capture(board, &[king_from, king_to, rook_from, rook_to]);
    let king_occupant = board.take(king_from);
    board.set(king_to, king_occupant);
    let rook_occupant = board.take(rook_from);
    board.set(rook_to, rook_occupant);
    commit_trial(board, undo, king.color, last_move)?;

    mark_moved(board, king_to);
    mark_moved(board, rook_to);
    Ok(())
}

/// Diagonal pawn move onto an empty square, removing the opposing pawn that
/// stands beside the origin on the destination file.
pub fn en_passant(
    board: &mut Board,
    from: Square,
    to: Square,
    last_move: Option<Square>,
) -> Result<(), IllegalMove> {
    let pawn = piece_on(board, from)?;
    if !board.is_empty(to) {
        return Err(IllegalMove::DestinationOccupied(to));
    }
    let victim_square = Square::at(from.rank(), to.file());
    let victim_ok = board
        .piece_at(victim_square)
        .is_some_and(|victim| victim.kind == PieceKind::Pawn && victim.color != pawn.color);
    if !victim_ok {
        return Err(IllegalMove::NoEnPassantVictim(from));
    }

    let undo = UndoState::capture(board, &[from, to, victim_square]);
    let occupant = board.take(from);
    board.set(to, occupant);
    board.take(victim_square);
    commit_trial(board, undo, pawn.color, last_move)?;

    mark_moved(board, to);
    Ok(())
}

/// Pawn advance or capture onto the farthest rank, turning into `kind`.
pub fn promote(
    board: &mut Board,
    from: Square,
    to: Square,
    kind: PieceKind,
    last_move: Option<Square>,
) -> Result<(), IllegalMove> {
    if !kind.is_promotion_choice() {
        return Err(IllegalMove::InvalidPromotion(kind));
    }
    let pawn = piece_on(board, from)?;
    if let Occupant::Occupied(target) = board.occupant(to) {
        if target.color == pawn.color {
            return Err(IllegalMove::OwnPieceOnTarget(to));
        }
    }

    let undo = UndoState::capture(board, &[from, to]);
    let occupant = board.take(from);
    board.set(to, occupant);
    commit_trial(board, undo, pawn.color, last_move)?;

    if let Some(mut promoted) = board.piece_at(to) {
        promoted.kind = kind;
        promoted.has_moved = true;
        board.place(to, promoted);
    }
    Ok(())
}

fn piece_on(board: &Board, square: Square) -> Result<Piece, IllegalMove> {
    board
        .piece_at(square)
        .ok_or(IllegalMove::EmptyOrigin(square))
}

fn check_capture_target(board: &Board, mover: Piece, to: Square) -> Result<(), IllegalMove> {
    match board.occupant(to) {
        Occupant::Empty => Err(IllegalMove::NothingToCapture(to)),
        Occupant::Occupied(target) if target.color == mover.color => {
            Err(IllegalMove::OwnPieceOnTarget(to))
        }
        Occupant::Occupied(_) => Ok(()),
    }
}

/// Keeps the speculative change when `mover` is not in check, otherwise
/// restores the snapshot.
fn commit_trial(
    board: &mut Board,
    undo: UndoState,
    mover: Color,
    last_move: Option<Square>,
) -> Result<(), IllegalMove> {
    if is_in_check(board, mover, last_move) {
        debug!(
            squares = ?undo.squares().collect::<Vec<_>>(),
            %mover,
            "trial leaves own king in check, rolling back"
        );
        undo.restore(board);
        return Err(IllegalMove::LeavesKingInCheck(mover));
    }
    trace!(%mover, "trial accepted");
    Ok(())
}

fn mark_moved(board: &mut Board, square: Square) {
    if let Some(piece) = board.piece_at(square) {
        board.place(square, piece.moved());
    }
}
