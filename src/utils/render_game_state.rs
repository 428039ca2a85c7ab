//! Terminal-oriented board renderer.
//!
//! Draws the grid with rank 8 at the top, marking the selected square and
//! the candidate destinations of the current selection.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveMap;
use crate::utils::fen_generator::piece_to_fen_char;

/// Render the board for terminal output.
///
/// Each cell is a marker column followed by the piece glyph: `>` for the
/// selected square, `*` for a candidate destination. Empty cells show `·`
/// in Unicode mode and `.` in ASCII mode, where pieces use FEN letters.
pub fn render_board(
    board: &Board,
    selected: Option<Square>,
    candidates: Option<&MoveMap>,
    unicode: bool,
) -> String {
    let mut out = String::new();

    out.push_str("   a b c d e f g h\n");

    for rank in 0..8u8 {
        let label = char::from(b'8' - rank);
        out.push(label);
        out.push(' ');

        for file in 0..8u8 {
            let square = Square::at(rank, file);
            let marker = if selected == Some(square) {
                '>'
            } else if candidates.is_some_and(|moves| moves.contains_key(&square)) {
                '*'
            } else {
                ' '
            };
            out.push(marker);

            let glyph = match board.piece_at(square) {
                Some(piece) if unicode => piece_to_unicode(piece.color, piece.kind),
                Some(piece) => piece_to_fen_char(piece.color, piece.kind),
                None if unicode => '·',
                None => '.',
            };
            out.push(glyph);
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("   a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
