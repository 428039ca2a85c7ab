use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Piece-placement field of a FEN string, grid row 0 first.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..8u8 {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at(Square::at(rank, file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece.color, piece.kind));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 7 {
            out.push('/');
        }
    }

    out
}

pub(crate) fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_PLACEMENT;

    #[test]
    fn new_game_generates_starting_placement() {
        assert_eq!(generate_placement(&Board::new_game()), STARTING_PLACEMENT);
    }

    #[test]
    fn empty_runs_are_collapsed() {
        let mut board = Board::empty();
        board.place(Square::at(0, 6), Piece::new(PieceKind::King, Color::Dark));
        board.place(Square::at(7, 0), Piece::new(PieceKind::Rook, Color::Light));
        board.place(Square::at(7, 4), Piece::new(PieceKind::King, Color::Light));
        assert_eq!(board.placement(), "6k1/8/8/8/8/8/8/R3K3");
    }
}
