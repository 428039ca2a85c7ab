//! Placement-string parser.
//!
//! Reads the piece-placement field of a FEN string into a `Board`. The first
//! rank in the string is grid row 0. Castling rights and the other FEN fields
//! are not part of the model, so movement history is inferred: a pawn off
//! its starting rank has moved, every other piece is taken as unmoved.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    // Tolerate a full FEN string by reading only its first field.
    let board_part = placement
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessErrors::InvalidPlacementForm("empty placement".to_owned()))?;

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidPlacementForm(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();

    for (rank, rank_str) in (0u8..).zip(ranks.iter()) {
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPlacementToken(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(too_wide(rank_str));
                }
                continue;
            }

            let (color, kind) =
                piece_from_fen_char(ch).ok_or(ChessErrors::InvalidPlacementToken(ch))?;

            let square = Square::new(rank, file).ok_or_else(|| too_wide(rank_str))?;
            let mut piece = Piece::new(kind, color);
            if kind == PieceKind::Pawn && rank != color.pawn_rank() {
                piece = piece.moved();
            }
            board.place(square, piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidPlacementForm(format!(
                "rank '{rank_str}' does not cover 8 files"
            )));
        }
    }

    Ok(board)
}

fn too_wide(rank_str: &str) -> ChessErrors {
    ChessErrors::InvalidPlacementForm(format!("rank '{rank_str}' has too many files"))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_PLACEMENT;

    #[test]
    fn starting_placement_matches_new_game() {
        let board = parse_placement(STARTING_PLACEMENT).expect("starting placement should parse");
        assert_eq!(board, Board::new_game());
    }

    #[test]
    fn full_fen_string_is_accepted() {
        let board = parse_placement("8/8/8/8/4P3/8/8/4K2k b - e3 0 1")
            .expect("full FEN should parse");
        let pawn = board
            .piece_at(Square::at(4, 4))
            .expect("pawn should sit on e4");
        assert_eq!((pawn.kind, pawn.color), (PieceKind::Pawn, Color::Light));
        assert!(pawn.has_moved);
        assert_eq!(
            board.piece_at(Square::at(7, 7)).map(|p| p.color),
            Some(Color::Dark)
        );
    }

    #[test]
    fn pawns_on_start_rank_and_other_pieces_are_unmoved() {
        let board = parse_placement("r3k2r/p7/8/8/8/8/7P/R3K2R").expect("placement should parse");
        for (_, piece) in board.pieces(Color::Light).chain(board.pieces(Color::Dark)) {
            assert!(!piece.has_moved, "{piece:?} should be unmoved");
        }
    }

    #[test]
    fn malformed_placements_are_rejected() {
        assert!(matches!(
            parse_placement("8/8/8"),
            Err(ChessErrors::InvalidPlacementForm(_))
        ));
        assert!(matches!(
            parse_placement("9/8/8/8/8/8/8/8"),
            Err(ChessErrors::InvalidPlacementToken('9'))
        ));
        assert!(matches!(
            parse_placement("8/8/8/8/8/8/8/7X"),
            Err(ChessErrors::InvalidPlacementToken('X'))
        ));
        assert!(matches!(
            parse_placement("8/8/8/8/8/8/8/7"),
            Err(ChessErrors::InvalidPlacementForm(_))
        ));
        assert!(matches!(
            parse_placement("8/8/8/8/8/8/8/pppppppp1"),
            Err(ChessErrors::InvalidPlacementForm(_))
        ));
        assert!(parse_placement("").is_err());
    }
}
