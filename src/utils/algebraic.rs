//! Square name conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and grid squares.
//! Rank 8 is grid row 0, so `a8` is `(0, 0)` and `h1` is `(7, 7)`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert a square name (for example: "e4") to a grid square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Square::at(b'8' - rank, file - b'a'))
}

/// Convert a pair of grid indices to a square.
#[inline]
pub fn indices_to_square(rank: u8, file: u8) -> Result<Square, ChessErrors> {
    Square::new(rank, file).ok_or(ChessErrors::InvalidFileOrRank(rank, file))
}

/// Reads a square typed at the console: either a name such as `e2` or a
/// `rank file` index pair such as `6 4`.
pub fn parse_square_input(input: &str) -> Result<Square, ChessErrors> {
    let trimmed = input.trim();
    let mut fields = trimmed.split_whitespace();

    match (fields.next(), fields.next(), fields.next()) {
        (Some(name), None, None) => algebraic_to_square(name),
        (Some(rank), Some(file), None) => {
            let invalid = || ChessErrors::InvalidAlgebraicString(trimmed.to_owned());
            let rank = rank.parse::<u8>().map_err(|_| invalid())?;
            let file = file.parse::<u8>().map_err(|_| invalid())?;
            indices_to_square(rank, file)
        }
        _ => Err(ChessErrors::InvalidAlgebraicString(trimmed.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_map_to_grid_corners() {
        assert_eq!(
            algebraic_to_square("a8").expect("a8 should parse"),
            Square::at(0, 0)
        );
        assert_eq!(
            algebraic_to_square("h1").expect("h1 should parse"),
            Square::at(7, 7)
        );
        assert_eq!(
            algebraic_to_square("e2").expect("e2 should parse"),
            Square::at(6, 4)
        );
        assert_eq!(
            algebraic_to_square(&Square::at(7, 0).to_string()).expect("a1 should parse"),
            Square::at(7, 0)
        );
    }

    #[test]
    fn invalid_names_are_rejected() {
        for bad in ["", "e", "e9", "i1", "e22", "4e"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidAlgebraicString(bad.to_owned()))
            );
        }
    }

    #[test]
    fn console_input_accepts_names_and_index_pairs() {
        assert_eq!(
            parse_square_input(" e2\n").expect("name should parse"),
            Square::at(6, 4)
        );
        assert_eq!(
            parse_square_input("6 4").expect("index pair should parse"),
            Square::at(6, 4)
        );
        assert_eq!(
            parse_square_input("8 0"),
            Err(ChessErrors::InvalidFileOrRank(8, 0))
        );
        assert!(parse_square_input("6 x").is_err());
        assert!(parse_square_input("1 2 3").is_err());
    }
}
