//! The 8x8 grid of occupants.
//!
//! `Board` is the single source of truth for piece placement. Pieces are only
//! referred to by the square that owns them; nothing outside the grid keeps a
//! handle to a piece across mutations.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::parse_placement;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    grid: [[Occupant; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Board with the standard starting layout.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for color in [Color::Light, Color::Dark] {
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.grid[color.back_rank() as usize][file] =
                    Occupant::Occupied(Piece::new(*kind, color));
            }
            for file in 0..8 {
                board.grid[color.pawn_rank() as usize][file] =
                    Occupant::Occupied(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn from_placement(placement: &str) -> Result<Self, ChessErrors> {
        parse_placement(placement)
    }

    #[inline]
    pub fn placement(&self) -> String {
        generate_placement(self)
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Occupant {
        self.grid[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.occupant(square).piece()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_empty()
    }

    /// Overwrites a cell. Used for position setup and by the trial protocol.
    #[inline]
    pub fn set(&mut self, square: Square, occupant: Occupant) {
        self.grid[square.rank() as usize][square.file() as usize] = occupant;
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.set(square, Occupant::Occupied(piece));
    }

    /// Empties a cell, returning what stood there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Occupant {
        let occupant = self.occupant(square);
        self.set(square, Occupant::Empty);
        occupant
    }

    /// Every piece of `color` with its square, rank by rank from the top.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.occupant(square) {
            Occupant::Occupied(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_thirty_two_pieces() {
        let board = Board::new_game();
        assert_eq!(board.pieces(Color::Light).count(), 16);
        assert_eq!(board.pieces(Color::Dark).count(), 16);
        assert!(board.pieces(Color::Light).all(|(_, piece)| !piece.has_moved));
    }

    #[test]
    fn kings_start_on_the_e_file() {
        let board = Board::new_game();
        assert_eq!(board.king_square(Color::Light), Some(Square::at(7, 4)));
        assert_eq!(board.king_square(Color::Dark), Some(Square::at(0, 4)));
    }

    #[test]
    fn light_pawns_start_on_rank_six() {
        let board = Board::new_game();
        for file in 0..8 {
            let piece = board
                .piece_at(Square::at(6, file))
                .expect("pawn should stand on its starting square");
            assert_eq!(piece, Piece::new(PieceKind::Pawn, Color::Light));
        }
        assert!(board.is_empty(Square::at(4, 4)));
    }

    #[test]
    fn take_leaves_cell_empty() {
        let mut board = Board::new_game();
        let taken = board.take(Square::at(0, 0));
        assert_eq!(taken.piece().map(|p| p.kind), Some(PieceKind::Rook));
        assert!(board.is_empty(Square::at(0, 0)));
    }

    #[test]
    fn new_game_matches_starting_placement() {
        let parsed = Board::from_placement(crate::game_state::chess_rules::STARTING_PLACEMENT)
            .expect("starting placement should parse");
        assert_eq!(parsed, Board::new_game());
    }
}
