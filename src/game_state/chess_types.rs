//! Core value types shared by the board, the move generators and the turn
//! controller.
//!
//! Squares are addressed as `(rank, file)` pairs with rank 0 at the top of the
//! board (the dark back rank) and file 0 on the left (the `a` file). Light
//! pawns therefore advance toward rank 0 and dark pawns toward rank 7.

use std::fmt;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Rank holding this side's king and rooks at the start of a game.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// The farthest rank for this side's pawns.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may turn into on the farthest rank.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A `(rank, file)` pair, both in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// Builds a square from coordinates known to be on the board.
    ///
    /// Panics when either coordinate is out of range; meant for constants and
    /// tests.
    pub const fn at(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8, "square coordinates must be in 0..=7");
        Self { rank, file }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// The square `d_rank` ranks and `d_file` files away, if it is on the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, rank by rank from the top.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'8' - self.rank)
        )
    }
}

/// A piece standing on the grid. Its square is the grid cell that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Set on the first successful move and never cleared.
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }
}

/// Content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Occupant {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(piece) => Some(piece.color),
        }
    }

    /// True when the cell holds a piece of the side opposing `color`.
    #[inline]
    pub fn is_enemy_of(self, color: Color) -> bool {
        self.color() == Some(color.opposite())
    }
}

impl From<Piece> for Occupant {
    fn from(piece: Piece) -> Self {
        Occupant::Occupied(piece)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the `h` file.
    Short,
    /// Toward the `a` file.
    Long,
}

impl CastleSide {
    /// File delta of one king step toward the castling rook.
    #[inline]
    pub const fn step(self) -> i8 {
        match self {
            CastleSide::Short => 1,
            CastleSide::Long => -1,
        }
    }

    /// File offset of the castling rook from the unmoved king.
    #[inline]
    pub const fn rook_offset(self) -> i8 {
        match self {
            CastleSide::Short => 3,
            CastleSide::Long => -4,
        }
    }
}
