//! # Core Types - Teams, Pieces, Squares and Moves
//!
//! ## Overview
//!
//! These are the value types every other module passes around. They are all
//! small and `Copy`, so move generation can build and discard thousands of
//! them per search without allocation beyond the `Vec` that collects them.
//!
//! ## Coordinates
//!
//! A [`Square`] is a (file, rank) pair with both components in `0..8`.
//! File 0 is the a-file, rank 0 is White's back rank, so "e4" is
//! `(4, 3)`. Squares are only constructed through checked paths
//! ([`Square::new`], [`Square::offset`], [`str::parse`]), which makes an
//! out-of-bounds square unrepresentable.
//!
//! ## Piece Identity
//!
//! Pieces live in an arena owned by the [`Board`](crate::board::Board) and are
//! addressed by [`PieceId`]. Identity survives everything a piece goes
//! through: moving, being captured and restored during search, and
//! promotion (which changes `kind` in place). En passant and undo both rely
//! on comparing ids, never on comparing cell contents.
//!
//! ## Moves
//!
//! A [`Move`] is produced fully populated by the generator. For en passant
//! `captured_square` differs from `destination`; for castling `castle` names
//! the side and the rook is relocated by the same make step as the king.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ChessError;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    pub fn opposite(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank delta of a pawn push
    pub fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank holding the king and rooks at setup
    pub fn home_rank(self) -> u8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }

    /// Rank holding the pawns at setup
    pub fn pawn_rank(self) -> u8 {
        match self {
            Team::White => 1,
            Team::Black => 6,
        }
    }

    /// Rank a pawn promotes on
    pub fn promotion_rank(self) -> u8 {
        match self {
            Team::White => 7,
            Team::Black => 0,
        }
    }

    /// Rank a pawn must stand on to capture en passant
    pub fn en_passant_rank(self) -> u8 {
        match self {
            Team::White => 4,
            Team::Black => 3,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used in notation (`P` for pawns)
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a notation letter. Pawns have no letter in move text, so `P` is
    /// accepted here only for board diagrams.
    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Material value in centipawns
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }
}

/// The four kinds a pawn may promote to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionKind {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionKind {
    /// Queen first so generated promotions are already roughly ordered
    pub const ALL: [PromotionKind; 4] = [
        PromotionKind::Queen,
        PromotionKind::Rook,
        PromotionKind::Bishop,
        PromotionKind::Knight,
    ];

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionKind::Knight => PieceKind::Knight,
            PromotionKind::Bishop => PieceKind::Bishop,
            PromotionKind::Rook => PieceKind::Rook,
            PromotionKind::Queen => PieceKind::Queen,
        }
    }

    pub fn letter(self) -> char {
        self.kind().letter()
    }

    pub fn from_letter(letter: char) -> Option<PromotionKind> {
        match letter {
            'N' => Some(PromotionKind::Knight),
            'B' => Some(PromotionKind::Bishop),
            'R' => Some(PromotionKind::Rook),
            'Q' => Some(PromotionKind::Queen),
            _ => None,
        }
    }
}

/// Direction of a castling move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File delta of the king's step (+1 toward h, -1 toward a)
    pub fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// File of the rook that takes part in this castle
    pub fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on
    pub fn king_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on
    pub fn rook_destination_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    pub fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        }
    }
}

/// A board coordinate, always in bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square, returning `None` outside the board
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if (file as usize) < BOARD_SIZE && (rank as usize) < BOARD_SIZE {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Square from a linear index (rank * 8 + file)
    pub fn from_index(index: usize) -> Option<Square> {
        if index < BOARD_CELLS {
            Some(Square {
                file: (index % BOARD_SIZE) as u8,
                rank: (index / BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn index(self) -> usize {
        self.rank as usize * BOARD_SIZE + self.file as usize
    }

    /// Step by a (file, rank) delta, `None` if that leaves the board
    #[inline]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, a1 first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_CELLS).filter_map(Square::from_index)
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::invalid_notation(s, "square must be two characters"));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::new(file, rank)
            .ok_or_else(|| ChessError::invalid_notation(s, "square outside a1-h8"))
    }
}

/// Stable handle of a piece inside a board's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece record as stored in the board's arena
///
/// Captured pieces keep their record (with their last location) so that an
/// unmake can put the very same piece back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) team: Team,
    pub(crate) kind: PieceKind,
    pub(crate) location: Square,
    pub(crate) move_count: u32,
}

impl Piece {
    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn location(&self) -> Square {
        self.location
    }

    /// Number of moves this piece has made (castling and en passant depend on it)
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Diagram character: upper case for White, lower case for Black
    pub fn symbol(&self) -> char {
        let letter = self.kind.letter();
        match self.team {
            Team::White => letter,
            Team::Black => letter.to_ascii_lowercase(),
        }
    }
}

/// A fully described pseudo-legal move
///
/// Produced by the generator; never edited afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub origin: Square,
    pub destination: Square,
    pub captured: Option<PieceId>,
    /// Where the captured piece stood; differs from `destination` for en passant
    pub captured_square: Option<Square>,
    pub promotion: Option<PromotionKind>,
    pub castle: Option<CastleSide>,
}

impl Move {
    /// A move onto an empty square
    pub fn quiet(piece: PieceId, origin: Square, destination: Square) -> Self {
        Move {
            piece,
            origin,
            destination,
            captured: None,
            captured_square: None,
            promotion: None,
            castle: None,
        }
    }

    /// A capture of `victim` standing on `victim_square`
    pub fn capture(
        piece: PieceId,
        origin: Square,
        destination: Square,
        victim: PieceId,
        victim_square: Square,
    ) -> Self {
        Move {
            piece,
            origin,
            destination,
            captured: Some(victim),
            captured_square: Some(victim_square),
            promotion: None,
            castle: None,
        }
    }

    pub fn with_promotion(mut self, promotion: PromotionKind) -> Self {
        self.promotion = Some(promotion);
        self
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured_square, Some(square) if square != self.destination)
    }

    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
