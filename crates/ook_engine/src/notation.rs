//! Algebraic move notation
//!
//! ## Overview
//!
//! Translation between move text and engine values. Parsing is pure: it
//! turns a string into a [`ParsedMove`] without looking at any board, and
//! rejects anything that is not exactly one recognised shape. Resolving the
//! parsed move against a position is the game's job.
//!
//! ## Accepted shapes
//!
//! | Shape | Example |
//! |-------|---------|
//! | pawn push | `e4` |
//! | pawn capture | `exd5` |
//! | promotion | `e8=Q`, `bxa1=N` |
//! | piece move | `Nf3`, `Qxd7` |
//! | disambiguated piece move | `Rad1`, `N5xe4`, `Qh4e1` |
//! | castle | `O-O`, `O-O-O` (zeros accepted too) |
//!
//! A single trailing `+` or `#` is accepted and ignored.
//!
//! Formatting goes the other way: [`move_to_notation`] writes the shortest
//! unambiguous text for a move given the legal moves of the position it is
//! played from. Check markers are not written.

use std::fmt;

use crate::board::Board;
use crate::error::{ChessError, ChessResult};
use crate::types::*;

/// Origin hint used when several pieces could reach a square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    File(u8),
    Rank(u8),
    Square(Square),
}

impl Specifier {
    /// Whether a piece standing on `origin` fits this hint
    pub fn matches(self, origin: Square) -> bool {
        match self {
            Specifier::File(file) => origin.file() == file,
            Specifier::Rank(rank) => origin.rank() == rank,
            Specifier::Square(square) => origin == square,
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specifier::File(file) => write!(f, "{}", (b'a' + file) as char),
            Specifier::Rank(rank) => write!(f, "{}", (b'1' + rank) as char),
            Specifier::Square(square) => write!(f, "{}", square),
        }
    }
}

/// Move text broken into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedMove {
    Castle(CastleSide),
    Standard {
        /// `None` for pawns
        piece: Option<PieceKind>,
        specifier: Option<Specifier>,
        capture: bool,
        destination: Square,
        promotion: Option<PromotionKind>,
    },
}

impl ParsedMove {
    /// Kind of the moving piece (castles move the king)
    pub fn piece_kind(&self) -> PieceKind {
        match self {
            ParsedMove::Castle(_) => PieceKind::King,
            ParsedMove::Standard { piece, .. } => piece.unwrap_or(PieceKind::Pawn),
        }
    }
}

impl fmt::Display for ParsedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedMove::Castle(side) => write!(f, "{}", side.notation()),
            ParsedMove::Standard {
                piece,
                specifier,
                capture,
                destination,
                promotion,
            } => {
                if let Some(kind) = piece {
                    write!(f, "{}", kind.letter())?;
                }
                if let Some(specifier) = specifier {
                    write!(f, "{}", specifier)?;
                }
                if *capture {
                    write!(f, "x")?;
                }
                write!(f, "{}", destination)?;
                if let Some(promotion) = promotion {
                    write!(f, "={}", promotion.letter())?;
                }
                Ok(())
            }
        }
    }
}

impl std::str::FromStr for ParsedMove {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

/// Parse one move in algebraic notation
pub fn parse_move(input: &str) -> ChessResult<ParsedMove> {
    let text = input.trim();
    let body = text
        .strip_suffix(|c: char| c == '+' || c == '#')
        .unwrap_or(text);
    if body.is_empty() {
        return Err(ChessError::invalid_notation(input, "empty move"));
    }

    match body {
        "O-O" | "0-0" => return Ok(ParsedMove::Castle(CastleSide::KingSide)),
        "O-O-O" | "0-0-0" => return Ok(ParsedMove::Castle(CastleSide::QueenSide)),
        _ => {}
    }
    if !body.is_ascii() {
        return Err(ChessError::invalid_notation(input, "unexpected character"));
    }

    let mut rest = body;

    let piece = match rest.chars().next().and_then(piece_letter) {
        Some(kind) => {
            rest = &rest[1..];
            Some(kind)
        }
        None => None,
    };

    let mut promotion = None;
    if let Some((head, letter)) = rest.rsplit_once('=') {
        let mut letters = letter.chars();
        promotion = match (letters.next().and_then(PromotionKind::from_letter), letters.next()) {
            (Some(kind), None) => Some(kind),
            _ => return Err(ChessError::invalid_notation(input, "promotion must be one of N, B, R, Q")),
        };
        rest = head;
    }

    if rest.len() < 2 {
        return Err(ChessError::invalid_notation(input, "missing destination square"));
    }
    let (head, square) = rest.split_at(rest.len() - 2);
    let destination: Square = square
        .parse()
        .map_err(|_| ChessError::invalid_notation(input, "missing destination square"))?;
    rest = head;

    let capture = match rest.strip_suffix('x') {
        Some(head) => {
            rest = head;
            true
        }
        None => false,
    };

    let specifier = parse_specifier(input, rest)?;

    validate(input, piece, specifier, capture, destination, promotion)?;

    Ok(ParsedMove::Standard {
        piece,
        specifier,
        capture,
        destination,
        promotion,
    })
}

fn piece_letter(letter: char) -> Option<PieceKind> {
    match letter {
        'P' => None,
        other => PieceKind::from_letter(other),
    }
}

fn parse_specifier(input: &str, text: &str) -> ChessResult<Option<Specifier>> {
    let bytes = text.as_bytes();
    match bytes {
        [] => Ok(None),
        [c @ b'a'..=b'h'] => Ok(Some(Specifier::File(c - b'a'))),
        [c @ b'1'..=b'8'] => Ok(Some(Specifier::Rank(c - b'1'))),
        [_, _] => text
            .parse()
            .map(|square| Some(Specifier::Square(square)))
            .map_err(|_| ChessError::invalid_notation(input, "unrecognised origin hint")),
        _ => Err(ChessError::invalid_notation(input, "unrecognised origin hint")),
    }
}

fn validate(
    input: &str,
    piece: Option<PieceKind>,
    specifier: Option<Specifier>,
    capture: bool,
    destination: Square,
    promotion: Option<PromotionKind>,
) -> ChessResult<()> {
    if piece.is_none() {
        if capture && specifier.is_none() {
            return Err(ChessError::invalid_notation(input, "pawn capture must name the origin file"));
        }
        if let Some(specifier) = specifier {
            if !capture {
                return Err(ChessError::invalid_notation(input, "origin hint without a piece or capture"));
            }
            if !matches!(specifier, Specifier::File(_)) {
                return Err(ChessError::invalid_notation(input, "pawn capture must name the origin file"));
            }
        }
    }

    if promotion.is_some() {
        if piece.is_some() {
            return Err(ChessError::invalid_notation(input, "only pawns promote"));
        }
        if destination.rank() != 0 && destination.rank() != 7 {
            return Err(ChessError::invalid_notation(input, "promotion must land on the first or last rank"));
        }
    }
    Ok(())
}

/// Shortest unambiguous notation of a move
///
/// # Arguments
///
/// * `board` - Position the move is played from (before it is made)
/// * `mv` - The move to describe
/// * `legal` - Legal moves of the mover's side in that position
pub fn move_to_notation(board: &Board, mv: &Move, legal: &[Move]) -> String {
    if let Some(side) = mv.castle {
        return side.notation().to_string();
    }

    let kind = match board.get(mv.piece) {
        Some(piece) => piece.kind(),
        None => return mv.to_string(),
    };
    let mut out = String::with_capacity(8);

    if kind == PieceKind::Pawn {
        if mv.is_capture() {
            out.push(mv.origin.file_char());
            out.push('x');
        }
        out.push_str(&mv.destination.to_string());
        if let Some(promotion) = mv.promotion {
            out.push('=');
            out.push(promotion.letter());
        }
        return out;
    }

    out.push(kind.letter());

    let rivals: Vec<Square> = legal
        .iter()
        .filter(|other| {
            other.piece != mv.piece
                && other.destination == mv.destination
                && other.castle.is_none()
                && board.piece(other.piece).kind() == kind
        })
        .map(|other| other.origin)
        .collect();

    if !rivals.is_empty() {
        if rivals.iter().all(|origin| origin.file() != mv.origin.file()) {
            out.push(mv.origin.file_char());
        } else if rivals.iter().all(|origin| origin.rank() != mv.origin.rank()) {
            out.push(mv.origin.rank_char());
        } else {
            out.push_str(&mv.origin.to_string());
        }
    }

    if mv.is_capture() {
        out.push('x');
    }
    out.push_str(&mv.destination.to_string());
    out
}
