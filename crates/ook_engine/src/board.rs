//! Board state: the 8x8 grid, the piece arena and the team collections
//!
//! The grid stores [`PieceId`]s, the arena stores the [`Piece`] records and
//! each team keeps an ordered list of its live pieces. Outside an in-flight
//! make/unmake the three views agree:
//!
//! - every live piece occupies exactly one cell and that cell holds its id
//! - every live piece appears in exactly one team collection
//! - `piece.location` is the cell holding it
//!
//! Captured pieces drop out of the grid and their team collection but keep
//! their arena record, which is what lets an unmake restore the same piece.

use std::fmt;

use crate::constants::*;
use crate::error::{ChessError, ChessResult};
use crate::types::*;

/// Mutable board state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceId>; BOARD_CELLS],
    pieces: Vec<Piece>,
    teams: [Vec<PieceId>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl Board {
    /// A board with no pieces on it
    pub fn empty() -> Self {
        Board {
            cells: [None; BOARD_CELLS],
            pieces: Vec::with_capacity(32),
            teams: [Vec::with_capacity(16), Vec::with_capacity(16)],
        }
    }

    /// Standard starting position
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for team in Team::ALL {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                board.put(team, *kind, file as u8, team.home_rank());
            }
            for file in 0..BOARD_SIZE as u8 {
                board.put(team, PieceKind::Pawn, file, team.pawn_rank());
            }
        }
        board
    }

    /// Build a custom position from `(team, kind, "square")` triples
    ///
    /// Every piece starts with a move count of zero; use
    /// [`Board::set_move_count`] to mark pieces as moved.
    pub fn from_pieces(pieces: &[(Team, PieceKind, &str)]) -> ChessResult<Board> {
        let mut board = Board::empty();
        for (team, kind, square) in pieces {
            board.place(*team, *kind, square.parse()?)?;
        }
        Ok(board)
    }

    // Setup helper for squares known to be on the board and empty
    fn put(&mut self, team: Team, kind: PieceKind, file: u8, rank: u8) {
        if let Some(square) = Square::new(file, rank) {
            let _ = self.place(team, kind, square);
        }
    }

    /// Add a new piece on an empty square
    pub fn place(&mut self, team: Team, kind: PieceKind, square: Square) -> ChessResult<PieceId> {
        if let Some(occupant) = self.cells[square.index()] {
            return Err(ChessError::InternalInconsistency {
                message: format!("{} is already occupied by {}", square, occupant),
            });
        }
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Piece {
            id,
            team,
            kind,
            location: square,
            move_count: 0,
        });
        self.cells[square.index()] = Some(id);
        self.teams[team.index()].push(id);
        Ok(id)
    }

    /// Override a piece's move counter (position setup only)
    pub fn set_move_count(&mut self, id: PieceId, count: u32) -> ChessResult<()> {
        let piece = self.pieces.get_mut(id.index()).ok_or_else(|| ChessError::InternalInconsistency {
            message: format!("{} does not belong to this board", id),
        })?;
        piece.move_count = count;
        Ok(())
    }

    /// Arena record of a piece, live or captured
    ///
    /// Panics if `id` was not issued by this board; use [`Board::get`] for
    /// ids of unknown origin.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Arena record of a piece, `None` for an id this board never issued
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    #[inline]
    pub fn id_at(&self, square: Square) -> Option<PieceId> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.id_at(square).map(|id| self.piece(id))
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    #[inline]
    pub fn team_at(&self, square: Square) -> Option<Team> {
        self.piece_at(square).map(|piece| piece.team)
    }

    /// Ids of a team's pieces still in play
    #[inline]
    pub fn team_pieces(&self, team: Team) -> &[PieceId] {
        &self.teams[team.index()]
    }

    /// Records of a team's pieces still in play
    pub fn pieces(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.teams[team.index()].iter().map(move |id| self.piece(*id))
    }

    /// Whether the piece is still on the board
    pub fn is_live(&self, id: PieceId) -> bool {
        self.pieces
            .get(id.index())
            .is_some_and(|piece| self.cells[piece.location.index()] == Some(id))
    }

    pub fn king(&self, team: Team) -> Option<&Piece> {
        self.pieces(team).find(|piece| piece.kind == PieceKind::King)
    }

    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.king(team).map(|king| king.location)
    }

    /// Number of live pieces of a kind
    pub fn count(&self, team: Team, kind: PieceKind) -> usize {
        self.pieces(team).filter(|piece| piece.kind == kind).count()
    }

    pub fn move_count(&self, id: PieceId) -> u32 {
        self.piece(id).move_count
    }

    /// Check the grid, arena and team collections agree
    pub fn validate(&self) -> ChessResult<()> {
        let mut seen = 0usize;
        for team in Team::ALL {
            for id in self.team_pieces(team) {
                let piece = self.piece(*id);
                if piece.team != team {
                    return Err(ChessError::InternalInconsistency {
                        message: format!("{} listed under {} but belongs to {}", id, team, piece.team),
                    });
                }
                if self.cells[piece.location.index()] != Some(*id) {
                    return Err(ChessError::InternalInconsistency {
                        message: format!("{} records {} but the cell disagrees", id, piece.location),
                    });
                }
                seen += 1;
            }
        }
        let occupied = self.cells.iter().filter(|cell| cell.is_some()).count();
        if occupied != seen {
            return Err(ChessError::InternalInconsistency {
                message: format!("{} occupied cells but {} live pieces", occupied, seen),
            });
        }
        for team in Team::ALL {
            if self.count(team, PieceKind::King) != 1 {
                return Err(ChessError::InternalInconsistency {
                    message: format!("{} must have exactly one king", team),
                });
            }
        }
        Ok(())
    }

    /// Piece placement field in FEN order (rank 8 first)
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0..BOARD_SIZE as u8).rev() {
            let mut empty = 0;
            for file in 0..BOARD_SIZE as u8 {
                match Square::new(file, rank).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }

    // --- Raw mutation used by make/unmake. These do not keep the invariants on
    // their own; callers pair them so the board is consistent again on return.

    /// Move a piece's cell and location without touching its move count
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) {
        let from = self.pieces[id.index()].location;
        if self.cells[from.index()] == Some(id) {
            self.cells[from.index()] = None;
        }
        self.cells[to.index()] = Some(id);
        self.pieces[id.index()].location = to;
    }

    /// Take a piece out of play, returning its position in the team collection
    pub(crate) fn take(&mut self, id: PieceId) -> Option<usize> {
        let piece = &self.pieces[id.index()];
        let (team, location) = (piece.team, piece.location);
        if self.cells[location.index()] == Some(id) {
            self.cells[location.index()] = None;
        }
        let collection = &mut self.teams[team.index()];
        let index = collection.iter().position(|other| *other == id)?;
        collection.remove(index);
        Some(index)
    }

    /// Put a taken piece back on its recorded square and collection slot
    pub(crate) fn restore(&mut self, id: PieceId, index: usize) {
        let piece = &self.pieces[id.index()];
        let (team, location) = (piece.team, piece.location);
        self.cells[location.index()] = Some(id);
        let collection = &mut self.teams[team.index()];
        let index = index.min(collection.len());
        collection.insert(index, id);
    }

    pub(crate) fn set_kind(&mut self, id: PieceId, kind: PieceKind) {
        self.pieces[id.index()].kind = kind;
    }

    pub(crate) fn increment_move_count(&mut self, id: PieceId) {
        self.pieces[id.index()].move_count += 1;
    }

    pub(crate) fn decrement_move_count(&mut self, id: PieceId) {
        let piece = &mut self.pieces[id.index()];
        piece.move_count = piece.move_count.saturating_sub(1);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE as u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..BOARD_SIZE as u8 {
                let symbol = Square::new(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |piece| piece.symbol());
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
