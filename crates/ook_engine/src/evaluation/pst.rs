//! Piece-square tables
//!
//! Positional bonuses in centipawns, written from White's point of view with
//! rank 1 on the first line (index = rank * 8 + file). Black pieces read the
//! same tables with the rank mirrored.

use crate::constants::BOARD_SIZE;
use crate::types::*;

#[rustfmt::skip]
const PAWN: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -10,  5,  5,  5,  5,  5,  0,-10,
     0,  0,  5,  5,  5,  5,  0, -5,
    -5,  0,  5,  5,  5,  5,  0, -5,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MIDDLEGAME: [i32; 64] = [
    20, 30, 10,  0,  0, 10, 30, 20,
    20, 20,  0,  0,  0,  0, 20, 20,
   -10,-20,-20,-20,-20,-20,-20,-10,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
];

#[rustfmt::skip]
const KING_ENDGAME: [i32; 64] = [
   -50,-30,-30,-30,-30,-30,-30,-50,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -50,-40,-30,-20,-20,-30,-40,-50,
];

/// One 64-entry table per piece kind, plus a second king table for endgames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSquareTables {
    pub pawn: [i32; 64],
    pub knight: [i32; 64],
    pub bishop: [i32; 64],
    pub rook: [i32; 64],
    pub queen: [i32; 64],
    pub king_middlegame: [i32; 64],
    pub king_endgame: [i32; 64],
}

impl Default for PieceSquareTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl PieceSquareTables {
    pub fn standard() -> Self {
        Self {
            pawn: PAWN,
            knight: KNIGHT,
            bishop: BISHOP,
            rook: ROOK,
            queen: QUEEN,
            king_middlegame: KING_MIDDLEGAME,
            king_endgame: KING_ENDGAME,
        }
    }

    /// Tables that contribute nothing, leaving a material-only evaluation
    pub fn zeroed() -> Self {
        Self {
            pawn: [0; 64],
            knight: [0; 64],
            bishop: [0; 64],
            rook: [0; 64],
            queen: [0; 64],
            king_middlegame: [0; 64],
            king_endgame: [0; 64],
        }
    }

    /// Bonus for a piece of `team` and `kind` standing on `square`
    pub fn value(&self, team: Team, kind: PieceKind, square: Square, endgame: bool) -> i32 {
        let table = match kind {
            PieceKind::Pawn => &self.pawn,
            PieceKind::Knight => &self.knight,
            PieceKind::Bishop => &self.bishop,
            PieceKind::Rook => &self.rook,
            PieceKind::Queen => &self.queen,
            PieceKind::King if endgame => &self.king_endgame,
            PieceKind::King => &self.king_middlegame,
        };
        table[table_index(team, square)]
    }
}

fn table_index(team: Team, square: Square) -> usize {
    let rank = match team {
        Team::White => square.rank() as usize,
        Team::Black => BOARD_SIZE - 1 - square.rank() as usize,
    };
    rank * BOARD_SIZE + square.file() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_tables_mirror_between_teams() {
        let tables = PieceSquareTables::standard();
        assert_eq!(
            tables.value(Team::White, PieceKind::Pawn, sq("e4"), false),
            tables.value(Team::Black, PieceKind::Pawn, sq("e5"), false)
        );
        assert_eq!(
            tables.value(Team::White, PieceKind::Knight, sq("b1"), false),
            tables.value(Team::Black, PieceKind::Knight, sq("b8"), false)
        );
    }

    #[test]
    fn test_central_pawn_beats_blocked_pawn() {
        let tables = PieceSquareTables::standard();
        assert!(
            tables.value(Team::White, PieceKind::Pawn, sq("d4"), false)
                > tables.value(Team::White, PieceKind::Pawn, sq("d2"), false)
        );
    }

    #[test]
    fn test_king_tables_switch_in_endgame() {
        let tables = PieceSquareTables::standard();
        let e4 = sq("e4");
        assert!(tables.value(Team::White, PieceKind::King, e4, true) > tables.value(Team::White, PieceKind::King, e4, false));
        let g1 = sq("g1");
        assert!(tables.value(Team::White, PieceKind::King, g1, false) > tables.value(Team::White, PieceKind::King, g1, true));
    }
}
