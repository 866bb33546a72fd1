//! # Game State Machine
//!
//! ## Overview
//!
//! [`Game`] owns a [`Board`] and everything the board alone cannot know:
//! whose turn it is, which piece moved last (for en passant), the full-move
//! number, the move history, any pending draw offer and the final result.
//!
//! ## Lifecycle
//!
//! ```text
//! InProgress ──move──▶ InProgress
//!     │  ├─ no legal replies, in check ───▶ Checkmate  (winner: mover)
//!     │  └─ no legal replies, not in check ▶ Stalemate (no winner)
//!     ├─ resign(team) ────────────────────▶ Resigned  (winner: other team)
//!     └─ offer_draw + accept_draw ────────▶ DrawAgreed (no winner)
//! ```
//!
//! Every terminal state is absorbing: mutating calls return
//! [`ChessError::GameOver`].
//!
//! ## Move Resolution
//!
//! Parsed move text is matched against the side's moves:
//! 1. kind and destination select the candidates (castles only via `O-O`)
//! 2. an origin hint narrows them
//! 3. the capture marker and the promotion letter must agree with the move
//! 4. of what is left, exactly one must keep the king safe
//!
//! A failed resolution never touches the board.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{ChessError, ChessResult};
use crate::legality;
use crate::move_gen::team_pseudo_legal_moves;
use crate::notation::{move_to_notation, parse_move, ParsedMove};
use crate::types::*;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Checkmate,
    Stalemate,
    Resigned,
    DrawAgreed,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A game of chess between two sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Team,
    last_moved: Option<PieceId>,
    last_moved_origin: Option<Square>,
    move_number: u32,
    status: GameStatus,
    winner: Option<Team>,
    draw_offer: Option<Team>,
    history: Vec<String>,
    first_to_move: Team,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Game {
            board: Board::starting_position(),
            turn: Team::White,
            last_moved: None,
            last_moved_origin: None,
            move_number: 1,
            status: GameStatus::InProgress,
            winner: None,
            draw_offer: None,
            history: Vec::new(),
            first_to_move: Team::White,
        }
    }

    /// Start from a custom position
    ///
    /// The board must pass [`Board::validate`]. A position that is already
    /// mate or stalemate for `turn` starts out terminal.
    pub fn from_board(board: Board, turn: Team) -> ChessResult<Game> {
        board.validate()?;
        let mut game = Game {
            board,
            turn,
            first_to_move: turn,
            ..Game::new()
        };
        game.refresh_status();
        Ok(game)
    }

    /// Replay a sequence of moves from the starting position
    pub fn from_moves<'a>(moves: impl IntoIterator<Item = &'a str>) -> ChessResult<Game> {
        let mut game = Game::new();
        for text in moves {
            game.play_san(text)?;
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Team {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Full-move number, starting at 1 and advancing after Black moves
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Piece moved on the previous turn
    pub fn last_moved(&self) -> Option<PieceId> {
        self.last_moved
    }

    /// Square that piece left
    pub fn last_moved_origin(&self) -> Option<Square> {
        self.last_moved_origin
    }

    /// Team with a pending draw offer
    pub fn draw_offer(&self) -> Option<Team> {
        self.draw_offer
    }

    /// Notation of every move played, in order
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Legal moves of the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut scratch = self.board.clone();
        legality::legal_moves(&mut scratch, self.turn, self.last_moved)
    }

    pub fn in_check(&self) -> bool {
        legality::is_in_check(&self.board, self.turn)
    }

    /// Notation of a legal move in the current position
    ///
    /// A move that is not legal here (for example one taken from another
    /// game) is written in coordinate form, `e2e4`.
    pub fn to_notation(&self, mv: &Move) -> String {
        let legal = self.legal_moves();
        if !legal.contains(mv) {
            return mv.to_string();
        }
        move_to_notation(&self.board, mv, &legal)
    }

    /// Parse and play a move given in algebraic notation
    ///
    /// # Returns
    ///
    /// The notation recorded in the history (normalised, without check
    /// markers).
    pub fn play_san(&mut self, text: &str) -> ChessResult<String> {
        self.ensure_active()?;
        let parsed = parse_move(text)?;
        self.apply(parsed)
    }

    /// Play an already parsed move
    pub fn apply(&mut self, parsed: ParsedMove) -> ChessResult<String> {
        self.ensure_active()?;
        let mv = self.resolve(&parsed)?;
        self.execute(mv)
    }

    /// Play a move produced by the generator or the search
    pub fn play_move(&mut self, mv: Move) -> ChessResult<String> {
        self.ensure_active()?;
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::illegal(mv.to_string(), "not a legal move in this position"));
        }
        self.execute(mv)
    }

    /// Find the single legal move a parsed move describes
    pub fn resolve(&self, parsed: &ParsedMove) -> ChessResult<Move> {
        let text = parsed.to_string();
        let pseudo = team_pseudo_legal_moves(&self.board, self.turn, self.last_moved);

        let candidates: Vec<Move> = match *parsed {
            ParsedMove::Castle(side) => {
                let castles: Vec<Move> = pseudo.into_iter().filter(|mv| mv.castle == Some(side)).collect();
                if castles.is_empty() {
                    return Err(ChessError::illegal(text, format!("{} cannot castle {}", self.turn, side.notation())));
                }
                castles
            }
            ParsedMove::Standard {
                piece,
                specifier,
                capture,
                destination,
                promotion,
            } => {
                let kind = piece.unwrap_or(PieceKind::Pawn);
                let mut moves: Vec<Move> = pseudo
                    .into_iter()
                    .filter(|mv| {
                        mv.castle.is_none()
                            && mv.destination == destination
                            && self.board.piece(mv.piece).kind() == kind
                    })
                    .collect();
                if moves.is_empty() {
                    return Err(ChessError::illegal(
                        text,
                        format!("no {:?} of {} can reach {}", kind, self.turn, destination),
                    ));
                }

                if let Some(specifier) = specifier {
                    moves.retain(|mv| specifier.matches(mv.origin));
                    if moves.is_empty() {
                        return Err(ChessError::illegal(text, format!("no {:?} on {}", kind, specifier)));
                    }
                }

                moves.retain(|mv| mv.is_capture() == capture);
                if moves.is_empty() {
                    let reason = if capture {
                        format!("nothing to capture on {}", destination)
                    } else {
                        "move captures and must be marked with 'x'".to_string()
                    };
                    return Err(ChessError::illegal(text, reason));
                }

                moves.retain(|mv| mv.promotion == promotion);
                if moves.is_empty() {
                    let reason = match promotion {
                        None => "pawn reaching the last rank must name a promotion piece",
                        Some(_) => "only a pawn reaching the last rank can promote",
                    };
                    return Err(ChessError::illegal(text, reason));
                }
                moves
            }
        };

        let mut scratch = self.board.clone();
        let legal: Vec<Move> = candidates
            .iter()
            .copied()
            .filter(|mv| legality::is_legal(&mut scratch, mv))
            .collect();

        match legal.as_slice() {
            [mv] => Ok(*mv),
            [] => Err(ChessError::illegal(text, format!("leaves the {} king in check", self.turn))),
            _ => Err(ChessError::illegal(text, "ambiguous; add the origin file or rank")),
        }
    }

    fn execute(&mut self, mv: Move) -> ChessResult<String> {
        let san = self.to_notation(&mv);
        if !legality::try_move(&mut self.board, &mv) {
            return Err(ChessError::illegal(san, format!("leaves the {} king in check", self.turn)));
        }

        debug!("[GAME] {} {}: {}", self.move_number, self.turn, san);

        if let Some(offerer) = self.draw_offer.take() {
            debug!("[GAME] draw offer by {} declined by playing on", offerer);
        }
        self.last_moved = Some(mv.piece);
        self.last_moved_origin = Some(mv.origin);
        self.history.push(san.clone());
        if self.turn == Team::Black {
            self.move_number += 1;
        }
        self.turn = self.turn.opposite();
        self.refresh_status();
        Ok(san)
    }

    /// Offer a draw on behalf of the side to move
    pub fn offer_draw(&mut self) -> ChessResult<()> {
        self.ensure_active()?;
        if let Some(offerer) = self.draw_offer {
            return Err(ChessError::DrawOffer {
                message: format!("{} already offered a draw", offerer),
            });
        }
        self.draw_offer = Some(self.turn);
        Ok(())
    }

    /// Accept the pending draw offer on behalf of the opponent
    pub fn accept_draw(&mut self) -> ChessResult<()> {
        self.ensure_active()?;
        if self.draw_offer.take().is_none() {
            return Err(ChessError::DrawOffer {
                message: "no draw offer to accept".to_string(),
            });
        }
        self.status = GameStatus::DrawAgreed;
        self.winner = None;
        info!("[GAME] draw agreed after {} moves", self.history.len());
        Ok(())
    }

    /// Decline the pending draw offer; play continues with the same side
    pub fn reject_draw(&mut self) -> ChessResult<()> {
        self.ensure_active()?;
        if self.draw_offer.take().is_none() {
            return Err(ChessError::DrawOffer {
                message: "no draw offer to reject".to_string(),
            });
        }
        Ok(())
    }

    pub fn resign(&mut self, team: Team) -> ChessResult<()> {
        self.ensure_active()?;
        self.draw_offer = None;
        self.status = GameStatus::Resigned;
        self.winner = Some(team.opposite());
        info!("[GAME] {} resigns, {} wins", team, team.opposite());
        Ok(())
    }

    /// Result token once the game is over
    pub fn result(&self) -> Option<&'static str> {
        if !self.is_over() {
            return None;
        }
        Some(match self.winner {
            Some(Team::White) => "1-0",
            Some(Team::Black) => "0-1",
            None => "1/2-1/2",
        })
    }

    /// Numbered move text, followed by the result when the game is over
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        let mut number = 1;
        let mut team = self.first_to_move;

        for (index, san) in self.history.iter().enumerate() {
            if !out.is_empty() {
                out.push(' ');
            }
            match team {
                Team::White => {
                    let _ = write!(out, "{}. {}", number, san);
                }
                Team::Black => {
                    if index == 0 {
                        let _ = write!(out, "{}... ", number);
                    }
                    out.push_str(san);
                    number += 1;
                }
            }
            team = team.opposite();
        }

        if let Some(result) = self.result() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(result);
        }
        out
    }

    fn ensure_active(&self) -> ChessResult<()> {
        if self.is_over() {
            return Err(ChessError::GameOver { status: self.status });
        }
        Ok(())
    }

    fn refresh_status(&mut self) {
        if legality::has_legal_move(&mut self.board, self.turn, self.last_moved) {
            return;
        }
        if legality::is_in_check(&self.board, self.turn) {
            self.status = GameStatus::Checkmate;
            self.winner = Some(self.turn.opposite());
            info!("[GAME] checkmate, {} wins", self.turn.opposite());
        } else {
            self.status = GameStatus::Stalemate;
            self.winner = None;
            info!("[GAME] stalemate, {} has no moves", self.turn);
        }
    }
}
