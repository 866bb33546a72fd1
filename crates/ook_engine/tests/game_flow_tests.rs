//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Opening sequences and resulting occupancy
//! - Check handling
//! - Special moves (castling, en passant, promotion)
//! - Game end (checkmate, stalemate, resignation, draw)

use ook_engine::{Board, ChessError, Game, GameStatus, PieceKind, Square, Team};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn kind_at(game: &Game, square: &str) -> Option<(Team, PieceKind)> {
    game.board()
        .piece_at(sq(square))
        .map(|piece| (piece.team(), piece.kind()))
}

// ============================================================================
// Opening Tests
// ============================================================================

#[test]
fn test_white_has_twenty_opening_moves() {
    let game = Game::new();
    assert_eq!(game.legal_moves().len(), 20, "White should have 20 moves");
}

#[test]
fn test_ruy_lopez_occupancy() {
    let mut game = Game::new();
    for san in ["e4", "e5", "Nf3", "Nc6", "Bb5"] {
        game.play_san(san)
            .unwrap_or_else(|e| panic!("{} should be accepted: {}", san, e));
    }

    assert_eq!(
        game.board().placement(),
        "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R"
    );
    assert_eq!(kind_at(&game, "b5"), Some((Team::White, PieceKind::Bishop)));
    assert_eq!(kind_at(&game, "c6"), Some((Team::Black, PieceKind::Knight)));
    assert!(game.board().is_empty(sq("f1")));
    assert!(game.board().is_empty(sq("g1")));
    assert_eq!(game.side_to_move(), Team::Black);
    assert_eq!(game.move_number(), 3);
    assert_eq!(game.transcript(), "1. e4 e5 2. Nf3 Nc6 3. Bb5");
}

#[test]
fn test_last_moved_tracks_piece_and_origin() {
    let game = Game::from_moves(["e4", "Nf6"]).unwrap();
    let knight = game.board().id_at(sq("f6")).unwrap();
    assert_eq!(game.last_moved(), Some(knight));
    assert_eq!(game.last_moved_origin(), Some(sq("g8")));
}

// ============================================================================
// Check Tests
// ============================================================================

fn open_e_file() -> Game {
    let board = Board::from_pieces(&[
        (Team::White, PieceKind::King, "e1"),
        (Team::White, PieceKind::Rook, "a2"),
        (Team::Black, PieceKind::Queen, "e8"),
        (Team::Black, PieceKind::King, "h7"),
    ])
    .unwrap();
    Game::from_board(board, Team::White).unwrap()
}

#[test]
fn test_queen_on_open_file_gives_check() {
    let game = open_e_file();
    assert!(game.in_check());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_moves_that_ignore_check_are_rejected() {
    let mut game = open_e_file();
    let snapshot = game.clone();

    for san in ["Ke2", "Ra3", "Ra7"] {
        assert!(
            matches!(game.play_san(san), Err(ChessError::IllegalMove { .. })),
            "{} does not resolve the check",
            san
        );
        assert_eq!(game, snapshot, "rejected move must not change the game");
    }

    for (index, mv) in game.legal_moves().iter().enumerate() {
        let mut copy = game.clone();
        copy.play_move(*mv).unwrap();
        assert!(
            !ook_engine::legality::is_in_check(copy.board(), Team::White),
            "legal move #{} still leaves the king in check",
            index
        );
    }
}

#[test]
fn test_check_resolved_by_block_or_step_aside() {
    let mut block = open_e_file();
    block.play_san("Re2").unwrap();
    assert!(!ook_engine::legality::is_in_check(block.board(), Team::White));

    let mut step = open_e_file();
    step.play_san("Kd1").unwrap();
    assert_eq!(kind_at(&step, "d1"), Some((Team::White, PieceKind::King)));
}

#[test]
fn test_move_from_another_game_is_rejected_cleanly() {
    let full = Game::new();
    let mut small = open_e_file();
    let foreign = full
        .legal_moves()
        .into_iter()
        .find(|mv| small.board().get(mv.piece).is_none())
        .expect("the starting position has more pieces");

    assert_eq!(small.to_notation(&foreign), foreign.to_string());
    assert!(matches!(small.play_move(foreign), Err(ChessError::IllegalMove { .. })));
}

// ============================================================================
// Special Move Tests
// ============================================================================

#[test]
fn test_en_passant_removes_double_stepped_pawn() {
    let mut game = Game::from_moves(["e4", "a6", "e5", "d5"]).unwrap();
    let victim = game.board().id_at(sq("d5")).unwrap();

    assert_eq!(game.play_san("exd6").unwrap(), "exd6");

    assert!(game.board().is_empty(sq("d5")), "victim square must be cleared");
    assert!(game.board().is_empty(sq("e5")));
    assert_eq!(kind_at(&game, "d6"), Some((Team::White, PieceKind::Pawn)));
    assert!(!game.board().is_live(victim));
    assert_eq!(game.board().team_pieces(Team::Black).len(), 15);
}

#[test]
fn test_en_passant_expires_after_one_turn() {
    let mut game = Game::from_moves(["e4", "a6", "e5", "d5", "h3", "h6"]).unwrap();
    assert!(matches!(game.play_san("exd6"), Err(ChessError::IllegalMove { .. })));
}

#[test]
fn test_black_en_passant() {
    let mut game = Game::from_moves(["a3", "e5", "a4", "e4", "d4"]).unwrap();
    game.play_san("exd3").unwrap();
    assert!(game.board().is_empty(sq("d4")));
    assert_eq!(kind_at(&game, "d3"), Some((Team::Black, PieceKind::Pawn)));
}

#[test]
fn test_no_en_passant_after_single_steps() {
    let mut game = Game::from_moves(["e4", "d6", "e5", "d5"]).unwrap();
    assert!(matches!(game.play_san("exd6"), Err(ChessError::IllegalMove { .. })));
}

#[test]
fn test_kingside_castle_relocates_rook() {
    let mut game = Game::from_moves(["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"]).unwrap();
    assert_eq!(game.play_san("O-O").unwrap(), "O-O");

    assert_eq!(kind_at(&game, "g1"), Some((Team::White, PieceKind::King)));
    assert_eq!(kind_at(&game, "f1"), Some((Team::White, PieceKind::Rook)));
    assert!(game.board().is_empty(sq("e1")));
    assert!(game.board().is_empty(sq("h1")));
    let rook = game.board().piece_at(sq("f1")).unwrap();
    assert_eq!(rook.move_count(), 1);
}

#[test]
fn test_king_step_is_not_a_castle() {
    let mut game = Game::from_moves(["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"]).unwrap();
    assert!(matches!(game.play_san("Kg1"), Err(ChessError::IllegalMove { .. })));
}

#[test]
fn test_no_castling_after_king_returns_home() {
    let mut game = Game::from_moves(["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "Ke2", "d6", "Ke1", "Nf6"]).unwrap();
    assert!(matches!(game.play_san("O-O"), Err(ChessError::IllegalMove { .. })));
}

#[test]
fn test_castling_through_attacked_square_rejected() {
    let board = Board::from_pieces(&[
        (Team::White, PieceKind::King, "e1"),
        (Team::White, PieceKind::Rook, "a1"),
        (Team::Black, PieceKind::King, "h8"),
        (Team::Black, PieceKind::Rook, "d8"),
    ])
    .unwrap();
    let mut game = Game::from_board(board, Team::White).unwrap();
    assert!(matches!(game.play_san("O-O-O"), Err(ChessError::IllegalMove { .. })));
}

#[test]
fn test_queenside_castle_with_attacked_b_file_allowed() {
    let board = Board::from_pieces(&[
        (Team::White, PieceKind::King, "e1"),
        (Team::White, PieceKind::Rook, "a1"),
        (Team::Black, PieceKind::King, "h8"),
        (Team::Black, PieceKind::Rook, "b8"),
    ])
    .unwrap();
    let mut game = Game::from_board(board, Team::White).unwrap();
    game.play_san("O-O-O").unwrap();
    assert_eq!(kind_at(&game, "c1"), Some((Team::White, PieceKind::King)));
    assert_eq!(kind_at(&game, "d1"), Some((Team::White, PieceKind::Rook)));
}

#[test]
fn test_promotion_preserves_identity_and_move_count() {
    let mut board = Board::from_pieces(&[
        (Team::White, PieceKind::King, "a1"),
        (Team::Black, PieceKind::King, "h6"),
        (Team::White, PieceKind::Pawn, "g7"),
        (Team::Black, PieceKind::Rook, "h8"),
    ])
    .unwrap();
    let pawn = board.id_at(sq("g7")).unwrap();
    board.set_move_count(pawn, 5).unwrap();
    let mut game = Game::from_board(board, Team::White).unwrap();

    assert_eq!(game.play_san("gxh8=Q").unwrap(), "gxh8=Q");

    let promoted = game.board().piece_at(sq("h8")).unwrap();
    assert_eq!(promoted.id(), pawn);
    assert_eq!(promoted.kind(), PieceKind::Queen);
    assert_eq!(promoted.move_count(), 6);
    assert_eq!(game.board().count(Team::White, PieceKind::Pawn), 0);
}

// ============================================================================
// Game End Tests
// ============================================================================

#[test]
fn test_fools_mate() {
    let game = Game::from_moves(["f3", "e5", "g4", "Qh4#"]).unwrap();
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert_eq!(game.winner(), Some(Team::Black));
    assert_eq!(game.transcript(), "1. f3 e5 2. g4 Qh4 0-1");
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::from_moves(["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6"]).unwrap();
    game.play_san("Qxf7#").unwrap();
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert_eq!(game.winner(), Some(Team::White));
    assert!(game.legal_moves().is_empty());
    assert!(matches!(
        game.play_san("Ke7"),
        Err(ChessError::GameOver {
            status: GameStatus::Checkmate
        })
    ));
}

#[test]
fn test_resignation_and_draw_are_terminal() {
    let mut resigned = Game::from_moves(["d4"]).unwrap();
    resigned.resign(Team::Black).unwrap();
    assert_eq!(resigned.winner(), Some(Team::White));
    assert!(resigned.is_over());

    let mut drawn = Game::from_moves(["d4", "d5"]).unwrap();
    drawn.offer_draw().unwrap();
    drawn.accept_draw().unwrap();
    assert_eq!(drawn.status(), GameStatus::DrawAgreed);
    assert_eq!(drawn.transcript(), "1. d4 d5 1/2-1/2");
}
