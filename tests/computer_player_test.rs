//! Tests for the heuristic opponent over whole games.

use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_engine::{Board, ComputerPlayer, Game, GameMode, Player};

#[test]
fn test_selector_plays_a_full_game_legally() {
    let black = ComputerPlayer::new(Player::Black);
    let white = ComputerPlayer::new(Player::White);
    let mut rng = StdRng::seed_from_u64(99);

    let mut board = Board::new();
    let mut to_move = Player::Black;
    let mut moves_played = 0;

    while board.has_any_legal_move(Player::Black) || board.has_any_legal_move(Player::White) {
        let selector = match to_move {
            Player::Black => &black,
            Player::White => &white,
        };

        match selector.select_move(&board, &mut rng) {
            Some((row, col)) => {
                assert!(board.is_legal_move(row, col, to_move));
                board.make_move(row, col, to_move);
                moves_played += 1;
                assert!(moves_played <= 60, "more moves than empty opening cells");
            }
            None => {
                // None is returned exactly when the side has no move.
                assert!(!board.has_any_legal_move(to_move));
            }
        }
        to_move = to_move.opponent();
    }

    assert!(board.count(Player::Black) + board.count(Player::White) <= 64);
}

#[test]
fn test_vs_computer_session_runs_to_completion() {
    let mut game = Game::with_seed(GameMode::VsComputer, 5);

    while !game.is_game_over() {
        if game.is_computer_turn() {
            game.play_computer_move();
        } else {
            // The engine only leaves the turn with a side that can move.
            let moves = game.board().legal_moves(game.side_to_move());
            let (row, col) = *moves.first().expect("side to move has a legal move");
            assert!(game.play_move(row, col));
        }
        if game.was_turn_skipped() {
            game.acknowledge_skip();
        }
    }

    assert!(!game.board().has_any_legal_move(Player::Black));
    assert!(!game.board().has_any_legal_move(Player::White));
}

#[test]
fn test_same_seed_reproduces_the_same_game() {
    let play = |seed: u64| {
        let mut game = Game::with_seed(GameMode::VsComputer, seed);
        while !game.is_game_over() {
            if game.is_computer_turn() {
                game.play_computer_move();
            } else {
                let moves = game.board().legal_moves(game.side_to_move());
                let (row, col) = *moves.first().expect("side to move has a legal move");
                game.play_move(row, col);
            }
        }
        game.board().clone()
    };

    assert_eq!(play(7), play(7));
}
