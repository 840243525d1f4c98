//! Tests for history navigation and branching.

use strictly_rewind::{Game, GameStatus, HistoryInvariants, InvariantSet, Player, Position, Square};

#[test]
fn test_play_rewind_and_branch() {
    let mut game = Game::new();

    // X center, O top-left, X bottom-right
    game.apply_move(4);
    game.apply_move(0);
    game.apply_move(8);
    assert_eq!(game.latest_step(), 3);
    assert_eq!(game.next_player(), Player::O);

    // Look back at the game start
    game.jump_to(0).expect("root exists");
    assert!(game.board().is_blank());
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    assert_eq!(game.history().len(), 4);

    // Play a different opening: future is gone
    game.apply_move(2);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.step(), 1);
    assert_eq!(game.board().get(Position::TopRight), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::Center), Square::Empty);
    assert_eq!(game.next_player(), Player::O);

    assert!(HistoryInvariants::check_all(&game).is_ok());
}

#[test]
fn test_marker_flips_after_each_move() {
    let mut game = Game::new();
    let mut expected = Player::X;

    for cell in [4, 0, 8, 2, 6] {
        assert_eq!(game.next_player(), expected);
        let mov = game.apply_move(cell).expect("legal move");
        assert_eq!(mov.player, expected);
        expected = expected.opponent();
        assert_eq!(game.next_player(), expected);
    }
}

#[test]
fn test_history_snapshots_are_immutable() {
    let mut game = Game::replay(&[4, 0]).expect("valid game");
    let snapshot = *game.history()[1].board();

    game.jump_to(1).expect("step exists");
    game.apply_move(8);
    game.jump_to(0).expect("root exists");
    game.apply_move(1);

    // Branching rebuilt the history; the old copy is untouched.
    assert_eq!(snapshot.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(snapshot.occupied_count(), 1);
    assert_eq!(game.history()[0].board().occupied_count(), 0);
}

#[test]
fn test_win_then_rewind_and_continue() {
    let mut game = Game::replay(&[0, 3, 1, 4, 2]).expect("valid game");
    assert_eq!(game.status().to_string(), "Winner: X");

    // Further moves are ignored at the winning step
    assert_eq!(game.apply_move(8), None);
    assert_eq!(game.history().len(), 6);

    // From step 4 (X to move) O's win can still be set up
    game.jump_to(4).expect("step exists");
    assert_eq!(game.status().to_string(), "Next player: X");
    game.apply_move(8);
    game.apply_move(5);
    assert_eq!(game.winner(), Some(Player::O));
    assert_eq!(game.status().to_string(), "Winner: O");
}

#[test]
fn test_navigation_labels_follow_history() {
    let mut game = Game::replay(&[0, 1, 2]).expect("valid game");
    let texts: Vec<String> = game.moves().into_iter().map(|l| l.text).collect();
    assert_eq!(
        texts,
        ["Go to game start", "Go to move #1", "Go to move #2", "Go to move #3"]
    );

    game.jump_to(1).expect("step exists");
    game.apply_move(8);
    assert_eq!(game.moves().len(), 3);
    assert_eq!(game.moves()[2].step, 2);
}

#[test]
fn test_entry_records_its_move() {
    let game = Game::replay(&[4, 0]).expect("valid game");
    let moves: Vec<_> = game.history().iter().map(|e| e.last_move()).collect();

    assert_eq!(moves[0], None);
    assert_eq!(moves[1].map(|m| (m.player, m.position)), Some((Player::X, Position::Center)));
    assert_eq!(moves[2].map(|m| (m.player, m.position)), Some((Player::O, Position::TopLeft)));
}

#[test]
fn test_status_serializes() {
    let game = Game::replay(&[0]).expect("valid game");
    let json = serde_json::to_string(&game.status()).expect("serializable");
    assert_eq!(json, r#"{"NextPlayer":"O"}"#);
}
