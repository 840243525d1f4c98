//! Tests for win and draw detection.

use strictly_rewind::{Board, Player, Position, Square, compute_winner, is_draw, is_full};

fn marked(player: Player, cells: &[usize]) -> Board {
    let mut board = Board::new();
    for &cell in cells {
        let pos = Position::from_index(cell).expect("cell on board");
        board.set(pos, Square::Occupied(player));
    }
    board
}

#[test]
fn test_top_row_wins() {
    assert_eq!(compute_winner(&marked(Player::X, &[0, 1, 2])), Some(Player::X));
}

#[test]
fn test_column_and_diagonal_win() {
    assert_eq!(compute_winner(&marked(Player::O, &[1, 4, 7])), Some(Player::O));
    assert_eq!(compute_winner(&marked(Player::O, &[2, 4, 6])), Some(Player::O));
}

#[test]
fn test_non_line_triple_does_not_win() {
    assert_eq!(compute_winner(&marked(Player::X, &[0, 1, 5])), None);
    assert_eq!(compute_winner(&marked(Player::X, &[0, 4, 7])), None);
}

#[test]
fn test_compute_winner_is_pure() {
    let board = marked(Player::X, &[3, 4, 5]);
    let copy = board;
    assert_eq!(compute_winner(&board), compute_winner(&board));
    assert_eq!(board, copy);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let mut board = marked(Player::X, &[0, 2, 3, 7, 8]);
    for cell in [1, 4, 5, 6] {
        board.set(Position::ALL[cell], Square::Occupied(Player::O));
    }

    assert!(is_full(&board));
    assert!(is_draw(&board));
    assert_eq!(compute_winner(&board), None);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = marked(Player::X, &[0, 4]);
    let valid = Position::valid_moves(&board);

    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
