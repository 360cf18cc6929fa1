use super::*;
use crate::game::{UTILITY_DRAW, UTILITY_LOSS, UTILITY_WIN};

#[test]
fn test_new_board_has_nine_moves() {
    let board = Board::new();
    assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
    assert_eq!(board.current_player(), Mark::X);
    assert!(!board.is_over());
    assert_eq!(board.winner(), Outcome::Undecided);
}

#[test]
fn test_layout_roundtrip_and_side_to_move() {
    let board = Board::from_layout("XO.......").unwrap();
    assert_eq!(board.current_player(), Mark::X);
    assert_eq!(board.to_string(), "XO.\n...\n...");

    let board = Board::from_layout("X........").unwrap();
    assert_eq!(board.current_player(), Mark::O);

    assert!(Board::from_layout("XX.......").is_none());
    assert!(Board::from_layout("O........").is_none());
    assert!(Board::from_layout("X.......").is_none());
    assert!(Board::from_layout("X........X").is_none());
}

#[test]
fn test_occupied_cell_is_illegal() {
    let board = Board::new().make_move(&4).unwrap();
    let err = board.clone().make_move(&4).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { .. }));
    assert!(board.clone().make_move(&9).is_err());
}

#[test]
fn test_finished_game_has_no_moves() {
    let board = Board::from_layout("XXXOO....").unwrap();
    assert!(board.is_over());
    assert!(board.legal_moves().is_empty());
    assert!(board.make_move(&5).is_err());
}

#[test]
fn test_utilities() {
    let game = TicTacToe::new();

    let won = Board::from_layout("XXXOO....").unwrap();
    assert_eq!(game.utility(&won, Mark::X).unwrap(), UTILITY_WIN);
    assert_eq!(game.utility(&won, Mark::O).unwrap(), UTILITY_LOSS);

    let drawn = Board::from_layout("XOXXOOOXX").unwrap();
    assert_eq!(drawn.winner(), Outcome::Draw);
    assert_eq!(game.utility(&drawn, Mark::X).unwrap(), UTILITY_DRAW);

    let open = Board::from_layout("XO.......").unwrap();
    assert!(matches!(
        game.utility(&open, Mark::X),
        Err(GameError::InvalidState { .. })
    ));
}
