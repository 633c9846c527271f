//! End-to-end games driven through the public controller API.

use connect_four::error::MoveError;
use connect_four::game::{
    win, Board, BoardGeometry, Cell, DropStatus, GameController, Outcome, Phase, Player,
    PlayerNames, Step, COLS, ROWS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn new_game(first: Player) -> GameController {
    GameController::with_first_player(PlayerNames::new(Some("Ada"), Some("Grace")), first)
}

fn play(game: &mut GameController, column: usize) -> Outcome {
    assert_eq!(game.drop_piece(column), Ok(DropStatus::Started { column }));
    game.resolve().expect("a piece was falling")
}

/// Lowest empty 1-based row of a 0-based column, if any
fn lowest_empty_row(board: &Board, column: usize) -> Option<usize> {
    (1..=ROWS).rev().find(|&row| board.cell(column + 1, row) == Cell::Empty)
}

#[test]
fn test_pieces_land_on_lowest_empty_row() {
    let mut rng = StdRng::seed_from_u64(0xC4);

    for _ in 0..50 {
        let mut game = new_game(Player::Black);
        while game.outcome() == Outcome::InProgress {
            let column = rng.random_range(0..COLS);
            let before = *game.board();

            match game.drop_piece(column) {
                Ok(DropStatus::Started { .. }) => {
                    let expected = lowest_empty_row(&before, column).unwrap();
                    let player = game.current_player();
                    let Some(Step::Settled { index, .. }) = std::iter::from_fn(|| game.advance())
                        .find(|step| matches!(step, Step::Settled { .. }))
                    else {
                        panic!("piece never settled");
                    };
                    assert_eq!(index, Board::coordinate_to_index(column + 1, expected));
                    assert_eq!(game.board().get(index), player.to_cell());
                    assert_eq!(game.board().occupied(), before.occupied() + 1);
                }
                Err(MoveError::ColumnFull { column: full }) => {
                    assert_eq!(full, column);
                    assert_ne!(before.get(column), Cell::Empty);
                    assert_eq!(game.board(), &before);
                }
                other => panic!("unexpected drop result {:?}", other),
            }
        }
    }
}

#[test]
fn test_turns_alternate_until_game_ends() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = GameController::new(PlayerNames::default(), &mut rng);

    loop {
        let column = (0..COLS).find(|&c| !game.board().is_column_full(c)).unwrap();
        let mover = game.current_player();
        match play(&mut game, column) {
            Outcome::InProgress => assert_eq!(game.current_player(), mover.other()),
            Outcome::Win(winner) => {
                assert_eq!(winner, mover);
                assert_eq!(game.current_player(), mover);
                break;
            }
            Outcome::Tie => break,
        }
    }
    assert!(matches!(game.phase(), Phase::Terminal(_)));
}

#[test]
fn test_horizontal_win_on_bottom_row() {
    let mut game = new_game(Player::Black);
    for column in 0..3 {
        assert_eq!(play(&mut game, column), Outcome::InProgress); // Black
        assert_eq!(play(&mut game, column), Outcome::InProgress); // Red stacks on top
    }
    assert_eq!(play(&mut game, 3), Outcome::Win(Player::Black));
    assert_eq!(
        game.winning_line().unwrap().cells,
        [35, 36, 37, 38]
    );
}

#[test]
fn test_vertical_win_in_first_column() {
    let mut game = new_game(Player::Red);
    for _ in 0..3 {
        play(&mut game, 0);
        play(&mut game, 6);
    }
    assert_eq!(play(&mut game, 0), Outcome::Win(Player::Red));
    assert_eq!(game.names().get(Player::Red), "Grace");
}

#[test]
fn test_rising_diagonal_win() {
    let mut game = new_game(Player::Black);
    // Black builds (1,6) (2,5) (3,4) (4,3); Red fills underneath
    let moves = [0, 1, 1, 2, 2, 3, 2, 3, 3, 6];
    for column in moves {
        assert_eq!(play(&mut game, column), Outcome::InProgress);
    }
    assert_eq!(play(&mut game, 3), Outcome::Win(Player::Black));
}

#[test]
fn test_falling_diagonal_win() {
    let mut game = new_game(Player::Red);
    let moves = [6, 5, 5, 4, 4, 3, 4, 3, 3, 0];
    for column in moves {
        assert_eq!(play(&mut game, column), Outcome::InProgress);
    }
    assert_eq!(play(&mut game, 3), Outcome::Win(Player::Red));
}

#[test]
fn test_tie_when_board_fills() {
    // Column order that fills the board with no four in a row
    let order = [0, 1, 0, 1, 0, 1, 2, 3, 2, 3, 2, 3, 4, 5, 4, 5, 4, 5, 6];
    let mut game = new_game(Player::Black);
    let mut outcome = Outcome::InProgress;

    // Bottom three rows alternate colors by column
    for &column in &order {
        outcome = play(&mut game, column);
    }
    // Same order again: the odd move in the last column swaps colors on top
    let top = [0, 1, 0, 1, 0, 1, 2, 3, 2, 3, 2, 3, 4, 5, 4, 5, 4, 5, 6, 6, 6, 6, 6];
    for &column in &top {
        assert_eq!(outcome, Outcome::InProgress);
        outcome = play(&mut game, column);
    }

    assert!(game.board().is_full());
    assert_eq!(outcome, Outcome::Tie);
    assert_eq!(game.phase(), Phase::Terminal(Outcome::Tie));
}

#[test]
fn test_input_ignored_after_game_over() {
    let mut game = new_game(Player::Black);
    for _ in 0..3 {
        play(&mut game, 2);
        play(&mut game, 4);
    }
    play(&mut game, 2);
    let board = *game.board();

    assert_eq!(game.drop_piece(0), Ok(DropStatus::Ignored));
    assert_eq!(
        game.click(0, &BoardGeometry::new(0, 3)),
        Ok(DropStatus::Ignored)
    );
    assert_eq!(game.board(), &board);
}

#[test]
fn test_check_line_needs_four_slots() {
    let board: Board = "\
        BBBBBBB
        BBBBBBB
        BBBBBBB
        BBBBBBB
        BBBBBBB
        BBBBBBB"
        .parse()
        .unwrap();

    for (start, end, stride) in [(0, 2, 1), (0, 14, COLS), (3, 21, COLS + 1), (5, 5, 1)] {
        assert!(!win::check_line(&board, start, end, stride));
    }
    assert!(win::check_line(&board, 0, 21, COLS));
}
