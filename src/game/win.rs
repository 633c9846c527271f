//! Four-in-a-row detection around the most recently settled piece.
//!
//! Every check is a scan along a *line*: the indices `start, start + stride,
//! ..., end`. A stride of 1 walks a row, `COLS` walks a column, and
//! `COLS - 1` / `COLS + 1` walk the two diagonals.

use super::board::{Board, COLS, ROWS, SIZE};
use super::player::Player;

/// Matching pieces needed to win
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// A completed line: who made it and the four slots it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; WIN_LENGTH],
}

/// True if any four consecutive slots on the line share an owner. Lines with
/// fewer than four slots never match.
pub fn check_line(board: &Board, start: usize, end: usize, stride: usize) -> bool {
    scan_line(board, start, end, stride).is_some()
}

/// Outcome after the piece at `changed` came to rest.
pub fn evaluate(board: &Board, changed: usize) -> Outcome {
    outcome_for(board, find_win(board, changed).as_ref())
}

/// Outcome given the result of [`find_win`] for the last settled piece.
pub fn outcome_for(board: &Board, line: Option<&WinningLine>) -> Outcome {
    match line {
        Some(line) => Outcome::Win(line.player),
        None if board.is_full() => Outcome::Tie,
        None => Outcome::InProgress,
    }
}

/// First winning run found on the row, column or diagonals through `changed`.
pub fn find_win(board: &Board, changed: usize) -> Option<WinningLine> {
    let (col, row) = Board::index_to_coordinate(changed);

    let lines = [
        // horizontal
        (
            Board::coordinate_to_index(1, row),
            Board::coordinate_to_index(COLS, row),
            1,
        ),
        // vertical
        (
            Board::coordinate_to_index(col, 1),
            Board::coordinate_to_index(col, ROWS),
            COLS,
        ),
        // rising: top-right end down to bottom-left end
        (
            walk_to_edge(col, row, 1, -1),
            walk_to_edge(col, row, -1, 1),
            COLS - 1,
        ),
        // falling: top-left end down to bottom-right end
        (
            walk_to_edge(col, row, -1, -1),
            walk_to_edge(col, row, 1, 1),
            COLS + 1,
        ),
    ];

    lines
        .into_iter()
        .find_map(|(start, end, stride)| scan_line(board, start, end, stride))
}

fn scan_line(board: &Board, start: usize, end: usize, stride: usize) -> Option<WinningLine> {
    if stride == 0 || start > end || end >= SIZE {
        return None;
    }

    let line: Vec<usize> = (start..=end).step_by(stride).collect();
    line.windows(WIN_LENGTH).find_map(|window| {
        let owner = Player::from_cell(board.get(window[0]))?;
        if window.iter().all(|&i| board.get(i) == owner.to_cell()) {
            let mut cells = [0; WIN_LENGTH];
            cells.copy_from_slice(window);
            Some(WinningLine {
                player: owner,
                cells,
            })
        } else {
            None
        }
    })
}

/// Step from a 1-based (col, row) in direction (dc, dr) until the next step
/// would leave the board, and return the index of the last slot reached.
fn walk_to_edge(mut col: usize, mut row: usize, dc: isize, dr: isize) -> usize {
    loop {
        let next_col = col
            .checked_add_signed(dc)
            .filter(|c| (1..=COLS).contains(c));
        let next_row = row
            .checked_add_signed(dr)
            .filter(|r| (1..=ROWS).contains(r));
        match (next_col, next_row) {
            (Some(c), Some(r)) => {
                col = c;
                row = r;
            }
            _ => break,
        }
    }
    Board::coordinate_to_index(col, row)
}
