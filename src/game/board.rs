use std::fmt;
use std::str::FromStr;

use crate::error::{MoveError, ParseBoardError};

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const SIZE: usize = COLS * ROWS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    Red,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::Red => 'R',
        }
    }
}

/// A piece on its way down a column.
///
/// Created by [`Board::add_piece`] and moved one row per [`Board::step_fall`]
/// until it rests on the floor or on another piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    player: Player,
    index: usize,
    settled: bool,
}

impl FallingPiece {
    /// Board index the piece currently occupies
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// Row-major 7x6 grid. Index 0 is the top-left slot; row 1 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; SIZE],
        }
    }

    /// Clear every slot
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; SIZE];
    }

    /// Convert a 1-based (column, row) to a 0-based index. Out-of-range input
    /// is not checked.
    pub const fn coordinate_to_index(col: usize, row: usize) -> usize {
        (col - 1) + (row - 1) * COLS
    }

    /// Convert a 0-based index back to a 1-based (column, row)
    pub const fn index_to_coordinate(index: usize) -> (usize, usize) {
        (index % COLS + 1, index / COLS + 1)
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Get the cell at a 1-based (column, row)
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[Self::coordinate_to_index(col, row)]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// A column is full once its top slot is taken. Gravity keeps every slot
    /// below an occupied one occupied too.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        self.cells[column] != Cell::Empty
    }

    /// True when no empty slot is left anywhere
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place a piece in the top slot of a 0-based column. The piece has not
    /// fallen yet; drive it down with [`Board::step_fall`] or [`Board::settle`].
    pub fn add_piece(&mut self, column: usize, player: Player) -> Result<FallingPiece, MoveError> {
        if column >= COLS {
            return Err(MoveError::OutOfBoardBounds);
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull { column });
        }

        self.cells[column] = player.to_cell();
        Ok(FallingPiece {
            player,
            index: column,
            settled: false,
        })
    }

    /// Move a falling piece down one row. Returns false, and marks the piece
    /// settled, when the slot below is off the board or occupied.
    pub fn step_fall(&mut self, piece: &mut FallingPiece) -> bool {
        if piece.settled {
            return false;
        }

        let below = piece.index + COLS;
        if below < SIZE && self.cells[below] == Cell::Empty {
            self.cells[piece.index] = Cell::Empty;
            self.cells[below] = piece.player.to_cell();
            piece.index = below;
            true
        } else {
            piece.settled = true;
            false
        }
    }

    /// Let a piece fall all the way and return where it rests
    pub fn settle(&mut self, piece: &mut FallingPiece) -> usize {
        while self.step_fall(piece) {}
        piece.index
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(COLS).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses the format written by `Display`: one line per row, top row first.
/// Whitespace inside a line is ignored and blank lines are skipped.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != ROWS {
            return Err(ParseBoardError::RowCount {
                expected: ROWS,
                found: rows.len(),
            });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(ParseBoardError::RowLength {
                    row: row + 1,
                    expected: COLS,
                    found: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row * COLS + col] = match symbol {
                    '.' | '-' => Cell::Empty,
                    'B' | 'b' => Cell::Black,
                    'R' | 'r' => Cell::Red,
                    other => return Err(ParseBoardError::Symbol(other)),
                };
            }
        }
        Ok(board)
    }
}
