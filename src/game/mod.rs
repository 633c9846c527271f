//! Core Connect Four logic: the board and its gravity fall, win detection,
//! and the controller that runs the turn cycle.

mod board;
mod controller;
mod geometry;
mod player;
pub mod win;

pub use board::{Board, Cell, FallingPiece, COLS, ROWS, SIZE};
pub use controller::{DropStatus, GameController, Phase, Step};
pub use geometry::BoardGeometry;
pub use player::{Player, PlayerNames, DEFAULT_PLAYER1, DEFAULT_PLAYER2};
pub use win::{Outcome, WinningLine, WIN_LENGTH};
