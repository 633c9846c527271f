//! # Connect Four
//!
//! Two-player Connect Four for the terminal. Pieces are dropped with the mouse
//! or keyboard and fall one row per tick before the board is checked for four
//! in a row.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board and gravity, win detection, turn controller
//! - [`ui`] — Terminal UI: name prompt, game view, event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
