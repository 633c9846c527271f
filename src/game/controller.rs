use rand::Rng;
use tracing::{debug, info};

use crate::error::MoveError;

use super::board::{Board, FallingPiece};
use super::geometry::BoardGeometry;
use super::player::{Player, PlayerNames};
use super::win::{self, Outcome, WinningLine};

/// Where the game is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the current player to pick a column
    AwaitingInput,
    /// A piece is falling; input is ignored until it settles
    Resolving(FallingPiece),
    /// Won or tied; stays here until reset
    Terminal(Outcome),
}

/// Response to a placement request that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropStatus {
    Started { column: usize },
    /// The game was not accepting input
    Ignored,
}

/// One unit of progress made by [`GameController::advance`]. Every step
/// changes the board, so the caller should redraw after each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Fell { from: usize, to: usize },
    Settled { index: usize, outcome: Outcome },
}

/// Owns the board and the turn cycle for a single game.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    names: PlayerNames,
    current_player: Player,
    phase: Phase,
    winning_line: Option<WinningLine>,
}

impl GameController {
    /// Start a game with the first player picked by coin flip
    pub fn new<R: Rng + ?Sized>(names: PlayerNames, rng: &mut R) -> Self {
        Self::with_first_player(names, Player::coin_flip(rng))
    }

    pub fn with_first_player(names: PlayerNames, first: Player) -> Self {
        info!(first = names.get(first), "new game");
        GameController {
            board: Board::new(),
            names,
            current_player: first,
            phase: Phase::AwaitingInput,
            winning_line: None,
        }
    }

    /// Clear the board and flip for the first player again. Names are kept.
    /// Ignored while a piece is falling; returns whether the board was reset.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.is_paused() {
            debug!("reset ignored while a piece is falling");
            return false;
        }
        self.board.reset();
        self.current_player = Player::coin_flip(rng);
        self.phase = Phase::AwaitingInput;
        self.winning_line = None;
        info!(first = self.current_name(), "game reset");
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn current_name(&self) -> &str {
        self.names.get(self.current_player)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a piece is falling
    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Resolving(_))
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Terminal(outcome) => outcome,
            _ => Outcome::InProgress,
        }
    }

    /// The four slots that ended the game, if it was won
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Start dropping the current player's piece into a 0-based column.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropStatus, MoveError> {
        if self.phase != Phase::AwaitingInput {
            debug!(column, phase = ?self.phase, "input ignored");
            return Ok(DropStatus::Ignored);
        }

        let piece = self
            .board
            .add_piece(column, self.current_player)
            .inspect_err(|err| debug!(column, %err, "placement rejected"))?;

        debug!(column, player = self.current_player.name(), "piece placed");
        self.phase = Phase::Resolving(piece);
        Ok(DropStatus::Started { column })
    }

    /// Pointer variant of [`GameController::drop_piece`]
    pub fn click(&mut self, x: u16, geometry: &BoardGeometry) -> Result<DropStatus, MoveError> {
        if self.phase != Phase::AwaitingInput {
            return Ok(DropStatus::Ignored);
        }
        let column = geometry
            .column_at(x)
            .inspect_err(|_| debug!(x, "click outside board"))?;
        self.drop_piece(column)
    }

    /// Run one tick of the fall. Returns `None` when nothing is falling.
    pub fn advance(&mut self) -> Option<Step> {
        let Phase::Resolving(mut piece) = self.phase else {
            return None;
        };

        let from = piece.index();
        if self.board.step_fall(&mut piece) {
            self.phase = Phase::Resolving(piece);
            return Some(Step::Fell {
                from,
                to: piece.index(),
            });
        }

        let index = piece.index();
        let outcome = self.finish_turn(index);
        Some(Step::Settled { index, outcome })
    }

    /// Let the falling piece land without pacing and return the result.
    pub fn resolve(&mut self) -> Option<Outcome> {
        loop {
            match self.advance()? {
                Step::Fell { .. } => continue,
                Step::Settled { outcome, .. } => return Some(outcome),
            }
        }
    }

    fn finish_turn(&mut self, index: usize) -> Outcome {
        let line = win::find_win(&self.board, index);
        let outcome = win::outcome_for(&self.board, line.as_ref());
        match outcome {
            Outcome::InProgress => {
                self.current_player = self.current_player.other();
                self.phase = Phase::AwaitingInput;
                debug!(next = self.current_name(), "turn passed");
            }
            Outcome::Win(player) => {
                self.winning_line = line;
                self.phase = Phase::Terminal(outcome);
                info!(winner = self.names.get(player), "game won");
            }
            Outcome::Tie => {
                self.phase = Phase::Terminal(outcome);
                info!("game tied");
            }
        }
        outcome
    }
}
