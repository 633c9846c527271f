use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{
    BoardGeometry, DropStatus, GameController, Outcome, Player, PlayerNames, Step, COLS,
};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::name_prompt::{NamePrompt, PromptEvent};

const IDLE_POLL: Duration = Duration::from_millis(100);

/// The game only exists once both names are known.
enum Screen {
    Names(NamePrompt),
    Playing(GameController),
}

pub struct App {
    rng: StdRng,
    screen: Screen,
    prompt_names: bool,
    drop_interval: Duration,
    last_step: Instant,
    geometry: Option<BoardGeometry>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the app from configuration. Names from the config seed the
    /// prompt, or are used as-is when the prompt is disabled.
    pub fn new(config: &AppConfig) -> Self {
        let mut rng = StdRng::from_os_rng();
        let names = PlayerNames::new(
            Some(config.players.player1.as_str()),
            Some(config.players.player2.as_str()),
        );
        let screen = if config.players.prompt {
            Screen::Names(NamePrompt::new(
                names.get(Player::Black),
                names.get(Player::Red),
            ))
        } else {
            Screen::Playing(GameController::new(names, &mut rng))
        };

        App {
            rng,
            screen,
            prompt_names: config.players.prompt,
            drop_interval: Duration::from_millis(config.game.drop_speed_ms),
            last_step: Instant::now(),
            geometry: None,
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick();
        }
        Ok(())
    }

    fn game(&self) -> Option<&GameController> {
        match &self.screen {
            Screen::Playing(game) => Some(game),
            Screen::Names(_) => None,
        }
    }

    fn is_falling(&self) -> bool {
        self.game().is_some_and(GameController::is_paused)
    }

    /// Wait for input, but never past the next gravity step
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = if self.is_falling() {
            self.drop_interval.saturating_sub(self.last_step.elapsed())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Advance a falling piece once its delay has passed
    fn tick(&mut self) {
        if self.last_step.elapsed() < self.drop_interval {
            return;
        }
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        if !game.is_paused() {
            return;
        }
        self.last_step = Instant::now();

        if let Some(Step::Settled { index, outcome }) = game.advance() {
            debug!(index, ?outcome, "piece settled");
            if outcome.is_terminal() {
                self.message = Some("Press 'r' to play again.".to_string());
            }
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Screen::Names(prompt) = &mut self.screen {
            if let PromptEvent::Done(names) = prompt.handle_key(key) {
                info!(
                    player1 = names.get(Player::Black),
                    player2 = names.get(Player::Red),
                    "names entered"
                );
                self.screen = Screen::Playing(GameController::new(names, &mut self.rng));
                self.selected_column = COLS / 2;
                self.message = None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_in(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let column = c as usize - '1' as usize;
                self.selected_column = column;
                self.drop_in(column);
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    /// Start over once the falling piece has landed. With the prompt enabled
    /// the names are asked again, seeded with the current ones.
    fn restart(&mut self) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        if game.is_paused() {
            debug!("restart ignored while a piece is falling");
            return;
        }

        if self.prompt_names {
            let names = game.names();
            let prompt = NamePrompt::new(names.get(Player::Black), names.get(Player::Red));
            self.screen = Screen::Names(prompt);
            self.message = None;
        } else if game.reset(&mut self.rng) {
            self.selected_column = COLS / 2;
            self.message = Some("New game started!".to_string());
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (Screen::Playing(game), Some(geometry)) = (&mut self.screen, self.geometry) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let result = game.click(mouse.column, &geometry);
                if let Ok(column) = geometry.column_at(mouse.column) {
                    self.selected_column = column;
                }
                self.report(result);
            }
            MouseEventKind::Moved => {
                if let Ok(column) = geometry.column_at(mouse.column) {
                    self.selected_column = column;
                }
            }
            _ => {}
        }
    }

    fn drop_in(&mut self, column: usize) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        let result = game.drop_piece(column);
        self.report(result);
    }

    fn report(&mut self, result: Result<DropStatus, MoveError>) {
        match result {
            Ok(DropStatus::Started { .. }) => {
                self.message = None;
                self.last_step = Instant::now();
            }
            Ok(DropStatus::Ignored) => {
                let over = self
                    .game()
                    .is_some_and(|game| game.outcome() != Outcome::InProgress);
                if over {
                    self.message = Some("Game over! Press 'r' to restart.".to_string());
                }
            }
            Err(MoveError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(MoveError::OutOfBoardBounds) => {}
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        match &self.screen {
            Screen::Names(prompt) => prompt.render(frame, area),
            Screen::Playing(game) => {
                self.geometry = Some(super::game_view::render(
                    frame,
                    game,
                    self.selected_column,
                    &self.message,
                ));
            }
        }
    }
}
