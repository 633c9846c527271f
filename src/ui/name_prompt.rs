use crate::game::{Player, PlayerNames};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MAX_NAME_LEN: usize = 24;

/// Asks for both player names, one field at a time.
#[derive(Debug, Clone)]
pub struct NamePrompt {
    fields: [Option<String>; 2],
    active: usize,
}

/// What the prompt wants after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Pending,
    Done(PlayerNames),
}

impl NamePrompt {
    /// Start with both fields filled in with suggestions
    pub fn new(player1: &str, player2: &str) -> Self {
        NamePrompt {
            fields: [Some(player1.to_string()), Some(player2.to_string())],
            active: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptEvent {
        match key.code {
            KeyCode::Char(c) if !c.is_control() => {
                let field = self.fields[self.active].get_or_insert_with(String::new);
                if field.chars().count() < MAX_NAME_LEN {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.fields[self.active].as_mut() {
                    field.pop();
                }
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
                self.active = 1 - self.active;
            }
            KeyCode::Enter => return self.next(),
            KeyCode::Esc => {
                // Cancelled answers fall back to the default name
                self.fields[self.active] = None;
                return self.next();
            }
            _ => {}
        }
        PromptEvent::Pending
    }

    fn next(&mut self) -> PromptEvent {
        if self.active == 0 {
            self.active = 1;
            return PromptEvent::Pending;
        }
        PromptEvent::Done(PlayerNames::new(
            self.fields[0].as_deref(),
            self.fields[1].as_deref(),
        ))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Player 1
                Constraint::Length(3), // Player 2
                Constraint::Min(0),
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Who is playing?")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Connect Four"));
        frame.render_widget(title, chunks[0]);

        for (i, player) in [Player::Black, Player::Red].into_iter().enumerate() {
            let text = self.fields[i].as_deref().unwrap_or("");
            let mut border = Style::default();
            let mut spans = vec![Span::raw(text.to_string())];
            if i == self.active {
                border = border.fg(Color::Cyan);
                spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
            }
            let field = Paragraph::new(Line::from(spans)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!("Player {} ({})", i + 1, player.name())),
            );
            frame.render_widget(field, chunks[i + 1]);
        }

        let controls = Paragraph::new("Enter: Next/Start  |  Tab: Switch  |  Esc: Use default")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Controls"));
        frame.render_widget(controls, chunks[4]);
    }
}
