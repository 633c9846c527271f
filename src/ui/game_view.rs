use crate::game::{BoardGeometry, GameController, Outcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, BOARD_HEIGHT};

const BANNER: Color = Color::Rgb(255, 226, 61);
const CONTROLS: &str = "Click/1-7: Drop  |  ←/→ + Enter: Drop  |  R: Restart  |  Q: Quit";

/// Draw the game screen. Returns where the board landed so clicks can be
/// mapped to columns.
pub fn render(
    frame: &mut Frame,
    game: &GameController,
    selected_column: usize,
    message: &Option<String>,
) -> BoardGeometry {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Min(BOARD_HEIGHT),        // Board
            Constraint::Length(3),                // Message
            Constraint::Length(3),                // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);

    let selected = (!game.outcome().is_terminal()).then_some(selected_column);
    let highlight = game
        .winning_line()
        .map(|line| line.cells.to_vec())
        .unwrap_or_default();
    let geometry =
        board_widget::render_board(frame, game.board(), selected, &highlight, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    geometry
}

fn player_style(player: Player) -> Style {
    match player {
        Player::Black => Style::default().fg(Color::Black).bg(Color::Gray),
        Player::Red => Style::default().fg(Color::Red),
    }
}

fn render_header(frame: &mut Frame, game: &GameController, area: ratatui::layout::Rect) {
    let (status, style) = match game.outcome() {
        Outcome::InProgress => (
            format!("{}'s Turn", game.current_name()),
            player_style(game.current_player()),
        ),
        Outcome::Win(player) => (
            format!("{} Wins!", game.names().get(player)),
            Style::default().fg(BANNER),
        ),
        Outcome::Tie => ("It's a tie!".to_string(), Style::default().fg(BANNER)),
    };

    let header = Paragraph::new(Line::styled(status, style.add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(CONTROLS)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
