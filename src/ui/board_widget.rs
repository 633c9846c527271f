use crate::game::{Board, BoardGeometry, Cell, COLS, ROWS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal columns per slot
pub const SLOT_WIDTH: u16 = 3;
/// Slots plus the left and right frame
pub const BOARD_WIDTH: u16 = SLOT_WIDTH * COLS as u16 + 2;
/// Column numbers, frame top, rows, frame bottom, selection marker
pub const BOARD_HEIGHT: u16 = ROWS as u16 + 4;

const FRAME: Style = Style::new().fg(Color::Yellow);
const SLOT_BG: Color = Color::Yellow;

/// Foreground color of a piece
pub fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Empty => Color::Gray,
        Cell::Black => Color::Black,
        Cell::Red => Color::Red,
    }
}

/// Centered rectangle the board occupies inside `area`
pub fn board_rect(area: Rect) -> Rect {
    let width = BOARD_WIDTH.min(area.width);
    let height = BOARD_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Pointer geometry for a board drawn at `rect`
pub fn geometry_for(rect: Rect) -> BoardGeometry {
    BoardGeometry::new(rect.x + 1, SLOT_WIDTH)
}

/// Draw the board with a column selector and optional highlighted slots.
/// Returns the geometry used so pointer input can be mapped back to columns.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: Option<usize>,
    highlight: &[usize],
    area: Rect,
) -> BoardGeometry {
    let rect = board_rect(area);
    let inner = SLOT_WIDTH as usize * COLS;
    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);

    let mut numbers = vec![Span::raw(" ")];
    for col in 0..COLS {
        let style = if selected_column == Some(col) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        numbers.push(Span::styled(format!(" {} ", col + 1), style));
    }
    lines.push(Line::from(numbers));

    lines.push(Line::styled(format!("╔{}╗", "═".repeat(inner)), FRAME));

    for (row, cells) in board.cells().chunks(COLS).enumerate() {
        let mut spans = vec![Span::styled("║", FRAME)];
        for (col, &cell) in cells.iter().enumerate() {
            let mut style = Style::default().fg(cell_color(cell)).bg(SLOT_BG);
            if highlight.contains(&(row * COLS + col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK);
            }
            let symbol = if cell == Cell::Empty { " ○ " } else { " ● " };
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::styled("║", FRAME));
        lines.push(Line::from(spans));
    }

    lines.push(Line::styled(format!("╚{}╝", "═".repeat(inner)), FRAME));

    let mut marker = vec![Span::raw(" ")];
    for col in 0..COLS {
        if selected_column == Some(col) {
            marker.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            marker.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(marker));

    frame.render_widget(Paragraph::new(lines), rect);
    geometry_for(rect)
}
