use crate::game::{Board, BoardStatus, Cell, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_status(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, game_state, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

/// Announcement line for the current status.
fn status_text(game_state: &GameState) -> String {
    match game_state.status() {
        BoardStatus::Idle | BoardStatus::PieceFalling => {
            format!("{} player's turn", game_state.active_player())
        }
        BoardStatus::RedWins => "Red player wins!".to_string(),
        BoardStatus::YellowWins => "Yellow player wins!".to_string(),
        BoardStatus::Tie => "Tie!".to_string(),
    }
}

fn render_status(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let color = match game_state.status() {
        BoardStatus::Tie => Color::White,
        _ => player_color(game_state.active_player()),
    };

    let header = Paragraph::new(status_text(game_state))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

/// Column labels over the board; full columns and finished games are greyed
/// out, the selected column takes the active player's color.
fn dropper_line(game_state: &GameState, selected_column: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        let style = if !game_state.can_select(col) {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else if col == selected_column {
            Style::default()
                .fg(player_color(game_state.active_player()))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(label, style));
    }
    spans.push(Span::raw("   ")); // Suffix padding to match "║  "
    Line::from(spans)
}

fn board_lines(board: &Board) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 2);
    lines.push(Line::from("  ╔═════════════════════╗  "));
    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw("║  "));
        lines.push(Line::from(row_spans));
    }
    lines.push(Line::from("  ╚═════════════════════╝  "));
    lines
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let mut lines = vec![dropper_line(game_state, selected_column)];
    lines.extend(board_lines(game_state.board()));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(
    frame: &mut Frame,
    game_state: &GameState,
    message: &Option<String>,
    area: Rect,
) {
    let text = match message {
        Some(text) => text.as_str(),
        None if game_state.is_game_over() => "Press 'r' to play again",
        None => "",
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  1-7: Drop in column  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
