//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{Mark, Position, Square, Status, rules};

/// Renders the whole screen from application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(
        "arrows: move  enter: play/jump  1-9: play  tab: switch pane  home/end: first/last  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let board = game.current_board();
    let winning = rules::winning_line(board).map(|(_, line)| line);
    let focused = app.focus() == Focus::Board;

    let mut lines = vec![Line::default()];
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::styled(
                "───┼───┼───",
                Style::default().fg(Color::DarkGray),
            ));
        }
        let mut spans = Vec::new();
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            if let Some(pos) = Position::at(row, col) {
                let on_line = winning.is_some_and(|line| line.contains(&pos));
                let under_cursor = focused && pos == app.cursor();
                spans.push(cell_span(board.get(pos), pos, app.show_hints(), on_line, under_cursor));
            }
        }
        lines.push(Line::from(spans));
    }

    let title = format!(" Board (move #{}) ", game.current_move());
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(pane_block(title, focused));
    frame.render_widget(paragraph, area);
}

fn cell_span(
    square: Square,
    pos: Position,
    show_hints: bool,
    on_line: bool,
    under_cursor: bool,
) -> Span<'static> {
    let (text, mut style) = match square {
        Square::Occupied(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Empty if show_hints => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => ("   ".to_string(), Style::default()),
    };

    if on_line {
        style = style.bg(Color::Green);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let focused = app.focus() == Focus::History;

    let items: Vec<ListItem> = game
        .move_labels()
        .map(|label| {
            let viewing = *label.index() == game.current_move();
            let marker = if viewing { "▶ " } else { "  " };
            let style = if viewing {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(format!("{}{}", marker, label), style))
        })
        .collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(pane_block(" History ".to_string(), focused))
        .highlight_style(highlight);

    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let status = game.status();

    let style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };

    let mut spans = vec![Span::styled(status.to_string(), style)];
    if game.winner().is_none() && rules::is_full(game.current_board()) {
        spans.push(Span::raw(" (board full)"));
    }
    if !game.is_at_latest() {
        spans.push(Span::styled(
            format!(
                "  viewing move #{} of {}",
                game.current_move(),
                game.history().len() - 1
            ),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(message) = app.message() {
        spans.push(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_history() {
        let screen = render(&App::new(true));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
    }

    #[test]
    fn test_renders_winner_and_time_travel_note() {
        let mut app = App::new(true);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
        }
        assert!(render(&app).contains("Winner: X"));

        app.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        let screen = render(&app);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("viewing move #0 of 5"));
        assert!(screen.contains("Go to move #5"));
    }
}
