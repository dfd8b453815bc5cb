//! 3x3 grid rendering with winning-line and cursor highlights.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    game::{Cell, Player},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let state = self.session.state();
        let board = state.current_board();
        let verdict = state.current_verdict();

        let frame = Block::default().borders(Borders::ALL).title("Board");
        let inner = frame.inner(area);
        f.render_widget(frame, area);

        let thirds = [
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ];
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(thirds)
            .split(inner);

        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(thirds)
                .split(*row_area);

            for (col, cell_area) in cols.iter().enumerate() {
                let index = row * 3 + col;
                let cell = board.get(index).unwrap_or_default();

                let (text, mut style) = match cell {
                    Cell::Empty => (
                        (index + 1).to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Cell::Taken(player) => (
                        player.to_string(),
                        Style::default()
                            .fg(player_color(player))
                            .add_modifier(Modifier::BOLD),
                    ),
                };
                if verdict.highlights(index) {
                    style = style.bg(Color::Green).fg(Color::Black);
                }

                let border = if self.cursor.index() == index {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };

                let block = Block::default().borders(Borders::ALL).border_style(border);
                let pad = block.inner(*cell_area).height.saturating_sub(1) / 2;
                let mut lines = vec![Line::from(""); pad as usize];
                lines.push(Line::from(text));

                f.render_widget(
                    Paragraph::new(lines)
                        .alignment(Alignment::Center)
                        .style(style)
                        .block(block),
                    *cell_area,
                );
            }
        }
    }
}

pub(in crate::ui) fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Cyan,
        Player::O => Color::Magenta,
    }
}
