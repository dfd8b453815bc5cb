//! Scoreboard panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::Player, ui::app::App};

use super::board::player_color;

impl App {
    pub(in crate::ui) fn draw_score(&self, f: &mut Frame, area: Rect) {
        let score = self.session.state().score();

        let lines: Vec<Line> = [Player::X, Player::O]
            .into_iter()
            .map(|player| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", player),
                        Style::default().fg(player_color(player)),
                    ),
                    Span::raw(score.get(player).to_string()),
                ])
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Score")),
            area,
        );
    }
}
