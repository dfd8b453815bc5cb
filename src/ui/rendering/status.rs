use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::Verdict, ui::app::App};

impl App {
    pub(in crate::ui) fn status_text(&self, now: Instant) -> String {
        let state = self.session.state();

        let mut text = match state.current_verdict() {
            Verdict::Win { player, .. } => format!("Winner: {}", player),
            Verdict::Draw => "Draw!".to_string(),
            Verdict::Ongoing => format!("Next player: {}", state.current_turn()),
        };

        if let Some(left) = self.session.time_until_restart(now) {
            text.push_str(&format!(" | restarting in {:.1}s", left.as_secs_f32()));
        }

        text
    }

    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let color = match self.session.state().current_verdict() {
            Verdict::Win { .. } => Color::Green,
            Verdict::Draw => Color::Yellow,
            Verdict::Ongoing => Color::White,
        };

        f.render_widget(
            Paragraph::new(self.status_text(Instant::now()))
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: Rect) {
        let help = "1-9 / arrows+Enter = play | r = restart | s = reset score | [ ] = history | q = quit";

        f.render_widget(
            Paragraph::new(help)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Keys")),
            area,
        );
    }
}
