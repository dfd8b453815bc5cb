mod board;
mod logs;
mod moves;
mod score;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // status
                Constraint::Min(12),   // board + side panels
                Constraint::Length(3), // key help
                Constraint::Length(8), // logs
            ])
            .split(f.area());

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(4)])
            .split(middle[1]);

        self.draw_status(f, outer[0]);
        self.draw_board(f, middle[0]);
        self.draw_score(f, side[0]);
        self.draw_moves(f, side[1]);
        self.draw_help(f, outer[2]);
        self.draw_logs(f, outer[3]);
    }
}
