//! Move history list; the snapshot on screen is marked.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{
    game::{BOARD_CELLS, Board},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn move_labels(&self) -> Vec<String> {
        let history = self.session.state().history();

        std::iter::once("Game start".to_string())
            .chain(history.windows(2).enumerate().map(|(i, pair)| {
                match placed_cell(&pair[0], &pair[1]) {
                    Some((index, symbol)) => {
                        format!("Move {}: {} on {}", i + 1, symbol, index + 1)
                    }
                    None => format!("Move {}", i + 1),
                }
            }))
            .collect()
    }

    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: Rect) {
        let current = self.session.state().current_move();

        let items: Vec<ListItem> = self
            .move_labels()
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                if i == current {
                    ListItem::new(format!("> {}", label)).style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(format!("  {}", label))
                }
            })
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title("History")),
            area,
        );
    }
}

/// The cell filled between two consecutive snapshots.
fn placed_cell(before: &Board, after: &Board) -> Option<(usize, char)> {
    (0..BOARD_CELLS).find_map(|i| match (before.get(i), after.get(i)) {
        (Some(a), Some(b)) if a.is_empty() && !b.is_empty() => Some((i, b.symbol())),
        _ => None,
    })
}
