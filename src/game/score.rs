use super::board::Player;

/// Win tally per player. Draws are never counted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Score {
    pub x: u32,
    pub o: u32,
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Returns the tally with one more win for `winner`.
    #[must_use]
    pub fn record_win(self, winner: Player) -> Self {
        match winner {
            Player::X => Self {
                x: self.x.saturating_add(1),
                ..self
            },
            Player::O => Self {
                o: self.o.saturating_add(1),
                ..self
            },
        }
    }
}
