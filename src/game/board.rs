use std::fmt;

pub const BOARD_CELLS: usize = 9;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player whose turn it is after `move_number` moves.
    pub fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Taken(Player::X) => 'X',
            Cell::Taken(Player::O) => 'O',
        }
    }
}

/// A 3x3 snapshot, indexed 0..9 row-major.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from `(index, player)` placements. Later placements
    /// overwrite earlier ones; out-of-range indices are ignored.
    pub fn from_placements(placements: &[(usize, Player)]) -> Self {
        let mut board = Self::new();
        for &(index, player) in placements {
            if let Some(cell) = board.cells.get_mut(index) {
                *cell = Cell::Taken(player);
            }
        }
        board
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Copy of this board with `index` taken by `player`.
    pub fn with_move(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = Cell::Taken(player);
        }
        next
    }
}
