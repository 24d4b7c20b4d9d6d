/// State of a single cell. There are exactly two.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// `1` for a live cell and `0` for a dead one. This is what gets summed when counting
    /// neighbors.
    pub const fn weight(self) -> u8 {
        match self {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
