use std::fmt;

use crate::cell::CellState;
use crate::error::LifeError;
use crate::error::LifeResult;
use crate::grid::Grid;

/// Side length of every pattern stamp
pub const STAMP_SIZE: usize = 3;

pub type Stamp = [[bool; STAMP_SIZE]; STAMP_SIZE];

const GLIDER: Stamp = [
    [false, false, true],
    [true, false, true],
    [false, true, true],
];

const BLINKER: Stamp = [
    [false, true, false],
    [false, true, false],
    [false, true, false],
];

/// Named seed shapes
///
/// See: https://conwaylife.com/wiki/Glider and https://conwaylife.com/wiki/Blinker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Travels one cell down and one cell right every 4 generations
    Glider,

    /// A vertical bar of 3. Oscillates with period 2.
    Blinker,
}

impl Pattern {
    pub const fn stamp(self) -> &'static Stamp {
        match self {
            Pattern::Glider => &GLIDER,
            Pattern::Blinker => &BLINKER,
        }
    }

    /// Where a pattern goes on an `n x n` grid when no offset is given
    pub const fn default_offset(self, n: usize) -> (usize, usize) {
        match self {
            Pattern::Glider => (1, 1),
            Pattern::Blinker => (n / 2, n / 2),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Glider => write!(f, "glider"),
            Pattern::Blinker => write!(f, "blinker"),
        }
    }
}

/// Overwrite the `3 x 3` block with top left corner `(x, y)` with `pattern`. Dead stamp cells are
/// written too, so whatever was under the stamp is cleared.
///
/// The stamp never wraps around the grid. If it would not fit, the grid is left untouched and
/// [`LifeError::OutOfBounds`] is returned.
pub fn stamp_pattern(pattern: Pattern, x: usize, y: usize, grid: &mut Grid) -> LifeResult<()> {
    let n = grid.size();

    let fits = |offset: usize| offset.checked_add(STAMP_SIZE).is_some_and(|end| end <= n);
    if !fits(x) || !fits(y) {
        return Err(LifeError::OutOfBounds { x, y, size: n });
    }

    for (dx, row) in pattern.stamp().iter().enumerate() {
        for (dy, &alive) in row.iter().enumerate() {
            grid.set(x + dx, y + dy, CellState::from(alive));
        }
    }

    Ok(())
}
