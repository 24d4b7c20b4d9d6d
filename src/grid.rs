use std::fmt;

use rand::Rng;

use crate::cell::CellState;
use crate::error::LifeError;
use crate::error::LifeResult;

/// A square `n x n` matrix of cells whose opposite edges touch.
///
/// Cells are stored row-major. `(x, y)` is row `x`, column `y`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,

    /// Side length
    n: usize,
}

impl Grid {
    /// Create an all-dead `n x n` grid
    pub fn new(n: usize) -> LifeResult<Self> {
        if n == 0 {
            return Err(LifeError::InvalidGridSize { size: n, min: 1 });
        }

        Ok(Self {
            cells: vec![CellState::Dead; n * n],
            n,
        })
    }

    /// Create an `n x n` grid where each cell is alive with probability one half, drawing from
    /// `rng`.
    pub fn random_with<R: Rng + ?Sized>(n: usize, rng: &mut R) -> LifeResult<Self> {
        let mut grid = Self::new(n)?;

        for cell in grid.cells.iter_mut() {
            *cell = CellState::from(rng.gen_bool(0.5));
        }

        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// # Panics
    /// If `(x, y)` is outside the grid.
    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    /// # Panics
    /// If `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        let i = self.index(x, y);
        self.cells[i] = state;
    }

    /// Iterate over every cell as `(x, y, state)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &state)| (i / self.n, i % self.n, state))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// The 8 cells around `(x, y)`, with both coordinates wrapped modulo `n`.
    ///
    /// ```notrust
    ///   0 1 2
    ///   3 . 4
    ///   5 6 7
    /// ```
    ///
    /// On grids smaller than 3 the same cell shows up more than once, and on a `1 x 1` grid every
    /// neighbor is the cell itself. That's intended.
    pub fn neighbor_coords(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        let n = self.n;

        // `+ n - 1` instead of `- 1` so we never underflow
        let (up, down) = ((x + n - 1) % n, (x + 1) % n);
        let (left, right) = ((y + n - 1) % n, (y + 1) % n);

        [
            (up, left),
            (up, y),
            (up, right),
            (x, left),
            (x, right),
            (down, left),
            (down, y),
            (down, right),
        ]
    }

    /// Live neighbor count of `(x, y)`
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.neighbor_coords(x, y)
            .iter()
            .map(|&(x, y)| self.get(x, y).weight())
            .sum()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.n, "x is out of bounds");
        assert!(y < self.n, "y is out of bounds");

        x * self.n + y
    }
}

/// Draws live cells as `o` and dead cells as `.`, one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.n).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for cell in row {
                let c = if cell.is_alive() { 'o' } else { '.' };
                write!(f, "{c}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.n, self.n)?;
        write!(f, "{self}")
    }
}
