use std::mem;

use crate::cell::CellState;
use crate::grid::Grid;
use crate::rules;

/// The state `(x, y)` will have next generation, read off `grid` as it is now.
pub fn next_cell(grid: &Grid, x: usize, y: usize) -> CellState {
    rules::next_state(grid.get(x, y), grid.live_neighbors(x, y))
}

/// Write the generation after `current` into `next`.
///
/// Every cell of `next` is overwritten and only `current` is ever read, so no cell can see a
/// neighbor's updated state.
///
/// # Panics
/// If the grids are not the same size.
pub fn step_into(current: &Grid, next: &mut Grid) {
    assert_eq!(current.size(), next.size(), "grid sizes differ");

    for (x, y, _) in current.iter() {
        next.set(x, y, next_cell(current, x, y));
    }
}

/// The generation after `grid`
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    step_into(grid, &mut next);

    next
}

/// A grid advanced in place, one generation at a time.
///
/// Two buffers are kept. During a step `front` is only read and `back` is only written, then the
/// two are swapped, so no allocation happens after construction.
pub struct World {
    /// The current generation
    front: Grid,

    /// Scratch space for the next generation. Its contents are meaningless between steps.
    back: Grid,

    /// How many times [`World::advance`] was called
    generation: u64,
}

impl World {
    pub fn new(grid: Grid) -> Self {
        let back = grid.clone();

        Self {
            front: grid,
            back,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.front
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.front.population()
    }

    /// Advance by one generation
    pub fn advance(&mut self) {
        step_into(&self.front, &mut self.back);
        mem::swap(&mut self.front, &mut self.back);

        self.generation += 1;
    }

    pub fn into_grid(self) -> Grid {
        self.front
    }
}
