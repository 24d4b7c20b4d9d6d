use std::fmt;

use tracing::debug;

use crate::error::LifeError;
use crate::error::LifeResult;
use crate::grid::Grid;
use crate::pattern::Pattern;
use crate::pattern::STAMP_SIZE;
use crate::pattern::stamp_pattern;

/// How the first generation is seeded
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every cell is a coin flip
    #[default]
    Random,

    /// A single pattern on an otherwise dead grid
    Pattern(Pattern),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Random => write!(f, "random"),
            Mode::Pattern(p) => write!(f, "{p}"),
        }
    }
}

/// An `n x n` grid of coin flips. There is no way to seed this, every run is different.
pub fn random_grid(n: usize) -> LifeResult<Grid> {
    Grid::random_with(n, &mut rand::thread_rng())
}

/// Build the first generation.
///
/// For patterns, `offset` is the top left corner of the stamp. If it's `None`, the pattern's
/// [`Pattern::default_offset`] is used. `offset` is ignored in [`Mode::Random`].
pub fn initialize(mode: Mode, n: usize, offset: Option<(usize, usize)>) -> LifeResult<Grid> {
    match mode {
        Mode::Random => random_grid(n),
        Mode::Pattern(pattern) => {
            if n < STAMP_SIZE {
                return Err(LifeError::InvalidGridSize {
                    size: n,
                    min: STAMP_SIZE,
                });
            }

            let (x, y) = offset.unwrap_or_else(|| pattern.default_offset(n));
            debug!(%pattern, x, y, "Stamping pattern");

            let mut grid = Grid::new(n)?;
            stamp_pattern(pattern, x, y, &mut grid)?;

            Ok(grid)
        }
    }
}
