use thiserror::Error;

pub type LifeResult<T> = Result<T, LifeError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LifeError {
    #[error("Grid size {size} is too small, expected at least {min}")]
    InvalidGridSize { size: usize, min: usize },

    #[error("Pattern at ({x}, {y}) does not fit in a {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
}
