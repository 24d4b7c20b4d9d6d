pub mod camera;
pub mod cell;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod frontend;
pub mod grid;
pub mod init;
pub mod io;
pub mod pattern;
pub mod recorder;
pub mod rules;
pub mod world;

pub use cell::CellState;
pub use error::LifeError;
pub use grid::Grid;
pub use init::Mode;
pub use init::initialize;
pub use init::random_grid;
pub use pattern::Pattern;
pub use pattern::stamp_pattern;
pub use world::World;
pub use world::step;
