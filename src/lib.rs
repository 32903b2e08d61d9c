//! Conway's Game of Life on a fixed-size grid with hard edges.

pub mod driver;
pub mod enc;
pub mod engine;
pub mod grid;
pub mod pos;
pub mod source;
pub mod stats;

pub use driver::{Command, DriverOptions, Frontend, Simulation, SimulationError};
pub use enc::{CommaGrid, GridCodec, save_grid};
pub use engine::{GridWindow, live_neighbor_count, next_generation};
pub use grid::{CellState, Grid, GridError};
pub use pos::Pos;
pub use source::{FillMode, Probability, SourceError, load_grid, read_manual_grid};
