pub mod rule;
mod window;

pub use self::window::GridWindow;
use crate::{Grid, Pos};

/// Counts the alive cells adjacent to `pos`, including diagonals
///
/// The cell itself is never counted, and neither is anything off the grid:
/// edges are hard, so corner and edge cells simply have fewer candidates.
/// The result is always in `0..=8`.
pub fn live_neighbor_count(grid: &Grid, pos: Pos) -> u8 {
    pos.neighbors(grid.rows(), grid.columns())
        .filter(|&n| grid.is_alive(n))
        .count() as u8
}

/// Derives generation N+1 from generation N
///
/// `current` is only read. Every next state is computed from `current` and
/// written into a separate buffer, so no cell ever sees a partially updated
/// generation. The result has the same dimensions as `current`.
pub fn next_generation(current: &Grid) -> Grid {
    current.map(|pos, state| rule::next_state(state, live_neighbor_count(current, pos)))
}
