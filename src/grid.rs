//! The grid store: one immutable snapshot of every cell for a generation.

use crate::Pos;
use std::ops::Index;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}
impl CellState {
    /// Parses a single persisted/typed character, `x` (either case) is alive
    /// and everything else is dead
    #[inline]
    pub fn from_char(c: char) -> Self {
        match c {
            'x' | 'X' => Self::Alive,
            _ => Self::Dead,
        }
    }

    /// The character used for this state in the text grid format
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Self::Alive => 'x',
            Self::Dead => ' ',
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}
impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    EmptyDimension { rows: usize, columns: usize },
    #[error("a {rows}x{columns} grid does not fit in memory")]
    TooLarge { rows: usize, columns: usize },
    #[error("expected {expected} cells for the grid, got {actual}")]
    CellCount { expected: usize, actual: usize },
}

/// A fixed-size rectangular grid of cells
///
/// Cells are stored row-major in a flat buffer addressed by
/// `row * columns + column`. A `Grid` has no mutators: every generation is
/// a new value, see [`crate::next_generation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Number of cells in a `rows` x `columns` grid
    ///
    /// Fails for empty dimensions, and for grids whose buffer would exceed
    /// `isize::MAX` bytes.
    pub fn cell_count(rows: usize, columns: usize) -> Result<usize, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyDimension { rows, columns });
        }
        let max_cells = isize::MAX as usize / std::mem::size_of::<CellState>();
        rows.checked_mul(columns)
            .filter(|&count| count <= max_cells)
            .ok_or(GridError::TooLarge { rows, columns })
    }

    /// Creates a grid where every cell is dead
    pub fn dead(rows: usize, columns: usize) -> Result<Self, GridError> {
        let count = Self::cell_count(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![CellState::Dead; count],
        })
    }

    /// Creates a grid by asking `f` for the state of each position, in
    /// row-major order
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(Pos) -> CellState,
    {
        let count = Self::cell_count(rows, columns)?;
        let mut cells = Vec::with_capacity(count);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(f(Pos { row, column }));
            }
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Creates a grid from a row-major cell buffer
    pub fn from_cells(
        rows: usize,
        columns: usize,
        cells: Vec<CellState>,
    ) -> Result<Self, GridError> {
        let expected = Self::cell_count(rows, columns)?;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Creates a grid with the given positions alive
    ///
    /// Positions outside of the grid are ignored.
    pub fn from_alive<I>(rows: usize, columns: usize, alive: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Pos>,
    {
        let mut grid = Self::dead(rows, columns)?;
        for pos in alive {
            if pos.in_bounds(rows, columns) {
                let idx = grid.index_of(pos);
                grid.cells[idx] = CellState::Alive;
            }
        }
        Ok(grid)
    }

    #[inline]
    fn index_of(&self, pos: Pos) -> usize {
        pos.row * self.columns + pos.column
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Option<CellState> {
        pos.in_bounds(self.rows, self.columns)
            .then(|| self.cells[self.index_of(pos)])
    }

    /// Whether the cell at `pos` is alive; off-grid positions are never alive
    #[inline]
    pub fn is_alive(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(CellState::is_alive)
    }

    /// The cells of a single row, left to right
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[CellState] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Iterates every cell with its position, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Pos, CellState)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().map(move |(i, &state)| {
            let pos = Pos {
                row: i / columns,
                column: i % columns,
            };
            (pos, state)
        })
    }

    /// Iterates the alive positions in row-major order
    pub fn alive(&self) -> impl Iterator<Item = Pos> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_alive())
            .map(|(pos, _)| pos)
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Builds a new grid of the same dimensions from the state of each cell
    ///
    /// `f` only ever sees this grid; the results go into a fresh buffer.
    pub fn map<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(Pos, CellState) -> CellState,
    {
        let cells = self.iter().map(|(pos, state)| f(pos, state)).collect();
        Grid {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    /// Derives the following generation, see [`crate::next_generation`]
    #[inline]
    pub fn next_generation(&self) -> Grid {
        crate::engine::next_generation(self)
    }
}

impl Index<Pos> for Grid {
    type Output = CellState;

    fn index(&self, pos: Pos) -> &Self::Output {
        assert!(
            pos.in_bounds(self.rows, self.columns),
            "position {:?} outside of {}x{} grid",
            pos,
            self.rows,
            self.columns
        );
        &self.cells[self.index_of(pos)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::dead(0, 3),
            Err(GridError::EmptyDimension { rows: 0, columns: 3 })
        );
        assert!(Grid::from_fn(3, 0, |_| CellState::Dead).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            Grid::dead(usize::MAX, 2),
            Err(GridError::TooLarge { rows: usize::MAX, columns: 2 })
        );
        let half = 1 << (usize::BITS / 2);
        assert!(matches!(
            Grid::from_fn(half, half, |_| CellState::Dead),
            Err(GridError::TooLarge { .. })
        ));
        assert!(matches!(
            Grid::from_cells(usize::MAX, usize::MAX, Vec::new()),
            Err(GridError::TooLarge { .. })
        ));
        assert_eq!(Grid::cell_count(3, 4), Ok(12));
    }

    #[test]
    fn from_cells_checks_length() {
        let err = Grid::from_cells(2, 2, vec![CellState::Dead; 3]).unwrap_err();

        assert_eq!(err, GridError::CellCount { expected: 4, actual: 3 });
    }

    #[test]
    fn from_alive_ignores_out_of_bounds() {
        let grid = Grid::from_alive(2, 3, [Pos::new(1, 2), Pos::new(5, 5)]).unwrap();

        assert_eq!(grid.alive().collect::<Vec<_>>(), vec![Pos::new(1, 2)]);
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn addressing_is_row_major() {
        let grid = Grid::from_fn(2, 3, |pos| CellState::from(pos.row == 1 && pos.column == 0))
            .unwrap();

        assert_eq!(grid[Pos::new(1, 0)], CellState::Alive);
        assert_eq!(
            grid.row(1),
            &[CellState::Alive, CellState::Dead, CellState::Dead]
        );
        assert_eq!(grid.get(Pos::new(2, 0)), None);
        assert!(!grid.is_alive(Pos::new(0, 3)));
    }

    #[test]
    fn cell_state_chars() {
        assert_eq!(CellState::from_char('x'), CellState::Alive);
        assert_eq!(CellState::from_char('X'), CellState::Alive);
        assert_eq!(CellState::from_char('o'), CellState::Dead);
        assert_eq!(CellState::Alive.symbol(), 'x');
        assert_eq!(CellState::Dead.symbol(), ' ');
    }
}
