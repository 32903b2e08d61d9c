use crate::{Grid, Pos};

/// A rectangular view into a [`Grid`], clipped to the grid's bounds
pub struct GridWindow<'a> {
    tl: Pos,
    br: Pos,
    grid: &'a Grid,
}
impl<'a> GridWindow<'a> {
    const ALIVE: char = '█';
    const DEAD: char = ' ';

    /// Creates a view of at most `rows` x `columns` cells starting at `top_left`
    pub fn new(grid: &'a Grid, top_left: Pos, rows: usize, columns: usize) -> Self {
        let tl = Pos {
            row: top_left.row.min(grid.rows()),
            column: top_left.column.min(grid.columns()),
        };
        let br = Pos {
            row: tl.row.saturating_add(rows).min(grid.rows()),
            column: tl.column.saturating_add(columns).min(grid.columns()),
        };
        Self { tl, br, grid }
    }

    /// A view of the whole grid
    pub fn full(grid: &'a Grid) -> Self {
        Self::new(grid, Pos::default(), grid.rows(), grid.columns())
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.br.row - self.tl.row
    }
    #[inline]
    pub fn columns(&self) -> usize {
        self.br.column - self.tl.column
    }

    /// Alive positions inside the view, relative to its top left corner
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        let tl = self.tl;
        let rows = self.tl.row..self.br.row;
        let columns = self.tl.column..self.br.column;
        self.grid
            .alive()
            .filter(move |pos| rows.contains(&pos.row) && columns.contains(&pos.column))
            .map(move |pos| Pos {
                row: pos.row - tl.row,
                column: pos.column - tl.column,
            })
    }
}

impl std::fmt::Display for GridWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tl.row..self.br.row {
            let cells = &self.grid.row(row)[self.tl.column..self.br.column];
            for cell in cells {
                let c = if cell.is_alive() { Self::ALIVE } else { Self::DEAD };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
