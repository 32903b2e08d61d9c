use std::cmp::Ordering;

/// Relative offsets of the 8 cells surrounding a position
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: usize,
    pub column: usize,
}
impl Pos {
    #[inline]
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Whether this position lies inside a `rows` x `columns` grid
    #[inline]
    pub fn in_bounds(self, rows: usize, columns: usize) -> bool {
        self.row < rows && self.column < columns
    }

    /// Moves this position by a signed offset, or [`None`] if the result
    /// would leave the grid
    #[inline]
    fn offset(self, (dr, dc): (isize, isize), rows: usize, columns: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let column = self.column.checked_add_signed(dc)?;
        let pos = Self { row, column };
        pos.in_bounds(rows, columns).then_some(pos)
    }

    /// The in-bounds positions adjacent to this one (including diagonals)
    ///
    /// Edges are hard: a corner has 3 neighbors, an edge cell 5 and an
    /// interior cell 8. Nothing wraps around to the opposite side.
    pub fn neighbors(self, rows: usize, columns: usize) -> impl Iterator<Item = Pos> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.offset(offset, rows, columns))
    }
}
impl PartialOrd for Pos {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: compare rows first, then columns
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.column, &other.column))
    }
}
