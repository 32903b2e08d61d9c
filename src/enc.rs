//! The row/column prefixed text grid format
//!
//! ```text
//! 3,4
//! x, , ,x
//!  ,x,x,
//!  , , ,
//! ```
//!
//! The first line holds `<rows>,<columns>`. Each following line is one row
//! of single character fields joined by commas, `x` for alive and a space
//! for dead. Reading also accepts an uppercase `X` as alive.

use crate::{CellState, Grid, source::SourceError};
use regex::Regex;
use std::{path::Path, sync::LazyLock};

pub trait GridCodec {
    fn encode(&self, grid: &Grid) -> String;
    fn decode(&self, value: &str) -> Result<Grid, SourceError>;
}

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*,\s*(\d+)\s*$").expect("valid header pattern"));

/// Parses a single row of the text format into exactly `columns` cells
///
/// Rows are forgiving: a line containing commas is split into fields and
/// each field's first character decides the state, a line without commas
/// uses one character per cell. Anything that is not `x` is dead, and
/// cells past the end of the line are dead too.
pub fn decode_row(line: &str, columns: usize) -> Vec<CellState> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Box<dyn Iterator<Item = CellState>> = if line.contains(',') {
        Box::new(
            line.split(',')
                .map(|field| field.chars().next().map_or(CellState::Dead, CellState::from_char)),
        )
    } else {
        Box::new(line.chars().map(CellState::from_char))
    };

    let mut row: Vec<CellState> = fields.take(columns).collect();
    row.resize(columns, CellState::Dead);
    row
}

#[derive(Debug, Clone, Copy)]
pub struct CommaGrid {
    separator: char,
}
impl CommaGrid {
    fn parse_header(line: &str) -> Result<(usize, usize), SourceError> {
        let invalid = || SourceError::InvalidHeader(line.to_owned());
        let caps = HEADER.captures(line).ok_or_else(invalid)?;
        let rows: usize = caps[1].parse().map_err(|_| invalid())?;
        let columns: usize = caps[2].parse().map_err(|_| invalid())?;
        Ok((rows, columns))
    }

    fn encode_row(&self, cells: &[CellState]) -> String {
        let mut line = String::with_capacity(cells.len() * 2);
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push(self.separator);
            }
            line.push(cell.symbol());
        }
        line
    }
}
impl Default for CommaGrid {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

impl GridCodec for CommaGrid {
    fn encode(&self, grid: &Grid) -> String {
        let mut out = format!("{},{}\n", grid.rows(), grid.columns());
        for row in 0..grid.rows() {
            out.push_str(&self.encode_row(grid.row(row)));
            out.push('\n');
        }
        out
    }

    fn decode(&self, value: &str) -> Result<Grid, SourceError> {
        let mut lines = value.lines();
        let header = lines.next().unwrap_or_default();
        let (rows, columns) = Self::parse_header(header)?;

        let mut cells = Vec::with_capacity(Grid::cell_count(rows, columns)?);
        for _ in 0..rows {
            // rows missing from the end of the file are dead
            let line = lines.next().unwrap_or_default();
            cells.extend(decode_row(line, columns));
        }
        Ok(Grid::from_cells(rows, columns, cells)?)
    }
}

/// Writes `grid` to `path` in the text grid format
pub fn save_grid<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), SourceError> {
    let path = path.as_ref();
    let encoded = CommaGrid::default().encode(grid);
    std::fs::write(path, encoded).map_err(|source| SourceError::Unwritable {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "saved {}x{} grid to {}",
        grid.rows(),
        grid.columns(),
        path.display()
    );
    Ok(())
}
