//! Producers of generation 0: random and patterned fills, grid files, and
//! rows typed in by hand.

use crate::{
    CellState, Grid, GridError, Pos,
    enc::{self, CommaGrid, GridCodec},
};
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unable to open grid file {}: {source}", .path.display())]
    Unavailable { path: PathBuf, source: io::Error },
    #[error("unable to write grid file {}: {source}", .path.display())]
    Unwritable { path: PathBuf, source: io::Error },
    #[error("unable to read grid: {0}")]
    Read(#[from] io::Error),
    #[error("expected a `<rows>,<columns>` header, got {0:?}")]
    InvalidHeader(String),
    #[error("probability of life must be between 0 and 1, got {0}")]
    InvalidProbability(f64),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A chance of life, always within `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);
impl Probability {
    pub fn new(value: f64) -> Result<Self, SourceError> {
        if !(0.0..=1.0).contains(&value) {
            // NaN also lands here
            return Err(SourceError::InvalidProbability(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillMode {
    /// Each cell is independently alive with the given probability
    Random(Probability),
    Alternating,
    All,
    Empty,
}
impl FillMode {
    pub const DEFAULT_PROBABILITY: f64 = 0.1;

    pub fn random(probability: f64) -> Result<Self, SourceError> {
        Probability::new(probability).map(Self::Random)
    }

    /// The chance of life of a random fill
    pub fn probability(&self) -> Option<f64> {
        match self {
            Self::Random(p) => Some(p.value()),
            _ => None,
        }
    }

    /// Parses a fill name, random fills use `probability`
    pub fn new<S: AsRef<str>>(s: S, probability: f64) -> Result<Option<Self>, SourceError> {
        Ok(match s.as_ref() {
            "random" => Some(Self::random(probability)?),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        })
    }

    fn fill_cell<R: rand::Rng>(&self, cell: Pos, rng: &mut R) -> CellState {
        match *self {
            Self::Random(probability) => rng.random_bool(probability.value()).into(),
            Self::Alternating => ((cell.row + cell.column) % 2 == 0).into(),
            Self::All => CellState::Alive,
            Self::Empty => CellState::Dead,
        }
    }

    pub fn create_grid<R: rand::Rng>(
        &self,
        rows: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<Grid, SourceError> {
        let grid = Grid::from_fn(rows, columns, |cell| self.fill_cell(cell, rng))?;
        log::debug!(
            "filled {}x{} grid ({:?}), {} alive",
            rows,
            columns,
            self,
            grid.alive_count()
        );
        Ok(grid)
    }
}
impl Default for FillMode {
    fn default() -> Self {
        Self::Random(Probability(Self::DEFAULT_PROBABILITY))
    }
}

/// Reads a grid from a file in the text grid format
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid, SourceError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = CommaGrid::default().decode(&contents)?;
    log::debug!(
        "loaded {}x{} grid from {}, {} alive",
        grid.rows(),
        grid.columns(),
        path.display(),
        grid.alive_count()
    );
    Ok(grid)
}

/// Reads a `rows` x `columns` grid typed one row per line
///
/// Each line uses the same row syntax as the grid file. Running out of
/// input leaves the remaining rows dead.
pub fn read_manual_grid<R, W>(
    mut input: R,
    rows: usize,
    columns: usize,
    mut prompt: W,
) -> Result<Grid, SourceError>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        prompt,
        "Input grid row by row ({} rows of {} cells, 'x' for alive, ' ' for dead, separated by commas):",
        rows, columns
    )?;
    prompt.flush()?;

    let count = Grid::cell_count(rows, columns)?;
    let mut cells = Vec::with_capacity(count);
    let mut line = String::new();
    for row in 0..rows {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("manual input ended after {} of {} rows", row, rows);
            cells.resize(count, CellState::Dead);
            break;
        }
        cells.extend(enc::decode_row(&line, columns));
    }
    Ok(Grid::from_cells(rows, columns, cells)?)
}
