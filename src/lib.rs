use std::{
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod grid;
pub mod guard;
pub mod logging;
pub mod patrol;

pub use grid::{Grid, Position, Tile};
pub use guard::{Guard, Heading};
pub use patrol::{
    count_loop_obstructions, count_loop_obstructions_among, is_loop, run_baseline, Execution,
};

#[derive(Debug)]
pub enum Error {
    MalformedGrid(usize, usize, usize), // (row index, expected column count, given column count)
    EmptyRow(usize),
    MultipleGuards(Position, Position),
    InvalidChar(char),
    NoStartMarker,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedGrid(row, expect_col_n, real_col_n) => write!(
                f,
                "Expect {} columns in row {}, given {}.",
                expect_col_n, row, real_col_n
            ),
            Error::EmptyRow(row) => write!(f, "Row {} of given laboratory is empty.", row),
            Error::MultipleGuards(pos0, pos1) => write!(
                f,
                "Found multiple guards({}, {}) in given laboratory, expect one only.",
                pos0, pos1
            ),
            Error::InvalidChar(c) => {
                write!(f, "Invalid character({}) in text of laboratory layout.", c)
            }
            Error::NoStartMarker => {
                write!(f, "There's no guard in given laboratory, but expect one.")
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Number of threads testing obstruction candidates, 1 tests them one by one.
    #[arg(short, long)]
    pub jobs: Option<NonZeroUsize>,
}

impl CLIArgs {
    pub fn execution(&self) -> Execution {
        match self.jobs {
            Some(n) if n.get() == 1 => Execution::Sequential,
            _ => Execution::Parallel,
        }
    }

    pub fn init_thread_pool(&self) -> Result<()> {
        if let Some(n) = self.jobs.filter(|n| n.get() > 1) {
            rayon::ThreadPoolBuilder::new()
                .num_threads(n.get())
                .build_global()
                .with_context(|| format!("Failed to start {} worker thread(s).", n))?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Laboratory {
    grid: Grid,
    start: Position,
}

impl Laboratory {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn patrol_positions(&self) -> HashSet<Position> {
        run_baseline(&self.grid, &self.start)
    }

    pub fn loop_obstruction_count(&self, execution: Execution) -> usize {
        count_loop_obstructions(&self.grid, &self.start, execution)
    }
}

impl FromStr for Laboratory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = LaboratoryBuilder::new();
        for line in s.lines() {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

struct LaboratoryBuilder {
    rows: Vec<Vec<Tile>>,
    start: Option<Position>,
}

impl LaboratoryBuilder {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            start: None,
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let row_ind = self.rows.len();
        let mut row = Vec::with_capacity(row_text.len());
        for (ind, c) in row_text.chars().enumerate() {
            match c {
                '.' => row.push(Tile::Free),
                '#' => row.push(Tile::Obstacle),
                '^' => {
                    let pos = Position::new(row_ind, ind);
                    if let Some(last_pos) = self.start.take() {
                        return Err(Error::MultipleGuards(last_pos, pos));
                    }

                    self.start = Some(pos);
                    row.push(Tile::Free);
                }
                other => return Err(Error::InvalidChar(other)),
            }
        }
        self.rows.push(row);

        Ok(())
    }

    pub fn build(self) -> Result<Laboratory, Error> {
        let grid = Grid::from_rows(self.rows)?;
        let start = self.start.ok_or(Error::NoStartMarker)?;

        Ok(Laboratory { grid, start })
    }
}

pub fn read_lab<P: AsRef<Path>>(path: P) -> Result<Laboratory> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = LaboratoryBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str())?;
    }

    Ok(builder.build()?)
}
