use std::fmt::Display;

use crate::{Error, Heading};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    /// Neighbor one step along `heading`, `None` if it would leave the non-negative quadrant.
    pub fn along(&self, heading: Heading) -> Option<Position> {
        match heading {
            Heading::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Heading::Right => Some(Self::new(self.r, self.c + 1)),
            Heading::Down => Some(Self::new(self.r + 1, self.c)),
            Heading::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Free,
    Obstacle,
}

/// Rectangular map of the laboratory, never mutated after construction.
#[derive(Debug, Clone)]
pub struct Grid {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, Error> {
        let row_n = rows.len();
        let col_n = rows.first().map(|row| row.len()).unwrap_or(0);
        let mut tiles = Vec::with_capacity(row_n * col_n);
        for (ind, row) in rows.into_iter().enumerate() {
            if row.is_empty() {
                return Err(Error::EmptyRow(ind));
            }

            if row.len() != col_n {
                return Err(Error::MalformedGrid(ind, col_n, row.len()));
            }

            tiles.extend(row);
        }

        Ok(Self {
            tiles,
            row_n,
            col_n,
        })
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    /// Whether `pos` is blocked, either by the grid itself or by the hypothetical `extra_obstacle`.
    pub fn is_obstacle(&self, pos: &Position, extra_obstacle: Option<&Position>) -> bool {
        extra_obstacle.is_some_and(|extra| extra == pos) || self.tile(pos) == Tile::Obstacle
    }

    pub fn tile(&self, pos: &Position) -> Tile {
        assert!(
            self.in_bounds(pos),
            "Position{} is out of grid({} x {}).",
            pos,
            self.row_n,
            self.col_n
        );
        self.tiles[pos.r * self.col_n + pos.c]
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.row_n).flat_map(move |r| (0..self.col_n).map(move |c| Position::new(r, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::from_rows(vec![
            vec![Tile::Free, Tile::Obstacle, Tile::Free],
            vec![Tile::Free, Tile::Free, Tile::Free],
        ])
        .unwrap()
    }

    #[test]
    fn bounds_cover_rows_and_columns() {
        let grid = sample_grid();
        assert_eq!((grid.row_n(), grid.col_n()), (2, 3));
        assert!(grid.in_bounds(&Position::new(1, 2)));
        assert!(!grid.in_bounds(&Position::new(2, 0)));
        assert!(!grid.in_bounds(&Position::new(0, 3)));
        assert_eq!(grid.positions().count(), 6);
    }

    #[test]
    fn extra_obstacle_overlays_free_tile() {
        let grid = sample_grid();
        let extra = Position::new(1, 1);
        assert!(grid.is_obstacle(&Position::new(0, 1), None));
        assert!(!grid.is_obstacle(&extra, None));
        assert!(grid.is_obstacle(&extra, Some(&extra)));
        assert!(!grid.is_obstacle(&Position::new(1, 0), Some(&extra)));
        assert_eq!(grid.tile(&extra), Tile::Free);
    }

    #[test]
    fn unequal_rows_are_rejected() {
        let result = Grid::from_rows(vec![vec![Tile::Free; 3], vec![Tile::Free; 2]]);
        assert!(matches!(result, Err(Error::MalformedGrid(1, 3, 2))));
    }

    #[test]
    fn empty_row_is_rejected() {
        let result = Grid::from_rows(vec![vec![Tile::Free; 2], Vec::new()]);
        assert!(matches!(result, Err(Error::EmptyRow(1))));
    }

    #[test]
    #[should_panic]
    fn tile_outside_grid_panics() {
        sample_grid().tile(&Position::new(5, 5));
    }

    #[test]
    fn along_stops_at_zero() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.along(Heading::Up), None);
        assert_eq!(origin.along(Heading::Left), None);
        assert_eq!(origin.along(Heading::Right), Some(Position::new(0, 1)));
        assert_eq!(origin.along(Heading::Down), Some(Position::new(1, 0)));
    }
}
