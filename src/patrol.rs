use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::{Grid, Guard, Heading, Position};

/// How obstruction candidates are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    Sequential,
    #[default]
    Parallel,
}

#[derive(Debug)]
enum Step {
    Forward,
    Turn(Guard), // Guard state just before it turned.
    Exit,
}

/// One run of the guard over `grid`, optionally with one more obstacle dropped on it.
struct Patrol<'a> {
    grid: &'a Grid,
    guard: Guard,
    extra_obstacle: Option<&'a Position>,
}

impl<'a> Patrol<'a> {
    pub fn new(grid: &'a Grid, start: &Position, extra_obstacle: Option<&'a Position>) -> Self {
        Self {
            grid,
            guard: Guard::new(start, Heading::Up),
            extra_obstacle,
        }
    }

    fn step(&mut self) -> Step {
        let Some(ahead_pos) = self
            .guard
            .ahead_pos()
            .filter(|pos| self.grid.in_bounds(pos))
        else {
            return Step::Exit;
        };

        if self.grid.is_obstacle(&ahead_pos, self.extra_obstacle) {
            let blocked = self.guard.clone();
            self.guard.turn_right();
            Step::Turn(blocked)
        } else {
            let moved = self.guard.go_ahead();
            debug_assert!(moved, "Guard({}) failed to go ahead.", self.guard);
            Step::Forward
        }
    }

    /// Walks until the guard leaves the grid, returning every position it stood on.
    /// Stops early if the guard is caught in a loop, by then the whole loop is visited.
    pub fn visited_positions(mut self) -> HashSet<Position> {
        let mut visited = HashSet::from([self.guard.pos().clone()]);
        let mut blocked_states = HashSet::new();
        loop {
            match self.step() {
                Step::Forward => {
                    visited.insert(self.guard.pos().clone());
                }
                Step::Turn(blocked) => {
                    if !blocked_states.insert(blocked) {
                        warn!(
                            guard = %self.guard,
                            "Guard never leaves the grid, stop at the first repeated blocked state."
                        );
                        break;
                    }
                }
                Step::Exit => break,
            }
        }

        visited
    }

    pub fn is_loop(mut self) -> bool {
        let mut blocked_states = HashSet::new();
        loop {
            match self.step() {
                Step::Forward => (),
                Step::Turn(blocked) => {
                    if blocked_states.contains(&blocked) {
                        trace!(guard = %blocked, "Guard is blocked in the same state again.");
                        return true;
                    }

                    blocked_states.insert(blocked);
                }
                Step::Exit => return false,
            }
        }
    }
}

pub fn run_baseline(grid: &Grid, start: &Position) -> HashSet<Position> {
    Patrol::new(grid, start, None).visited_positions()
}

pub fn is_loop(grid: &Grid, start: &Position, extra_obstacle: Option<&Position>) -> bool {
    Patrol::new(grid, start, extra_obstacle).is_loop()
}

/// Counts positions on the unobstructed patrol path which trap the guard in a loop
/// once an obstacle is placed there.
pub fn count_loop_obstructions(grid: &Grid, start: &Position, execution: Execution) -> usize {
    let mut candidates = run_baseline(grid, start);
    candidates.remove(start);
    count_loop_obstructions_among(grid, start, &candidates, execution)
}

/// Same as [`count_loop_obstructions`] over arbitrary candidates. The start position never counts.
pub fn count_loop_obstructions_among(
    grid: &Grid,
    start: &Position,
    candidates: &HashSet<Position>,
    execution: Execution,
) -> usize {
    debug!(
        candidate_n = candidates.len(),
        ?execution,
        "Searching obstructions which make the guard loop."
    );
    let makes_loop = |pos: &Position| {
        let looped = pos != start && is_loop(grid, start, Some(pos));
        if looped {
            debug!(obstruction = %pos, "Found loop obstruction.");
        }

        looped
    };

    match execution {
        Execution::Sequential => candidates.iter().filter(|&pos| makes_loop(pos)).count(),
        Execution::Parallel => candidates.par_iter().filter(|&pos| makes_loop(pos)).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tile;

    fn open_grid(row_n: usize, col_n: usize) -> Grid {
        Grid::from_rows(vec![vec![Tile::Free; col_n]; row_n]).unwrap()
    }

    #[test]
    fn step_turns_before_obstacle_without_moving() {
        let grid = Grid::from_rows(vec![
            vec![Tile::Obstacle, Tile::Free],
            vec![Tile::Free, Tile::Free],
        ])
        .unwrap();
        let start = Position::new(1, 0);
        let mut patrol = Patrol::new(&grid, &start, None);

        assert!(matches!(
            patrol.step(),
            Step::Turn(ref blocked) if blocked == &Guard::new(&start, Heading::Up)
        ));
        assert_eq!(patrol.guard, Guard::new(&start, Heading::Right));
        assert!(matches!(patrol.step(), Step::Forward));
        assert_eq!(patrol.guard.pos(), &Position::new(1, 1));
        assert!(matches!(patrol.step(), Step::Exit));
    }

    #[test]
    fn extra_obstacle_blocks_step() {
        let grid = open_grid(3, 1);
        let start = Position::new(2, 0);
        let extra = Position::new(1, 0);
        let mut patrol = Patrol::new(&grid, &start, Some(&extra));

        assert!(matches!(patrol.step(), Step::Turn(_)));
        assert_eq!(patrol.guard.heading(), Heading::Right);
        assert!(matches!(patrol.step(), Step::Exit));
    }

    #[test]
    fn open_grid_never_loops() {
        let grid = open_grid(4, 4);
        assert!(!is_loop(&grid, &Position::new(3, 3), None));
    }
}
