//! Pancake Flip Solver Library
//!
//! Sorts a stack of four two-sided pancakes into `1w2w3w4w` using prefix
//! flips, with either breadth-first search (fewest flips) or A* (lowest total
//! flip cost), and renders the solution as trace lines.

pub mod astar;
pub mod bfs;
pub mod error;
pub mod heuristic;
pub mod input;
pub mod pancake;
pub mod stack;
pub mod trace;

use input::Algorithm;
use stack::Stack;

/// Exploration counters for a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Stacks popped from the frontier and expanded.
    pub expanded: usize,
    /// Successor stacks computed, including ones already seen.
    pub generated: usize,
}

/// Trait that erases the choice of search algorithm.
///
/// Callers pick an [`Algorithm`] at runtime and get rendered trace lines
/// back, without handling the two searches' different path types.
pub trait SearchOps {
    /// Solves from `start`, returning trace lines and search counters.
    ///
    /// The lines are `None` when the goal was not reached.
    fn solve_with_stats(&self, start: Stack) -> (SearchStats, Option<Vec<String>>);

    /// Solves from `start`, returning trace lines.
    fn solve(&self, start: Stack) -> Option<Vec<String>> {
        self.solve_with_stats(start).1
    }
}

impl SearchOps for Algorithm {
    fn solve_with_stats(&self, start: Stack) -> (SearchStats, Option<Vec<String>>) {
        match self {
            Algorithm::Bfs => {
                let (stats, path) = bfs::search_with_stats(start);
                (stats, path.map(|path| trace::render_bfs(&path)))
            }
            Algorithm::AStar => {
                let (stats, path) = astar::search_with_stats(start);
                (stats, path.map(|path| trace::render_astar(&path)))
            }
        }
    }
}
