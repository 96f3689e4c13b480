//! A* search over flips, weighted by the number of pancakes moved.
//!
//! The frontier is a binary heap without decrease-key: a cheaper route to a
//! stack pushes a fresh entry, and entries whose `g` is worse than the best
//! known cost are skipped when popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::heuristic::{heuristic, tie_break_key};
use crate::stack::{Stack, FLIP_POSITIONS};
use crate::SearchStats;

/// One stack on a solution path with its path cost and estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathStep {
    pub stack: Stack,
    /// Total flip cost from the start to this stack.
    pub g: u32,
    /// Heuristic estimate of the remaining cost.
    pub h: u32,
}

/// Heap entry ordered by `f`, then tie-break key, then `g`, then stack.
///
/// Field order matters: the derived `Ord` compares fields top to bottom.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    f: u32,
    tie_break: u32,
    g: u32,
    stack: Stack,
}

impl FrontierEntry {
    fn new(stack: Stack, g: u32) -> Self {
        Self {
            f: g + heuristic(&stack),
            tie_break: tie_break_key(&stack),
            g,
            stack,
        }
    }
}

/// Back-pointer: the previous stack and the flip position that left it.
type Parent = Option<(Stack, usize)>;

/// Finds a minimum-cost path from `start` to the goal.
///
/// A flip at position `p` costs `p`. Returns `None` if the frontier empties
/// without reaching the goal.
pub fn search(start: Stack) -> Option<Vec<PathStep>> {
    search_with_stats(start).1
}

/// Same as [`search`], also reporting how much of the graph was explored.
pub fn search_with_stats(start: Stack) -> (SearchStats, Option<Vec<PathStep>>) {
    let _span = tracing::info_span!("astar", %start).entered();

    let mut stats = SearchStats::default();
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let mut best_g: FxHashMap<Stack, u32> = FxHashMap::default();
    let mut parents: FxHashMap<Stack, Parent> = FxHashMap::default();

    best_g.insert(start, 0);
    parents.insert(start, None);
    frontier.push(Reverse(FrontierEntry::new(start, 0)));

    while let Some(Reverse(entry)) = frontier.pop() {
        let FrontierEntry { g, stack: current, .. } = entry;

        if current.is_goal() {
            let path = reconstruct(current, &best_g, &parents);
            debug!(
                cost = g,
                flips = path.len() - 1,
                expanded = stats.expanded,
                generated = stats.generated,
                "goal reached"
            );
            return (stats, Some(path));
        }

        // superseded by a cheaper push for the same stack
        if best_g.get(&current).is_some_and(|&best| g > best) {
            trace!(stack = %current, g, "skipping stale entry");
            continue;
        }
        stats.expanded += 1;

        for position in FLIP_POSITIONS {
            let next = current.flip(position);
            let tentative_g = g + position as u32;
            stats.generated += 1;

            if best_g.get(&next).map_or(true, |&known| tentative_g < known) {
                best_g.insert(next, tentative_g);
                parents.insert(next, Some((current, position)));
                frontier.push(Reverse(FrontierEntry::new(next, tentative_g)));
            }
        }
    }

    debug!(
        expanded = stats.expanded,
        generated = stats.generated,
        "frontier exhausted"
    );
    (stats, None)
}

/// Walks back-pointers from `goal` to the start, returning start-first steps.
fn reconstruct(
    goal: Stack,
    best_g: &FxHashMap<Stack, u32>,
    parents: &FxHashMap<Stack, Parent>,
) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);

    while let Some(stack) = cursor {
        path.push(PathStep {
            stack,
            g: best_g[&stack],
            h: heuristic(&stack),
        });
        cursor = parents.get(&stack).copied().flatten().map(|(parent, _)| parent);
    }

    path.reverse();
    path
}
