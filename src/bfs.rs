//! Breadth-first search over flips.
//!
//! Every flip counts as one edge regardless of position, so the returned path
//! has the fewest flips, not the lowest flip cost.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::stack::{Stack, FLIP_POSITIONS};
use crate::SearchStats;

/// A frontier entry: a stack and the stacks that led to it, start first.
type Node = (Stack, Vec<Stack>);

/// Finds a minimum-flip path from `start` to the goal.
///
/// The path includes both `start` and the goal. Returns `None` if the
/// frontier empties without reaching the goal.
pub fn search(start: Stack) -> Option<Vec<Stack>> {
    search_with_stats(start).1
}

/// Same as [`search`], also reporting how much of the graph was explored.
pub fn search_with_stats(start: Stack) -> (SearchStats, Option<Vec<Stack>>) {
    let _span = tracing::info_span!("bfs", %start).entered();

    let mut stats = SearchStats::default();
    let mut frontier: VecDeque<Node> = VecDeque::from([(start, Vec::new())]);
    let mut visited: FxHashSet<Stack> = FxHashSet::default();
    visited.insert(start);

    while let Some((current, mut path)) = frontier.pop_front() {
        if current.is_goal() {
            path.push(current);
            debug!(
                flips = path.len() - 1,
                expanded = stats.expanded,
                generated = stats.generated,
                "goal reached"
            );
            return (stats, Some(path));
        }
        stats.expanded += 1;

        for position in FLIP_POSITIONS {
            let next = current.flip(position);
            stats.generated += 1;
            // insert returns false for stacks already queued or expanded
            if visited.insert(next) {
                let mut next_path = path.clone();
                next_path.push(current);
                frontier.push_back((next, next_path));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::GOAL;

    fn stack(encoded: &str) -> Stack {
        encoded.parse().unwrap()
    }

    /// Depth-first enumeration of every flip sequence up to `depth`.
    fn reachable_within(start: Stack, depth: usize) -> bool {
        if start.is_goal() {
            return true;
        }
        depth > 0
            && FLIP_POSITIONS
                .into_iter()
                .any(|position| reachable_within(start.flip(position), depth - 1))
    }

    #[test]
    fn test_goal_start_returns_single_state() {
        assert_eq!(search(GOAL), Some(vec![GOAL]));
    }

    #[test]
    fn test_path_is_connected_by_flips() {
        let path = search(stack("2w1w4w3w")).unwrap();
        assert_eq!(path.first(), Some(&stack("2w1w4w3w")));
        assert_eq!(path.last(), Some(&GOAL));
        for pair in path.windows(2) {
            assert!(pair[0].flip_position_to(&pair[1]).is_some());
        }
    }

    #[test]
    fn test_reversed_stack_needs_one_flip() {
        let path = search(stack("4b3b2b1b")).unwrap();
        assert_eq!(path, vec![stack("4b3b2b1b"), GOAL]);
    }

    #[test]
    fn test_flip_count_is_minimal() {
        for start in Stack::all() {
            let flips = search(start).expect("every valid stack is solvable").len() - 1;
            assert!(reachable_within(start, flips), "{start} in {flips}");
            if flips > 0 {
                assert!(
                    !reachable_within(start, flips - 1),
                    "{start} solvable in fewer than {flips} flips"
                );
            }
        }
    }

    #[test]
    fn test_stats_bounded_by_state_space() {
        let (stats, path) = search_with_stats(stack("3w1b4b2w"));
        assert!(path.is_some());
        assert!(stats.expanded <= 384);
        assert!(stats.generated <= 4 * stats.expanded);
    }
}
