//! Rendering solution paths as trace lines.
//!
//! Each line but the last shows a stack with `|` after the flipped prefix
//! that produces the next line. The last line is the goal, unmarked.

use tracing::warn;

use crate::astar::PathStep;
use crate::pancake::STACK_SIZE;
use crate::stack::Stack;

/// Formats a breadth-first path.
///
/// A pair of consecutive stacks not linked by any flip produces no line.
pub fn render_bfs(path: &[Stack]) -> Vec<String> {
    let Some(last) = path.last() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(path.len());
    for pair in path.windows(2) {
        match pair[0].flip_position_to(&pair[1]) {
            Some(position) => lines.push(pair[0].format_with_marker(position)),
            None => warn!(from = %pair[0], to = %pair[1], "no flip links consecutive stacks"),
        }
    }
    lines.push(last.to_string());
    lines
}

/// Formats an A* path, suffixing each line with its `g` and `h`.
///
/// A pair of consecutive stacks not linked by any flip is marked as a full
/// flip.
pub fn render_astar(path: &[PathStep]) -> Vec<String> {
    let Some(last) = path.last() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(path.len());
    for pair in path.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        let position = current.stack.flip_position_to(&next.stack).unwrap_or_else(|| {
            warn!(from = %current.stack, to = %next.stack, "no flip links consecutive stacks");
            STACK_SIZE
        });
        lines.push(format!(
            "{} g:{}, h:{}",
            current.stack.format_with_marker(position),
            current.g,
            current.h
        ));
    }
    lines.push(format!("{} g:{}, h:{}", last.stack, last.g, last.h));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::GOAL;
    use crate::{astar, bfs};

    fn stack(encoded: &str) -> Stack {
        encoded.parse().unwrap()
    }

    #[test]
    fn test_bfs_goal_only() {
        assert_eq!(render_bfs(&[GOAL]), vec!["1w2w3w4w"]);
    }

    #[test]
    fn test_astar_goal_only() {
        let path = astar::search(GOAL).unwrap();
        assert_eq!(render_astar(&path), vec!["1w2w3w4w g:0, h:0"]);
    }

    #[test]
    fn test_empty_paths_render_nothing() {
        assert!(render_bfs(&[]).is_empty());
        assert!(render_astar(&[]).is_empty());
    }

    #[test]
    fn test_bfs_trace_snapshot() {
        let lines = render_bfs(&bfs::search(stack("2w1w4w3w")).unwrap());
        insta::assert_snapshot!(lines.join("\n"), @r"
        2w|1w4w3w
        2b1w4w|3w
        4b1b2w3w|
        3b2b1w|4w
        1b|2w3w4w
        1w2w3w4w
        ");
    }

    #[test]
    fn test_bfs_intermediate_lines_have_one_marker() {
        let lines = render_bfs(&bfs::search(stack("3w1b4b2w")).unwrap());
        let (goal_line, steps) = lines.split_last().unwrap();
        assert_eq!(goal_line, "1w2w3w4w");
        for line in steps {
            assert_eq!(line.matches('|').count(), 1, "{line}");
        }
    }

    #[test]
    fn test_astar_trace_snapshot() {
        let lines = render_astar(&astar::search(stack("3w1b4b2w")).unwrap());
        insta::assert_snapshot!(lines.join("\n"), @r"
        3w|1b4b2w g:0, h:4
        3b1b|4b2w g:1, h:4
        1w3w4b|2w g:3, h:4
        4w|3b1b2w g:6, h:4
        4b3b1b2w| g:7, h:4
        2b1w|3w4w g:11, h:2
        1b|2w3w4w g:13, h:0
        1w2w3w4w g:14, h:0
        ");
    }

    #[test]
    fn test_astar_reversed_stack() {
        let lines = render_astar(&astar::search(stack("4b3b2b1b")).unwrap());
        assert_eq!(lines, vec!["4b3b2b1b| g:0, h:4", "1w2w3w4w g:4, h:0"]);
    }

    #[test]
    fn test_bfs_unlinked_pair_is_dropped() {
        let lines = render_bfs(&[stack("2w1w4w3w"), GOAL]);
        assert_eq!(lines, vec!["1w2w3w4w"]);
    }

    #[test]
    fn test_astar_unlinked_pair_marks_full_flip() {
        let path = [
            PathStep {
                stack: stack("2w1w4w3w"),
                g: 0,
                h: 4,
            },
            PathStep {
                stack: GOAL,
                g: 1,
                h: 0,
            },
        ];
        assert_eq!(
            render_astar(&path),
            vec!["2w1w4w3w| g:0, h:4", "1w2w3w4w g:1, h:0"]
        );
    }
}
