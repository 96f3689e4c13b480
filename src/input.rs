//! Parsing a puzzle line of the form `<state>-<algorithm>`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::stack::Stack;

/// Which search to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Breadth-first search, selected by `b`.
    Bfs,
    /// A* search, selected by `a`.
    AStar,
}

impl FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "b" => Ok(Algorithm::Bfs),
            "a" => Ok(Algorithm::AStar),
            other => Err(ParseError::InvalidAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => f.write_str("BFS"),
            Algorithm::AStar => f.write_str("A* Search"),
        }
    }
}

/// Splits and validates a puzzle line such as `2w1w4w3w-b`.
///
/// Surrounding whitespace is ignored. The algorithm token is checked before
/// the stack.
pub fn parse_puzzle(line: &str) -> Result<(Stack, Algorithm)> {
    let mut parts = line.trim().split('-');
    let (Some(state), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::MissingSeparator);
    };

    let algorithm = token.parse()?;
    let stack = state.parse()?;
    Ok((stack, algorithm))
}
