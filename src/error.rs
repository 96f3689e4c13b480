//! Typed input errors.
//!
//! Only the input adapter can fail. The searches themselves report an
//! unreachable goal as `None`, not as an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected '<state>-<algorithm>' (e.g., '1w2b3w4b-a')")]
    MissingSeparator,

    #[error("algorithm must be 'b' for BFS or 'a' for A*, got '{0}'")]
    InvalidAlgorithm(String),

    #[error("state must be 8 characters long (e.g., '1w2b3w4b'), got {0}")]
    InvalidLength(usize),

    #[error("pancake {index} has size '{found}', expected a digit from 1 to 4")]
    InvalidSize { index: usize, found: char },

    #[error("pancake {index} has side '{found}', expected 'w' or 'b'")]
    InvalidSide { index: usize, found: char },

    #[error("pancake size {0} appears more than once")]
    DuplicateSize(u8),
}

pub type Result<T> = std::result::Result<T, ParseError>;
