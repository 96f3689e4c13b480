//! Cost estimate and frontier tie-breaking for A*.

use crate::pancake::Side;
use crate::stack::Stack;

/// Size of the largest pancake not resting in its sorted position, or 0.
///
/// Scans from the bottom up, so the first mismatch is the largest. Any
/// solution must flip at least that many pancakes at once, which keeps the
/// estimate admissible for flip cost. Orientation is ignored.
#[inline]
pub fn heuristic(stack: &Stack) -> u32 {
    stack
        .pancakes()
        .iter()
        .enumerate()
        .rev()
        .find(|&(position, pancake)| pancake.size as usize != position + 1)
        .map_or(0, |(position, _)| position as u32 + 1)
}

/// Deterministic ordering key for frontier entries with equal `f`.
///
/// Concatenates, for each pancake top to bottom, its size digit and a side
/// digit (1 for white, 0 for burnt), read as a decimal number. `1w2w3w4w`
/// becomes `11213141`. Distinct stacks always get distinct keys.
pub fn tie_break_key(stack: &Stack) -> u32 {
    stack.pancakes().iter().fold(0, |key, pancake| {
        let side_digit = match pancake.side {
            Side::White => 1,
            Side::Burnt => 0,
        };
        key * 100 + u32::from(pancake.size) * 10 + side_digit
    })
}
