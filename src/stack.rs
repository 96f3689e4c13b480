//! Stack representation and the flip transition.
//!
//! A stack is four pancakes listed top to bottom. Its text encoding is eight
//! symbols: a size digit followed by a side character for each pancake, e.g.
//! `2w1b4w3b`. Stacks are small `Copy` values so they can be used directly as
//! hash keys during search.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::pancake::{Pancake, Side, STACK_SIZE};

/// Glyph inserted after the flipped prefix when rendering a trace line.
pub const FLIP_MARKER: char = '|';

/// Length of the text encoding.
pub const ENCODED_LEN: usize = 2 * STACK_SIZE;

/// The sorted stack: sizes 1..=4 top to bottom, all white side up.
pub const GOAL: Stack = Stack([
    Pancake::new(1, Side::White),
    Pancake::new(2, Side::White),
    Pancake::new(3, Side::White),
    Pancake::new(4, Side::White),
]);

/// Valid flip positions, smallest first. Expansion order follows this.
pub const FLIP_POSITIONS: std::ops::RangeInclusive<usize> = 1..=STACK_SIZE;

/// Four pancakes, index 0 on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stack(pub [Pancake; STACK_SIZE]);

impl Stack {
    pub const fn new(pancakes: [Pancake; STACK_SIZE]) -> Self {
        Self(pancakes)
    }

    pub fn pancakes(&self) -> &[Pancake; STACK_SIZE] {
        &self.0
    }

    /// Reverses the top `position` pancakes and turns each of them over.
    ///
    /// Pancakes below `position` are untouched. Flipping the same position
    /// twice restores the original stack.
    ///
    /// # Panics
    /// If `position` is outside `1..=4`.
    #[inline]
    pub fn flip(&self, position: usize) -> Stack {
        assert!(
            FLIP_POSITIONS.contains(&position),
            "flip position {position} out of range"
        );
        let mut pancakes = self.0;
        pancakes[..position].reverse();
        for pancake in &mut pancakes[..position] {
            *pancake = pancake.turned();
        }
        Stack(pancakes)
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Finds the flip position that turns `self` into `next`, if any.
    pub fn flip_position_to(&self, next: &Stack) -> Option<usize> {
        FLIP_POSITIONS.into_iter().find(|&p| self.flip(p) == *next)
    }

    /// Renders the stack with [`FLIP_MARKER`] after the `position`-th pancake.
    pub fn format_with_marker(&self, position: usize) -> String {
        let mut output = String::with_capacity(ENCODED_LEN + 1);
        for (i, pancake) in self.0.iter().enumerate() {
            push_pancake(&mut output, pancake);
            if i + 1 == position {
                output.push(FLIP_MARKER);
            }
        }
        output
    }

    /// Every valid stack: each permutation of sizes with every side pattern.
    pub fn all() -> Vec<Stack> {
        let mut stacks = Vec::with_capacity(384);
        let mut sizes = [1u8, 2, 3, 4];
        for_each_permutation(&mut sizes, 0, &mut |order| {
            for mask in 0..(1u8 << STACK_SIZE) {
                let mut pancakes = [Pancake::new(0, Side::White); STACK_SIZE];
                for (i, pancake) in pancakes.iter_mut().enumerate() {
                    let side = if mask & (1 << i) != 0 {
                        Side::Burnt
                    } else {
                        Side::White
                    };
                    *pancake = Pancake::new(order[i], side);
                }
                stacks.push(Stack(pancakes));
            }
        });
        stacks
    }
}

/// Visits every ordering of `items[start..]` by swapping in place.
fn for_each_permutation(
    items: &mut [u8; STACK_SIZE],
    start: usize,
    visit: &mut impl FnMut(&[u8; STACK_SIZE]),
) {
    if start == items.len() {
        visit(items);
        return;
    }
    for i in start..items.len() {
        items.swap(start, i);
        for_each_permutation(items, start + 1, visit);
        items.swap(start, i);
    }
}

fn push_pancake(output: &mut String, pancake: &Pancake) {
    output.push(char::from(b'0' + pancake.size));
    output.push(pancake.side.as_char());
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::with_capacity(ENCODED_LEN);
        for pancake in &self.0 {
            push_pancake(&mut output, pancake);
        }
        f.write_str(&output)
    }
}

impl FromStr for Stack {
    type Err = ParseError;

    /// Parses the 8-symbol encoding, requiring each size 1..=4 exactly once.
    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = encoded.chars().collect();
        if symbols.len() != ENCODED_LEN {
            return Err(ParseError::InvalidLength(symbols.len()));
        }

        let mut pancakes = [Pancake::new(0, Side::White); STACK_SIZE];
        let mut seen = [false; STACK_SIZE + 1];
        for (index, pair) in symbols.chunks_exact(2).enumerate() {
            let size = match pair[0].to_digit(10) {
                Some(digit @ 1..=4) => digit as u8,
                _ => {
                    return Err(ParseError::InvalidSize {
                        index: index + 1,
                        found: pair[0],
                    })
                }
            };
            let side = Side::from_char(pair[1]).ok_or(ParseError::InvalidSide {
                index: index + 1,
                found: pair[1],
            })?;
            if seen[size as usize] {
                return Err(ParseError::DuplicateSize(size));
            }
            seen[size as usize] = true;
            pancakes[index] = Pancake::new(size, side);
        }

        Ok(Stack(pancakes))
    }
}
