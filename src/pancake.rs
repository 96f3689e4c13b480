//! Pancake definitions.
//!
//! A pancake is a size (1 to 4) and the side currently facing up.

/// Number of pancakes in every stack.
pub const STACK_SIZE: usize = 4;

/// Which side of a pancake faces up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Burnt,
    White,
}

impl Side {
    /// Returns the opposite side.
    #[inline(always)]
    pub const fn flipped(self) -> Self {
        match self {
            Side::Burnt => Side::White,
            Side::White => Side::Burnt,
        }
    }

    /// Encoding character: `b` for burnt, `w` for white.
    pub const fn as_char(self) -> char {
        match self {
            Side::Burnt => 'b',
            Side::White => 'w',
        }
    }

    /// Parses an encoding character.
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'b' => Some(Side::Burnt),
            'w' => Some(Side::White),
            _ => None,
        }
    }
}

/// A single pancake in the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pancake {
    pub size: u8,
    pub side: Side,
}

impl Pancake {
    pub const fn new(size: u8, side: Side) -> Self {
        Self { size, side }
    }

    /// The same pancake turned over.
    #[inline(always)]
    pub const fn turned(self) -> Self {
        Self {
            size: self.size,
            side: self.side.flipped(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_char_roundtrip() {
        for side in [Side::Burnt, Side::White] {
            assert_eq!(Side::from_char(side.as_char()), Some(side));
        }
        assert_eq!(Side::from_char('x'), None);
    }

    #[test]
    fn test_turned_keeps_size() {
        let pancake = Pancake::new(3, Side::White);
        assert_eq!(pancake.turned(), Pancake::new(3, Side::Burnt));
        assert_eq!(pancake.turned().turned(), pancake);
    }
}
