use std::{fmt::Display, ops::Not};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Red,
}

impl Colour {
    pub const ALL: [Colour; 2] = [Colour::White, Colour::Red];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Colour::White => Colour::Red,
            Colour::Red => Colour::White,
        }
    }

    /// Index into per-player arrays.
    pub const fn index(self) -> usize {
        match self {
            Colour::White => 0,
            Colour::Red => 1,
        }
    }
}

impl Not for Colour {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.next()
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Colour::White => "white",
            Colour::Red => "red",
        })
    }
}
