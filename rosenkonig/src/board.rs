use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use crate::{Colour, Square};

pub const BOARD_SIZE: usize = 9;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    data: [[Option<Colour>; BOARD_SIZE]; BOARD_SIZE],
}

impl Index<Square> for Board {
    type Output = Option<Colour>;

    fn index(&self, index: Square) -> &Self::Output {
        self.data.index(index.row).index(index.column)
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        self.data.index_mut(index.row).index_mut(index.column)
    }
}

impl Board {
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| Square::new(row, column)))
    }

    pub fn empty(&self) -> bool {
        self.data.iter().all(|row| row.iter().all(Option::is_none))
    }

    /// Number of squares owned by the colour.
    pub fn count(&self, colour: Colour) -> usize {
        self.data
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&owner| owner == Some(colour))
            .count()
    }

    /// Sizes of the orthogonally connected regions owned by the colour.
    pub fn regions(&self, colour: Colour) -> Vec<usize> {
        let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
        Board::squares()
            .filter_map(|square| {
                let size = self.fill(square, colour, &mut seen);
                (size > 0).then_some(size)
            })
            .collect()
    }

    fn fill(&self, square: Square, colour: Colour, seen: &mut [[bool; BOARD_SIZE]; BOARD_SIZE]) -> usize {
        if seen[square.row][square.column] || self[square] != Some(colour) {
            return 0;
        }
        seen[square.row][square.column] = true;
        // Recursive board fill.
        1 + square
            .neighbours()
            .into_iter()
            .map(|next| self.fill(next, colour, seen))
            .sum::<usize>()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.data {
            let line: String = row
                .iter()
                .map(|owner| match owner {
                    Some(Colour::White) => 'W',
                    Some(Colour::Red) => 'R',
                    None => '.',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
