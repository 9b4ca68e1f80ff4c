use std::fmt::Display;

use arrayvec::ArrayVec;

use crate::{board::BOARD_SIZE, PowerCard};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: usize,
    pub column: usize,
}

impl Square {
    pub const fn new(row: usize, column: usize) -> Self {
        Square { row, column }
    }

    /// The centre square, where the crown starts.
    pub const fn centre() -> Self {
        Square::new(BOARD_SIZE / 2, BOARD_SIZE / 2)
    }

    /// Orthogonal neighbours that are on the board.
    pub fn neighbours(self) -> ArrayVec<Square, 4> {
        let Square { row, column } = self;
        let mut neighbours = ArrayVec::new();
        if row > 0 {
            neighbours.push(Square { row: row - 1, column });
        }
        if column > 0 {
            neighbours.push(Square { row, column: column - 1 });
        }
        if row < BOARD_SIZE - 1 {
            neighbours.push(Square { row: row + 1, column });
        }
        if column < BOARD_SIZE - 1 {
            neighbours.push(Square { row, column: column + 1 });
        }
        neighbours
    }

    /// Where the crown lands when the card is played from this square.
    /// Returns `None` when that would leave the board.
    pub fn offset(self, card: PowerCard) -> Option<Square> {
        let (d_row, d_column) = card.offset();
        let row = self.row.checked_add_signed(d_row as isize)?;
        let column = self.column.checked_add_signed(d_column as isize)?;
        (row < BOARD_SIZE && column < BOARD_SIZE).then_some(Square { row, column })
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
