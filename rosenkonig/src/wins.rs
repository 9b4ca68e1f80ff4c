use std::cmp::Ordering;

use crate::{compare, Colour, Game, GameResult};

impl Game {
    /// The game ends once neither player can do anything but pass.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves(Colour::White) && !self.has_legal_moves(Colour::Red)
    }

    /// Compare points, then largest region, then pieces on the board.
    /// Returns [`GameResult::Ongoing`] while the game is not over.
    #[must_use]
    pub fn winner(&self) -> GameResult {
        if !self.is_game_over() {
            return GameResult::Ongoing;
        }
        match compare(&self.differences(Colour::White), &[0; 3]) {
            Ordering::Greater => GameResult::Winner(Colour::White),
            Ordering::Less => GameResult::Winner(Colour::Red),
            Ordering::Equal => GameResult::Draw,
        }
    }
}
