use crate::{Colour, Game};

/// Heuristic value of a position, ranked lexicographically with [`crate::compare`].
pub type Eval = [f64; 3];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Valuation {
    /// Sum over connected regions of the squared region size.
    pub points: u32,
    /// Size of the largest connected region.
    pub max_region: u32,
    /// Number of squares owned.
    pub pieces: u32,
}

impl Valuation {
    pub fn to_array(self) -> [i32; 3] {
        [self.points as i32, self.max_region as i32, self.pieces as i32]
    }
}

impl Game {
    /// Valuations for both players, indexed by [`Colour::index`].
    pub fn valuations(&self) -> [Valuation; 2] {
        Colour::ALL.map(|colour| {
            let regions = self.board.regions(colour);
            Valuation {
                points: regions.iter().map(|&size| (size * size) as u32).sum(),
                max_region: regions.iter().copied().max().unwrap_or(0) as u32,
                pieces: regions.iter().sum::<usize>() as u32,
            }
        })
    }

    /// The player's valuation minus the opponent's, entry by entry.
    pub fn differences(&self, player: Colour) -> [i32; 3] {
        let valuations = self.valuations();
        let mine = valuations[player.index()].to_array();
        let theirs = valuations[(!player).index()].to_array();
        [mine[0] - theirs[0], mine[1] - theirs[1], mine[2] - theirs[2]]
    }

    /// Differences from the player's point of view, with each unused hero card
    /// worth `hero_discount` points.
    pub fn heuristic(&self, hero_discount: f64, player: Colour) -> Eval {
        let [points, max_region, pieces] = self.differences(player);
        let hero_balance = self.hero_cards(player) as f64 - self.hero_cards(!player) as f64;
        [
            points as f64 + hero_discount * hero_balance,
            max_region as f64,
            pieces as f64,
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::{Colour, Game, Square};

    #[test]
    fn region_of_three_scores_nine() {
        let mut game = Game::default();
        for column in 2..5 {
            game.board[Square::new(0, column)] = Some(Colour::Red);
        }
        let [_, red] = game.valuations();
        assert_eq!(red.points, 9);
        assert_eq!(red.max_region, 3);
        assert_eq!(red.pieces, 3);

        // Only diagonally adjacent to the region.
        game.board[Square::new(1, 5)] = Some(Colour::Red);
        let [_, red] = game.valuations();
        assert_eq!(red.points, 10);
        assert_eq!(red.max_region, 3);
        assert_eq!(red.pieces, 4);

        // Orthogonally adjacent joins it.
        game.board[Square::new(1, 4)] = Some(Colour::Red);
        let [_, red] = game.valuations();
        assert_eq!(red.points, 25);
        assert_eq!(red.max_region, 5);
    }

    #[test]
    fn heuristic_counts_hero_cards() {
        let mut game = Game::default();
        game.board[Square::new(0, 0)] = Some(Colour::White);
        game.board[Square::new(0, 1)] = Some(Colour::White);
        game.board[Square::new(8, 8)] = Some(Colour::Red);
        game.heroes = [1, 3];

        assert_eq!(game.differences(Colour::White), [3, 1, 1]);
        assert_eq!(game.differences(Colour::Red), [-3, -1, -1]);
        assert_eq!(game.heuristic(30.0, Colour::White), [3.0 - 60.0, 1.0, 1.0]);
        assert_eq!(game.heuristic(30.0, Colour::Red), [-3.0 + 60.0, -1.0, -1.0]);
        assert_eq!(game.heuristic(0.0, Colour::White), [3.0, 1.0, 1.0]);
    }
}
