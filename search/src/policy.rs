use rand::{seq::SliceRandom, Rng};
use rand_distr::{Distribution, WeightedIndex};
use rosenkonig::*;

use crate::{
    error::SearchError,
    repr::{action_mask, index_move, move_index, ACTIONS},
};

/// Something that scores every action, such as a trained model.
pub trait ActionPolicy {
    /// One non-negative weight per action, indexed as in [`crate::repr`].
    /// Weights of illegal actions are ignored.
    fn weights(&self, game: &Game, player: Colour) -> Vec<f32>;
}

impl<P: ActionPolicy + ?Sized> ActionPolicy for Box<P> {
    fn weights(&self, game: &Game, player: Colour) -> Vec<f32> {
        (**self).weights(game, player)
    }
}

/// Same weight for every action.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uniform;

impl ActionPolicy for Uniform {
    fn weights(&self, _game: &Game, _player: Colour) -> Vec<f32> {
        vec![1.0; ACTIONS]
    }
}

/// Looks one move ahead and weighs each action by the points it leads to.
#[derive(Clone, Copy, Debug)]
pub struct Greedy {
    pub hero_discount: f64,
    pub temperature: f64,
}

impl ActionPolicy for Greedy {
    fn weights(&self, game: &Game, player: Colour) -> Vec<f32> {
        let mut points = vec![f64::NEG_INFINITY; ACTIONS];
        for my_move in game.legal_moves(player) {
            let value = match my_move {
                // Neither changes the board.
                Move::Draw | Move::Pass => game.heuristic(self.hero_discount, player),
                Move::Play { .. } => {
                    let mut game = game.clone();
                    game.play(my_move, player);
                    game.heuristic(self.hero_discount, player)
                }
            };
            points[move_index(my_move)] = value[0];
        }
        let max = points.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        points
            .into_iter()
            .map(|p| ((p - max) / self.temperature).exp() as f32)
            .collect()
    }
}

/// Pick a legal move using the policy's weights.
/// When exploitation is true, it returns the legal action with the largest
/// weight. Otherwise it samples legal actions in proportion to their weights.
pub fn pick_move<P: ActionPolicy + ?Sized, R: Rng>(
    policy: &P,
    game: &Game,
    player: Colour,
    exploitation: bool,
    rng: &mut R,
) -> Result<Move, SearchError> {
    let weights = policy.weights(game, player);
    assert_eq!(weights.len(), ACTIONS, "policy must weigh every action");
    let mask = action_mask(game, player);

    // Split the legal actions into moves and weights.
    let (moves, weights): (Vec<_>, Vec<_>) = weights
        .into_iter()
        .enumerate()
        .filter(|&(index, _)| mask[index])
        .map(|(index, weight)| (index_move(index), weight.max(0.0)))
        .unzip();

    if exploitation {
        let mut best: Option<(Move, f32)> = None;
        for (&my_move, &weight) in moves.iter().zip(&weights) {
            if best.map_or(true, |(_, best_weight)| weight > best_weight) {
                best = Some((my_move, weight));
            }
        }
        best.map(|(my_move, _)| my_move).ok_or(SearchError::NoMove)
    } else {
        match WeightedIndex::new(&weights) {
            Ok(distr) => Ok(moves[distr.sample(rng)]),
            // Every legal action has zero weight.
            Err(_) => moves.choose(rng).copied().ok_or(SearchError::NoMove),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    struct Favourite(usize);

    impl ActionPolicy for Favourite {
        fn weights(&self, _game: &Game, _player: Colour) -> Vec<f32> {
            let mut weights = vec![0.0; ACTIONS];
            weights[self.0] = 1.0;
            weights
        }
    }

    fn single_card() -> (Game, PowerCard) {
        let north = PowerCard::new(Direction::North, 1);
        let mut game = Game::default();
        game.piles.drawable.retain(|c| *c != north);
        game.hands[0] = Hand::new(&[north]);
        (game, north)
    }

    #[test]
    fn illegal_favourite_is_masked() {
        let (game, north) = single_card();
        let mut rng = StdRng::seed_from_u64(1);
        // Pass is not legal here, so it cannot be picked.
        let policy = Favourite(crate::repr::PASS_ACTION);
        for exploitation in [true, false] {
            for _ in 0..20 {
                let my_move = pick_move(&policy, &game, Colour::White, exploitation, &mut rng).unwrap();
                assert!([Move::Draw, Move::play(north)].contains(&my_move));
            }
        }
    }

    #[test]
    fn exploitation_takes_the_heaviest() {
        let (game, north) = single_card();
        let mut rng = StdRng::seed_from_u64(2);
        let policy = Favourite(move_index(Move::play(north)));
        assert_eq!(pick_move(&policy, &game, Colour::White, true, &mut rng), Ok(Move::play(north)));
        assert_eq!(pick_move(&policy, &game, Colour::White, false, &mut rng), Ok(Move::play(north)));
    }

    #[test]
    fn greedy_joins_regions() {
        let east = PowerCard::new(Direction::East, 1);
        let west = PowerCard::new(Direction::West, 1);
        let mut game = Game::default();
        game.piles.drawable.retain(|c| *c != east && *c != west);
        game.hands[0] = Hand::new(&[west, east]);
        game.board[Square::new(4, 6)] = Some(Colour::White);

        let policy = Greedy {
            hero_discount: 30.0,
            temperature: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_move(&policy, &game, Colour::White, true, &mut rng), Ok(Move::play(east)));
    }
}
