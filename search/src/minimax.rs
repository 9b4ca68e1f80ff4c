use std::cmp::Ordering;

use log::debug;
use rand::Rng;
use rosenkonig::{compare, Colour, Eval, Game, Move};

/// Search window. Values outside of it cannot change the result at the root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub lower: Eval,
    pub upper: Eval,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            lower: [f64::NEG_INFINITY; 3],
            upper: [f64::INFINITY; 3],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Full tree, no pruning.
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
    /// Alpha-beta that averages over every card a draw could produce.
    Expectiminimax,
}

impl Algorithm {
    /// Search `depth` plies ahead and return the value for `player` together
    /// with the move to play, if `player` is the one to move.
    ///
    /// The rng resolves draws that are not enumerated, and reshuffles.
    pub fn search<R: Rng>(
        self,
        game: &Game,
        depth: u32,
        player: Colour,
        hero_discount: f64,
        rng: &mut R,
    ) -> (Eval, Option<Move>) {
        let bounds = match self {
            Algorithm::Minimax => None,
            Algorithm::AlphaBeta | Algorithm::Expectiminimax => Some(Bounds::default()),
        };
        run(self, game, depth, bounds, player, hero_discount, rng)
    }
}

pub fn minimax<R: Rng>(
    game: &Game,
    depth: u32,
    player: Colour,
    hero_discount: f64,
    rng: &mut R,
) -> (Eval, Option<Move>) {
    run(Algorithm::Minimax, game, depth, None, player, hero_discount, rng)
}

pub fn alpha_beta<R: Rng>(
    game: &Game,
    depth: u32,
    bounds: Bounds,
    player: Colour,
    hero_discount: f64,
    rng: &mut R,
) -> (Eval, Option<Move>) {
    run(Algorithm::AlphaBeta, game, depth, Some(bounds), player, hero_discount, rng)
}

pub fn expectiminimax<R: Rng>(
    game: &Game,
    depth: u32,
    bounds: Bounds,
    player: Colour,
    hero_discount: f64,
    rng: &mut R,
) -> (Eval, Option<Move>) {
    run(Algorithm::Expectiminimax, game, depth, Some(bounds), player, hero_discount, rng)
}

fn run<R: Rng>(
    algorithm: Algorithm,
    game: &Game,
    depth: u32,
    bounds: Option<Bounds>,
    player: Colour,
    hero_discount: f64,
    rng: &mut R,
) -> (Eval, Option<Move>) {
    let mut context = Context {
        algorithm,
        player,
        hero_discount,
        rng,
        nodes: 0,
    };
    let (value, best) = context.search(game, depth, bounds);
    debug!(
        "{algorithm:?} depth {depth} for {player}: {} nodes, value {value:?}, move {}",
        context.nodes,
        best.map_or_else(|| "none".to_string(), |m| m.to_string())
    );
    (value, best)
}

// Fixed for the whole search.
struct Context<'a, R> {
    algorithm: Algorithm,
    player: Colour,
    hero_discount: f64,
    rng: &'a mut R,
    nodes: u64,
}

impl<R: Rng> Context<'_, R> {
    fn search(&mut self, game: &Game, depth: u32, mut bounds: Option<Bounds>) -> (Eval, Option<Move>) {
        self.nodes += 1;
        if depth == 0 || game.is_game_over() {
            return (game.heuristic(self.hero_discount, self.player), None);
        }

        let mover = game.to_move;
        let maximizing = mover == self.player;
        let moves = game.legal_moves(mover);
        let mut best_move = moves[0];
        let mut value = if maximizing {
            [f64::NEG_INFINITY; 3]
        } else {
            [f64::INFINITY; 3]
        };

        for my_move in moves {
            let new_value = self.value_after(game, my_move, depth - 1, bounds);
            if maximizing {
                if compare(&new_value, &value) == Ordering::Greater {
                    value = new_value;
                    best_move = my_move;
                }
                if let Some(bounds) = bounds.as_mut() {
                    if compare(&value, &bounds.upper) != Ordering::Less {
                        break; // beta cutoff
                    }
                    if compare(&value, &bounds.lower) == Ordering::Greater {
                        bounds.lower = value;
                    }
                }
            } else {
                if compare(&new_value, &value) == Ordering::Less {
                    value = new_value;
                }
                if let Some(bounds) = bounds.as_mut() {
                    if compare(&value, &bounds.lower) != Ordering::Greater {
                        break; // alpha cutoff
                    }
                    if compare(&value, &bounds.upper) == Ordering::Less {
                        bounds.upper = value;
                    }
                }
            }
        }

        (value, maximizing.then_some(best_move))
    }

    fn value_after(&mut self, game: &Game, my_move: Move, depth: u32, bounds: Option<Bounds>) -> Eval {
        let mover = game.to_move;
        if my_move.is_chance() && self.algorithm == Algorithm::Expectiminimax {
            // Average over every card that could be drawn. Each outcome is
            // searched with a full window so the mean is exact.
            let cards = game.piles.drawable.len();
            let mut total = [0.0; 3];
            for index in 0..cards {
                let mut child = game.clone();
                child.play_with(my_move, mover, Some(index), self.rng);
                let (value, _) = self.search(&child, depth, bounds.map(|_| Bounds::default()));
                for (sum, v) in total.iter_mut().zip(value) {
                    *sum += v;
                }
            }
            total.map(|sum| sum / cards as f64)
        } else {
            let mut child = game.clone();
            child.play_with(my_move, mover, None, self.rng);
            self.search(&child, depth, bounds).0
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rosenkonig::*;

    use super::*;

    #[test]
    fn depth_zero_is_the_heuristic() {
        let mut game = Game::default();
        game.board[Square::new(0, 0)] = Some(Colour::Red);
        let (value, best) = minimax(&game, 0, Colour::White, 30.0, &mut StepRng::new(0, 0));
        assert_eq!(value, game.heuristic(30.0, Colour::White));
        assert_eq!(best, None);
    }

    #[test]
    fn takes_the_square_that_joins_a_region() {
        let east = PowerCard::new(Direction::East, 1);
        let west = PowerCard::new(Direction::West, 1);
        let mut game = Game::default();
        game.piles.drawable.retain(|c| *c != east && *c != west);
        game.hands[0] = Hand::new(&[east, west]);
        game.board[Square::new(4, 6)] = Some(Colour::White);
        game.heroes = [0, 0];

        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Expectiminimax] {
            let (value, best) = algorithm.search(&game, 1, Colour::White, 0.0, &mut StepRng::new(0, 0));
            assert_eq!(best, Some(Move::play(east)), "{algorithm:?}");
            assert_eq!(value, [4.0, 2.0, 2.0], "{algorithm:?}");
        }
    }
}
