use std::{fmt::Display, time::Duration};

use log::debug;
use rand::{seq::SliceRandom, Rng};
use rosenkonig::*;

use crate::{
    config::{DEPTH, EXPLORATION, HERO_DISCOUNT, SELECTION, THINK_TIME},
    error::SearchError,
    mcts::{Mcts, SelectionPolicy},
    minimax::Algorithm,
    policy::{pick_move, ActionPolicy, Greedy, Uniform},
};

/// Built-in action policies that can be named in a [`StrategyConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Uniform,
    Greedy,
}

/// Plain description of a strategy, turned into a [`Strategy`] with
/// [`StrategyConfig::build`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrategyConfig {
    Random,
    Minimax { depth: u32, hero_discount: f64 },
    AlphaBeta { depth: u32, hero_discount: f64 },
    Expectiminimax { depth: u32, hero_discount: f64 },
    Mcts {
        think_time: Duration,
        exploration: f64,
        selection: SelectionPolicy,
    },
    Learned { policy: PolicyKind, exploitation: bool },
}

impl StrategyConfig {
    pub fn alpha_beta() -> Self {
        StrategyConfig::AlphaBeta {
            depth: DEPTH,
            hero_discount: HERO_DISCOUNT,
        }
    }

    pub fn mcts() -> Self {
        StrategyConfig::Mcts {
            think_time: THINK_TIME,
            exploration: EXPLORATION,
            selection: SELECTION,
        }
    }

    /// `seed` makes an MCTS strategy reproducible.
    pub fn build(self, seed: Option<u64>) -> Strategy {
        match self {
            StrategyConfig::Random => Strategy::Random,
            StrategyConfig::Minimax { depth, hero_discount } => Strategy::Minimax { depth, hero_discount },
            StrategyConfig::AlphaBeta { depth, hero_discount } => Strategy::AlphaBeta { depth, hero_discount },
            StrategyConfig::Expectiminimax { depth, hero_discount } => {
                Strategy::Expectiminimax { depth, hero_discount }
            }
            StrategyConfig::Mcts {
                think_time,
                exploration,
                selection,
            } => Strategy::Mcts {
                search: match seed {
                    Some(seed) => Mcts::seeded(exploration, seed),
                    None => Mcts::new(exploration),
                },
                think_time,
                selection,
            },
            StrategyConfig::Learned { policy, exploitation } => Strategy::Learned {
                policy: match policy {
                    PolicyKind::Uniform => Box::new(Uniform),
                    PolicyKind::Greedy => Box::new(Greedy {
                        hero_discount: HERO_DISCOUNT,
                        temperature: 1.0,
                    }),
                },
                exploitation,
            },
        }
    }
}

/// A way of choosing moves.
pub enum Strategy {
    /// Uniformly random legal moves.
    Random,
    Minimax {
        depth: u32,
        hero_discount: f64,
    },
    AlphaBeta {
        depth: u32,
        hero_discount: f64,
    },
    Expectiminimax {
        depth: u32,
        hero_discount: f64,
    },
    /// Keeps its tree between moves of the same game.
    Mcts {
        search: Mcts,
        think_time: Duration,
        selection: SelectionPolicy,
    },
    Learned {
        policy: Box<dyn ActionPolicy>,
        exploitation: bool,
    },
}

impl Strategy {
    /// Choose a move for the player. The rng resolves random choices and
    /// draws inside adversarial search.
    pub fn suggest_move<R: Rng>(&mut self, game: &Game, player: Colour, rng: &mut R) -> Result<Move, SearchError> {
        debug_assert_eq!(player, game.to_move, "asked for a move out of turn");
        let (algorithm, depth, hero_discount) = match self {
            Strategy::Random => {
                return game
                    .legal_moves(player)
                    .choose(rng)
                    .copied()
                    .ok_or(SearchError::NoMove)
            }
            Strategy::Mcts {
                search,
                think_time,
                selection,
            } => {
                let mut result = search.search_and_pick(game, *think_time, *selection);
                // Too little time to try every move once.
                while result == Err(SearchError::NotEnoughInformation) {
                    search.run_iterations(game, 1);
                    result = search.best_move(game, *selection);
                }
                return result;
            }
            Strategy::Learned { policy, exploitation } => {
                return pick_move(policy.as_ref(), game, player, *exploitation, rng)
            }
            Strategy::Minimax { depth, hero_discount } => (Algorithm::Minimax, *depth, *hero_discount),
            Strategy::AlphaBeta { depth, hero_discount } => (Algorithm::AlphaBeta, *depth, *hero_discount),
            Strategy::Expectiminimax { depth, hero_discount } => {
                (Algorithm::Expectiminimax, *depth, *hero_discount)
            }
        };

        let (value, best) = algorithm.search(game, depth, player, hero_discount, rng);
        debug!("{player} expects {value:?}");
        best.ok_or(SearchError::NoMove)
    }

    /// Drop anything remembered from earlier games.
    pub fn reset(&mut self) {
        if let Strategy::Mcts { search, .. } = self {
            search.clear();
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::Minimax { depth, .. } => write!(f, "minimax depth {depth}"),
            Strategy::AlphaBeta { depth, .. } => write!(f, "alpha-beta depth {depth}"),
            Strategy::Expectiminimax { depth, .. } => write!(f, "expectiminimax depth {depth}"),
            Strategy::Mcts { think_time, .. } => write!(f, "mcts {think_time:?}"),
            Strategy::Learned { exploitation, .. } => {
                write!(f, "policy ({})", if *exploitation { "argmax" } else { "sampled" })
            }
        }
    }
}
