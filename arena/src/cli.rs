use std::time::Duration;

use clap::{ArgEnum, Parser};
use search::{
    config::{DEPTH, EXPLORATION, HERO_DISCOUNT},
    PolicyKind,
    SelectionPolicy,
    StrategyConfig,
};

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Random,
    Minimax,
    AlphaBeta,
    Expectiminimax,
    Mcts,
    /// One move lookahead policy, always taking its favourite
    Greedy,
    /// One move lookahead policy, sampled by weight
    Sampled,
}

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Robust,
    Max,
}

/// Play Rosenkönig games between two strategies
#[derive(Parser)]
pub struct Args {
    /// Number of games to play
    #[clap(short, long, default_value_t = 10)]
    pub games: u32,
    /// Strategy playing white
    #[clap(short, long, arg_enum, default_value = "alpha-beta")]
    pub white: Kind,
    /// Strategy playing red
    #[clap(short, long, arg_enum, default_value = "random")]
    pub red: Kind,
    /// Search depth in plies
    #[clap(short, long, default_value_t = DEPTH)]
    pub depth: u32,
    /// Points each unused hero card is worth
    #[clap(long, default_value_t = HERO_DISCOUNT)]
    pub hero_discount: f64,
    /// MCTS thinking time per move
    #[clap(long, default_value_t = 3000)]
    pub think_millis: u64,
    /// UCB1 exploration constant
    #[clap(long, default_value_t = EXPLORATION)]
    pub exploration: f64,
    /// How MCTS picks its move
    #[clap(long, arg_enum, default_value = "robust")]
    pub selection: Selection,
    /// Seed for reproducible games
    #[clap(long)]
    pub seed: Option<u64>,
    /// Write the log to this file instead of stderr
    #[clap(long)]
    pub log_file: Option<String>,
    /// Log every move and search
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn strategy(&self, kind: Kind) -> StrategyConfig {
        let (depth, hero_discount) = (self.depth, self.hero_discount);
        match kind {
            Kind::Random => StrategyConfig::Random,
            Kind::Minimax => StrategyConfig::Minimax { depth, hero_discount },
            Kind::AlphaBeta => StrategyConfig::AlphaBeta { depth, hero_discount },
            Kind::Expectiminimax => StrategyConfig::Expectiminimax { depth, hero_discount },
            Kind::Mcts => StrategyConfig::Mcts {
                think_time: Duration::from_millis(self.think_millis),
                exploration: self.exploration,
                selection: match self.selection {
                    Selection::Robust => SelectionPolicy::Robust,
                    Selection::Max => SelectionPolicy::Max,
                },
            },
            Kind::Greedy => StrategyConfig::Learned {
                policy: PolicyKind::Greedy,
                exploitation: true,
            },
            Kind::Sampled => StrategyConfig::Learned {
                policy: PolicyKind::Greedy,
                exploitation: false,
            },
        }
    }
}
