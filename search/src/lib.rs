#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod error;
pub mod mcts;
pub mod minimax;
pub mod policy;
pub mod repr;
pub mod strategy;

pub use error::SearchError;
pub use mcts::{Mcts, SearchStats, SelectionPolicy};
pub use minimax::{alpha_beta, expectiminimax, minimax, Algorithm, Bounds};
pub use policy::ActionPolicy;
pub use strategy::{PolicyKind, Strategy, StrategyConfig};
