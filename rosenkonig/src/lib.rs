mod board;
mod card;
mod colour;
mod compare;
mod game;
mod game_result;
mod hand;
mod move_gen;
mod moves;
mod piles;
mod square;
mod valuation;
mod wins;

pub use board::{Board, BOARD_SIZE};
pub use card::{Direction, PowerCard, DIRECTIONS, MAX_DISTANCE, POWER_CARDS};
pub use colour::Colour;
pub use compare::compare;
pub use game::{Game, HERO_CARDS, PIECES};
pub use game_result::GameResult;
pub use hand::{Hand, HAND_SIZE};
pub use moves::Move;
pub use piles::Piles;
pub use square::Square;
pub use valuation::{Eval, Valuation};
