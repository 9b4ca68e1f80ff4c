use std::fmt::Display;

use crate::PowerCard;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Sit out. Also the only option when nothing else is possible.
    Pass,
    /// Draw a power card into the first empty hand slot.
    Draw,
    /// Move the crown with a card. With `hero` the landing square is flipped
    /// from the opponent instead of receiving a new piece.
    Play { hero: bool, card: PowerCard },
}

impl Move {
    pub const fn play(card: PowerCard) -> Self {
        Move::Play { hero: false, card }
    }

    pub const fn hero(card: PowerCard) -> Self {
        Move::Play { hero: true, card }
    }

    pub const fn is_chance(self) -> bool {
        matches!(self, Move::Draw)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => write!(f, "pass"),
            Move::Draw => write!(f, "draw"),
            Move::Play { hero: false, card } => write!(f, "play {card}"),
            Move::Play { hero: true, card } => write!(f, "hero {card}"),
        }
    }
}
