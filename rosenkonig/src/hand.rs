use std::fmt::Display;

use crate::PowerCard;

pub const HAND_SIZE: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    pub slots: [Option<PowerCard>; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: &[PowerCard]) -> Self {
        assert!(cards.len() <= HAND_SIZE, "a hand holds at most {HAND_SIZE} cards");
        let mut hand = Hand::default();
        for (slot, &card) in hand.slots.iter_mut().zip(cards) {
            *slot = Some(card);
        }
        hand
    }

    pub fn cards(&self) -> impl Iterator<Item = PowerCard> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.cards().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn has_space(&self) -> bool {
        self.slots.iter().any(Option::is_none)
    }

    pub fn contains(&self, card: PowerCard) -> bool {
        self.cards().any(|c| c == card)
    }

    /// Put the card into the first empty slot.
    pub fn insert(&mut self, card: PowerCard) {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_none())
            .expect("cannot add a card to a full hand");
        *slot = Some(card);
    }

    /// Clear the slot holding the card.
    pub fn remove(&mut self, card: PowerCard) {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| **slot == Some(card))
            .expect("cannot remove a card that is not in the hand");
        *slot = None;
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = self
            .slots
            .iter()
            .map(|slot| slot.map_or_else(|| "-".to_string(), |card| card.to_string()))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{slots}]")
    }
}
