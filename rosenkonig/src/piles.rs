use arrayvec::ArrayVec;
use rand::{seq::SliceRandom, Rng};

use crate::{card::POWER_CARDS, PowerCard};

type Pile = ArrayVec<PowerCard, POWER_CARDS>;

/// The cards that are in neither hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Piles {
    pub drawable: Pile,
    pub discard: Pile,
}

impl Piles {
    pub fn new(drawable: impl IntoIterator<Item = PowerCard>) -> Self {
        Piles {
            drawable: drawable.into_iter().collect(),
            discard: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.drawable.len() + self.discard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawable.is_empty() && self.discard.is_empty()
    }

    /// Take a card from the drawable pile, at random unless an index is given.
    /// When the drawable pile runs out the discard pile is shuffled and takes its place.
    pub fn draw<R: Rng>(&mut self, index: Option<usize>, rng: &mut R) -> PowerCard {
        assert!(!self.drawable.is_empty(), "cannot draw from an empty pile");
        let index = index.unwrap_or_else(|| rng.gen_range(0..self.drawable.len()));
        let card = self.drawable.remove(index);
        if self.drawable.is_empty() {
            self.reshuffle(rng);
        }
        card
    }

    pub fn discard(&mut self, card: PowerCard) {
        self.discard.push(card);
    }

    fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        // The hands hold at most ten cards, so the discard pile cannot be empty here.
        assert!(
            !self.discard.is_empty(),
            "both piles are exhausted, cards have gone missing"
        );
        std::mem::swap(&mut self.drawable, &mut self.discard);
        self.drawable.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn explicit_index_draws_that_card() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut piles = Piles::new(PowerCard::all());
        let expected = piles.drawable[5];
        assert_eq!(piles.draw(Some(5), &mut rng), expected);
        assert_eq!(piles.drawable.len(), POWER_CARDS - 1);
        assert!(!piles.drawable.contains(&expected));
    }

    #[test]
    fn last_card_refills_from_discard() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cards = PowerCard::all();
        let mut piles = Piles::new(cards.next());
        for card in cards.by_ref().take(3) {
            piles.discard(card);
        }
        piles.draw(None, &mut rng);
        assert_eq!(piles.drawable.len(), 3);
        assert!(piles.discard.is_empty());
        assert_eq!(piles.len(), 3);
        assert!(!piles.is_empty());
        assert!(Piles::default().is_empty());
    }

    #[test]
    #[should_panic(expected = "both piles are exhausted")]
    fn exhausting_both_piles_panics() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut piles = Piles::new(PowerCard::all().take(1));
        piles.draw(None, &mut rng);
    }
}
