use arrayvec::ArrayVec;

use crate::{hand::HAND_SIZE, Colour, Game, Move, PowerCard, Square};

impl Game {
    /// All moves the player may make, in a fixed order: draw, placements, hero flips.
    ///
    /// When nothing is possible the result is `[Move::Pass]`. That includes the
    /// case where every piece has already been placed.
    pub fn legal_moves(&self, player: Colour) -> Vec<Move> {
        if self.pieces_exhausted() {
            return vec![Move::Pass];
        }

        let hand = self.hand(player);
        let mut moves = Vec::new();

        // A free slot allows drawing a new card.
        if hand.has_space() {
            moves.push(Move::Draw);
        }

        let targets: ArrayVec<(PowerCard, Square), HAND_SIZE> = hand
            .cards()
            .filter_map(|card| self.crown.offset(card).map(|target| (card, target)))
            .collect();

        moves.extend(
            targets
                .iter()
                .filter(|(_, target)| self.board[*target].is_none())
                .map(|&(card, _)| Move::play(card)),
        );

        if self.hero_cards(player) > 0 {
            moves.extend(
                targets
                    .iter()
                    .filter(|(_, target)| self.board[*target] == Some(!player))
                    .map(|&(card, _)| Move::hero(card)),
            );
        }

        if moves.is_empty() {
            moves.push(Move::Pass);
        }
        moves
    }

    pub fn has_legal_moves(&self, player: Colour) -> bool {
        self.legal_moves(player)[0] != Move::Pass
    }
}
