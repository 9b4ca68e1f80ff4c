use std::fmt::Display;

use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::{
    board::{Board, BOARD_SIZE},
    card::POWER_CARDS,
    hand::{Hand, HAND_SIZE},
    piles::Piles,
    Colour, Move, PowerCard, Square,
};

/// Pieces that can be placed on the board over the whole game, shared by both players.
pub const PIECES: u8 = 52;
pub const HERO_CARDS: u8 = 4;

#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub crown: Square,
    pub hands: [Hand; 2],
    pub heroes: [u8; 2],
    pub piles: Piles,
    pub pieces: u8,
    pub to_move: Colour,
    history: String,
}

impl Default for Game {
    /// A game with empty hands and the whole deck, unshuffled, in the drawable pile.
    fn default() -> Self {
        let mut game = Game {
            board: Board::default(),
            crown: Square::centre(),
            hands: Default::default(),
            heroes: [HERO_CARDS; 2],
            piles: Piles::new(PowerCard::all()),
            pieces: PIECES,
            to_move: Colour::White,
            history: String::new(),
        };
        game.reset_history();
        game
    }
}

impl Game {
    /// Start a game with a shuffled deck.
    pub fn new() -> Self {
        Game::with_rng(&mut thread_rng())
    }

    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut deck: Vec<_> = PowerCard::all().collect();
        deck.shuffle(rng);
        let mut deck = deck.into_iter();

        let mut game = Game::default();
        for hand in &mut game.hands {
            *hand = Hand::new(&deck.by_ref().take(HAND_SIZE).collect::<Vec<_>>());
        }
        game.piles = Piles::new(deck);
        game.reset_history();
        game
    }

    /// Identifies the state by the moves that led to it.
    /// Two move orders reaching the same position get different keys.
    pub fn key(&self) -> &str {
        &self.history
    }

    /// Restart the history from the current hands.
    /// Call after editing a position by hand so the key reflects it.
    pub fn reset_history(&mut self) {
        self.history = format!("{}{}", self.hands[0], self.hands[1]);
    }

    pub fn hand(&self, player: Colour) -> &Hand {
        &self.hands[player.index()]
    }

    pub fn hero_cards(&self, player: Colour) -> u8 {
        self.heroes[player.index()]
    }

    /// True once every piece has been placed. From then on both players can only pass.
    pub fn pieces_exhausted(&self) -> bool {
        self.pieces == 0
    }

    /// Total cards in both hands and both piles.
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>() + self.piles.len()
    }

    /// Play a move, drawing at random from the thread rng.
    pub fn play(&mut self, my_move: Move, player: Colour) {
        self.play_with(my_move, player, None, &mut thread_rng());
    }

    /// Play a move for the player. `draw` forces which card of the drawable
    /// pile a [`Move::Draw`] takes.
    ///
    /// The move is not checked; it must come from [`Game::legal_moves`].
    pub fn play_with<R: Rng>(&mut self, my_move: Move, player: Colour, draw: Option<usize>, rng: &mut R) {
        self.to_move = self.to_move.next();
        self.history.push_str(&format!("|{my_move}"));

        match my_move {
            Move::Pass => {}
            Move::Draw => {
                let card = self.piles.draw(draw, rng);
                self.hands[player.index()].insert(card);
                self.history.push_str(&format!(" {card}"));
            }
            Move::Play { hero, card } => {
                let target = self
                    .crown
                    .offset(card)
                    .expect("tried to move the crown off the board");
                self.crown = target;
                self.hands[player.index()].remove(card);
                self.piles.discard(card);
                self.board[target] = Some(player);
                if hero {
                    self.heroes[player.index()] -= 1;
                } else {
                    self.pieces -= 1;
                }
            }
        }
        debug_assert_eq!(self.card_count(), POWER_CARDS);
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: String = (0..BOARD_SIZE)
                .map(|column| {
                    let square = Square::new(row, column);
                    match (self.board[square], square == self.crown) {
                        (Some(Colour::White), false) => 'W',
                        (Some(Colour::Red), false) => 'R',
                        (Some(Colour::White), true) => 'w',
                        (Some(Colour::Red), true) => 'r',
                        (None, false) => '.',
                        (None, true) => '*',
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        for colour in Colour::ALL {
            writeln!(
                f,
                "{colour}: {} heroes {}",
                self.hand(colour),
                self.hero_cards(colour)
            )?;
        }
        write!(
            f,
            "pieces {} drawable {} discard {} to move {}",
            self.pieces,
            self.piles.drawable.len(),
            self.piles.discard.len(),
            self.to_move
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::Direction;

    #[test]
    fn new_game_deals_five_cards_each() {
        let game = Game::with_rng(&mut StdRng::seed_from_u64(1));
        assert_eq!(game.hands[0].len(), HAND_SIZE);
        assert_eq!(game.hands[1].len(), HAND_SIZE);
        assert_eq!(game.piles.drawable.len(), POWER_CARDS - 2 * HAND_SIZE);
        assert!(game.piles.discard.is_empty());
        assert_eq!(game.crown, Square::new(4, 4));
        assert_eq!(game.heroes, [HERO_CARDS; 2]);
        assert_eq!(game.pieces, PIECES);
        assert_eq!(game.to_move, Colour::White);
        assert!(game.board.empty());
    }

    #[test]
    fn placing_moves_crown_and_card() {
        let mut game = Game::default();
        let card = PowerCard::new(Direction::East, 2);
        game.piles.drawable.retain(|c| *c != card);
        game.hands[0] = Hand::new(&[card]);

        game.play(Move::play(card), Colour::White);
        let target = Square::new(4, 6);
        assert_eq!(game.crown, target);
        assert_eq!(game.board[target], Some(Colour::White));
        assert_eq!(game.pieces, PIECES - 1);
        assert!(game.hands[0].is_empty());
        assert_eq!(game.piles.discard.as_slice(), &[card]);
        assert_eq!(game.to_move, Colour::Red);
    }

    #[test]
    fn hero_flips_without_using_a_piece() {
        let mut game = Game::default();
        let card = PowerCard::new(Direction::North, 1);
        game.piles.drawable.retain(|c| *c != card);
        game.hands[1] = Hand::new(&[card]);
        game.board[Square::new(3, 4)] = Some(Colour::White);
        game.to_move = Colour::Red;

        game.play(Move::hero(card), Colour::Red);
        assert_eq!(game.board[Square::new(3, 4)], Some(Colour::Red));
        assert_eq!(game.heroes, [HERO_CARDS, HERO_CARDS - 1]);
        assert_eq!(game.pieces, PIECES);
    }

    #[test]
    fn forced_draw_extends_key() {
        let mut game = Game::with_rng(&mut StdRng::seed_from_u64(3));
        let card = game.hands[0].slots[2].unwrap();
        game.play(Move::play(card), Colour::White);
        game.play(Move::Pass, Colour::Red);
        let drawn = game.piles.drawable[0];
        let before = game.key().to_string();
        game.play_with(Move::Draw, Colour::White, Some(0), &mut StdRng::seed_from_u64(0));

        assert_eq!(game.hands[0].slots[2], Some(drawn));
        assert_eq!(game.key(), format!("{before}|draw {drawn}"));
        assert_eq!(game.card_count(), POWER_CARDS);
    }
}
