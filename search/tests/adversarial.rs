use std::cmp::Ordering;

use rand::{
    rngs::{mock::StepRng, StdRng},
    seq::SliceRandom,
    Rng, SeedableRng,
};
use rosenkonig::*;
use search::{alpha_beta, expectiminimax, minimax, Bounds};

const HERO_DISCOUNT: f64 = 30.0;

/// Every draw resolved the same way, no matter how often it is called.
fn fixed() -> StepRng {
    StepRng::new(0, 0)
}

/// A position reached by random play from a seeded start.
fn random_position(seed: u64) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::with_rng(&mut rng);
    let plies = rng.gen_range(0..40);
    for _ in 0..plies {
        if game.is_game_over() {
            break;
        }
        let player = game.to_move;
        let my_move = *game.legal_moves(player).choose(&mut rng).unwrap();
        game.play_with(my_move, player, None, &mut rng);
    }
    game
}

#[test]
fn alpha_beta_matches_minimax() {
    for seed in 0..30 {
        let game = random_position(seed);
        for player in Colour::ALL {
            for depth in 1..=3 {
                let (full, _) = minimax(&game, depth, player, HERO_DISCOUNT, &mut fixed());
                let (pruned, best) = alpha_beta(&game, depth, Bounds::default(), player, HERO_DISCOUNT, &mut fixed());
                assert_eq!(full, pruned, "seed {seed}, {player}, depth {depth}\n{game}");
                assert_eq!(best.is_some(), player == game.to_move && !game.is_game_over());
            }
        }
    }
}

#[test]
fn alpha_beta_matches_minimax_deeper() {
    for seed in 100..105 {
        let game = random_position(seed);
        let player = game.to_move;
        let (full, _) = minimax(&game, 4, player, HERO_DISCOUNT, &mut fixed());
        let (pruned, _) = alpha_beta(&game, 4, Bounds::default(), player, HERO_DISCOUNT, &mut fixed());
        assert_eq!(full, pruned, "seed {seed}\n{game}");
    }
}

/// Plain minimax that averages over every card a draw could produce.
fn mean_over_draws(game: &Game, depth: u32, player: Colour) -> Eval {
    if depth == 0 || game.is_game_over() {
        return game.heuristic(HERO_DISCOUNT, player);
    }
    let mover = game.to_move;
    let values = game.legal_moves(mover).into_iter().map(|my_move| {
        let draws: Vec<_> = if my_move.is_chance() {
            (0..game.piles.drawable.len()).map(Some).collect()
        } else {
            vec![None]
        };
        let mut total = [0.0; 3];
        for draw in &draws {
            let mut child = game.clone();
            child.play_with(my_move, mover, *draw, &mut fixed());
            for (sum, v) in total.iter_mut().zip(mean_over_draws(&child, depth - 1, player)) {
                *sum += v;
            }
        }
        total.map(|sum| sum / draws.len() as f64)
    });
    let pick = if mover == player { Ordering::Greater } else { Ordering::Less };
    values
        .reduce(|best, value| if compare(&value, &best) == pick { value } else { best })
        .unwrap()
}

#[test]
fn expectiminimax_stays_exact_under_pruning() {
    for seed in 0..40 {
        let game = random_position(seed);
        for player in Colour::ALL {
            for depth in 1..=4 {
                let expected = mean_over_draws(&game, depth, player);
                let (value, _) = expectiminimax(&game, depth, Bounds::default(), player, HERO_DISCOUNT, &mut fixed());
                assert_eq!(value, expected, "seed {seed}, {player}, depth {depth}\n{game}");
            }
        }
    }
}

fn card(direction: Direction, distance: u8) -> PowerCard {
    PowerCard::new(direction, distance)
}

/// White's crown is in the corner and every card in hand points off the
/// board, so drawing is the only move. Four cards are left to draw and
/// neither hand has room after that.
fn forced_draw() -> Game {
    use Direction::*;

    let white = [card(North, 1), card(West, 1), card(NorthWest, 1), card(NorthEast, 1)];
    let red = [card(South, 1), card(East, 1), card(SouthEast, 1), card(South, 2), card(East, 2)];
    let drawable = [card(South, 3), card(East, 3), card(SouthEast, 2), card(SouthEast, 3)];

    let mut game = Game::default();
    game.crown = Square::new(0, 0);
    game.hands = [Hand::new(&white), Hand::new(&red)];
    game.piles.drawable = drawable.into_iter().collect();
    game.piles.discard = PowerCard::all()
        .filter(|c| !white.contains(c) && !red.contains(c) && !drawable.contains(c))
        .collect();
    game.reset_history();

    assert_eq!(game.card_count(), POWER_CARDS);
    assert_eq!(game.legal_moves(Colour::White), vec![Move::Draw]);
    game
}

#[test]
fn expectiminimax_is_the_mean_over_every_draw() {
    let game = forced_draw();
    let cards = game.piles.drawable.len();

    let (value, best) = expectiminimax(&game, 3, Bounds::default(), Colour::White, HERO_DISCOUNT, &mut fixed());
    assert_eq!(best, Some(Move::Draw));

    let mut total = [0.0; 3];
    for index in 0..cards {
        let mut child = game.clone();
        child.play_with(Move::Draw, Colour::White, Some(index), &mut fixed());
        // Both hands are full, so no more draws happen below this point.
        let (child_value, _) = minimax(&child, 2, Colour::White, HERO_DISCOUNT, &mut fixed());
        for (sum, v) in total.iter_mut().zip(child_value) {
            *sum += v;
        }
    }
    let mean = total.map(|sum| sum / cards as f64);
    assert_eq!(value, mean);
}

#[test]
fn alpha_beta_samples_a_single_draw() {
    let game = forced_draw();
    let (value, _) = alpha_beta(&game, 3, Bounds::default(), Colour::White, HERO_DISCOUNT, &mut fixed());

    // The fixed rng always takes the first card.
    let mut child = game.clone();
    child.play_with(Move::Draw, Colour::White, Some(0), &mut fixed());
    let (expected, _) = minimax(&child, 2, Colour::White, HERO_DISCOUNT, &mut fixed());
    assert_eq!(value, expected);
}
