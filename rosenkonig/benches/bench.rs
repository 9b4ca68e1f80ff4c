use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rosenkonig::{Game, Move};

/// Play `plies` random moves from a seeded start.
fn midgame(seed: u64, plies: usize) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::with_rng(&mut rng);
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

fn playout(mut game: Game, rng: &mut StdRng) -> Game {
    while !game.is_game_over() {
        let player = game.to_move;
        let my_move: Move = *game.legal_moves(player).choose(rng).unwrap();
        game.play_with(my_move, player, None, rng);
    }
    game
}

fn move_gen(c: &mut Criterion) {
    c.bench_function("legal_moves opening", |b| {
        let game = midgame(1, 0);
        b.iter(|| black_box(&game).legal_moves(game.to_move))
    });
    c.bench_function("legal_moves middle game", |b| {
        let game = midgame(1, 40);
        b.iter(|| black_box(&game).legal_moves(game.to_move))
    });
    c.bench_function("is_game_over middle game", |b| {
        let game = midgame(2, 40);
        b.iter(|| black_box(&game).is_game_over())
    });
}

fn valuation(c: &mut Criterion) {
    c.bench_function("heuristic middle game", |b| {
        let game = midgame(3, 60);
        b.iter(|| black_box(&game).heuristic(30.0, game.to_move))
    });
}

fn playouts(c: &mut Criterion) {
    c.bench_function("random playout from start", |b| {
        let game = midgame(4, 0);
        let mut rng = StdRng::seed_from_u64(4);
        b.iter_batched(|| game.clone(), |g| playout(g, &mut rng), BatchSize::SmallInput)
    });
}

criterion_group!(benches, move_gen, valuation, playouts);
criterion_main!(benches);
