use std::{error::Error, time::Instant};

use clap::Parser;
use cli::Args;
use log::{debug, info, LevelFilter};
use mimalloc::MiMalloc;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rosenkonig::{Colour, Game, GameResult};
use search::{SearchError, Strategy};
use tally::Tally;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod tally;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, level)?,
        None => simple_logging::log_to_stderr(level),
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sides = [
        args.strategy(args.white).build(args.seed),
        args.strategy(args.red).build(args.seed.map(|seed| seed + 1)),
    ];
    println!(
        "{} (white) against {} (red), {} games",
        sides[0], sides[1], args.games
    );

    let mut tally = Tally::default();
    for i in 0..args.games {
        // Alternate who moves first.
        let first = if i % 2 == 0 { Colour::White } else { Colour::Red };
        let result = play_game(&mut sides, first, &mut rng, &mut tally)?;
        info!("game {} ({first} moved first): {result:?}", i + 1);
    }

    println!("{tally}");
    Ok(())
}

fn play_game<R: Rng>(
    sides: &mut [Strategy; 2],
    first: Colour,
    rng: &mut R,
    tally: &mut Tally,
) -> Result<GameResult, SearchError> {
    let mut game = Game::with_rng(rng);
    game.to_move = first;
    for side in sides.iter_mut() {
        side.reset();
    }

    while !game.is_game_over() {
        let player = game.to_move;
        let start = Instant::now();
        let my_move = sides[player.index()].suggest_move(&game, player, rng)?;
        tally.record_move(player, start.elapsed());
        debug!("{player} plays {my_move}");
        game.play_with(my_move, player, None, rng);
    }
    debug!("final position\n{game}");

    let result = game.winner();
    tally.record_result(result);
    Ok(result)
}
