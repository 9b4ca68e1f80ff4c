use std::{fmt::Display, time::Duration};

use rosenkonig::{Colour, GameResult};

/// Results and timings over a series of games, per colour.
#[derive(Debug, Default)]
pub struct Tally {
    wins: [u32; 2],
    draws: u32,
    think_time: [Duration; 2],
    moves: [u32; 2],
}

impl Tally {
    pub fn record_move(&mut self, player: Colour, elapsed: Duration) {
        self.think_time[player.index()] += elapsed;
        self.moves[player.index()] += 1;
    }

    pub fn record_result(&mut self, result: GameResult) {
        match result {
            GameResult::Winner(colour) => self.wins[colour.index()] += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::Ongoing => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.wins.iter().sum::<u32>() + self.draws
    }

    pub fn wins(&self, player: Colour) -> u32 {
        self.wins[player.index()]
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn moves(&self, player: Colour) -> u32 {
        self.moves[player.index()]
    }

    pub fn average_think_time(&self, player: Colour) -> Option<Duration> {
        let moves = self.moves[player.index()];
        (moves > 0).then(|| self.think_time[player.index()] / moves)
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for colour in Colour::ALL {
            let average = self
                .average_think_time(colour)
                .map_or_else(|| "-".to_string(), |t| format!("{t:?}"));
            writeln!(
                f,
                "{colour}: {} wins, {} moves, {average} per move",
                self.wins(colour),
                self.moves(colour)
            )?;
        }
        write!(f, "draws: {} of {} games", self.draws, self.games())
    }
}
