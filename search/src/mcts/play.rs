use rosenkonig::*;

use super::{node::Edge, Mcts};
use crate::error::SearchError;

/// How to pick the move to play once searching is done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionPolicy {
    /// The child with the most visits.
    Robust,
    /// The child with the highest win rate.
    Max,
}

impl Mcts {
    /// The best move from the position according to the statistics so far.
    /// Ties go to the move generated first.
    ///
    /// Fails with [`SearchError::NotEnoughInformation`] until every legal move
    /// has been tried at least once.
    pub fn best_move(&self, game: &Game, policy: SelectionPolicy) -> Result<Move, SearchError> {
        let node = self.node(self.lookup(game).ok_or(SearchError::NotEnoughInformation)?);
        if !node.is_fully_expanded() {
            return Err(SearchError::NotEnoughInformation);
        }

        let score = |child| {
            let child = self.node(child);
            match policy {
                SelectionPolicy::Robust => child.visits as f64,
                SelectionPolicy::Max => child.win_rate(),
            }
        };

        let mut best: Option<(Move, f64)> = None;
        for &(edge, child) in &node.children {
            let (Edge::Move(my_move), Some(child)) = (edge, child) else {
                continue;
            };
            let value = score(child);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((my_move, value));
            }
        }
        best.map(|(my_move, _)| my_move).ok_or(SearchError::NoMove)
    }

    /// Search for the given time, then pick a move.
    pub fn search_and_pick(
        &mut self,
        game: &Game,
        timeout: std::time::Duration,
        policy: SelectionPolicy,
    ) -> Result<Move, SearchError> {
        self.run_search(game, timeout);
        self.best_move(game, policy)
    }
}
