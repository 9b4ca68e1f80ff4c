use rosenkonig::Game;

use super::{node::Edge, Mcts};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeStats {
    pub visits: u32,
    pub wins: u32,
    pub children: Vec<ChildStats>,
}

/// Statistics of one edge. `None` while the child is unexpanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildStats {
    pub edge: Edge,
    pub visits: Option<u32>,
    pub wins: Option<u32>,
}

impl Mcts {
    pub fn stats(&self, game: &Game) -> Option<NodeStats> {
        let node = self.node(self.lookup(game)?);
        Some(NodeStats {
            visits: node.visits,
            wins: node.wins,
            children: node
                .children
                .iter()
                .map(|&(edge, child)| {
                    let child = child.map(|id| self.node(id));
                    ChildStats {
                        edge,
                        visits: child.map(|c| c.visits),
                        wins: child.map(|c| c.wins),
                    }
                })
                .collect(),
        })
    }

    /// Table of the children of the position, most visited first.
    pub fn debug(&self, game: &Game, limit: Option<usize>) -> String {
        let Some(stats) = self.stats(game) else {
            return String::from("position has not been searched\n");
        };
        let mut children = stats.children;
        children.sort_by_key(|child| std::cmp::Reverse(child.visits));
        format!(
            "move       visited     wins   winrate\n{}",
            children
                .iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|child| match (child.visits, child.wins) {
                    (Some(visits), Some(wins)) => format!(
                        "{: <8} {: >9} {: >8} {: >9.4}\n",
                        child.edge.to_string(),
                        visits,
                        wins,
                        wins as f64 / visits.max(1) as f64,
                    ),
                    _ => format!("{: <8} {: >9}\n", child.edge.to_string(), "-"),
                })
                .collect::<String>()
        )
    }
}
