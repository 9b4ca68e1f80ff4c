use std::fmt::Display;

use rosenkonig::*;

/// Index of a node in the session's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// What leads from a node to one of its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// A move chosen at a decision node.
    Move(Move),
    /// The card that comes out of the draw pending at a chance node.
    Card(PowerCard),
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Move(my_move) => write!(f, "{my_move}"),
            Edge::Card(card) => write!(f, "gets {card}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    /// For a chance node, the position before the pending draw.
    pub game: Game,
    pub chance: bool,
    pub visits: u32,
    pub wins: u32,
    pub parent: Option<NodeId>,
    /// Every edge out of the node. `None` until the child is expanded.
    pub children: Vec<(Edge, Option<NodeId>)>,
}

impl Node {
    /// A node where the player to move picks among the legal moves.
    /// Finished games get no children.
    pub fn decision(game: Game, parent: Option<NodeId>) -> Self {
        let children = if game.is_game_over() {
            Vec::new()
        } else {
            game.legal_moves(game.to_move)
                .into_iter()
                .map(|my_move| (Edge::Move(my_move), None))
                .collect()
        };
        Node {
            game,
            chance: false,
            visits: 0,
            wins: 0,
            parent,
            children,
        }
    }

    /// A node for the draw `game.to_move` is about to make, with a child
    /// for every card left in the drawable pile.
    pub fn chance(game: Game, parent: Option<NodeId>) -> Self {
        let children = game
            .piles
            .drawable
            .iter()
            .map(|&card| (Edge::Card(card), None))
            .collect();
        Node {
            game,
            chance: true,
            visits: 0,
            wins: 0,
            parent,
            children,
        }
    }

    /// The player who acts once this node is resolved. At a chance node that
    /// is the opponent of the player drawing.
    pub fn to_move(&self) -> Colour {
        if self.chance {
            !self.game.to_move
        } else {
            self.game.to_move
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_terminal(&self) -> bool {
        !self.chance && self.game.is_game_over()
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.children.iter().all(|(_, child)| child.is_some())
    }

    /// Update the statistics with the result of one simulation.
    pub fn update(&mut self, result: GameResult) {
        self.visits += 1;
        if result == GameResult::Winner(!self.to_move()) {
            self.wins += 1;
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins as f64 / self.visits as f64
        }
    }
}

/// UCB1 = w/n + c * sqrt(ln(N) / n)
pub fn upper_confidence_bound(child: &Node, parent_visits: u32, exploration: f64) -> f64 {
    child.win_rate() + exploration * ((parent_visits as f64).ln() / child.visits as f64).sqrt()
}
