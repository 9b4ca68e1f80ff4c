use std::time::{Duration, Instant};

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use rosenkonig::*;
use rustc_hash::FxHashMap;

use super::node::{upper_confidence_bound, Edge, Node, NodeId};
use crate::config::EXPLORATION;

/// Totals for one call of [`Mcts::run_search`] or [`Mcts::run_iterations`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub runtime: Duration,
    pub simulations: u32,
    /// Simulations that ended in a draw.
    pub draws: u32,
}

/// A search session. Nodes are remembered by the history key of their
/// position, so repeated searches on the same game keep building one tree.
#[derive(Debug)]
pub struct Mcts {
    pub exploration: f64,
    pub(crate) nodes: Vec<Node>,
    pub(crate) table: FxHashMap<String, NodeId>,
    rng: StdRng,
}

impl Default for Mcts {
    fn default() -> Self {
        Mcts::new(EXPLORATION)
    }
}

impl Mcts {
    pub fn new(exploration: f64) -> Self {
        Mcts::with_rng(exploration, StdRng::from_entropy())
    }

    pub fn seeded(exploration: f64, seed: u64) -> Self {
        Mcts::with_rng(exploration, StdRng::seed_from_u64(seed))
    }

    fn with_rng(exploration: f64, rng: StdRng) -> Self {
        Mcts {
            exploration,
            nodes: Vec::new(),
            table: FxHashMap::default(),
            rng,
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.table.clear();
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn lookup(&self, game: &Game) -> Option<NodeId> {
        self.table.get(game.key()).copied()
    }

    fn insert(&mut self, key: String, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.table.insert(key, id);
        id
    }

    /// Node for the position, created without a parent if it was never seen.
    pub fn make_node(&mut self, game: &Game) -> NodeId {
        match self.lookup(game) {
            Some(id) => id,
            None => self.insert(game.key().to_string(), Node::decision(game.clone(), None)),
        }
    }

    /// Simulate until `timeout` has passed. The clock is checked between
    /// simulations, so the last one may finish a little late.
    pub fn run_search(&mut self, game: &Game, timeout: Duration) -> SearchStats {
        let start = Instant::now();
        let root = self.make_node(game);
        let mut stats = SearchStats::default();
        while start.elapsed() < timeout {
            self.iteration(root, &mut stats);
        }
        stats.runtime = start.elapsed();
        debug!(
            "{} simulations ({} draws) in {:?}, {} nodes",
            stats.simulations,
            stats.draws,
            stats.runtime,
            self.nodes.len()
        );
        stats
    }

    /// Run exactly `iterations` simulations.
    pub fn run_iterations(&mut self, game: &Game, iterations: u32) -> SearchStats {
        let start = Instant::now();
        let root = self.make_node(game);
        let mut stats = SearchStats::default();
        for _ in 0..iterations {
            self.iteration(root, &mut stats);
        }
        stats.runtime = start.elapsed();
        stats
    }

    fn iteration(&mut self, root: NodeId, stats: &mut SearchStats) {
        let mut node = self.select(root);
        let result = if self.node(node).is_terminal() {
            self.node(node).game.winner()
        } else {
            node = self.expand(node);
            self.simulate(node)
        };
        self.backpropagate(node, root, result);

        stats.simulations += 1;
        if result == GameResult::Draw {
            stats.draws += 1;
        }
    }

    /// Walk down while every child has been visited, by UCB1 at decision
    /// nodes and uniformly at random at chance nodes.
    fn select(&mut self, root: NodeId) -> NodeId {
        let mut id = root;
        loop {
            let node = self.node(id);
            if node.is_leaf() || !node.is_fully_expanded() {
                return id;
            }
            let children = node.children.iter().flat_map(|(_, child)| *child);
            id = if node.chance {
                let children: Vec<_> = children.collect();
                *children
                    .choose(&mut self.rng)
                    .expect("tried to select on a node without children")
            } else {
                let parent_visits = node.visits;
                let (_, best) = children
                    .map(|child| {
                        let ucb = upper_confidence_bound(self.node(child), parent_visits, self.exploration);
                        (ucb, child)
                    })
                    .fold(None, |best: Option<(f64, NodeId)>, (ucb, child)| match best {
                        Some((best_ucb, _)) if best_ucb >= ucb => best,
                        _ => Some((ucb, child)),
                    })
                    .expect("tried to select on a node without children");
                best
            };
        }
    }

    /// Create one unexpanded child of the node, chosen at random.
    fn expand(&mut self, id: NodeId) -> NodeId {
        let unexpanded: Vec<usize> = self
            .node(id)
            .children
            .iter()
            .enumerate()
            .filter(|(_, (_, child))| child.is_none())
            .map(|(slot, _)| slot)
            .collect();
        let slot = *unexpanded
            .choose(&mut self.rng)
            .expect("tried to expand a fully expanded node");

        let parent = self.node(id);
        let edge = parent.children[slot].0;
        let mut game = parent.game.clone();
        let mover = game.to_move;
        let (key, child) = match edge {
            Edge::Card(card) => {
                let index = game
                    .piles
                    .drawable
                    .iter()
                    .position(|&c| c == card)
                    .expect("chance node card is not in the drawable pile");
                game.play_with(Move::Draw, mover, Some(index), &mut self.rng);
                (game.key().to_string(), Node::decision(game, Some(id)))
            }
            // The card is decided by the chance node's children.
            Edge::Move(Move::Draw) => (format!("{}|draw", game.key()), Node::chance(game, Some(id))),
            Edge::Move(my_move) => {
                game.play_with(my_move, mover, None, &mut self.rng);
                (game.key().to_string(), Node::decision(game, Some(id)))
            }
        };

        let existing = self.table.get(&key).copied();
        let child = match existing {
            // Seen before as a root of its own; attach it here.
            Some(existing) => {
                let node = self.node_mut(existing);
                if node.parent.is_none() {
                    node.parent = Some(id);
                }
                existing
            }
            None => self.insert(key, child),
        };
        self.node_mut(id).children[slot].1 = Some(child);
        child
    }

    /// Play random moves to the end of the game.
    fn simulate(&mut self, id: NodeId) -> GameResult {
        let node = self.node(id);
        let mut game = node.game.clone();
        if node.chance {
            let mover = game.to_move;
            game.play_with(Move::Draw, mover, None, &mut self.rng);
        }
        random_playout(&mut game, &mut self.rng)
    }

    /// Update statistics from the node up to the root of this search.
    fn backpropagate(&mut self, mut id: NodeId, root: NodeId, result: GameResult) {
        loop {
            let node = self.node_mut(id);
            node.update(result);
            match node.parent {
                Some(parent) if id != root => id = parent,
                _ => break,
            }
        }
    }
}

pub fn random_playout<R: Rng>(game: &mut Game, rng: &mut R) -> GameResult {
    while !game.is_game_over() {
        let player = game.to_move;
        let moves = game.legal_moves(player);
        let my_move = *moves.choose(rng).expect("there is always at least one legal move");
        game.play_with(my_move, player, None, rng);
    }
    game.winner()
}
