//! Fixed numbering of every move, for policies that pick from a flat list of
//! actions. Placements come first, then hero flips, each grouped by distance
//! and then by direction. The last two actions are draw and pass.

use rosenkonig::*;
use rustc_hash::FxHashMap;

pub const ACTIONS: usize = 2 * POWER_CARDS + 2;
pub const DRAW_ACTION: usize = ACTIONS - 2;
pub const PASS_ACTION: usize = ACTIONS - 1;

lazy_static! {
    static ref MOVES: Vec<Move> = generate_moves();
    static ref INDICES: FxHashMap<Move, usize> = MOVES
        .iter()
        .enumerate()
        .map(|(index, &my_move)| (my_move, index))
        .collect();
}

fn generate_moves() -> Vec<Move> {
    let mut moves: Vec<Move> = PowerCard::all().map(Move::play).collect();
    moves.extend(PowerCard::all().map(Move::hero));
    moves.push(Move::Draw);
    moves.push(Move::Pass);
    assert_eq!(moves.len(), ACTIONS);
    moves
}

pub fn move_index(my_move: Move) -> usize {
    INDICES[&my_move]
}

/// The move with the given index. Panics if `index >= ACTIONS`.
pub fn index_move(index: usize) -> Move {
    MOVES[index]
}

/// Which actions are legal for the player.
pub fn action_mask(game: &Game, player: Colour) -> [bool; ACTIONS] {
    let mut mask = [false; ACTIONS];
    for my_move in game.legal_moves(player) {
        mask[move_index(my_move)] = true;
    }
    mask
}
