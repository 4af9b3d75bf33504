//! Perft node counting under the simplified rules.
//!
//! Walks the full move tree with apply/undo. Kings can be captured, so the
//! tree keeps going after a king disappears.

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_apply::{apply_move, undo_move};
use crate::move_generation::move_generator::MoveGenerator;

pub fn perft(game_state: &GameState, depth: u8, generator: &impl MoveGenerator) -> u64 {
    let mut scratch = game_state.clone();
    perft_recursive(&mut scratch, depth, generator)
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(
    game_state: &GameState,
    depth: u8,
    generator: &impl MoveGenerator,
) -> Vec<(ChessMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut scratch = game_state.clone();
    let mut out = Vec::new();
    for mv in generator.generate_moves(&scratch) {
        apply_move(&mut scratch, mv);
        out.push((mv, perft_recursive(&mut scratch, depth - 1, generator)));
        undo_move(&mut scratch);
    }
    out
}

fn perft_recursive(game_state: &mut GameState, depth: u8, generator: &impl MoveGenerator) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        apply_move(game_state, mv);
        nodes += perft_recursive(game_state, depth - 1, generator);
        undo_move(game_state);
    }
    nodes
}
