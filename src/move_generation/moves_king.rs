use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::generate_step_moves;

/// King steps. No castling and no filtering of attacked squares.
pub fn generate_king_moves(board: &Board, side_to_move: Color, from: Square, out: &mut Vec<Square>) {
    generate_step_moves(board, side_to_move, from, &KING_OFFSETS, out);
}
