use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::generate_step_moves;

pub fn generate_knight_moves(board: &Board, side_to_move: Color, from: Square, out: &mut Vec<Square>) {
    generate_step_moves(board, side_to_move, from, &KNIGHT_OFFSETS, out);
}
