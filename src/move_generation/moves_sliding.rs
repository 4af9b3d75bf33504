//! Sliding-piece move generation.
//!
//! Rook, bishop and queen share the ray walk in `generate_slide_moves`;
//! they only differ in their direction sets.

use crate::game_state::chess_rules::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::generate_slide_moves;

pub fn generate_rook_moves(board: &Board, side_to_move: Color, from: Square, out: &mut Vec<Square>) {
    generate_slide_moves(board, side_to_move, from, &ROOK_DIRECTIONS, out);
}

pub fn generate_bishop_moves(board: &Board, side_to_move: Color, from: Square, out: &mut Vec<Square>) {
    generate_slide_moves(board, side_to_move, from, &BISHOP_DIRECTIONS, out);
}

pub fn generate_queen_moves(board: &Board, side_to_move: Color, from: Square, out: &mut Vec<Square>) {
    generate_slide_moves(board, side_to_move, from, &QUEEN_DIRECTIONS, out);
}
