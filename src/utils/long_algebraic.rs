use std::fmt;

use crate::game_state::chess_types::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: ChessMove) -> String {
    let mut out = square_to_algebraic(mv.from);
    out.push_str(&square_to_algebraic(mv.to));
    out
}

/// Parse a four-character coordinate move such as `e2e3`.
///
/// Promotion suffixes are not accepted: pawns always promote to a queen.
pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<ChessMove, String> {
    let trimmed = long_algebraic.trim();
    if trimmed.len() != 4 || !trimmed.is_ascii() {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_square(&trimmed[0..2])?;
    let to = algebraic_to_square(&trimmed[2..4])?;
    Ok(ChessMove::new(from, to))
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(*self))
    }
}
