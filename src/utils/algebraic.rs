//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the
//! `(row, col)` squares used by the board, where row 0 is rank 8.

use crate::game_state::chess_types::Square;

/// Convert coordinate notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Square::new(row, col).ok_or_else(|| format!("Invalid algebraic square: {square}"))
}

/// Convert a square to coordinate notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_map_to_rows_and_columns() {
        assert_eq!(
            algebraic_to_square("a8").expect("a8 should parse"),
            Square::new(0, 0).unwrap()
        );
        assert_eq!(
            algebraic_to_square("h1").expect("h1 should parse"),
            Square::new(7, 7).unwrap()
        );
        assert_eq!(
            algebraic_to_square("e2").expect("e2 should parse"),
            Square::new(6, 4).unwrap()
        );
        assert_eq!(square_to_algebraic(Square::new(1, 4).unwrap()), "e7");
    }

    #[test]
    fn uppercase_file_is_accepted() {
        assert_eq!(
            algebraic_to_square("E2").expect("E2 should parse"),
            Square::new(6, 4).unwrap()
        );
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(algebraic_to_square("").is_err());
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("a10").is_err());
    }
}
