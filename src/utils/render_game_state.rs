//! Terminal-oriented Unicode board renderer.
//!
//! Draws the board with rank/file labels, brackets the selected square and
//! appends a `Turn:` status line. Row 0 (rank 8) is printed first.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8u8 {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let glyph = match game_state.piece_at(square) {
                Some(piece) => piece_to_unicode(piece),
                None => '·',
            };

            if game_state.selected == Some(square) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h\n");
    out.push_str(&format!("Turn: {}", game_state.side_to_move.name()));

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::chess_types::*;

    #[test]
    fn start_position_rows_and_status() {
        let game = GameState::new_game();
        let rendered = render_game_state(&game);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜  8");
        assert_eq!(lines[5], "4  ·  ·  ·  ·  ·  ·  ·  ·  4");
        assert_eq!(lines[8], "1  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖  1");
        assert_eq!(lines[10], "Turn: white");
    }

    #[test]
    fn selected_square_is_bracketed() {
        let mut game = GameState::new_game();
        game.selected = Square::new(6, 4);
        let rendered = render_game_state(&game);
        let line = rendered.lines().nth(7).expect("rank 2 line");
        assert_eq!(line, "2  ♙  ♙  ♙  ♙ [♙] ♙  ♙  ♙  2");
    }
}
