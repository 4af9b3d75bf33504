//! FEN-to-GameState parser.
//!
//! Reads the piece placement and side-to-move fields. Castling, en-passant
//! and clock fields are tolerated when present but carry no meaning here,
//! since none of those rules are modelled.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;

    let ignored: Vec<&str> = parts.collect();
    if ignored.len() > 4 {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state.board)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = usize::try_from(empty_count).map_err(|_| "Digit conversion failed")?;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += step;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| "Board rank has too many files".to_owned())?;
            board.put(square, piece);
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(
            game_state.piece_at(Square::new(0, 0).unwrap()),
            Some(Piece::new(PieceKind::Rook, Color::Dark))
        );
        assert_eq!(
            game_state.piece_at(Square::new(7, 6).unwrap()),
            Some(Piece::new(PieceKind::Knight, Color::Light))
        );
    }

    #[test]
    fn full_fen_trailing_fields_are_ignored() {
        let game_state =
            parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .expect("full FEN should parse");
        assert_eq!(game_state.side_to_move, Color::Dark);
        assert_eq!(
            game_state.piece_at(Square::new(4, 4).unwrap()),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );
        assert!(game_state.history.is_empty());
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen("9/8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen("7/8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen("ppppppppp/8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen("x7/8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 x").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra").is_err());
    }
}
