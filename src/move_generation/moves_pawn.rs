use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::is_opposing;

/// Pawn destinations: one empty square straight ahead, plus the two forward
/// diagonals when they hold an opposing piece. No double step, no en passant.
pub fn generate_pawn_moves(
    board: &Board,
    side_to_move: Color,
    from: Square,
    pawn_color: Color,
    out: &mut Vec<Square>,
) {
    let d_row = pawn_color.pawn_direction();

    if let Some(to) = from.offset(d_row, 0) {
        if board.cell(to).is_empty() {
            out.push(to);
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if is_opposing(board, side_to_move, to) {
            out.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn pawn_moves(fen: &str, from: Square) -> Vec<Square> {
        let game = parse_fen(fen).expect("test FEN should parse");
        let color = game.piece_at(from).expect("pawn expected").color;
        let mut out = Vec::new();
        generate_pawn_moves(&game.board, game.side_to_move, from, color, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_steps_once_only() {
        let moves = pawn_moves("8/8/8/8/8/8/4P3/8 w", sq(6, 4));
        assert_eq!(moves, vec![sq(5, 4)]);
    }

    #[test]
    fn blocked_pawn_has_no_forward_move() {
        let moves = pawn_moves("8/8/8/8/8/4p3/4P3/8 w", sq(6, 4));
        assert!(moves.is_empty());
    }

    #[test]
    fn captures_only_opposing_diagonals() {
        // Black pawn on d3, white knight on f3.
        let moves = pawn_moves("8/8/8/8/8/3p1N2/4P3/8 w", sq(6, 4));
        assert!(moves.contains(&sq(5, 4)));
        assert!(moves.contains(&sq(5, 3)));
        assert!(!moves.contains(&sq(5, 5)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn black_pawn_advances_toward_higher_rows() {
        let moves = pawn_moves("8/4p3/3N4/8/8/8/8/8 b", sq(1, 4));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&sq(2, 4)));
        assert!(moves.contains(&sq(2, 3)));
    }

    #[test]
    fn edge_file_pawn_stays_on_board() {
        let moves = pawn_moves("8/8/8/8/8/1p6/P7/8 w", sq(6, 0));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.col() <= 1));
    }

    #[test]
    fn last_rank_pawn_has_nowhere_to_go() {
        let moves = pawn_moves("P7/8/8/8/8/8/8/8 w", sq(0, 0));
        assert!(moves.is_empty());
    }
}
