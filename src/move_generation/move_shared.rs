use crate::game_state::chess_types::*;

/// True when `square` holds a piece not belonging to `side_to_move`.
///
/// Captures are judged against the side to move, not against the color of
/// the piece whose moves are being generated.
#[inline]
pub fn is_opposing(board: &Board, side_to_move: Color, square: Square) -> bool {
    matches!(board.piece_at(square), Some(p) if p.color != side_to_move)
}

/// Single-step destinations for fixed-offset pieces (knight, king).
pub fn generate_step_moves(
    board: &Board,
    side_to_move: Color,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.cell(to).is_empty() || is_opposing(board, side_to_move, to) {
            out.push(to);
        }
    }
}

/// Ray destinations for sliding pieces. Each ray ends at the board edge or
/// at the first occupied square, which is included only when opposing.
pub fn generate_slide_moves(
    board: &Board,
    side_to_move: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            if board.cell(to).is_empty() {
                out.push(to);
            } else {
                if is_opposing(board, side_to_move, to) {
                    out.push(to);
                }
                break;
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}
