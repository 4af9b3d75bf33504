//! In-place move execution and single-step undo.
//!
//! `apply_move` snapshots the board into the history before mutating it, so
//! `undo_move` only has to restore that snapshot and flip the side to move.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Apply `mv` for the side to move.
///
/// The caller must have checked `mv` against the move generator; the move is
/// not re-validated. A pawn reaching its promotion row becomes a queen.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) {
    game_state.history.push(UndoState {
        mv,
        prev_board: game_state.board,
    });

    if let Some(piece) = game_state.board.piece_at(mv.from) {
        let landed = if piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row() {
            Piece::new(PieceKind::Queen, piece.color)
        } else {
            piece
        };
        game_state.board.put(mv.to, landed);
        game_state.board.clear(mv.from);
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
}

/// Roll back the most recent move. Returns `None` (and changes nothing) when
/// there is no history.
pub fn undo_move(game_state: &mut GameState) -> Option<UndoState> {
    let undo = game_state.history.pop()?;
    game_state.board = undo.prev_board;
    game_state.side_to_move = game_state.side_to_move.opposite();
    Some(undo)
}
