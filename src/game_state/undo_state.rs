use crate::game_state::chess_types::*;

/// Single history record pushed by `apply_move` and popped by `undo_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    /// Board exactly as it was before `mv` was applied.
    pub prev_board: Board,
}
