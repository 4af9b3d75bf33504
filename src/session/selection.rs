//! Click-driven selection state machine.
//!
//! Two states: nothing selected, or one square selected. A click either
//! selects an own piece, executes a move from the selected square, or drops
//! the selection. Illegal targets are never an error, they just deselect.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing was selected and the click did not hit an own piece.
    Ignored,
    Selected(Square),
    /// A selection existed and the click was not a legal destination.
    Deselected,
    Moved(ChessMove),
}

pub fn handle_click(
    game_state: &mut GameState,
    generator: &impl MoveGenerator,
    square: Square,
) -> ClickOutcome {
    match game_state.selected.take() {
        None => {
            if game_state.is_own_piece(square) {
                game_state.selected = Some(square);
                ClickOutcome::Selected(square)
            } else {
                ClickOutcome::Ignored
            }
        }
        Some(from) => {
            let mv = ChessMove::new(from, square);
            if generator.is_legal_move(game_state, mv) {
                apply_move(game_state, mv);
                ClickOutcome::Moved(mv)
            } else {
                ClickOutcome::Deselected
            }
        }
    }
}

/// Destinations to highlight for the current selection, if any.
pub fn selection_targets(game_state: &GameState, generator: &impl MoveGenerator) -> Vec<Square> {
    match game_state.selected {
        Some(from) => generator.moves_from(game_state, from),
        None => Vec::new(),
    }
}
