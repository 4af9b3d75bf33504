//! Engine abstraction for the automated side.
//!
//! An engine looks at a position and proposes a move; it never mutates the
//! game. Diagnostics travel back as `info_lines` for the caller to log.

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput;
}
