//! Owned game state for one play session.
//!
//! `GameState` bundles the board, side to move, the current click selection
//! and the undo history. Nothing here is global: callers own a value and pass
//! it by reference to move generation, application and selection handling.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub selected: Option<Square>,
    /// Prior boards, most recent last.
    pub history: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::Light,
            selected: None,
            history: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Rebuild from scratch: starting layout, White to move, no selection or history.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board.cell(square).is_empty()
    }

    /// True when `square` holds a piece belonging to the side to move.
    #[inline]
    pub fn is_own_piece(&self, square: Square) -> bool {
        matches!(self.piece_at(square), Some(p) if p.color == self.side_to_move)
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}
