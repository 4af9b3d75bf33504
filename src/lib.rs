//! Crate root module declarations for the Click Chess game.
//!
//! Exposes the simplified-rules core (board state, move generation, move
//! application and undo), the random engine that plays the automated side,
//! the click-driven session layer and the terminal front end.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod move_shared;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_sliding;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod automated_reply;
    pub mod game_session;
    pub mod reply_scheduler;
    pub mod selection;
    pub mod session_config;
}

pub mod frontend {
    pub mod terminal;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
    pub mod session_log;
}
