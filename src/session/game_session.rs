//! Session controller owned by a front end.
//!
//! `GameSession` owns the game state, the engine for the automated side, the
//! reply scheduler and the session log. Front ends forward clicks and
//! session controls, call `poll` to let a due reply play, and redraw from
//! `snapshot` or `render` after every transition.
//!
//! A reply is scheduled whenever the automated side becomes the side to
//! move: at start, after a human move, a new game, a loaded position or an
//! `AutomatedSide` change. Pending replies are validated before they play: a
//! reply scheduled for an earlier game (reset since) or for a position where
//! the automated side is no longer to move is dropped.

use std::time::Instant;

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_apply::undo_move;
use crate::move_generation::move_generator::SimplifiedMoveGenerator;
use crate::session::automated_reply::compute_automated_move;
use crate::session::reply_scheduler::ReplyScheduler;
use crate::session::selection::{handle_click, selection_targets, ClickOutcome};
use crate::session::session_config::{ConfigError, SessionConfig};
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;
use crate::utils::session_log::SessionLog;

/// Everything a renderer needs after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: Board,
    pub side_to_move: Color,
    pub selected: Option<Square>,
    pub highlighted: Vec<Square>,
    pub reply_pending: bool,
    pub can_undo: bool,
}

pub struct GameSession {
    game_state: GameState,
    generator: SimplifiedMoveGenerator,
    engine: Box<dyn Engine>,
    config: SessionConfig,
    scheduler: ReplyScheduler,
    game_generation: u64,
    log: SessionLog,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        };
        Self::with_engine(config, Box::new(engine))
    }

    pub fn with_engine(config: SessionConfig, engine: Box<dyn Engine>) -> Self {
        let mut log = SessionLog::with_capacity(config.log_capacity);
        log.push(format!(
            "new game engine={} automated_side={}",
            engine.name(),
            config.automated_side.map_or("none", Color::name)
        ));
        let mut session = Self {
            game_state: GameState::new_game(),
            generator: SimplifiedMoveGenerator,
            engine,
            scheduler: ReplyScheduler::new(config.reply_delay()),
            config,
            game_generation: 0,
            log,
        };
        session.schedule_reply(Instant::now());
        session
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    #[inline]
    pub fn log_mut(&mut self) -> &mut SessionLog {
        &mut self.log
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.game_state.board,
            side_to_move: self.game_state.side_to_move,
            selected: self.game_state.selected,
            highlighted: selection_targets(&self.game_state, &self.generator),
            reply_pending: self.scheduler.pending().is_some(),
            can_undo: self.game_state.can_undo(),
        }
    }

    pub fn render(&self) -> String {
        render_game_state(&self.game_state)
    }

    /// Forward a click on `square` to the selection state machine.
    ///
    /// A completed move schedules the automated reply `reply_delay` after `now`.
    pub fn click(&mut self, square: Square, now: Instant) -> ClickOutcome {
        let outcome = handle_click(&mut self.game_state, &self.generator, square);
        if let ClickOutcome::Moved(mv) = outcome {
            self.log.push(format!("move {mv}"));
            self.schedule_reply(now);
        }
        outcome
    }

    /// Play `mv` as two clicks. Returns the outcome of the second click, or
    /// of the first one when it did not select anything.
    pub fn play_move(&mut self, mv: ChessMove, now: Instant) -> ClickOutcome {
        self.game_state.selected = None;
        match self.click(mv.from, now) {
            ClickOutcome::Selected(_) => self.click(mv.to, now),
            other => other,
        }
    }

    /// Start over from the standard position. Any pending reply is cancelled,
    /// and a fresh one is scheduled when the automated side moves first.
    pub fn new_game(&mut self, now: Instant) {
        self.game_state.reset();
        self.game_generation = self.game_generation.wrapping_add(1);
        if self.scheduler.cancel().is_some() {
            self.log.push("pending reply cancelled by new game");
        }
        self.engine.new_game();
        self.log.push(format!("new game generation={}", self.game_generation));
        self.schedule_reply(now);
    }

    /// Roll back one move. Clears the selection. No-op with empty history.
    pub fn undo(&mut self) -> bool {
        match undo_move(&mut self.game_state) {
            Some(undone) => {
                self.game_state.selected = None;
                self.log.push(format!("undo {}", undone.mv));
                true
            }
            None => {
                self.log.push("undo ignored: no history");
                false
            }
        }
    }

    /// Replace the position with one parsed from FEN-style text.
    pub fn load_position(&mut self, fen: &str, now: Instant) -> Result<(), String> {
        let game_state = parse_fen(fen)?;
        self.game_state = game_state;
        self.game_generation = self.game_generation.wrapping_add(1);
        self.scheduler.cancel();
        self.log.push(format!("position {}", self.game_state.get_fen()));
        self.schedule_reply(now);
        Ok(())
    }

    /// Apply a named option. Nothing changes when either the session or the
    /// engine rejects the value.
    pub fn set_option(
        &mut self,
        name: &str,
        value: &str,
        now: Instant,
    ) -> Result<(), ConfigError> {
        let mut config = self.config.clone();
        config.set_option(name, value)?;

        let option = name.trim();
        if option.eq_ignore_ascii_case("seed") {
            let seed = config.seed.map_or_else(|| "none".to_owned(), |s| s.to_string());
            self.engine
                .set_option("Seed", &seed)
                .map_err(|_| ConfigError::InvalidValue {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
        }

        self.config = config;
        self.scheduler.set_delay(self.config.reply_delay());
        self.log.set_capacity(self.config.log_capacity);
        self.log.push(format!("option {name}={value}"));
        if option.eq_ignore_ascii_case("automatedside") {
            self.schedule_reply(now);
        }
        Ok(())
    }

    /// Time until the pending reply is due, if one is pending.
    pub fn reply_wait(&self, now: Instant) -> Option<std::time::Duration> {
        self.scheduler.time_until_due(now)
    }

    /// Run the pending reply if it is due. Returns the move it played.
    pub fn poll(&mut self, now: Instant) -> Option<ChessMove> {
        let pending = self.scheduler.take_due(now)?;

        if pending.game_generation != self.game_generation {
            self.log.push("reply dropped: game was reset");
            return None;
        }
        let Some(side) = self.config.automated_side else {
            self.log.push("reply dropped: no automated side");
            return None;
        };
        if self.game_state.side_to_move != side {
            self.log.push(format!(
                "reply dropped: {} to move",
                self.game_state.side_to_move.name()
            ));
            return None;
        }

        let output = compute_automated_move(&mut self.game_state, self.engine.as_mut(), side);
        for line in output.info_lines {
            self.log.push(line);
        }
        match output.best_move {
            Some(mv) => {
                self.log.push(format!("reply {mv}"));
                Some(mv)
            }
            None => {
                self.log.push(format!("reply skipped: {} has no moves", side.name()));
                None
            }
        }
    }

    fn schedule_reply(&mut self, now: Instant) {
        if self.config.automated_side == Some(self.game_state.side_to_move) {
            self.scheduler.schedule(now, self.game_generation);
        }
    }
}
