//! Uniform random-move engine.
//!
//! Enumerates every move for the side to move and picks one with equal
//! probability. Seedable so test runs and self-play can be reproduced.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenerator, SimplifiedMoveGenerator};

pub struct RandomEngine {
    move_generator: SimplifiedMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: SimplifiedMoveGenerator,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: SimplifiedMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn reseed_from_entropy(&mut self) {
        self.rng = StdRng::from_rng(&mut rand::rng());
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "ClickChess Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("seed") {
            let value = value.trim();
            if value.eq_ignore_ascii_case("none") {
                self.reseed_from_entropy();
                return Ok(());
            }
            let seed = value
                .parse::<u64>()
                .map_err(|_| format!("Invalid seed: {value}"))?;
            self.reseed(seed);
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput {
        let moves = self.move_generator.generate_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", moves.len()));

        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        out
    }
}
