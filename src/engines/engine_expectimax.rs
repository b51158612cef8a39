//! Fixed-depth expectimax engine.
//!
//! Treats the opponent as a uniformly random mover, which suits play
//! against `RandomEngine` and casual opponents.

use crate::engines::engine_minimax::SearchEngineOptions;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::checkers_types::GameState;
use crate::search::minimax::{SearchMode, DEFAULT_EXPECTIMAX_DEPTH};

pub struct ExpectimaxEngine {
    options: SearchEngineOptions,
}

impl ExpectimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            options: SearchEngineOptions::with_depth(depth),
        }
    }

    pub fn options(&self) -> &SearchEngineOptions {
        &self.options
    }
}

impl Default for ExpectimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_EXPECTIMAX_DEPTH)
    }
}

impl Engine for ExpectimaxEngine {
    fn name(&self) -> &str {
        "PlumCheckers Expectimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        self.options.set_option(name, value)
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        self.options
            .run("expectimax", SearchMode::Expectimax, game_state, params)
    }
}
