//! Engine abstraction layer shared by the match harness and any front end.
//!
//! Defines common input parameters and output payloads so different move
//! pickers can be selected at runtime behind a single trait interface.

use crate::game_state::checkers_types::{GameState, Move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Overrides the engine's configured depth for this move only.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    /// Pick a move for `game_state.side_to_move`. `best_move` is `None` only
    /// when that side has no legal move.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
