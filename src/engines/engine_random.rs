//! Uniformly random mover.
//!
//! Plays the opponent model expectimax assumes, and doubles as a
//! diagnostics and low-strength sparring engine. Seeded instances are
//! reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::checkers_types::GameState;

pub struct RandomEngine {
    seed: Option<u64>,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            seed: None,
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Seed") {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid Seed value '{value}'"))?;
            *self = Self::with_seed(seed);
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let legal_moves = game_state.all_legal_moves(game_state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {depth}"
            ));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::checkers_types::GameState;

    #[test]
    fn picks_a_legal_move() {
        let game = GameState::new_game();
        let legal = game.all_legal_moves(game.side_to_move);
        let mut engine = RandomEngine::new();

        for _ in 0..20 {
            let out = engine
                .choose_move(&game, &GoParams::default())
                .expect("random engine should not fail");
            let mv = out.best_move.expect("start position has moves");
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn seeded_engines_repeat_after_new_game() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(7);
        let first: Vec<_> = (0..8)
            .map(|_| engine.choose_move(&game, &GoParams::default()).unwrap().best_move)
            .collect();

        engine.new_game();
        let second: Vec<_> = (0..8)
            .map(|_| engine.choose_move(&game, &GoParams::default()).unwrap().best_move)
            .collect();
        assert_eq!(first, second);

        assert!(engine.set_option("Seed", "abc").is_err());
    }

    #[test]
    fn no_legal_moves_yields_none() {
        let game = GameState::from_position(
            "\
........
........
........
........
........
........
........
d.......
light",
        )
        .expect("position should parse");
        let out = RandomEngine::with_seed(1)
            .choose_move(&game, &GoParams::default())
            .expect("random engine should not fail");
        assert!(out.best_move.is_none());
    }
}
