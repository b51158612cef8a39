//! Crate root module declarations for the Plum Checkers engine.
//!
//! Exposes the board and turn model, move generation, search, engines and
//! utility helpers so binaries, benches and front ends can import stable
//! module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board_state;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
    pub mod turn_engine;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod threading;
}

pub mod engines {
    pub mod engine_expectimax;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod position_parser;
    pub mod render_game_state;
}
