//! Fixed-depth alpha-beta engine.
//!
//! Wraps `search::minimax` with a configurable depth and scorer. Also hosts
//! the option handling shared with the expectimax engine.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::checkers_types::GameState;
use crate::search::board_scoring::{ConfiguredScorer, ScorerKind};
use crate::search::minimax::{search, SearchConfig, SearchMode, SearchResult, DEFAULT_SEARCH_DEPTH};

/// Depth and evaluation settings for a search-backed engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngineOptions {
    pub depth: u8,
    pub scorer: ConfiguredScorer,
}

impl SearchEngineOptions {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            scorer: ConfiguredScorer::default(),
        }
    }

    /// Apply one named option. Unknown names are ignored.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Depth") {
            self.depth = value
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid Depth value '{value}'"))?;
        } else if name.eq_ignore_ascii_case("Scorer") {
            self.scorer.kind = ScorerKind::parse(value)
                .ok_or_else(|| format!("unknown Scorer '{value}'"))?;
        } else if name.eq_ignore_ascii_case("PieceValue") {
            self.scorer.weights.piece_value = parse_weight(name, value)?;
        } else if name.eq_ignore_ascii_case("KingValue") {
            self.scorer.weights.king_value = parse_weight(name, value)?;
        } else if name.eq_ignore_ascii_case("CenterValue") {
            self.scorer.weights.center_value = parse_weight(name, value)?;
        }
        Ok(())
    }

    /// Run the search for the side to move and package the result.
    pub fn run(
        &self,
        engine_tag: &str,
        mode: SearchMode,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.depth);
        let result = search(
            game_state,
            game_state.side_to_move,
            SearchConfig { depth, mode },
            &self.scorer,
        )
        .map_err(|e| e.to_string())?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info string {engine_tag} mode {mode:?} scorer {:?}",
            self.scorer.kind
        ));
        out.info_lines.push(info_line(&result));
        if result.used_fallback {
            out.info_lines
                .push("info string every line loses; playing first legal move".to_owned());
        }
        if let Some(mv) = out.best_move {
            out.info_lines.push(format!("info string bestmove {mv}"));
        }
        Ok(out)
    }
}

fn parse_weight(name: &str, value: &str) -> Result<f64, String> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid {name} value '{value}'"))?;
    if !parsed.is_finite() {
        return Err(format!("{name} must be finite"));
    }
    Ok(parsed)
}

fn info_line(result: &SearchResult) -> String {
    format!(
        "info depth {} score {} nodes {} time {}",
        result.depth, result.score, result.nodes, result.elapsed_ms
    )
}

pub struct MinimaxEngine {
    options: SearchEngineOptions,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            options: SearchEngineOptions::with_depth(depth),
        }
    }

    pub fn with_options(options: SearchEngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchEngineOptions {
        &self.options
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumCheckers Minimax"
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
            .run("minimax", SearchMode::AlphaBeta, game_state, params)
    }
}
