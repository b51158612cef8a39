//! Fixed-depth adversarial search: minimax with alpha-beta pruning, plain
//! minimax, and expectimax, sharing one tree walk.
//!
//! Each ply is one complete turn (a move plus its forced capture chain). The
//! walk runs make/unmake on a single working copy of the root state, and
//! every child is undone before its sibling is tried or a cutoff is taken.
//! The node kind decides how child scores combine:
//! - `Max`: the root color picks the strictly best score, earliest move wins ties.
//! - `Min`: the opponent picks the strictly lowest score.
//! - `Mean`: the opponent is a uniformly random mover (expectimax).

use std::time::Instant;

use crate::checkers_errors::CheckersResult;
use crate::game_state::checkers_types::{Color, GameState, Move};
use crate::move_generation::legal_move_apply::{apply_turn, undo_turn};
use crate::search::board_scoring::BoardScorer;

pub const DEFAULT_SEARCH_DEPTH: u8 = 6;
pub const DEFAULT_EXPECTIMAX_DEPTH: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Minimax with alpha-beta cutoffs.
    #[default]
    AlphaBeta,
    /// Minimax without cutoffs; same result as `AlphaBeta`, more nodes.
    Minimax,
    /// Max nodes for the searching side, mean nodes for the opponent.
    Expectimax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub mode: SearchMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            mode: SearchMode::AlphaBeta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: f64,
    pub nodes: u64,
    pub depth: u8,
    pub elapsed_ms: u64,
    /// Every root move scored -infinity, so the first legal move was taken.
    pub used_fallback: bool,
}

/// How a node combines its children's scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Max { prune: bool },
    Min { prune: bool },
    Mean,
}

impl SearchMode {
    #[inline]
    fn node_kind(self, maximizing: bool) -> NodeKind {
        let prune = self == SearchMode::AlphaBeta;
        match (self, maximizing) {
            (_, true) => NodeKind::Max { prune },
            (SearchMode::Expectimax, false) => NodeKind::Mean,
            (_, false) => NodeKind::Min { prune },
        }
    }
}

struct SearchContext<'a, S: BoardScorer + ?Sized> {
    scorer: &'a S,
    perspective: Color,
    mode: SearchMode,
    nodes: u64,
}

/// Minimax with alpha-beta pruning for `color` to move.
pub fn best_move<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    color: Color,
    depth: u8,
    scorer: &S,
) -> CheckersResult<SearchResult> {
    search(
        game_state,
        color,
        SearchConfig {
            depth,
            mode: SearchMode::AlphaBeta,
        },
        scorer,
    )
}

/// Expectimax for `color` to move: the opponent is averaged, not minimized.
pub fn best_move_expectimax<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    color: Color,
    depth: u8,
    scorer: &S,
) -> CheckersResult<SearchResult> {
    search(
        game_state,
        color,
        SearchConfig {
            depth,
            mode: SearchMode::Expectimax,
        },
        scorer,
    )
}

/// Search `config.depth` turns ahead for `color`, which is treated as the
/// side to move regardless of `game_state.side_to_move`.
///
/// At depth 0 the static evaluation is returned with no move.
pub fn search<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    color: Color,
    config: SearchConfig,
    scorer: &S,
) -> CheckersResult<SearchResult> {
    let started_at = Instant::now();
    let mut ctx = SearchContext {
        scorer,
        perspective: color,
        mode: config.mode,
        nodes: 0,
    };

    let mut working = game_state.clone();
    let (score, mut best_move) = search_node(
        &mut ctx,
        &mut working,
        config.depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
    )?;

    let mut used_fallback = false;
    if best_move.is_none() && config.depth > 0 {
        best_move = game_state.all_legal_moves(color).first().copied();
        used_fallback = best_move.is_some();
    }

    Ok(SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
        depth: config.depth,
        elapsed_ms: started_at.elapsed().as_millis() as u64,
        used_fallback,
    })
}

fn search_node<S: BoardScorer + ?Sized>(
    ctx: &mut SearchContext<'_, S>,
    game_state: &mut GameState,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
) -> CheckersResult<(f64, Option<Move>)> {
    ctx.nodes += 1;

    if depth == 0 {
        return Ok((ctx.scorer.score(&game_state.board, ctx.perspective), None));
    }

    let side = if maximizing {
        ctx.perspective
    } else {
        ctx.perspective.opposite()
    };
    let moves = game_state.all_legal_moves(side);

    match ctx.mode.node_kind(maximizing) {
        NodeKind::Mean => {
            if moves.is_empty() {
                return Ok((0.0, None));
            }
            let mut total = 0.0;
            for mv in &moves {
                let undo = apply_turn(game_state, *mv)?;
                let child = search_node(ctx, game_state, depth - 1, alpha, beta, !maximizing);
                undo_turn(game_state, undo);
                total += child?.0;
            }
            Ok((total / moves.len() as f64, moves.first().copied()))
        }
        NodeKind::Max { prune } => {
            let mut best = f64::NEG_INFINITY;
            let mut best_move = None;
            for mv in moves {
                let undo = apply_turn(game_state, mv)?;
                let child = search_node(ctx, game_state, depth - 1, alpha, beta, !maximizing);
                undo_turn(game_state, undo);
                let (score, _) = child?;

                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if prune && beta <= alpha {
                    break;
                }
            }
            Ok((best, best_move))
        }
        NodeKind::Min { prune } => {
            let mut best = f64::INFINITY;
            let mut best_move = None;
            for mv in moves {
                let undo = apply_turn(game_state, mv)?;
                let child = search_node(ctx, game_state, depth - 1, alpha, beta, !maximizing);
                undo_turn(game_state, undo);
                let (score, _) = child?;

                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if prune && beta <= alpha {
                    break;
                }
            }
            Ok((best, best_move))
        }
    }
}
