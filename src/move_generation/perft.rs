//! Perft: count complete turns reachable at a fixed depth.
//!
//! Each ply is one full turn through `apply_turn`, so a capture chain counts
//! once. Used to pin move generation against known counts and as a
//! benchmark workload.

use crate::checkers_errors::CheckersResult;
use crate::game_state::checkers_types::{GameState, UndoState};
use crate::move_generation::legal_move_apply::{apply_turn, undo_turn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    /// Leaf turns that captured at least one piece.
    pub captures: usize,
    /// Leaf turns that captured two or more pieces.
    pub multi_jumps: usize,
    /// Leaf turns that crowned the moving man.
    pub crownings: usize,
    /// Leaf positions already decided by `is_game_over`.
    pub game_overs: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.multi_jumps += rhs.multi_jumps;
        self.crownings += rhs.crownings;
        self.game_overs += rhs.game_overs;
    }
}

/// Count leaf turns `depth` plies below `game_state`, alternating sides from
/// `side_to_move`. Decided positions are not expanded further.
pub fn perft(game_state: &GameState, depth: u8) -> CheckersResult<PerftCounts> {
    let mut working = game_state.clone();
    perft_recurse(&mut working, depth)
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> CheckersResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }
    if game_state.is_game_over().is_over() {
        return Ok(PerftCounts::default());
    }

    let mut total = PerftCounts::default();
    for mv in game_state.all_legal_moves(game_state.side_to_move) {
        let undo = apply_turn(game_state, mv)?;
        let counts = if depth == 1 {
            Ok(leaf_counts(game_state, &undo))
        } else {
            perft_recurse(game_state, depth - 1)
        };
        undo_turn(game_state, undo);
        total.merge(counts?);
    }

    Ok(total)
}

fn leaf_counts(game_state: &GameState, undo: &UndoState) -> PerftCounts {
    let captured = undo.capture_count();
    let crowned = !undo.was_king
        && game_state
            .piece_at(undo.landing)
            .map_or(false, |piece| piece.king);
    PerftCounts {
        nodes: 1,
        captures: usize::from(captured > 0),
        multi_jumps: usize::from(captured > 1),
        crownings: usize::from(crowned),
        game_overs: usize::from(game_state.is_game_over().is_over()),
    }
}
