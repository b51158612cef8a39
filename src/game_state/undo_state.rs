use crate::game_state::checkers_types::*;
use crate::game_state::turn_engine::TurnPhase;

/// Single undo record for `apply_turn` / `undo_turn`.
///
/// A turn is the opening move plus every continuation jump it forced, so the
/// record holds all captured pieces (with their squares) in capture order.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoState {
    pub mv: Move,
    pub mover: Color,
    /// Where the moving piece ended the turn.
    pub landing: Coord,
    pub was_king: bool,
    pub captured: Vec<Piece>,

    pub prev_side_to_move: Color,
    pub prev_phase: TurnPhase,
}

impl UndoState {
    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }
}
