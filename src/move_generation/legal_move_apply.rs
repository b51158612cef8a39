//! Turn application with forced capture-chain resolution, and its inverse.
//!
//! `apply_turn` is what engines and the search use: it plays the opening move
//! and, if that move captured, keeps jumping with the same piece until no
//! continuation remains, always taking the first continuation offered.
//! `undo_turn` reverses the whole turn from the returned `UndoState`.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::*;
use crate::game_state::turn_engine::TurnPhase;
use crate::move_generation::legal_move_generator::legal_continuation_jumps;

/// Relocate a piece and finish any capture. Each captured piece is credited
/// to the mover immediately.
///
/// Returns the captured piece, if any.
pub fn apply_hop(game_state: &mut GameState, mv: Move, mover: Color) -> Option<Piece> {
    let midpoint = game_state.board.apply(mv)?;
    let captured = game_state.board.remove_piece(midpoint)?;
    let slot = &mut game_state.captured[mover.index()];
    *slot = slot.saturating_add(1);
    Some(captured)
}

/// The first continuation jump available from `square`, if any.
#[inline]
pub fn next_chain_jump(game_state: &GameState, square: Coord) -> Option<Move> {
    legal_continuation_jumps(&game_state.board, square)
        .into_iter()
        .next()
}

/// Play `mv` as a complete turn: the move itself, then every forced
/// continuation jump. The side to move flips and the phase becomes
/// `TurnComplete`.
///
/// Legality of `mv` is the caller's contract; only the presence of a piece on
/// the origin square is checked.
pub fn apply_turn(game_state: &mut GameState, mv: Move) -> CheckersResult<UndoState> {
    let piece = game_state
        .board
        .piece_at(mv.from)
        .ok_or(CheckersError::IllegalMove(mv))?;

    let mut undo = UndoState {
        mv,
        mover: piece.color,
        landing: mv.to,
        was_king: piece.king,
        captured: Vec::new(),
        prev_side_to_move: game_state.side_to_move,
        prev_phase: std::mem::replace(&mut game_state.phase, TurnPhase::TurnComplete),
    };

    if let Some(captured) = apply_hop(game_state, mv, piece.color) {
        undo.captured.push(captured);
        while let Some(next) = next_chain_jump(game_state, undo.landing) {
            if let Some(captured) = apply_hop(game_state, next, piece.color) {
                undo.captured.push(captured);
            }
            undo.landing = next.to;
        }
    }

    game_state.side_to_move = piece.color.opposite();
    Ok(undo)
}

/// Restore the exact state from before the `apply_turn` that produced `undo`.
pub fn undo_turn(game_state: &mut GameState, undo: UndoState) {
    if let Some(mut piece) = game_state.board.remove_piece(undo.landing) {
        piece.king = undo.was_king;
        game_state.board.place_piece(piece, undo.mv.from);
    }

    for piece in undo.captured.iter().rev() {
        game_state.board.place_piece(*piece, piece.square);
    }

    let slot = &mut game_state.captured[undo.mover.index()];
    *slot = slot.saturating_sub(undo.captured.len() as u8);

    game_state.side_to_move = undo.prev_side_to_move;
    game_state.phase = undo.prev_phase;
}

#[cfg(test)]
mod tests {
    use super::{apply_turn, undo_turn};
    use crate::game_state::checkers_types::{Color, Coord, GameState, Move};
    use crate::game_state::turn_engine::TurnPhase;

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(Coord::new(from.0, from.1), Coord::new(to.0, to.1))
    }

    fn two_capture_position() -> GameState {
        GameState::from_position(
            "\
........
........
.l......
..d.....
........
....d...
........
........
light",
        )
        .expect("position should parse")
    }

    #[test]
    fn chain_resolves_both_captures_in_one_turn() {
        let mut game = two_capture_position();

        let undo = apply_turn(&mut game, mv((2, 1), (4, 3))).expect("turn should apply");

        assert_eq!(undo.capture_count(), 2);
        assert_eq!(undo.landing, Coord::new(6, 5));
        assert!(game.piece_at(Coord::new(2, 1)).is_none());
        assert!(game.piece_at(Coord::new(3, 2)).is_none());
        assert!(game.piece_at(Coord::new(4, 3)).is_none());
        assert!(game.piece_at(Coord::new(5, 4)).is_none());
        assert_eq!(
            game.piece_at(Coord::new(6, 5)).map(|p| p.color),
            Some(Color::Light)
        );
        assert_eq!(game.captured_by(Color::Light), 2);
        assert_eq!(game.captured_by(Color::Dark), 0);
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.phase, TurnPhase::TurnComplete);
    }

    #[test]
    fn simple_move_ends_the_turn() {
        let mut game = GameState::new_game();
        let undo = apply_turn(&mut game, mv((5, 0), (4, 1))).expect("turn should apply");

        assert_eq!(undo.capture_count(), 0);
        assert_eq!(undo.landing, Coord::new(4, 1));
        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.captured, [0, 0]);
    }

    #[test]
    fn chain_takes_the_first_offered_continuation() {
        let mut game = GameState::from_position(
            "\
........
........
...l....
....d...
........
....d.d.
........
........
light",
        )
        .expect("position should parse");

        let undo = apply_turn(&mut game, mv((2, 3), (4, 5))).expect("turn should apply");

        // From (4,5) both (5,4) and (5,6) can be jumped; direction order picks (5,4).
        assert_eq!(undo.landing, Coord::new(6, 3));
        assert_eq!(undo.capture_count(), 2);
        assert!(game.piece_at(Coord::new(5, 4)).is_none());
        assert!(game.piece_at(Coord::new(5, 6)).is_some());
    }

    #[test]
    fn crowned_piece_keeps_jumping_as_a_king() {
        let mut game = GameState::from_position(
            "\
........
........
........
........
........
..l.....
...d.d..
........
light",
        )
        .expect("position should parse");
        let before = game.clone();

        let undo = apply_turn(&mut game, mv((5, 2), (7, 4))).expect("turn should apply");

        assert_eq!(undo.landing, Coord::new(5, 6));
        assert_eq!(undo.capture_count(), 2);
        assert!(game.piece_at(Coord::new(5, 6)).map_or(false, |p| p.king));
        assert_eq!(game.board.piece_count(Color::Dark), 0);

        undo_turn(&mut game, undo);
        assert_eq!(game, before);
        assert!(!game.piece_at(Coord::new(5, 2)).map_or(true, |p| p.king));
    }

    #[test]
    fn undo_restores_exact_prior_state() {
        let mut game = two_capture_position();
        let before = game.clone();

        let undo = apply_turn(&mut game, mv((2, 1), (4, 3))).expect("turn should apply");
        assert_ne!(game, before);
        undo_turn(&mut game, undo);

        assert_eq!(game, before);
    }

    #[test]
    fn missing_piece_is_rejected() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert!(apply_turn(&mut game, mv((4, 1), (3, 2))).is_err());
        assert_eq!(game, before);
    }
}
