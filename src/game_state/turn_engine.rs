//! Selection and capture-chain state machine for interactive turns.
//!
//! A turn runs `Idle -> Selected -> (JumpChain)* -> TurnComplete`. Once a
//! jump lands on a square that offers another jump, the turn is locked to
//! that piece and only its continuation jumps are accepted until the chain
//! runs out. A chain can't be cancelled; a plain selection can.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_apply::{apply_hop, apply_turn, undo_turn};
use crate::move_generation::legal_move_generator::{legal_continuation_jumps, legal_moves_from};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TurnPhase {
    /// Nothing selected; the side to move may pick a piece.
    #[default]
    Idle,
    /// A piece is picked; `moves` are its simple moves and jumps.
    Selected { from: Coord, moves: Vec<Move> },
    /// The piece on `at` just jumped and must keep jumping with `moves`.
    JumpChain { at: Coord, moves: Vec<Move> },
    /// The last turn finished and the side to move has flipped.
    TurnComplete,
}

impl TurnPhase {
    /// Moves currently accepted by `move_selected`.
    #[inline]
    pub fn valid_moves(&self) -> &[Move] {
        match self {
            TurnPhase::Selected { moves, .. } | TurnPhase::JumpChain { moves, .. } => moves,
            TurnPhase::Idle | TurnPhase::TurnComplete => &[],
        }
    }

    /// The piece that must continue capturing, if a chain is underway.
    #[inline]
    pub fn pending_chain(&self) -> Option<Coord> {
        match self {
            TurnPhase::JumpChain { at, .. } => Some(*at),
            _ => None,
        }
    }
}

/// What a successful `move_selected` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub applied: Move,
    pub captured: Option<Coord>,
    pub crowned: bool,
    /// The same piece must jump again before the turn passes.
    pub chain_continues: bool,
}

impl GameState {
    /// Pick the piece on `(row, col)` for `color`.
    ///
    /// While a chain is pending only the chained piece may be (re)selected,
    /// and it resumes with its continuation jumps.
    pub fn select(&mut self, row: u8, col: u8, color: Color) -> CheckersResult<&[Move]> {
        let square = Coord::new(row, col);

        if let TurnPhase::JumpChain { at, .. } = &self.phase {
            if color != self.side_to_move {
                return Err(CheckersError::NotYourTurn((color, self.side_to_move)));
            }
            if *at != square {
                return Err(CheckersError::ChainInProgress(*at));
            }
            let moves = legal_continuation_jumps(&self.board, square);
            self.phase = TurnPhase::JumpChain { at: square, moves };
            return Ok(self.phase.valid_moves());
        }

        if let TurnPhase::Selected { from, .. } = &self.phase {
            return Err(CheckersError::SelectionInProgress(*from));
        }
        if color != self.side_to_move {
            return Err(CheckersError::NotYourTurn((color, self.side_to_move)));
        }
        match self.board.piece_at(square) {
            Some(piece) if piece.color == color => {}
            _ => return Err(CheckersError::NoPieceOfColor((square, color))),
        }
        if self.is_game_over().is_over() {
            return Err(CheckersError::GameOver);
        }

        let moves = legal_moves_from(&self.board, square);
        self.phase = TurnPhase::Selected {
            from: square,
            moves,
        };
        Ok(self.phase.valid_moves())
    }

    /// Move the selected piece to `(row, col)`.
    ///
    /// Rejected without any state change when the destination is not one of
    /// the currently valid moves.
    pub fn move_selected(&mut self, row: u8, col: u8) -> CheckersResult<MoveOutcome> {
        let destination = Coord::new(row, col);
        let mv = match &self.phase {
            TurnPhase::Selected { moves, .. } | TurnPhase::JumpChain { moves, .. } => moves
                .iter()
                .copied()
                .find(|mv| mv.to == destination)
                .ok_or(CheckersError::IllegalDestination(destination))?,
            TurnPhase::Idle | TurnPhase::TurnComplete => {
                return Err(CheckersError::NothingSelected)
            }
        };

        let mover = self.side_to_move;
        let was_king = self.board.piece_at(mv.from).map_or(false, |piece| piece.king);
        let captured = apply_hop(self, mv, mover).map(|piece| piece.square);
        let crowned = !was_king && self.board.piece_at(destination).map_or(false, |p| p.king);

        let continuation = if captured.is_some() {
            legal_continuation_jumps(&self.board, destination)
        } else {
            Vec::new()
        };
        let chain_continues = !continuation.is_empty();

        if chain_continues {
            self.phase = TurnPhase::JumpChain {
                at: destination,
                moves: continuation,
            };
        } else {
            self.phase = TurnPhase::TurnComplete;
            self.side_to_move = mover.opposite();
        }

        Ok(MoveOutcome {
            applied: mv,
            captured,
            crowned,
            chain_continues,
        })
    }

    /// Drop the current selection. Not allowed once a chain has started.
    pub fn deselect(&mut self) -> CheckersResult<()> {
        match &self.phase {
            TurnPhase::Selected { .. } => {
                self.phase = TurnPhase::Idle;
                Ok(())
            }
            TurnPhase::JumpChain { at, .. } => Err(CheckersError::ChainInProgress(*at)),
            TurnPhase::Idle | TurnPhase::TurnComplete => Err(CheckersError::NothingSelected),
        }
    }

    /// Play a fully specified move for the side to move, including its forced
    /// continuation chain, without going through selection.
    pub fn apply_move(&mut self, mv: Move) -> CheckersResult<UndoState> {
        match &self.phase {
            TurnPhase::JumpChain { at, .. } => return Err(CheckersError::ChainInProgress(*at)),
            TurnPhase::Selected { from, .. } => {
                return Err(CheckersError::SelectionInProgress(*from))
            }
            TurnPhase::Idle | TurnPhase::TurnComplete => {}
        }
        if self.is_game_over().is_over() {
            return Err(CheckersError::GameOver);
        }
        let owned_by_mover = self
            .board
            .piece_at(mv.from)
            .map_or(false, |piece| piece.color == self.side_to_move);
        if !owned_by_mover || !legal_moves_from(&self.board, mv.from).contains(&mv) {
            return Err(CheckersError::IllegalMove(mv));
        }
        apply_turn(self, mv)
    }

    /// Take back a turn produced by [`GameState::apply_move`].
    #[inline]
    pub fn undo_turn(&mut self, undo: UndoState) {
        undo_turn(self, undo);
    }
}

#[cfg(test)]
mod tests {
    use super::TurnPhase;
    use crate::checkers_errors::CheckersError;
    use crate::game_state::checkers_types::{Color, Coord, GameOutcome, GameState, Move, WinReason};

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(Coord::new(from.0, from.1), Coord::new(to.0, to.1))
    }

    fn chain_position(side: &str) -> GameState {
        GameState::from_position(&format!(
            "\
........
........
.l......
..d.....
........
....d...
........
........
{side}"
        ))
        .expect("position should parse")
    }

    #[test]
    fn select_then_simple_move_completes_turn() {
        let mut game = GameState::new_game();

        let moves = game.select(5, 2, Color::Dark).expect("selection should succeed");
        assert_eq!(moves, &[mv((5, 2), (4, 1)), mv((5, 2), (4, 3))]);

        let outcome = game.move_selected(4, 3).expect("move should succeed");
        assert_eq!(outcome.applied, mv((5, 2), (4, 3)));
        assert_eq!(outcome.captured, None);
        assert!(!outcome.chain_continues);
        assert_eq!(game.phase, TurnPhase::TurnComplete);
        assert_eq!(game.side_to_move, Color::Light);
    }

    #[test]
    fn jump_with_continuation_stays_in_chain_for_same_side() {
        let mut game = chain_position("light");

        game.select(2, 1, Color::Light).expect("selection should succeed");
        let first = game.move_selected(4, 3).expect("jump should succeed");

        assert_eq!(first.captured, Some(Coord::new(3, 2)));
        assert!(first.chain_continues);
        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.captured_by(Color::Light), 1);
        assert_eq!(
            game.phase,
            TurnPhase::JumpChain {
                at: Coord::new(4, 3),
                moves: vec![mv((4, 3), (6, 5))],
            }
        );

        assert_eq!(game.deselect(), Err(CheckersError::ChainInProgress(Coord::new(4, 3))));
        assert_eq!(
            game.select(6, 5, Color::Light),
            Err(CheckersError::ChainInProgress(Coord::new(4, 3)))
        );

        let second = game.move_selected(6, 5).expect("continuation should succeed");
        assert_eq!(second.captured, Some(Coord::new(5, 4)));
        assert!(!second.chain_continues);
        assert_eq!(game.captured_by(Color::Light), 2);
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.phase, TurnPhase::TurnComplete);
    }

    #[test]
    fn reselecting_chained_piece_resumes_with_jumps_only() {
        let mut game = chain_position("light");
        game.select(2, 1, Color::Light).expect("selection should succeed");
        game.move_selected(4, 3).expect("jump should succeed");

        assert_eq!(
            game.select(4, 3, Color::Dark),
            Err(CheckersError::NotYourTurn((Color::Dark, Color::Light)))
        );
        assert_eq!(game.phase.pending_chain(), Some(Coord::new(4, 3)));

        let moves = game.select(4, 3, Color::Light).expect("chain piece should reselect");
        assert_eq!(moves, &[mv((4, 3), (6, 5))]);
        assert_eq!(game.phase.pending_chain(), Some(Coord::new(4, 3)));
    }

    #[test]
    fn illegal_destination_is_rejected_without_change() {
        let mut game = GameState::new_game();
        game.select(5, 2, Color::Dark).expect("selection should succeed");
        let before = game.clone();

        assert_eq!(
            game.move_selected(3, 4),
            Err(CheckersError::IllegalDestination(Coord::new(3, 4)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn selection_rules() {
        let mut game = GameState::new_game();

        assert_eq!(game.move_selected(4, 1), Err(CheckersError::NothingSelected));
        assert_eq!(game.deselect(), Err(CheckersError::NothingSelected));
        assert!(matches!(
            game.select(2, 1, Color::Light),
            Err(CheckersError::NotYourTurn(_))
        ));
        assert!(matches!(
            game.select(4, 1, Color::Dark),
            Err(CheckersError::NoPieceOfColor(_))
        ));

        game.select(5, 0, Color::Dark).expect("selection should succeed");
        assert_eq!(
            game.select(5, 2, Color::Dark),
            Err(CheckersError::SelectionInProgress(Coord::new(5, 0)))
        );
        game.deselect().expect("plain selection can be cancelled");
        assert_eq!(game.phase, TurnPhase::Idle);
        assert_eq!(game.board, GameState::new_game().board);

        let empty = game.select(7, 0, Color::Dark).expect("blocked piece is selectable");
        assert!(empty.is_empty());
    }

    #[test]
    fn apply_move_resolves_chain_and_validates() {
        let mut game = chain_position("light");

        assert_eq!(
            game.apply_move(mv((2, 1), (3, 0))).map(|u| u.capture_count()),
            Ok(0)
        );
        assert_eq!(game.side_to_move, Color::Dark);

        let mut game = chain_position("light");
        assert_eq!(
            game.apply_move(mv((3, 2), (2, 3))),
            Err(CheckersError::IllegalMove(mv((3, 2), (2, 3))))
        );
        assert_eq!(
            game.apply_move(mv((2, 1), (4, 5))),
            Err(CheckersError::IllegalMove(mv((2, 1), (4, 5))))
        );

        let before = game.clone();
        let undo = game.apply_move(mv((2, 1), (4, 3))).expect("jump should apply");
        assert_eq!(undo.capture_count(), 2);
        assert_eq!(game.captured_by(Color::Light), 2);
        game.undo_turn(undo);
        assert_eq!(game, before);
    }

    #[test]
    fn selection_refused_once_game_is_over() {
        let mut game = GameState::new_game();
        game.captured[Color::Dark.index()] = 12;

        assert_eq!(
            game.is_game_over(),
            GameOutcome::Won {
                winner: Color::Dark,
                reason: WinReason::CaptureLimit,
            }
        );
        assert_eq!(game.select(5, 0, Color::Dark), Err(CheckersError::GameOver));
        assert_eq!(game.apply_move(mv((5, 0), (4, 1))), Err(CheckersError::GameOver));
    }

    #[test]
    fn crowning_is_reported_once() {
        let mut game = GameState::from_position(
            "\
........
..d.....
........
........
........
........
.....l..
........
dark",
        )
        .expect("position should parse");

        game.select(1, 2, Color::Dark).expect("selection should succeed");
        let outcome = game.move_selected(0, 1).expect("move should succeed");
        assert!(outcome.crowned);

        game.select(6, 5, Color::Light).expect("light should move");
        game.move_selected(7, 6).expect("light move should succeed");

        game.select(0, 1, Color::Dark).expect("king should be selectable");
        let outcome = game.move_selected(1, 0).expect("king can move backward");
        assert!(!outcome.crowned);
        assert!(game.piece_at(Coord::new(1, 0)).map_or(false, |p| p.king));
    }
}
