//! Complete game state shared by human turns, engines and the search.
//!
//! `GameState` wraps the board with everything a turn needs: the side to move,
//! how many pieces each side has captured, and where the turn engine is in
//! its selection/capture-chain cycle.

use crate::checkers_errors::CheckersResult;
use crate::game_state::board_state::Board;
use crate::game_state::checkers_rules::{PIECES_PER_SIDE, STARTING_POSITION};
use crate::game_state::checkers_types::*;
use crate::game_state::turn_engine::TurnPhase;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::utils::position_parser::parse_position;

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// `captured[color.index()]` counts pieces captured *by* `color`.
    pub captured: [u8; 2],
    pub phase: TurnPhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::from_board(Board::new_game(), Color::Dark)
    }

    /// Wrap an arbitrary board with zeroed capture counts.
    #[inline]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            captured: [0; 2],
            phase: TurnPhase::Idle,
        }
    }

    #[inline]
    pub fn from_position(text: &str) -> CheckersResult<Self> {
        parse_position(text)
    }

    #[inline]
    pub fn starting_position_text() -> &'static str {
        STARTING_POSITION
    }

    #[inline]
    pub fn captured_by(&self, color: Color) -> u8 {
        self.captured[color.index()]
    }

    #[inline]
    pub fn piece_at(&self, square: Coord) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn legal_moves_from(&self, square: Coord) -> Vec<Move> {
        self.board.legal_moves_from(square)
    }

    #[inline]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.board.all_legal_moves(color)
    }

    #[inline]
    pub fn remove_piece(&mut self, square: Coord) -> Option<Piece> {
        self.board.remove_piece(square)
    }

    /// A side that has captured all twelve opposing pieces wins outright.
    /// Otherwise the side to move loses when it has no legal move.
    pub fn is_game_over(&self) -> GameOutcome {
        for color in [Color::Dark, Color::Light] {
            if self.captured_by(color) >= PIECES_PER_SIDE {
                return GameOutcome::Won {
                    winner: color,
                    reason: WinReason::CaptureLimit,
                };
            }
        }

        if !has_any_legal_move(&self.board, self.side_to_move) {
            return GameOutcome::Won {
                winner: self.side_to_move.opposite(),
                reason: WinReason::NoLegalMoves,
            };
        }

        GameOutcome::InProgress
    }
}
