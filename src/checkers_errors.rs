//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type for turn handling, position
//! parsing and background search. Rejected turn actions never change the
//! game state, so every variant is recoverable by the caller: show a message,
//! ignore the click, or pick another move.

use std::error::Error;
use std::fmt;

use crate::game_state::checkers_types::{Color, Coord, Move};

pub type CheckersResult<T> = Result<T, CheckersError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// The game has already been decided.
    GameOver,

    /// A selection was attempted for the side that is not to move.
    ///
    /// Payload: (requested color, side to move)
    NotYourTurn((Color, Color)),

    /// The square does not hold a piece of the requested color.
    NoPieceOfColor((Coord, Color)),

    /// A piece is already selected; deselect it before choosing another.
    SelectionInProgress(Coord),

    /// A capture chain is underway and only the chained piece may act.
    ///
    /// Payload: the square of the piece that must continue.
    ChainInProgress(Coord),

    /// `move_selected` or `deselect` was called with nothing selected.
    NothingSelected,

    /// The destination is not among the currently legal moves.
    IllegalDestination(Coord),

    /// A fully specified move is not legal in the current position.
    IllegalMove(Move),

    /// A position description could not be parsed.
    ///
    /// Payload: a human-readable reason.
    InvalidPosition(String),

    /// A background search worker stopped without delivering its result.
    SearchWorkerDisconnected,
}

impl fmt::Display for CheckersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckersError::GameOver => write!(f, "the game is already over"),
            CheckersError::NotYourTurn((requested, to_move)) => {
                write!(f, "{requested} cannot act while {to_move} is to move")
            }
            CheckersError::NoPieceOfColor((square, color)) => {
                write!(f, "no {color} piece on {square}")
            }
            CheckersError::SelectionInProgress(square) => {
                write!(f, "piece on {square} is already selected")
            }
            CheckersError::ChainInProgress(square) => {
                write!(f, "capture chain must continue from {square}")
            }
            CheckersError::NothingSelected => write!(f, "no piece is selected"),
            CheckersError::IllegalDestination(square) => {
                write!(f, "{square} is not a legal destination")
            }
            CheckersError::IllegalMove(mv) => write!(f, "illegal move {mv}"),
            CheckersError::InvalidPosition(msg) => write!(f, "invalid position: {msg}"),
            CheckersError::SearchWorkerDisconnected => {
                write!(f, "search worker stopped before returning a result")
            }
        }
    }
}

impl Error for CheckersError {}
