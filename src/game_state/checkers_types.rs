//! Core value types for the checkers board model.
//!
//! Everything here is `Copy`: a board clone never shares a piece with its
//! source, so search branches can mutate their own copies freely.

use std::fmt;

pub use crate::game_state::board_state::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Starts on rows 5..=7, moves toward row 0.
    Dark,
    /// Starts on rows 0..=2, moves toward row 7.
    Light,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Dark => 0,
            Color::Light => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Dark => write!(f, "dark"),
            Color::Light => write!(f, "light"),
        }
    }
}

/// A board coordinate. Rows and columns are both `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step by a signed delta, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Coord::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Playable squares are the dark ones, where `row + col` is odd.
    #[inline]
    pub const fn is_dark_square(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A single checker. `king` and `square` are the only fields that ever change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
    pub square: Coord,
}

impl Piece {
    #[inline]
    pub const fn man(color: Color, square: Coord) -> Self {
        Self {
            color,
            king: false,
            square,
        }
    }

    #[inline]
    pub const fn king(color: Color, square: Coord) -> Self {
        Self {
            color,
            king: true,
            square,
        }
    }
}

/// One relocation of a piece: a simple move (one diagonal step) or a jump
/// (two diagonal steps over an opposing piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn is_jump(self) -> bool {
        self.from.row.abs_diff(self.to.row) == 2 && self.from.col.abs_diff(self.to.col) == 2
    }

    /// The square jumped over, if this move is a jump.
    #[inline]
    pub fn captured_midpoint(self) -> Option<Coord> {
        if !self.is_jump() {
            return None;
        }
        Some(Coord::new(
            (self.from.row + self.to.row) / 2,
            (self.from.col + self.to.col) / 2,
        ))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The winner captured every opposing piece.
    CaptureLimit,
    /// The loser was to move and had no legal move.
    NoLegalMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won { winner: Color, reason: WinReason },
}

impl GameOutcome {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    #[inline]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Won { winner, .. } => Some(winner),
        }
    }
}
