//! The 8x8 board: piece placement, the two-step apply/capture protocol and
//! the crowning rule.
//!
//! Move generation itself lives in `move_generation`; the methods here that
//! return moves simply delegate so callers can stay on the `Board` API.

use crate::game_state::checkers_rules::{crowning_row, starting_owner, BOARD_SIZE};
use crate::game_state::checkers_types::{Color, Coord, Move, Piece};
use crate::move_generation::legal_move_generator::{
    all_legal_moves, legal_continuation_jumps, legal_moves_from,
};

/// Fixed grid of 64 squares. Each square is empty or holds exactly one piece.
///
/// `Clone` produces a fully independent copy: pieces are plain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Standard layout: light men on rows 0..=2, dark men on rows 5..=7,
    /// dark squares only.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            let Some(color) = starting_owner(row) else {
                continue;
            };
            for col in 0..BOARD_SIZE {
                let square = Coord::new(row, col);
                if square.is_dark_square() {
                    board.place_piece(Piece::man(color, square), square);
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Coord) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty_square(&self, square: Coord) -> bool {
        self.piece_at(square).is_none()
    }

    /// Overwrite `square` with `piece`, updating the piece's stored coordinates.
    #[inline]
    pub fn place_piece(&mut self, mut piece: Piece, square: Coord) {
        piece.square = square;
        self.squares[square.row as usize][square.col as usize] = Some(piece);
    }

    /// Clear `square`, returning whatever was on it.
    #[inline]
    pub fn remove_piece(&mut self, square: Coord) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    /// Relocate the piece at `mv.from` to `mv.to` and crown it if it lands on
    /// its far rank.
    ///
    /// A jumped piece is *not* removed: the midpoint is returned and the
    /// caller finishes the capture with [`Board::remove_piece`].
    pub fn apply(&mut self, mv: Move) -> Option<Coord> {
        let from = (mv.from.row as usize, mv.from.col as usize);
        let to = (mv.to.row as usize, mv.to.col as usize);

        let moving = self.squares[from.0][from.1].take();
        self.squares[from.0][from.1] = self.squares[to.0][to.1].take();

        if let Some(mut piece) = moving {
            piece.square = mv.to;
            if !piece.king && mv.to.row == crowning_row(piece.color) {
                piece.king = true;
            }
            self.squares[to.0][to.1] = Some(piece);
        }

        mv.captured_midpoint()
    }

    #[inline]
    pub fn legal_moves_from(&self, square: Coord) -> Vec<Move> {
        legal_moves_from(self, square)
    }

    #[inline]
    pub fn legal_continuation_jumps(&self, square: Coord) -> Vec<Move> {
        legal_continuation_jumps(self, square)
    }

    #[inline]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        all_legal_moves(self, color)
    }

    /// Pieces in row-major scan order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().filter_map(|square| *square)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    #[inline]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    #[inline]
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces_of(color).filter(|piece| piece.king).count()
    }
}
