use crate::game_state::board_state::Board;
use crate::game_state::checkers_types::{Move, Piece};

/// Simple step from `piece` in direction `(d_row, d_col)` if the adjacent
/// diagonal square is on the board and empty.
#[inline]
pub fn simple_move_toward(board: &Board, piece: Piece, d_row: i8, d_col: i8) -> Option<Move> {
    let target = piece.square.offset(d_row, d_col)?;
    board
        .is_empty_square(target)
        .then(|| Move::new(piece.square, target))
}

/// Jump from `piece` in direction `(d_row, d_col)`.
///
/// Legal when the landing square two steps away is on the board and empty
/// and the midpoint holds a piece of the opposite color.
#[inline]
pub fn jump_toward(board: &Board, piece: Piece, d_row: i8, d_col: i8) -> Option<Move> {
    let landing = piece.square.offset(2 * d_row, 2 * d_col)?;
    let midpoint = piece.square.offset(d_row, d_col)?;
    let jumped = board.piece_at(midpoint)?;
    (jumped.color != piece.color && board.is_empty_square(landing))
        .then(|| Move::new(piece.square, landing))
}
