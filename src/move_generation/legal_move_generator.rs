//! Legal move enumeration.
//!
//! Ordering is part of the contract: the search's tie-break keeps the
//! earliest move, so pieces are scanned row-major and each piece yields its
//! simple moves in direction order followed by its jumps in direction order.
//! Capturing is optional when a turn starts and only mandatory once a jump
//! chain has begun.

use crate::game_state::board_state::Board;
use crate::game_state::checkers_rules::move_directions;
use crate::game_state::checkers_types::{Color, Coord, Move};
use crate::move_generation::legal_move_shared::{jump_toward, simple_move_toward};

/// Every simple move and jump available to the piece on `square`.
/// Empty when the square is empty.
pub fn legal_moves_from(board: &Board, square: Coord) -> Vec<Move> {
    let Some(piece) = board.piece_at(square) else {
        return Vec::new();
    };
    let directions = move_directions(piece.color, piece.king);

    let mut moves = Vec::with_capacity(directions.len() * 2);
    moves.extend(
        directions
            .iter()
            .filter_map(|&(d_row, d_col)| simple_move_toward(board, piece, d_row, d_col)),
    );
    moves.extend(
        directions
            .iter()
            .filter_map(|&(d_row, d_col)| jump_toward(board, piece, d_row, d_col)),
    );
    moves
}

/// Only the jumps available to the piece on `square`, used to continue a
/// chain once the piece has already captured this turn.
pub fn legal_continuation_jumps(board: &Board, square: Coord) -> Vec<Move> {
    let Some(piece) = board.piece_at(square) else {
        return Vec::new();
    };
    move_directions(piece.color, piece.king)
        .iter()
        .filter_map(|&(d_row, d_col)| jump_toward(board, piece, d_row, d_col))
        .collect()
}

/// All moves for `color`, piece by piece in row-major order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|piece| legal_moves_from(board, piece.square))
        .collect()
}

/// Cheaper than `all_legal_moves(..).is_empty()`: stops at the first piece
/// that can move.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|piece| !legal_moves_from(board, piece.square).is_empty())
}
