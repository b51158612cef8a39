//! Terminal-oriented board renderer.
//!
//! Produces the same diagram format `position_parser` reads, optionally with
//! row/column labels, for debugging, tests and the match runner.

use std::fmt::Write;

use crate::game_state::board_state::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::*;

/// Render the board rows only, row 0 first.
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            out.push(piece_char(board.piece_at(Coord::new(row, col))));
        }
        if row + 1 < BOARD_SIZE {
            out.push('\n');
        }
    }
    out
}

/// Render a full position: board rows plus the side/capture line.
/// The output parses back with `parse_position`.
pub fn render_position(game_state: &GameState) -> String {
    format!(
        "{}\n{} {} {}",
        render_board(&game_state.board),
        game_state.side_to_move,
        game_state.captured_by(Color::Dark),
        game_state.captured_by(Color::Light)
    )
}

/// Render the board with coordinate labels for human reading.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();
    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'0' + row));
        for col in 0..BOARD_SIZE {
            out.push(' ');
            out.push(piece_char(game_state.board.piece_at(Coord::new(row, col))));
        }
        out.push('\n');
    }

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "to move: {}  captured dark: {} light: {}",
        game_state.side_to_move,
        game_state.captured_by(Color::Dark),
        game_state.captured_by(Color::Light)
    );
    out
}

fn piece_char(piece: Option<Piece>) -> char {
    match piece {
        None => '.',
        Some(Piece {
            color: Color::Dark,
            king: false,
            ..
        }) => 'd',
        Some(Piece {
            color: Color::Dark,
            king: true,
            ..
        }) => 'D',
        Some(Piece {
            color: Color::Light,
            king: false,
            ..
        }) => 'l',
        Some(Piece {
            color: Color::Light,
            king: true,
            ..
        }) => 'L',
    }
}
