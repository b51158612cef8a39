//! Canonical checkers-rule constants.
//!
//! Board geometry, starting rows, movement directions and crowning ranks live
//! here so move generation and the turn engine read them from one place.

use crate::game_state::checkers_types::Color;

pub const BOARD_SIZE: u8 = 8;

/// Pieces each side starts with. Capturing this many ends the game.
pub const PIECES_PER_SIDE: u8 = 12;

/// Starting position rendered in the `position_parser` text format.
pub const STARTING_POSITION: &str = "\
.l.l.l.l
l.l.l.l.
.l.l.l.l
........
........
d.d.d.d.
.d.d.d.d
d.d.d.d.
dark";

const DARK_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const LIGHT_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal step directions in generation order.
///
/// Men only move forward; kings use all four diagonals.
#[inline]
pub fn move_directions(color: Color, king: bool) -> &'static [(i8, i8)] {
    match (color, king) {
        (_, true) => &KING_DIRECTIONS,
        (Color::Dark, false) => &DARK_MAN_DIRECTIONS,
        (Color::Light, false) => &LIGHT_MAN_DIRECTIONS,
    }
}

/// The far rank on which a man of `color` is crowned.
#[inline]
pub const fn crowning_row(color: Color) -> u8 {
    match color {
        Color::Dark => 0,
        Color::Light => BOARD_SIZE - 1,
    }
}

/// Which side, if any, occupies `row` in the starting layout.
#[inline]
pub const fn starting_owner(row: u8) -> Option<Color> {
    match row {
        0..=2 => Some(Color::Light),
        5..=7 => Some(Color::Dark),
        _ => None,
    }
}
