//! Text-diagram-to-GameState parser.
//!
//! A position is eight rows of eight characters, top row first (row 0):
//! `.` empty, `d`/`D` dark man/king, `l`/`L` light man/king. An optional
//! trailing line names the side to move (`dark` or `light`) and may carry
//! the capture counts for dark and light, e.g. `light 3 1`.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board_state::Board;
use crate::game_state::checkers_rules::{BOARD_SIZE, PIECES_PER_SIDE};
use crate::game_state::checkers_types::*;

pub fn parse_position(text: &str) -> CheckersResult<GameState> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let rows = BOARD_SIZE as usize;
    if lines.len() < rows || lines.len() > rows + 1 {
        return Err(invalid(format!(
            "expected {rows} board rows and an optional side line, got {} lines",
            lines.len()
        )));
    }

    let board = parse_rows(&lines[..rows])?;
    let mut game_state = GameState::from_board(board, Color::Dark);

    if let Some(side_line) = lines.get(rows) {
        let mut parts = side_line.split_whitespace();
        game_state.side_to_move = match parts.next() {
            Some("dark") => Color::Dark,
            Some("light") => Color::Light,
            other => return Err(invalid(format!("invalid side to move {other:?}"))),
        };
        for color in [Color::Dark, Color::Light] {
            if let Some(count) = parts.next() {
                game_state.captured[color.index()] = parse_capture_count(count)?;
            }
        }
        if parts.next().is_some() {
            return Err(invalid("side line has extra trailing fields".to_owned()));
        }
    }

    Ok(game_state)
}

/// Parse just the eight board rows.
pub fn parse_board(text: &str) -> CheckersResult<Board> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    parse_rows(&lines)
}

fn parse_rows(lines: &[&str]) -> CheckersResult<Board> {
    if lines.len() != BOARD_SIZE as usize {
        return Err(invalid(format!("board must have 8 rows, got {}", lines.len())));
    }

    let mut board = Board::empty();
    for (row, line) in lines.iter().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != BOARD_SIZE as usize {
            return Err(invalid(format!("row {row} must have 8 squares: '{line}'")));
        }

        for (col, ch) in cells.into_iter().enumerate() {
            let square = Coord::new(row as u8, col as u8);
            let Some(piece) = piece_from_char(ch, square)? else {
                continue;
            };
            if !square.is_dark_square() {
                return Err(invalid(format!("piece '{ch}' on light square {square}")));
            }
            board.place_piece(piece, square);
        }
    }

    Ok(board)
}

fn piece_from_char(ch: char, square: Coord) -> CheckersResult<Option<Piece>> {
    let piece = match ch {
        '.' => return Ok(None),
        'd' => Piece::man(Color::Dark, square),
        'D' => Piece::king(Color::Dark, square),
        'l' => Piece::man(Color::Light, square),
        'L' => Piece::king(Color::Light, square),
        _ => return Err(invalid(format!("invalid square character '{ch}'"))),
    };
    Ok(Some(piece))
}

fn parse_capture_count(token: &str) -> CheckersResult<u8> {
    let count = token
        .parse::<u8>()
        .map_err(|_| invalid(format!("invalid capture count '{token}'")))?;
    if count > PIECES_PER_SIDE {
        return Err(invalid(format!("capture count {count} exceeds {PIECES_PER_SIDE}")));
    }
    Ok(count)
}

#[inline]
fn invalid(msg: String) -> CheckersError {
    CheckersError::InvalidPosition(msg)
}

#[cfg(test)]
mod tests {
    use super::{parse_board, parse_position};
    use crate::checkers_errors::CheckersError;
    use crate::game_state::checkers_types::{Color, Coord};

    const EMPTY_ROWS: &str = "\
........
........
........
........
........
........
........
........";

    #[test]
    fn parses_side_and_capture_counts() {
        let text = format!("{EMPTY_ROWS}\nlight 3 11");
        let game = parse_position(&text).expect("position should parse");

        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.captured_by(Color::Dark), 3);
        assert_eq!(game.captured_by(Color::Light), 11);
    }

    #[test]
    fn side_line_is_optional() {
        let game = parse_position(EMPTY_ROWS).expect("position should parse");
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.board.pieces().count(), 0);
    }

    #[test]
    fn kings_and_men_are_distinguished() {
        let board = parse_board(
            "\
.D......
........
...l....
........
........
.....L..
........
........",
        );
        assert!(board.is_err(), "(5,5) is a light square");

        let board = parse_board(
            "\
.D......
........
...l....
........
........
......L.
........
........",
        )
        .expect("position should parse");

        assert!(board.piece_at(Coord::new(0, 1)).map_or(false, |p| p.king));
        assert!(!board.piece_at(Coord::new(2, 3)).map_or(true, |p| p.king));
        assert_eq!(board.king_count(Color::Light), 1);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            parse_board("........"),
            Err(CheckersError::InvalidPosition(_))
        ));
        assert!(parse_position(&format!("{EMPTY_ROWS}\nblue")).is_err());
        assert!(parse_position(&format!("{EMPTY_ROWS}\ndark 13 0")).is_err());
        assert!(parse_position(&EMPTY_ROWS.replacen('.', "x", 1)).is_err());
        assert!(parse_position(&EMPTY_ROWS.replacen("........", ".......", 1)).is_err());
    }
}
