//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::board_state::Board;
use crate::game_state::checkers_types::{Color, Coord};

pub const DEFAULT_PIECE_VALUE: f64 = 1.0;
pub const DEFAULT_KING_VALUE: f64 = 2.0;
pub const DEFAULT_CENTER_VALUE: f64 = 2.0;

/// Squares rewarded by [`CenterControlScorer`].
pub const CENTER_SQUARES: [Coord; 4] = [
    Coord::new(3, 3),
    Coord::new(3, 4),
    Coord::new(4, 3),
    Coord::new(4, 4),
];

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `perspective`; higher is better for it.
    fn score(&self, board: &Board, perspective: Color) -> f64;
}

/// Weights shared by the built-in scorers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub piece_value: f64,
    pub king_value: f64,
    pub center_value: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            piece_value: DEFAULT_PIECE_VALUE,
            king_value: DEFAULT_KING_VALUE,
            center_value: DEFAULT_CENTER_VALUE,
        }
    }
}

#[inline]
fn difference(board: &Board, perspective: Color, count: impl Fn(&Board, Color) -> usize) -> f64 {
    count(board, perspective) as f64 - count(board, perspective.opposite()) as f64
}

/// Piece-count differential only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        difference(board, perspective, Board::piece_count)
    }
}

/// Piece differential plus a king bonus. Kings count in both terms.
///
/// This is the default evaluation.
#[derive(Debug, Clone, Copy)]
pub struct PieceKingScorer {
    pub piece_value: f64,
    pub king_value: f64,
}

impl Default for PieceKingScorer {
    fn default() -> Self {
        Self::from_weights(ScoringWeights::default())
    }
}

impl PieceKingScorer {
    #[inline]
    pub fn from_weights(weights: ScoringWeights) -> Self {
        Self {
            piece_value: weights.piece_value,
            king_value: weights.king_value,
        }
    }
}

impl BoardScorer for PieceKingScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        let pieces = difference(board, perspective, Board::piece_count);
        let kings = difference(board, perspective, Board::king_count);
        pieces * self.piece_value + kings * self.king_value
    }
}

/// Rewards occupying the four central squares.
#[derive(Debug, Clone, Copy)]
pub struct CenterControlScorer {
    pub center_value: f64,
}

impl Default for CenterControlScorer {
    fn default() -> Self {
        Self {
            center_value: DEFAULT_CENTER_VALUE,
        }
    }
}

impl BoardScorer for CenterControlScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        let center_count = |board: &Board, color: Color| {
            CENTER_SQUARES
                .iter()
                .filter(|square| board.piece_at(**square).map_or(false, |p| p.color == color))
                .count()
        };
        difference(board, perspective, center_count) * self.center_value
    }
}

/// Runtime-selectable scorer, for engines configured by option strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    #[default]
    PieceKing,
    Material,
    CenterControl,
}

impl ScorerKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "piece_king" | "pieceking" | "default" => Some(ScorerKind::PieceKing),
            "material" => Some(ScorerKind::Material),
            "center" | "center_control" => Some(ScorerKind::CenterControl),
            _ => None,
        }
    }
}

/// A scorer built from a [`ScorerKind`] and [`ScoringWeights`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredScorer {
    pub kind: ScorerKind,
    pub weights: ScoringWeights,
}

impl BoardScorer for ConfiguredScorer {
    fn score(&self, board: &Board, perspective: Color) -> f64 {
        match self.kind {
            ScorerKind::PieceKing => {
                PieceKingScorer::from_weights(self.weights).score(board, perspective)
            }
            ScorerKind::Material => {
                MaterialScorer.score(board, perspective) * self.weights.piece_value
            }
            ScorerKind::CenterControl => CenterControlScorer {
                center_value: self.weights.center_value,
            }
            .score(board, perspective),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BoardScorer, CenterControlScorer, ConfiguredScorer, MaterialScorer, PieceKingScorer,
        ScorerKind, ScoringWeights,
    };
    use crate::game_state::board_state::Board;
    use crate::game_state::checkers_types::Color;
    use crate::utils::position_parser::parse_board;

    fn sample() -> Board {
        parse_board(
            "\
.L......
........
........
....d...
...l....
........
.d.D....
d.......",
        )
        .expect("position should parse")
    }

    #[test]
    fn start_position_is_balanced() {
        let board = Board::new_game();
        for color in [Color::Dark, Color::Light] {
            assert_eq!(PieceKingScorer::default().score(&board, color), 0.0);
            assert_eq!(MaterialScorer.score(&board, color), 0.0);
            assert_eq!(CenterControlScorer::default().score(&board, color), 0.0);
        }
    }

    #[test]
    fn piece_king_scorer_weights_both_terms() {
        let board = sample();
        // Dark: 4 pieces, 1 king. Light: 2 pieces, 1 king.
        assert_eq!(PieceKingScorer::default().score(&board, Color::Dark), 2.0);
        assert_eq!(PieceKingScorer::default().score(&board, Color::Light), -2.0);

        let heavy = PieceKingScorer::from_weights(ScoringWeights {
            piece_value: 3.0,
            king_value: 10.0,
            ..ScoringWeights::default()
        });
        assert_eq!(heavy.score(&board, Color::Dark), 6.0);
    }

    #[test]
    fn center_scorer_counts_occupied_center_squares() {
        let board = sample();
        // (3,4) dark and (4,3) light: balanced.
        assert_eq!(CenterControlScorer::default().score(&board, Color::Dark), 0.0);

        let mut board = board;
        board.remove_piece(crate::game_state::checkers_types::Coord::new(4, 3));
        assert_eq!(CenterControlScorer::default().score(&board, Color::Dark), 2.0);
        assert_eq!(CenterControlScorer::default().score(&board, Color::Light), -2.0);
    }

    #[test]
    fn configured_scorer_dispatches_by_kind() {
        let board = sample();
        let material = ConfiguredScorer {
            kind: ScorerKind::Material,
            ..ConfiguredScorer::default()
        };
        assert_eq!(material.score(&board, Color::Dark), 2.0);
        assert_eq!(ConfiguredScorer::default().score(&board, Color::Dark), 2.0);
        assert_eq!(ScorerKind::parse(" Center "), Some(ScorerKind::CenterControl));
        assert_eq!(ScorerKind::parse("mobility"), None);
    }
}
