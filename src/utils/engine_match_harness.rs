//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other with an optional
//! seeded random opening prefix, and aggregates series statistics.

use chrono::{DateTime, Duration, Local};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::checkers_types::{Color, GameOutcome, GameState, Move, WinReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    DarkWin(WinReason),
    LightWin(WinReason),
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::DarkWin(_) => Some(Color::Dark),
            MatchOutcome::LightWin(_) => Some(Color::Light),
            MatchOutcome::DrawMaxPlies => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin {
        player: PlayerId,
        color: Color,
        reason: WinReason,
    },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub dark_move_count: u32,
    pub light_move_count: u32,
    pub dark_total_time_ns: u128,
    pub light_total_time_ns: u128,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl MatchResult {
    /// Wall-clock match length as `m:ss`.
    pub fn clock_label(&self) -> String {
        clock_label(self.finished_at - self.started_at)
    }
}

/// Format a duration as `m:ss`. Negative durations clamp to zero.
pub fn clock_label(elapsed: Duration) -> String {
    let total_seconds = elapsed.num_seconds().max(0);
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the standard start.
///
/// `engine_dark` moves first.
pub fn play_engine_match(
    mut engine_dark: Box<dyn Engine>,
    mut engine_light: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_match_internal(
        GameState::new_game(),
        engine_dark.as_mut(),
        engine_light.as_mut(),
        seed,
        config,
        true,
    )
}

/// Play a match from a caller-provided state, skipping the random opening.
pub fn play_engine_match_from_state(
    mut engine_dark: Box<dyn Engine>,
    mut engine_light: Box<dyn Engine>,
    start_state: GameState,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_match_internal(
        start_state,
        engine_dark.as_mut(),
        engine_light.as_mut(),
        seed,
        config,
        false,
    )
}

fn play_match_internal(
    mut state: GameState,
    engine_dark: &mut dyn Engine,
    engine_light: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> Result<MatchResult, String> {
    let started_at = Local::now();
    engine_dark.new_game();
    engine_light.new_game();

    let opening_moves = if apply_random_opening {
        apply_seeded_random_opening(
            &mut state,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        )?
    } else {
        Vec::new()
    };

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: GameState::default(),
        opening_moves,
        played_moves: Vec::new(),
        dark_move_count: 0,
        light_move_count: 0,
        dark_total_time_ns: 0,
        light_total_time_ns: 0,
        started_at,
        finished_at: started_at,
    };

    for _ in 0..config.max_plies {
        if let GameOutcome::Won { winner, reason } = state.is_game_over() {
            result.outcome = match winner {
                Color::Dark => MatchOutcome::DarkWin(reason),
                Color::Light => MatchOutcome::LightWin(reason),
            };
            break;
        }

        let mover = state.side_to_move;
        let legal_moves = state.all_legal_moves(mover);
        let started = Instant::now();
        let out = match mover {
            Color::Dark => engine_dark.choose_move(&state, &config.go_params)?,
            Color::Light => engine_light.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Dark => {
                result.dark_move_count = result.dark_move_count.saturating_add(1);
                result.dark_total_time_ns = result.dark_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Light => {
                result.light_move_count = result.light_move_count.saturating_add(1);
                result.light_total_time_ns =
                    result.light_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out
            .best_move
            .or_else(|| legal_moves.first().copied())
            .ok_or_else(|| format!("{mover} has no move but the game is not over"))?;
        if !legal_moves.contains(&chosen) {
            return Err(format!("engine returned illegal move {chosen}"));
        }

        state.apply_move(chosen).map_err(|e| e.to_string())?;
        result.played_moves.push(chosen);
    }

    // The last ply may have ended the game.
    if result.outcome == MatchOutcome::DrawMaxPlies {
        if let GameOutcome::Won { winner, reason } = state.is_game_over() {
            result.outcome = match winner {
                Color::Dark => MatchOutcome::DarkWin(reason),
                Color::Light => MatchOutcome::LightWin(reason),
            };
        }
    }

    result.final_state = state;
    result.finished_at = Local::now();
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_dark = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (dark, light) = if player1_is_dark {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} dark={} light={}",
                i + 1,
                config.games,
                seed,
                dark,
                light
            );
        }

        let result = if player1_is_dark {
            play_engine_match(
                player1_factory(),
                player2_factory(),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(),
                player1_factory(),
                seed,
                config.per_game.clone(),
            )?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_dark {
            (
                result.dark_move_count,
                result.dark_total_time_ns,
                result.light_move_count,
                result.light_total_time_ns,
            )
        } else {
            (
                result.light_move_count,
                result.light_total_time_ns,
                result.dark_move_count,
                result.dark_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::DarkWin(reason) | MatchOutcome::LightWin(reason) => {
                let color = if matches!(result.outcome, MatchOutcome::DarkWin(_)) {
                    Color::Dark
                } else {
                    Color::Light
                };
                let player = if (color == Color::Dark) == player1_is_dark {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin {
                    player,
                    color,
                    reason,
                }
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} plies={} clock={} started={} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                result.played_moves.len(),
                result.clock_label(),
                result.started_at.format("%H:%M:%S"),
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Play a seeded number of uniformly random turns on `state`.
fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<Vec<Move>, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if state.is_game_over().is_over() {
            break;
        }
        let legal_moves = state.all_legal_moves(state.side_to_move);
        let Some(chosen) = legal_moves.as_slice().choose(&mut rng).copied() else {
            break;
        };
        state.apply_move(chosen).map_err(|e| e.to_string())?;
        opening_moves.push(chosen);
    }

    Ok(opening_moves)
}
