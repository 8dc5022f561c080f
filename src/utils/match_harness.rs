//! Head-to-head match harness for local testing.
//!
//! Plays two [`Engine`] implementations against each other from the
//! starting position with no I/O, recording every move in square-name
//! form. Primarily a seeded random-vs-random smoke tool: a playout that
//! violates an invariant or fails to terminate is a bug in the engine, not
//! in the players.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::chess_errors::GameError;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{Color, GameOutcome};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::location_to_square_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWin,
    DarkWin,
    /// The side to move had no legal move; this variant has no stalemate
    /// rule, so the game is simply recorded as undecided.
    NoLegalMoves,
    MaxPliesReached,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    /// Moves in order, each as `"E2E4"`-style square-name pairs.
    pub played_moves: Vec<String>,
}

/// Play one seeded random-vs-random game.
pub fn run_match(config: &MatchConfig) -> Result<MatchResult, GameError> {
    let mut seeder = StdRng::seed_from_u64(config.seed);
    let light = RandomEngine::from_seed(seeder.random());
    let dark = RandomEngine::from_seed(seeder.random());
    run_match_between(config, light, dark)
}

/// Play one game between two arbitrary engines.
pub fn run_match_between(
    config: &MatchConfig,
    mut light: impl Engine,
    mut dark: impl Engine,
) -> Result<MatchResult, GameError> {
    let mut game = GameState::new_game();
    let mut played_moves = Vec::new();
    let mut starved = false;

    while !game.get_game_state().is_decided() && played_moves.len() < config.max_plies as usize {
        let mover: &mut dyn Engine = match game.get_turn() {
            Color::Light => &mut light,
            Color::Dark => &mut dark,
        };
        let Some((start, stop)) = mover.choose_move(&game) else {
            starved = true;
            break;
        };

        game.apply_move(&start, &stop)?;
        played_moves.push(format!(
            "{}{}",
            location_to_square_name(&start)?,
            location_to_square_name(&stop)?
        ));
    }

    let outcome = match game.get_game_state() {
        GameOutcome::LightWon => MatchOutcome::LightWin,
        GameOutcome::DarkWon => MatchOutcome::DarkWin,
        GameOutcome::Unfinished if starved => MatchOutcome::NoLegalMoves,
        GameOutcome::Unfinished => MatchOutcome::MaxPliesReached,
    };

    Ok(MatchResult {
        outcome,
        final_state: game,
        played_moves,
    })
}
