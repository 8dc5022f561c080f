//! Uniform-random mover.
//!
//! Selects uniformly from legal moves; used by the match harness, the
//! console driver's computer opponent, and integration-style tests. Seeded
//! so playouts are reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board_location::BoardLocation;
use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Extinction Chess Random"
    }

    fn choose_move(&mut self, game: &GameState) -> Option<(BoardLocation, BoardLocation)> {
        let legal_moves = generate_legal_moves(game);
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_rules::validate_move;

    #[test]
    fn chooses_a_legal_opening_move() {
        let game = GameState::new_game();
        let mut dut = RandomEngine::from_seed(7);
        let (start, stop) = dut.choose_move(&game).expect("opening moves exist");
        assert!(validate_move(&game, &start, &stop).is_ok());
    }

    #[test]
    fn equal_seeds_pick_the_same_move() {
        let game = GameState::new_game();
        let mut a = RandomEngine::from_seed(42);
        let mut b = RandomEngine::from_seed(42);
        assert_eq!(a.choose_move(&game), b.choose_move(&game));
    }
}
