//! Mover abstraction so drivers and the match harness can swap strategies
//! behind a single trait interface.

use crate::board::board_location::BoardLocation;
use crate::game_state::game_state::GameState;

pub trait Engine {
    fn name(&self) -> &str;

    /// Pick a move for the side to move, or `None` when no legal move
    /// exists in the given position.
    fn choose_move(&mut self, game: &GameState) -> Option<(BoardLocation, BoardLocation)>;
}
