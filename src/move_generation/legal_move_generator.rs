//! Legal-move enumeration by probing the validator.
//!
//! There is no check detection in this variant, so a move is legal exactly
//! when [`validate_move`] accepts it. Probing all destination squares is
//! bounded work (at most 64x64 constant-time checks per position) and keeps
//! a single source of truth for legality.

use crate::board::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::moves::move_rules::validate_move;

/// Every square the piece on `start` may legally move to right now.
pub fn legal_destinations(game: &GameState, start: &BoardLocation) -> Vec<BoardLocation> {
    let mut result = Vec::new();
    for file in 0..8i8 {
        for rank in 0..8i8 {
            let stop = (file, rank);
            if validate_move(game, start, &stop).is_ok() {
                result.push(stop);
            }
        }
    }
    result
}

/// Every legal `(start, stop)` pair for the side to move.
pub fn generate_legal_moves(game: &GameState) -> Vec<(BoardLocation, BoardLocation)> {
    let mut result = Vec::new();
    for (start, piece) in game.board().pieces() {
        if piece.team != game.get_turn() {
            continue;
        }
        for stop in legal_destinations(game, &start) {
            result.push((start, stop));
        }
    }
    result
}
