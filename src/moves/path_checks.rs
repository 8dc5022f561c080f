//! Path obstruction for sliding pieces.
//!
//! Rooks, bishops, and queens travel along a line and are stopped by the
//! first occupied square strictly between start and stop. Knights jump and
//! kings step a single square, so neither is ever checked here; the same
//! goes for pawns, whose double step inspects only its destination.

use crate::board::board::Board;
use crate::board::board_location::{location_is_on_board, BoardLocation};
use crate::chess_errors::GameError;

/// Walk the squares strictly between `start` and `stop`, failing on the
/// first occupied one. Callers must have already established that the two
/// squares share a rank, a file, or a diagonal.
pub fn path_is_clear(
    board: &Board,
    start: &BoardLocation,
    stop: &BoardLocation,
) -> Result<(), GameError> {
    let file_step = (stop.0 - start.0).signum();
    let rank_step = (stop.1 - start.1).signum();

    let mut current: BoardLocation = (start.0 + file_step, start.1 + rank_step);
    while current != *stop && location_is_on_board(&current) {
        if board.piece_at(&current).is_some() {
            return Err(GameError::PathObstructed(current));
        }
        current = (current.0 + file_step, current.1 + rank_step);
    }
    Ok(())
}
