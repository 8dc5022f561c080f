//! King movement geometry: a single step in any direction.

use crate::board::board_location::BoardLocation;

/// True when `stop` is one of the up-to-eight neighbouring squares.
/// Staying put is not a move.
pub fn shape_allows(start: &BoardLocation, stop: &BoardLocation) -> bool {
    let d_file = (stop.0 - start.0).abs();
    let d_rank = (stop.1 - start.1).abs();
    d_file <= 1 && d_rank <= 1 && (d_file, d_rank) != (0, 0)
}
