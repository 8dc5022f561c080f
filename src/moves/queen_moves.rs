//! Queen movement geometry: the union of the rook and bishop rules.

use crate::board::board_location::BoardLocation;
use crate::moves::{bishop_moves, rook_moves};

pub fn shape_allows(start: &BoardLocation, stop: &BoardLocation) -> bool {
    rook_moves::shape_allows(start, stop) || bishop_moves::shape_allows(start, stop)
}
