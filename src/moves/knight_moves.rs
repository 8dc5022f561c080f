//! Knight movement geometry. Knights jump, so obstruction never applies.

use crate::board::board_location::BoardLocation;

/// True for the eight L-shaped offsets: one file and two ranks, or two
/// files and one rank.
pub fn shape_allows(start: &BoardLocation, stop: &BoardLocation) -> bool {
    let d_file = (stop.0 - start.0).abs();
    let d_rank = (stop.1 - start.1).abs();
    (d_file == 1 && d_rank == 2) || (d_file == 2 && d_rank == 1)
}
