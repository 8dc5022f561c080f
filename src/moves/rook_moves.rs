//! Rook movement geometry: straight lines along a file or a rank.

use crate::board::board_location::BoardLocation;

/// True when `stop` lies on the same file or the same rank as `start`
/// (but not both, which would be a zero-length move).
pub fn shape_allows(start: &BoardLocation, stop: &BoardLocation) -> bool {
    let d_file = (stop.0 - start.0).abs();
    let d_rank = (stop.1 - start.1).abs();
    (d_file == 0) ^ (d_rank == 0)
}

#[cfg(test)]
mod tests {
    use super::shape_allows;

    #[test]
    fn straight_lines_only() {
        assert!(shape_allows(&(0, 0), &(0, 7)));
        assert!(shape_allows(&(0, 3), &(7, 3)));
        // D4 to E5 is never a rook move.
        assert!(!shape_allows(&(3, 3), &(4, 4)));
        assert!(!shape_allows(&(3, 3), &(3, 3)));
    }
}
