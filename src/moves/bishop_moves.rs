//! Bishop movement geometry: diagonals of any nonzero length.

use crate::board::board_location::BoardLocation;

/// True when `stop` lies on a diagonal through `start`.
pub fn shape_allows(start: &BoardLocation, stop: &BoardLocation) -> bool {
    let d_file = (stop.0 - start.0).abs();
    let d_rank = (stop.1 - start.1).abs();
    d_file == d_rank && d_file != 0
}

#[cfg(test)]
mod tests {
    use super::shape_allows;

    #[test]
    fn diagonals_only() {
        assert!(shape_allows(&(2, 0), &(7, 5)));
        assert!(shape_allows(&(4, 4), &(1, 7)));
        assert!(!shape_allows(&(2, 0), &(2, 5)));
        assert!(!shape_allows(&(2, 0), &(2, 0)));
    }
}
