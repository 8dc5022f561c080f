//! Pawn movement, stateful on the one-shot first-move allowance.
//!
//! Until a pawn has moved it may advance one or two ranks straight onto an
//! empty square. Afterwards it advances a single rank onto an empty square,
//! or steps one square diagonally onto an occupied one (the capture shape).
//! No direction of travel is enforced, so a pawn may head toward either
//! back rank.

use crate::board::board_location::BoardLocation;

pub fn shape_allows(
    start: &BoardLocation,
    stop: &BoardLocation,
    has_moved: bool,
    stop_occupied: bool,
) -> bool {
    let d_file = (stop.0 - start.0).abs();
    let d_rank = (stop.1 - start.1).abs();

    if !has_moved {
        return d_file == 0 && (d_rank == 1 || d_rank == 2) && !stop_occupied;
    }

    if d_file == 0 {
        // Forward march; any occupant blocks it.
        d_rank == 1 && !stop_occupied
    } else {
        // Diagonal step, only as a capture.
        stop_occupied && d_file == 1 && d_rank == 1
    }
}

#[cfg(test)]
mod tests {
    use super::shape_allows;

    #[test]
    fn first_move_may_cover_one_or_two_ranks() {
        assert!(shape_allows(&(4, 1), &(4, 2), false, false));
        assert!(shape_allows(&(4, 1), &(4, 3), false, false));
        assert!(!shape_allows(&(4, 1), &(4, 4), false, false));
        // Two ranks is gone once the allowance is spent.
        assert!(!shape_allows(&(4, 3), &(4, 5), true, false));
        assert!(shape_allows(&(4, 3), &(4, 4), true, false));
    }

    #[test]
    fn forward_squares_must_be_empty() {
        assert!(!shape_allows(&(4, 1), &(4, 2), false, true));
        assert!(!shape_allows(&(4, 3), &(4, 4), true, true));
    }

    #[test]
    fn diagonal_steps_require_a_target() {
        assert!(shape_allows(&(4, 3), &(5, 4), true, true));
        assert!(shape_allows(&(4, 3), &(3, 4), true, true));
        assert!(!shape_allows(&(4, 3), &(5, 4), true, false));
        // The first-move allowance has no diagonal form.
        assert!(!shape_allows(&(4, 1), &(5, 2), false, true));
    }

    #[test]
    fn either_rank_direction_is_accepted() {
        // Pawns here may walk back the way they came.
        assert!(shape_allows(&(4, 4), &(4, 3), true, false));
        assert!(shape_allows(&(4, 4), &(3, 3), true, true));
    }
}
