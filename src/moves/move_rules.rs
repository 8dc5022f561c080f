//! The non-mutating move validation pipeline.
//!
//! Every rule that can refuse a move lives here, applied in a fixed order:
//! game already decided, empty start square, wrong side to move, movement
//! geometry, path obstruction (sliders only), and finally a same-team
//! occupant on the destination. `GameState` runs this before committing
//! anything, and the legal-move generator probes it square by square.

use crate::board::board_location::BoardLocation;
use crate::chess_errors::GameError;
use crate::game_state::chess_types::PieceClass;
use crate::game_state::game_state::GameState;
use crate::moves::{
    bishop_moves, king_moves, knight_moves, path_checks, pawn_moves, queen_moves, rook_moves,
};

/// Check whether moving the piece on `start` to `stop` is legal in `game`.
///
/// Returns the first rule violation found; `Ok(())` means the move would
/// succeed. Nothing is mutated.
pub fn validate_move(
    game: &GameState,
    start: &BoardLocation,
    stop: &BoardLocation,
) -> Result<(), GameError> {
    if game.get_game_state().is_decided() {
        return Err(GameError::GameAlreadyDecided);
    }

    let start_square = game.board().square(start)?;
    let stop_square = game.board().square(stop)?;

    let mover = start_square
        .piece()
        .ok_or(GameError::EmptyStartSquare(*start))?;
    if mover.team != game.get_turn() {
        return Err(GameError::MoveOutOfTurn(mover.team));
    }

    let stop_occupied = stop_square.is_occupied();
    let shape_ok = match mover.class {
        PieceClass::Pawn => pawn_moves::shape_allows(start, stop, mover.has_moved, stop_occupied),
        PieceClass::Knight => knight_moves::shape_allows(start, stop),
        PieceClass::Bishop => bishop_moves::shape_allows(start, stop),
        PieceClass::Rook => rook_moves::shape_allows(start, stop),
        PieceClass::Queen => queen_moves::shape_allows(start, stop),
        PieceClass::King => king_moves::shape_allows(start, stop),
    };
    if !shape_ok {
        return Err(GameError::IllegalPieceMovement(mover.class));
    }

    if matches!(
        mover.class,
        PieceClass::Rook | PieceClass::Bishop | PieceClass::Queen
    ) {
        path_checks::path_is_clear(game.board(), start, stop)?;
    }

    if let Some(occupant) = stop_square.piece() {
        if occupant.team == mover.team {
            return Err(GameError::CannotCaptureOwnPiece(*stop));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_move;
    use crate::chess_errors::GameError;
    use crate::game_state::chess_types::{Color, PieceClass};
    use crate::game_state::game_state::GameState;

    #[test]
    fn rejections_come_with_the_matching_reason() {
        let game = GameState::new_game();

        // Empty start square.
        assert_eq!(
            validate_move(&game, &(4, 3), &(4, 4)),
            Err(GameError::EmptyStartSquare((4, 3)))
        );
        // Dark may not move first.
        assert_eq!(
            validate_move(&game, &(4, 6), &(4, 5)),
            Err(GameError::MoveOutOfTurn(Color::Dark))
        );
        // A rook cannot step diagonally, occupied or not.
        assert_eq!(
            validate_move(&game, &(0, 0), &(1, 1)),
            Err(GameError::IllegalPieceMovement(PieceClass::Rook))
        );
        // The rook on A1 is boxed in by the pawn on A2.
        assert_eq!(
            validate_move(&game, &(0, 0), &(0, 4)),
            Err(GameError::PathObstructed((0, 1)))
        );
        // The king may not step onto its own queen.
        assert_eq!(
            validate_move(&game, &(4, 0), &(3, 0)),
            Err(GameError::CannotCaptureOwnPiece((3, 0)))
        );
        // Off-board coordinates are rejected, not panicked on.
        assert!(validate_move(&game, &(4, 1), &(4, 8)).is_err());
    }

    #[test]
    fn opening_pawn_and_knight_moves_pass() {
        let game = GameState::new_game();
        assert!(validate_move(&game, &(4, 1), &(4, 3)).is_ok());
        assert!(validate_move(&game, &(4, 1), &(4, 2)).is_ok());
        // B1 to C3 jumps the pawn rank.
        assert!(validate_move(&game, &(1, 0), &(2, 2)).is_ok());
    }

    #[test]
    fn validation_never_mutates_the_game() {
        let game = GameState::new_game();
        let before = game.clone();
        let _ = validate_move(&game, &(0, 0), &(0, 4));
        let _ = validate_move(&game, &(4, 1), &(4, 3));
        assert_eq!(game, before);
    }
}
