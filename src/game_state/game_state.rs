//! The game engine: turn state, outcome, rosters, and move execution.
//!
//! `GameState` owns the board and the two survivor rosters, and exposes the
//! public move contract: `make_move` for callers that only need a
//! success/failure answer, `try_make_move` for callers that want the
//! refusal reason. Validation is delegated to
//! [`move_rules::validate_move`](crate::moves::move_rules::validate_move);
//! this module owns the mutating commit: capture resolution, the win
//! check, the square/piece update, and the turn flip.

use crate::board::board::Board;
use crate::board::board_location::BoardLocation;
use crate::chess_errors::GameError;
use crate::game_state::chess_types::{Color, GameOutcome, PieceClass};
use crate::game_state::piece_roster::PieceRoster;
use crate::moves::move_rules::validate_move;
use crate::utils::algebraic::square_name_to_location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    outcome: GameOutcome,
    rosters: [PieceRoster; 2],
}

impl GameState {
    /// A fresh game: standard starting position, light to move.
    pub fn new_game() -> Self {
        GameState {
            board: Board::new_game(),
            turn: Color::Light,
            outcome: GameOutcome::Unfinished,
            rosters: [PieceRoster::standard(); 2],
        }
    }

    /// Adopt an arbitrary position, deriving each side's roster from the
    /// pieces actually on the board. Used by tests and harnesses.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut rosters = [PieceRoster::empty(); 2];
        for (_, piece) in board.pieces() {
            rosters[piece.team.index()].add_one(piece.class);
        }
        GameState {
            board,
            turn,
            outcome: GameOutcome::Unfinished,
            rosters,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn get_turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn get_game_state(&self) -> GameOutcome {
        self.outcome
    }

    /// The surviving piece classes for one side, one label per piece.
    pub fn get_piece_list(&self, team: Color) -> Vec<PieceClass> {
        self.rosters[team.index()].labels()
    }

    pub fn roster(&self, team: Color) -> &PieceRoster {
        &self.rosters[team.index()]
    }

    /// Move a piece between two named squares, for example
    /// `make_move("E2", "E4")`. Returns whether the move succeeded; on
    /// failure nothing has changed.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.try_make_move(from, to).is_ok()
    }

    /// Same as [`GameState::make_move`] but surfaces the refusal reason.
    pub fn try_make_move(&mut self, from: &str, to: &str) -> Result<(), GameError> {
        let start = square_name_to_location(from)?;
        let stop = square_name_to_location(to)?;
        self.apply_move(&start, &stop)
    }

    /// Validate and commit one move at the coordinate level.
    pub fn apply_move(
        &mut self,
        start: &BoardLocation,
        stop: &BoardLocation,
    ) -> Result<(), GameError> {
        validate_move(self, start, stop)?;

        // Resolve the capture before touching the board. Validation has
        // established the occupant, if any, is an enemy piece; emptying its
        // class's bag decides the game, though the move still completes.
        if let Some(occupant) = self.board.piece_at(stop).copied() {
            let survivors = self.rosters[occupant.team.index()].remove_one(occupant.class)?;
            if survivors == 0 {
                self.outcome = GameOutcome::won_by(occupant.team.opposite());
            }
        }

        let mut mover = self
            .board
            .clear_square(*start)?
            .ok_or(GameError::EmptyStartSquare(*start))?;
        mover.has_moved = true;
        mover.location = *stop;
        self.board.square_mut(stop)?.set_piece(mover);

        self.turn = self.turn.opposite();
        Ok(())
    }
}
