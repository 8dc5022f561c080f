//! Errors used throughout the engine.
//!
//! `GameError` is the single error type across the crate. Game logic,
//! square-name parsing, and board editing all return
//! `Result<..., GameError>` so failures propagate with `?` and callers can
//! match on the precise reason a move was refused. The public
//! `make_move` entry point folds any variant into a plain `false`;
//! drivers that want diagnostics use `try_make_move` and the `Display`
//! output instead.

use std::fmt;

use crate::board::board_location::BoardLocation;
use crate::game_state::chess_types::{Color, PieceClass};

/// Unified error type for the engine.
///
/// Variants carry contextual payloads where useful so callers can log or
/// display precise diagnostics. `RosterCountUnderflow` indicates a
/// corrupted game state and is not expected during normal play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A square name such as `"E2"` failed to parse.
    ///
    /// Payload: the original string.
    InvalidSquareName(String),

    /// Numeric file or rank indices outside `0..=7` were supplied.
    ///
    /// Payload: (file_index, rank_index) zero-based.
    InvalidFileOrRank((i8, i8)),

    /// Offsetting a location by `(d_file, d_rank)` would leave the board.
    ///
    /// Payload: (origin_location, d_file, d_rank)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// Attempted to place a piece on a square that already holds one.
    BoardLocationOccupied(BoardLocation),

    /// A move was attempted after the game had already been decided.
    GameAlreadyDecided,

    /// The starting square of a move holds no piece.
    EmptyStartSquare(BoardLocation),

    /// The piece on the starting square belongs to the side not on turn.
    ///
    /// Payload: the team that tried to move.
    MoveOutOfTurn(Color),

    /// The destination violates the moving piece's movement geometry.
    IllegalPieceMovement(PieceClass),

    /// A sliding move is blocked by a piece strictly between start and stop.
    ///
    /// Payload: the first occupied square found on the line.
    PathObstructed(BoardLocation),

    /// The destination square holds a piece of the mover's own team.
    CannotCaptureOwnPiece(BoardLocation),

    /// A capture tried to decrement a roster count that was already zero.
    /// Indicates the rosters and the board have fallen out of sync.
    RosterCountUnderflow(PieceClass),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSquareName(name) => {
                write!(f, "invalid square name: {name:?}")
            }
            GameError::InvalidFileOrRank((file, rank)) => {
                write!(f, "file/rank indices out of range: ({file}, {rank})")
            }
            GameError::TriedToMoveOutOfBounds((origin, d_file, d_rank)) => write!(
                f,
                "offset ({d_file}, {d_rank}) from ({}, {}) leaves the board",
                origin.0, origin.1
            ),
            GameError::BoardLocationOccupied(at) => {
                write!(f, "square ({}, {}) is already occupied", at.0, at.1)
            }
            GameError::GameAlreadyDecided => {
                write!(f, "the game has already been decided")
            }
            GameError::EmptyStartSquare(at) => {
                write!(f, "no piece on the starting square ({}, {})", at.0, at.1)
            }
            GameError::MoveOutOfTurn(team) => {
                write!(f, "it is not the {team} side's turn")
            }
            GameError::IllegalPieceMovement(class) => {
                write!(f, "that destination is not legal for a {class}")
            }
            GameError::PathObstructed(at) => {
                write!(f, "the path is blocked at ({}, {})", at.0, at.1)
            }
            GameError::CannotCaptureOwnPiece(at) => {
                write!(f, "own piece on the destination square ({}, {})", at.0, at.1)
            }
            GameError::RosterCountUnderflow(class) => {
                write!(f, "roster count for {class} underflowed")
            }
        }
    }
}

impl std::error::Error for GameError {}
