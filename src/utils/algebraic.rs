//! Square-name conversions for rank/file addressing.
//!
//! Converts between human-readable square names (for example `"E2"`,
//! accepted in either case) and internal board locations. This is the only
//! notation the engine speaks; full algebraic move notation is out of scope.

use crate::board::board_location::{
    file_index_to_letter, file_letter_to_index, rank_digit_to_index, rank_index_to_digit,
    BoardLocation,
};
use crate::chess_errors::GameError;

/// Convert a square name (for example `"E2"` or `"e2"`) to a board location.
pub fn square_name_to_location(name: &str) -> Result<BoardLocation, GameError> {
    let mut chars = name.chars();
    let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(GameError::InvalidSquareName(name.to_owned()));
    };

    let file = file_letter_to_index(file_char)
        .map_err(|_| GameError::InvalidSquareName(name.to_owned()))?;
    let rank = rank_digit_to_index(rank_char)
        .map_err(|_| GameError::InvalidSquareName(name.to_owned()))?;
    Ok((file, rank))
}

/// Convert a board location back to its uppercase square name.
pub fn location_to_square_name(location: &BoardLocation) -> Result<String, GameError> {
    let file = file_index_to_letter(location.0)?;
    let rank = rank_index_to_digit(location.1)?;
    Ok(format!("{file}{rank}"))
}
