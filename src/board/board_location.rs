//! Zero-based `(file, rank)` board addressing.
//!
//! File letters `A..=H` and rank digits `1..=8` map bidirectionally onto
//! indices `0..=7`; the letter mapping lives here so every component shares
//! one conversion instead of carrying its own lookup table.

use crate::chess_errors::GameError;

pub type BoardLocation = (i8, i8);

/// Moves a board location by a file and rank offset, rejecting offsets
/// that leave the 8x8 board.
pub fn move_board_location(
    x: &BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, GameError> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(GameError::TriedToMoveOutOfBounds((*x, d_file, d_rank)))
    } else {
        Ok(y)
    }
}

/// True when both indices fall inside `0..=7`.
#[inline]
pub fn location_is_on_board(x: &BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Convert a file letter (either case) to its zero-based index.
pub fn file_letter_to_index(letter: char) -> Result<i8, GameError> {
    let upper = letter.to_ascii_uppercase();
    if !('A'..='H').contains(&upper) {
        return Err(GameError::InvalidSquareName(letter.to_string()));
    }
    Ok((upper as u8 - b'A') as i8)
}

/// Convert a zero-based file index back to its uppercase letter.
pub fn file_index_to_letter(index: i8) -> Result<char, GameError> {
    if !(0..8).contains(&index) {
        return Err(GameError::InvalidFileOrRank((index, 0)));
    }
    Ok(char::from(b'A' + index as u8))
}

/// Convert a rank digit `'1'..='8'` to its zero-based index.
pub fn rank_digit_to_index(digit: char) -> Result<i8, GameError> {
    if !('1'..='8').contains(&digit) {
        return Err(GameError::InvalidSquareName(digit.to_string()));
    }
    Ok((digit as u8 - b'1') as i8)
}

/// Convert a zero-based rank index back to its digit.
pub fn rank_index_to_digit(index: i8) -> Result<char, GameError> {
    if !(0..8).contains(&index) {
        return Err(GameError::InvalidFileOrRank((0, index)));
    }
    Ok(char::from(b'1' + index as u8))
}
