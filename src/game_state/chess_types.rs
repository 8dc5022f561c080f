//! Core value types shared by the board, the move rules, and the engine.

use std::fmt;

use crate::board::board_location::BoardLocation;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// Piece kind. Color is represented separately on [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceClass {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceClass::Pawn => 0,
            PieceClass::Knight => 1,
            PieceClass::Bishop => 2,
            PieceClass::Rook => 3,
            PieceClass::Queen => 4,
            PieceClass::King => 5,
        }
    }

    pub const ALL: [PieceClass; 6] = [
        PieceClass::Pawn,
        PieceClass::Knight,
        PieceClass::Bishop,
        PieceClass::Rook,
        PieceClass::Queen,
        PieceClass::King,
    ];
}

impl fmt::Display for PieceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceClass::Pawn => "pawn",
            PieceClass::Knight => "knight",
            PieceClass::Bishop => "bishop",
            PieceClass::Rook => "rook",
            PieceClass::Queen => "queen",
            PieceClass::King => "king",
        };
        write!(f, "{name}")
    }
}

/// Whether the game is still being played or which side has won.
///
/// Once a won state is reached it never changes; every later move attempt
/// is rejected before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Unfinished,
    LightWon,
    DarkWon,
}

impl GameOutcome {
    /// The terminal outcome awarded to `winner`.
    #[inline]
    pub const fn won_by(winner: Color) -> Self {
        match winner {
            Color::Light => GameOutcome::LightWon,
            Color::Dark => GameOutcome::DarkWon,
        }
    }

    #[inline]
    pub const fn is_decided(self) -> bool {
        !matches!(self, GameOutcome::Unfinished)
    }
}

/// A single piece on the board.
///
/// `location` mirrors the square currently holding the piece; the move
/// commit updates both sides together. `has_moved` is stamped on the first
/// successful move and never reset; only the pawn double-step rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub class: PieceClass,
    pub team: Color,
    pub location: BoardLocation,
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(class: PieceClass, team: Color, location: BoardLocation) -> Self {
        Piece {
            class,
            team,
            location,
            has_moved: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_flips_between_teams() {
        assert_eq!(Color::Light.opposite(), Color::Dark);
        assert_eq!(Color::Dark.opposite(), Color::Light);
    }

    #[test]
    fn outcome_awarded_to_the_winner() {
        assert_eq!(GameOutcome::won_by(Color::Light), GameOutcome::LightWon);
        assert_eq!(GameOutcome::won_by(Color::Dark), GameOutcome::DarkWon);
        assert!(GameOutcome::LightWon.is_decided());
        assert!(!GameOutcome::Unfinished.is_decided());
    }

    #[test]
    fn new_pieces_have_not_moved() {
        let dut = Piece::new(PieceClass::Pawn, Color::Light, (4, 1));
        assert!(!dut.has_moved);
        assert_eq!(dut.location, (4, 1));
    }
}
