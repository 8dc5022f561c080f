//! The 8x8 board: square storage, coordinate lookup, and game setup.

use crate::board::board_location::{location_is_on_board, BoardLocation};
use crate::board::square::Square;
use crate::chess_errors::GameError;
use crate::game_state::chess_types::{Color, Piece, PieceClass};

/// Back-rank layout shared by both sides, file A through file H.
pub const STARTING_BACK_RANK: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

/// Owns the 64 squares. Squares are created once and never destroyed;
/// all mutation goes through the piece slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    /// An empty board. Pair with [`Board::place_piece`] to build custom
    /// positions in tests and harnesses.
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|file| {
                std::array::from_fn(|rank| Square::new((file as i8, rank as i8)))
            }),
        }
    }

    /// A board with all 32 pieces on their standard starting squares,
    /// each piece's stored location bound to its square.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for (file, &class) in STARTING_BACK_RANK.iter().enumerate() {
            let file = file as i8;
            board
                .place_piece(class, Color::Light, (file, 0))
                .expect("empty board must accept the starting layout");
            board
                .place_piece(PieceClass::Pawn, Color::Light, (file, 1))
                .expect("empty board must accept the starting layout");
            board
                .place_piece(PieceClass::Pawn, Color::Dark, (file, 6))
                .expect("empty board must accept the starting layout");
            board
                .place_piece(class, Color::Dark, (file, 7))
                .expect("empty board must accept the starting layout");
        }
        board
    }

    pub fn square(&self, x: &BoardLocation) -> Result<&Square, GameError> {
        if !location_is_on_board(x) {
            return Err(GameError::InvalidFileOrRank(*x));
        }
        Ok(&self.squares[x.0 as usize][x.1 as usize])
    }

    pub fn square_mut(&mut self, x: &BoardLocation) -> Result<&mut Square, GameError> {
        if !location_is_on_board(x) {
            return Err(GameError::InvalidFileOrRank(*x));
        }
        Ok(&mut self.squares[x.0 as usize][x.1 as usize])
    }

    /// The piece on `x`, if the location is valid and occupied.
    pub fn piece_at(&self, x: &BoardLocation) -> Option<&Piece> {
        self.square(x).ok().and_then(|square| square.piece())
    }

    /// Create a fresh piece on an empty square.
    pub fn place_piece(
        &mut self,
        class: PieceClass,
        team: Color,
        location: BoardLocation,
    ) -> Result<(), GameError> {
        let square = self.square_mut(&location)?;
        if square.is_occupied() {
            return Err(GameError::BoardLocationOccupied(location));
        }
        square.set_piece(Piece::new(class, team, location));
        Ok(())
    }

    /// Remove whatever sits on `location`, returning it.
    pub fn clear_square(&mut self, location: BoardLocation) -> Result<Option<Piece>, GameError> {
        Ok(self.square_mut(&location)?.take_piece())
    }

    /// Visit every occupied square as `(location, piece)`.
    pub fn pieces(&self) -> impl Iterator<Item = (BoardLocation, &Piece)> {
        self.squares
            .iter()
            .flatten()
            .filter_map(|square| square.piece().map(|piece| (square.location(), piece)))
    }
}
