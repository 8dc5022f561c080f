//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the console driver, tests, and
//! diagnostics in text environments.

use crate::game_state::chess_types::{Color, PieceClass};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output, rank 8 at
/// the top and file A on the left.
pub fn render_game_state(game: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  A B C D E F G H\n");

    for rank in (0..8i8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8i8 {
            match game.board().piece_at(&(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece.team, piece.class)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  A B C D E F G H");

    out
}

fn piece_to_unicode(team: Color, class: PieceClass) -> char {
    match (team, class) {
        (Color::Light, PieceClass::Pawn) => '♙',
        (Color::Light, PieceClass::Knight) => '♘',
        (Color::Light, PieceClass::Bishop) => '♗',
        (Color::Light, PieceClass::Rook) => '♖',
        (Color::Light, PieceClass::Queen) => '♕',
        (Color::Light, PieceClass::King) => '♔',
        (Color::Dark, PieceClass::Pawn) => '♟',
        (Color::Dark, PieceClass::Knight) => '♞',
        (Color::Dark, PieceClass::Bishop) => '♝',
        (Color::Dark, PieceClass::Rook) => '♜',
        (Color::Dark, PieceClass::Queen) => '♛',
        (Color::Dark, PieceClass::King) => '♚',
    }
}
