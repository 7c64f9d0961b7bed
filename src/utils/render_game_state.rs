//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the piece register for the text
//! front end, tests, and diagnostics.

use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Render the board to a Unicode string for terminal output, light's side of
/// the board at the bottom.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            let location = BoardLocation::new_unchecked(file, rank);
            match game_state.piece_register.view(location) {
                Some(record) => out.push(piece_to_unicode(record)),
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

    out.push_str("  a b c d e f g h");
    out
}

fn piece_to_unicode(record: PieceRecord) -> char {
    match (record.team, record.class) {
        (PieceTeam::Light, PieceClass::Pawn) => '♙',
        (PieceTeam::Light, PieceClass::Knight) => '♘',
        (PieceTeam::Light, PieceClass::Bishop) => '♗',
        (PieceTeam::Light, PieceClass::Rook) => '♖',
        (PieceTeam::Light, PieceClass::Queen) => '♕',
        (PieceTeam::Light, PieceClass::King) => '♔',
        (PieceTeam::Dark, PieceClass::Pawn) => '♟',
        (PieceTeam::Dark, PieceClass::Knight) => '♞',
        (PieceTeam::Dark, PieceClass::Bishop) => '♝',
        (PieceTeam::Dark, PieceClass::Rook) => '♜',
        (PieceTeam::Dark, PieceClass::Queen) => '♛',
        (PieceTeam::Dark, PieceClass::King) => '♚',
    }
}
