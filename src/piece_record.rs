use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// A piece on the board: what it is and whose it is.
///
/// Immutable value type; the square it stands on lives in the piece register,
/// not here.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
}

impl PieceRecord {
    /// FEN piece letter: uppercase for light, lowercase for dark.
    pub const fn to_fen_char(self) -> char {
        let c = match self.class {
            PieceClass::Pawn => 'p',
            PieceClass::Knight => 'n',
            PieceClass::Bishop => 'b',
            PieceClass::Rook => 'r',
            PieceClass::Queen => 'q',
            PieceClass::King => 'k',
        };
        match self.team {
            PieceTeam::Light => c.to_ascii_uppercase(),
            PieceTeam::Dark => c,
        }
    }

    pub const fn from_fen_char(c: char) -> Option<Self> {
        let team = if c.is_ascii_uppercase() {
            PieceTeam::Light
        } else {
            PieceTeam::Dark
        };
        let class = match c.to_ascii_lowercase() {
            'p' => PieceClass::Pawn,
            'n' => PieceClass::Knight,
            'b' => PieceClass::Bishop,
            'r' => PieceClass::Rook,
            'q' => PieceClass::Queen,
            'k' => PieceClass::King,
            _ => return None,
        };
        Some(PieceRecord { class, team })
    }
}
