#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// The piece classes a pawn may promote to.
pub const PROMOTION_CLASSES: [PieceClass; 4] = [
    PieceClass::Queen,
    PieceClass::Rook,
    PieceClass::Bishop,
    PieceClass::Knight,
];

impl PieceClass {
    /// Lowercase suffix character used in long algebraic promotion notation.
    pub const fn to_promotion_char(self) -> Option<char> {
        match self {
            PieceClass::Queen => Some('q'),
            PieceClass::Rook => Some('r'),
            PieceClass::Bishop => Some('b'),
            PieceClass::Knight => Some('n'),
            _ => None,
        }
    }

    pub const fn from_promotion_char(c: char) -> Option<Self> {
        match c {
            'q' | 'Q' => Some(PieceClass::Queen),
            'r' | 'R' => Some(PieceClass::Rook),
            'b' | 'B' => Some(PieceClass::Bishop),
            'n' | 'N' => Some(PieceClass::Knight),
            _ => None,
        }
    }
}
