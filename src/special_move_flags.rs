use crate::board_location::BoardLocation;
use crate::piece_team::PieceTeam;

/// Castling rights and the en passant target square.
///
/// Mutated only by move application; the en passant target is valid only for
/// the move immediately following a double pawn step and is cleared by any
/// other move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpecialMoveFlags {
    /// Whether light (white) can castle queenside.
    pub can_castle_queen_light: bool,
    /// Whether light (white) can castle kingside.
    pub can_castle_king_light: bool,
    /// Whether dark (black) can castle queenside.
    pub can_castle_queen_dark: bool,
    /// Whether dark (black) can castle kingside.
    pub can_castle_king_dark: bool,
    /// The en passant target (square behind the pawn that double-stepped).
    pub en_passant_location: Option<BoardLocation>,
}

impl SpecialMoveFlags {
    /// Flags for the standard starting position.
    pub const fn new_game() -> Self {
        SpecialMoveFlags {
            can_castle_queen_light: true,
            can_castle_king_light: true,
            can_castle_queen_dark: true,
            can_castle_king_dark: true,
            en_passant_location: None,
        }
    }

    /// Flags with every right cleared and no en passant target.
    pub const fn none() -> Self {
        SpecialMoveFlags {
            can_castle_queen_light: false,
            can_castle_king_light: false,
            can_castle_queen_dark: false,
            can_castle_king_dark: false,
            en_passant_location: None,
        }
    }

    pub const fn can_castle_kingside(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.can_castle_king_light,
            PieceTeam::Dark => self.can_castle_king_dark,
        }
    }

    pub const fn can_castle_queenside(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.can_castle_queen_light,
            PieceTeam::Dark => self.can_castle_queen_dark,
        }
    }

    pub fn clear_kingside(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Light => self.can_castle_king_light = false,
            PieceTeam::Dark => self.can_castle_king_dark = false,
        }
    }

    pub fn clear_queenside(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Light => self.can_castle_queen_light = false,
            PieceTeam::Dark => self.can_castle_queen_dark = false,
        }
    }
}
