use crate::board_location::BoardLocation;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Represents the move types in chess, such as promotion, castling, en
/// passant, and double pawn step. Used to distinguish between regular moves
/// and moves with special rules and information.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveTypes {
    /// A regular move or regular capture.
    Regular,
    /// Kingside castling; the rook vector is derived from the mover's team.
    CastleKingside,
    /// Queenside castling.
    CastleQueenside,
    /// En passant capture. The `capture_status` holds the victim pawn, which
    /// stands behind the destination square.
    EnPassant,
    /// Double pawn step; payload is the vulnerable square left behind.
    DoubleStep(BoardLocation),
    /// Promotion to a specific piece class.
    Promote(PieceClass),
}

/// A fully described chess move.
///
/// Immutable once created. Together with the pre-move flag and clock
/// snapshots kept in the history, it carries everything needed both to apply
/// itself and to reverse itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveDescription {
    pub start: BoardLocation,
    pub destination: BoardLocation,
    pub moved_piece: PieceRecord,
    pub capture_status: Option<PieceRecord>,
    pub move_type: MoveTypes,
}

impl MoveDescription {
    pub fn is_capture(&self) -> bool {
        self.capture_status.is_some()
    }

    /// The square the captured piece stood on. Differs from `destination`
    /// only for en passant, where the victim stands behind it.
    pub fn capture_location(&self) -> Option<BoardLocation> {
        self.capture_status.as_ref()?;
        match self.move_type {
            MoveTypes::EnPassant => {
                // Bounded by construction: same file as the destination, same
                // rank as the start.
                Some(BoardLocation::new_unchecked(
                    self.destination.file(),
                    self.start.rank(),
                ))
            }
            _ => Some(self.destination),
        }
    }

    /// Home and landing squares of the rook taking part in castling, if this
    /// is a castling move.
    pub fn castling_rook_vector(&self) -> Option<(BoardLocation, BoardLocation)> {
        let home_rank = self.moved_piece.team.home_rank();
        match self.move_type {
            MoveTypes::CastleKingside => Some((
                BoardLocation::new_unchecked(7, home_rank),
                BoardLocation::new_unchecked(5, home_rank),
            )),
            MoveTypes::CastleQueenside => Some((
                BoardLocation::new_unchecked(0, home_rank),
                BoardLocation::new_unchecked(3, home_rank),
            )),
            _ => None,
        }
    }

    /// Converts this move to long algebraic notation (e.g. "e2e4", "e7e8q").
    pub fn get_long_algebraic(&self) -> String {
        let base = format!(
            "{}{}",
            self.start.to_long_algebraic(),
            self.destination.to_long_algebraic()
        );
        if let MoveTypes::Promote(class) = self.move_type {
            if let Some(suffix) = class.to_promotion_char() {
                return format!("{base}{suffix}");
            }
        }
        base
    }
}
