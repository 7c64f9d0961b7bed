//! The board model: an 8x8 grid of piece-or-empty cells.
//!
//! Pure data holder with primitive accessors. No rule knowledge lives here;
//! move generation and the game state machine are built on top of it.

use crate::board_location::BoardLocation;
use crate::errors::ChessErrors;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct PieceRegister {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl PieceRegister {
    /// Returns the piece on the given square, if any.
    pub fn view(&self, x: BoardLocation) -> Option<PieceRecord> {
        self.buffer[x.file() as usize][x.rank() as usize]
    }

    /// Writes a single cell. The only side effect is the cell written.
    pub fn set_piece(&mut self, x: BoardLocation, piece: Option<PieceRecord>) {
        self.buffer[x.file() as usize][x.rank() as usize] = piece;
    }

    pub fn is_empty(&self, x: BoardLocation) -> bool {
        self.view(x).is_none()
    }

    pub fn team_at(&self, x: BoardLocation) -> Option<PieceTeam> {
        self.view(x).map(|record| record.team)
    }

    /// Places a piece on an empty square.
    ///
    /// # Returns
    /// * `Err(ChessErrors::BoardLocationOccupied)` if the square is taken.
    pub fn add_piece_record(
        &mut self,
        record: PieceRecord,
        x: BoardLocation,
    ) -> Result<(), ChessErrors> {
        if self.view(x).is_some() {
            return Err(ChessErrors::BoardLocationOccupied(x));
        }
        self.set_piece(x, Some(record));
        Ok(())
    }

    /// Clears a square, returning whatever piece stood on it.
    pub fn remove_piece_record(&mut self, x: BoardLocation) -> Option<PieceRecord> {
        let record = self.view(x);
        self.set_piece(x, None);
        record
    }

    /// Iterates over all occupied squares with their pieces.
    pub fn iter(&self) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        (0..8).flat_map(move |file| {
            (0..8).filter_map(move |rank| {
                let location = BoardLocation::new_unchecked(file, rank);
                self.view(location).map(|record| (location, record))
            })
        })
    }

    /// Finds the king of the given team.
    ///
    /// # Returns
    /// * `Err(ChessErrors::PieceRegisterDoesNotContainAKing)` when absent,
    ///   which indicates a corrupted position rather than a user error.
    pub fn find_king(&self, team: PieceTeam) -> Result<BoardLocation, ChessErrors> {
        self.iter()
            .find(|(_, record)| record.class == PieceClass::King && record.team == team)
            .map(|(location, _)| location)
            .ok_or(ChessErrors::PieceRegisterDoesNotContainAKing)
    }
}
