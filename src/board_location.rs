use std::fmt;

use crate::errors::ChessErrors;

/// A validated square on the 8x8 board.
///
/// Both `file` and `rank` are guaranteed to be in `0..=7` for every value
/// that exists; the only constructors are checked, so board indexing with a
/// `BoardLocation` can never go out of range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardLocation {
    file: i8,
    rank: i8,
}

impl BoardLocation {
    /// Builds a location from zero-based file and rank indices.
    ///
    /// # Returns
    /// * `Ok(BoardLocation)` if both indices are in `0..=7`.
    /// * `Err(ChessErrors::OutOfBounds)` otherwise.
    pub fn from_file_rank(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        if (file < 0) | (file > 7) | (rank < 0) | (rank > 7) {
            Err(ChessErrors::OutOfBounds((file, rank)))
        } else {
            Ok(BoardLocation { file, rank })
        }
    }

    /// Constructor for loop indices that are bounded by construction.
    pub(crate) const fn new_unchecked(file: i8, rank: i8) -> Self {
        BoardLocation { file, rank }
    }

    pub const fn file(&self) -> i8 {
        self.file
    }

    pub const fn rank(&self) -> i8 {
        self.rank
    }

    pub const fn get_file_rank(&self) -> (i8, i8) {
        (self.file, self.rank)
    }

    /// Moves the location by a file and rank offset.
    ///
    /// # Returns
    /// * `Ok(BoardLocation)` - The new location if it stays on the board.
    /// * `Err(ChessErrors::OutOfBounds)` - If the offset leaves the board.
    pub fn offset(&self, d_file: i8, d_rank: i8) -> Result<Self, ChessErrors> {
        Self::from_file_rank(self.file + d_file, self.rank + d_rank)
    }

    /// Converts to long algebraic coordinates (for example: "e4").
    pub fn to_long_algebraic(&self) -> String {
        let file_char = char::from(b'a' + self.file as u8);
        let rank_char = char::from(b'1' + self.rank as u8);
        format!("{file_char}{rank_char}")
    }

    /// Parses long algebraic coordinates (for example: "e4").
    pub fn from_long_algebraic(text: &str) -> Result<Self, ChessErrors> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessErrors::InvalidAlgebraicString(text.to_string()));
        }
        if !(b'a'..=b'h').contains(&bytes[0]) {
            return Err(ChessErrors::InvalidAlgebraicChar(bytes[0] as char));
        }
        if !(b'1'..=b'8').contains(&bytes[1]) {
            return Err(ChessErrors::InvalidAlgebraicChar(bytes[1] as char));
        }
        Ok(BoardLocation {
            file: (bytes[0] - b'a') as i8,
            rank: (bytes[1] - b'1') as i8,
        })
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_long_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(BoardLocation::from_file_rank(-1, 0).is_err());
        assert!(BoardLocation::from_file_rank(0, 8).is_err());
        assert!(BoardLocation::from_file_rank(8, 8).is_err());
        assert!(BoardLocation::from_file_rank(0, 0).is_ok());
        assert!(BoardLocation::from_file_rank(7, 7).is_ok());
    }

    #[test]
    fn offset_respects_board_edges() {
        let a1 = BoardLocation::from_file_rank(0, 0).unwrap();
        assert!(a1.offset(-1, 0).is_err());
        assert!(a1.offset(0, -1).is_err());
        let b2 = a1.offset(1, 1).unwrap();
        assert_eq!(b2.get_file_rank(), (1, 1));
    }

    #[test]
    fn long_algebraic_round_trip() {
        for text in ["a1", "h8", "e4", "d5"] {
            let loc = BoardLocation::from_long_algebraic(text).unwrap();
            assert_eq!(loc.to_long_algebraic(), text);
        }
        assert!(BoardLocation::from_long_algebraic("i1").is_err());
        assert!(BoardLocation::from_long_algebraic("a9").is_err());
        assert!(BoardLocation::from_long_algebraic("e44").is_err());
    }
}
