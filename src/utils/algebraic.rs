//! Long algebraic move parsing for text front ends.
//!
//! Converts strings such as "e2e4" or "e7e8q" into coordinates plus an
//! optional promotion choice. The result is only a request; resolving it to
//! an actual legal move is the state machine's job.

use crate::board_location::BoardLocation;
use crate::errors::ChessErrors;
use crate::piece_class::PieceClass;

/// Parses long algebraic move coordinates.
///
/// # Returns
/// * `Ok((start, destination, promotion))` on success.
/// * `Err(ChessErrors)` for anything that is not 4 or 5 valid characters.
pub fn parse_long_algebraic(
    text: &str,
) -> Result<(BoardLocation, BoardLocation, Option<PieceClass>), ChessErrors> {
    let trimmed = text.trim();
    if !trimmed.is_ascii() || trimmed.len() < 4 || trimmed.len() > 5 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_string()));
    }
    let start = BoardLocation::from_long_algebraic(&trimmed[0..2])?;
    let destination = BoardLocation::from_long_algebraic(&trimmed[2..4])?;
    let promotion = match trimmed.chars().nth(4) {
        None => None,
        Some(c) => Some(
            PieceClass::from_promotion_char(c).ok_or(ChessErrors::InvalidAlgebraicChar(c))?,
        ),
    };
    Ok((start, destination, promotion))
}
