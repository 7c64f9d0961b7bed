//! Read-only projections of the game for front ends.
//!
//! Nothing here can mutate the game; everything is derived from the state
//! machine on demand.

use std::collections::HashSet;

use crate::board_location::BoardLocation;
use crate::chess_game::{ChessGame, GameStatus};
use crate::errors::ChessErrors;

/// The destination squares to highlight for a selected piece.
///
/// Promotion moves collapse into their one destination square.
pub fn highlight_set(
    game: &ChessGame,
    selected: BoardLocation,
) -> Result<HashSet<BoardLocation>, ChessErrors> {
    Ok(game
        .legal_moves_from(selected)?
        .into_iter()
        .map(|m| m.destination)
        .collect())
}

/// The derived result of the game for display.
pub fn game_result(game: &ChessGame) -> Result<GameStatus, ChessErrors> {
    game.status()
}
