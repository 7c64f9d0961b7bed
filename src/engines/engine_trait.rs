//! Engine abstraction layer for move-choosing collaborators.
//!
//! An engine only queries legal moves and picks one; it never mutates the
//! game. It receives a shared reference and must clone the state if it wants
//! scratch space of its own.

use crate::chess_game::ChessGame;
use crate::errors::ChessErrors;
use crate::move_description::MoveDescription;

pub trait Engine {
    fn name(&self) -> &str;

    /// Called when a new game starts, for engines that keep state.
    fn new_game(&mut self) {}

    /// Picks a move for the side to move.
    ///
    /// # Returns
    /// * `Ok(Some(move))` - The chosen legal move.
    /// * `Ok(None)` - No legal moves exist (mate or stalemate).
    /// * `Err(ChessErrors)` - The position could not be evaluated.
    fn choose_move(&mut self, game: &ChessGame) -> Result<Option<MoveDescription>, ChessErrors>;
}
