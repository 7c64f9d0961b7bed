//! Perft node counting for validating move generation.
//!
//! Reference values from <https://www.chessprogramming.org/Perft_Results>.

use crate::errors::ChessErrors;
use crate::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

/// Counts the leaf nodes of the legal move tree to `depth`.
pub fn perft(game: &GameState, depth: u8) -> Result<usize, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }
    let moves = all_legal_moves(game)?;
    if depth == 1 {
        return Ok(moves.len());
    }
    let mut nodes = 0;
    for generated in moves {
        nodes += perft(&generated.game_after_move, depth - 1)?;
    }
    Ok(nodes)
}
