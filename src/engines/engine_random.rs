//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::chess_game::ChessGame;
use crate::engines::engine_trait::Engine;
use crate::errors::ChessErrors;
use crate::move_description::MoveDescription;

#[derive(Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Parlor Chess Random"
    }

    fn choose_move(&mut self, game: &ChessGame) -> Result<Option<MoveDescription>, ChessErrors> {
        let legal_moves = game.all_legal_moves()?;
        let mut rng = rand::rng();
        Ok(legal_moves.as_slice().choose(&mut rng).copied())
    }
}
