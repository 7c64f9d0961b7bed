//! Crate root module declarations for the Parlor Chess engine.
//!
//! This file exposes all top-level subsystems (board model, move generation,
//! the game state machine, query projections, engine collaborators, and
//! utility helpers) so binaries, tests, and external tooling can import
//! stable module paths.

pub mod board_location;
pub mod chess_game;
pub mod errors;
pub mod game_state;
pub mod move_description;
pub mod piece_class;
pub mod piece_record;
pub mod piece_register;
pub mod piece_team;
pub mod query;
pub mod special_move_flags;

pub mod move_generation {
    pub mod apply_move;
    pub mod check_inspection;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_bishop;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_queen;
    pub mod pseudo_moves_rook;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod pgn;
    pub mod render_game_state;
}
