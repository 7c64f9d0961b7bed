//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities, move generation and the game state machine. The enum
//! `ChessErrors` is used as the single error type across the crate to simplify
//! propagation and matching.
//!
//! Usage guidelines:
//! - Functions in the engine should return `Result<..., ChessErrors>` for
//!   recoverable or expected failure modes (invalid input, illegal moves, etc).
//! - `OutOfBounds` and `PieceRegisterDoesNotContainAKing` indicate a bug in
//!   the caller or a corrupted position; they are not expected to surface to
//!   end users during normal play.
//! - `IllegalMove` and `NoMoveHistory` are the user-facing failure modes: a
//!   front end recovers from the first by re-prompting and from the second by
//!   ignoring the request. Neither leaves the game state partially mutated.

use std::fmt;

use crate::board_location::BoardLocation;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A file/rank pair outside `0..=7` was produced or requested.
    ///
    /// Payload: (file, rank) as computed before validation.
    OutOfBounds((i8, i8)),

    /// Attempted to view or edit a square that holds no piece.
    TryToViewOrEditEmptySquare(BoardLocation),

    /// Attempted to place a piece on a square that is already occupied.
    BoardLocationOccupied(BoardLocation),

    /// The piece register does not contain a king for one side.
    ///
    /// This represents a corrupted or invalid game state; callers should
    /// treat it as a fatal logic error in game construction or maintenance.
    PieceRegisterDoesNotContainAKing,

    /// The attempted move is not among the legal moves of the position.
    ///
    /// Payload: the move in long algebraic notation for diagnostics.
    IllegalMove(String),

    /// Undo was requested with an empty move history.
    NoMoveHistory,

    /// Found an unexpected token while parsing a FEN string.
    InvalidFenToken(char),

    /// A FEN string had malformed structure (missing fields, bad counters).
    InvalidFenString(String),

    /// A single character used during algebraic parsing was invalid.
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a whole.
    InvalidAlgebraicString(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds((file, rank)) => {
                write!(f, "board coordinates out of bounds: file {file}, rank {rank}")
            }
            ChessErrors::TryToViewOrEditEmptySquare(loc) => {
                write!(f, "no piece on {}", loc.to_long_algebraic())
            }
            ChessErrors::BoardLocationOccupied(loc) => {
                write!(f, "square {} is already occupied", loc.to_long_algebraic())
            }
            ChessErrors::PieceRegisterDoesNotContainAKing => {
                write!(f, "piece register does not contain a king for one side")
            }
            ChessErrors::IllegalMove(text) => write!(f, "illegal move: {text}"),
            ChessErrors::NoMoveHistory => write!(f, "no moves to undo"),
            ChessErrors::InvalidFenToken(c) => write!(f, "invalid FEN token: {c}"),
            ChessErrors::InvalidFenString(text) => write!(f, "invalid FEN string: {text}"),
            ChessErrors::InvalidAlgebraicChar(c) => write!(f, "invalid algebraic character: {c}"),
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic string: {text}")
            }
        }
    }
}

impl std::error::Error for ChessErrors {}
