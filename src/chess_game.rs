//! The game state machine.
//!
//! `ChessGame` owns the `GameState` plus the move history and is the only
//! mutation path for both: history grows by append on legal move application
//! and shrinks by pop on undo. Status (check, checkmate, stalemate, draw) is
//! derived on demand after every change, never stored, so it cannot diverge
//! from the position.

use std::collections::HashMap;

use crate::board_location::BoardLocation;
use crate::errors::ChessErrors;
use crate::game_state::GameState;
use crate::move_description::{MoveDescription, MoveTypes};
use crate::move_generation::check_inspection::is_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_moves_from};
use crate::piece_class::PieceClass;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;
use crate::special_move_flags::SpecialMoveFlags;

/// Why a game is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

/// Derived status of the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    /// Whether the game is over in this status.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw(_)
        )
    }
}

/// One applied move plus the pre-move snapshots undo needs.
///
/// Castling rights, the en passant target and the halfmove clock are not
/// recoverable from the move alone, so they are recorded per entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub move_description: MoveDescription,
    pub flags_before: SpecialMoveFlags,
    pub half_move_clock_before: u16,
}

pub struct ChessGame {
    state: GameState,
    history: Vec<HistoryEntry>,
    /// Occurrences of each position key reached so far, the initial position
    /// included, for threefold-repetition detection.
    position_counts: HashMap<String, u32>,
}

impl ChessGame {
    pub fn new_game() -> Self {
        Self::with_state(GameState::new_game())
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Ok(Self::with_state(GameState::from_fen(fen)?))
    }

    fn with_state(state: GameState) -> Self {
        let mut position_counts = HashMap::new();
        position_counts.insert(state.position_key(), 1);
        ChessGame {
            state,
            history: Vec::new(),
            position_counts,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Legal moves of the piece on `start` (empty if the square is empty or
    /// holds an opponent piece).
    pub fn legal_moves_from(
        &self,
        start: BoardLocation,
    ) -> Result<Vec<MoveDescription>, ChessErrors> {
        Ok(legal_moves_from(&self.state, start)?
            .into_iter()
            .map(|generated| generated.move_description)
            .collect())
    }

    /// All legal moves for the side to move.
    pub fn all_legal_moves(&self) -> Result<Vec<MoveDescription>, ChessErrors> {
        Ok(all_legal_moves(&self.state)?
            .into_iter()
            .map(|generated| generated.move_description)
            .collect())
    }

    /// Resolves start/destination coordinates (plus a promotion choice) to
    /// the matching legal move.
    ///
    /// # Returns
    /// * `Err(ChessErrors::IllegalMove)` when no legal move matches.
    pub fn find_legal_move(
        &self,
        start: BoardLocation,
        destination: BoardLocation,
        promotion: Option<PieceClass>,
    ) -> Result<MoveDescription, ChessErrors> {
        self.legal_moves_from(start)?
            .into_iter()
            .find(|m| {
                m.destination == destination
                    && match m.move_type {
                        MoveTypes::Promote(class) => promotion == Some(class),
                        _ => promotion.is_none(),
                    }
            })
            .ok_or_else(|| {
                let mut text = format!(
                    "{}{}",
                    start.to_long_algebraic(),
                    destination.to_long_algebraic()
                );
                if let Some(class) = promotion {
                    if let Some(suffix) = class.to_promotion_char() {
                        text.push(suffix);
                    }
                }
                ChessErrors::IllegalMove(text)
            })
    }

    /// Applies a move after validating it against the move generator.
    ///
    /// No move bypasses generation: the move is accepted iff it is a member
    /// of `legal_moves_from` for its start square. Rejection leaves the game
    /// untouched; validation happens before any state write.
    pub fn apply_move(&mut self, chess_move: &MoveDescription) -> Result<(), ChessErrors> {
        let candidates = legal_moves_from(&self.state, chess_move.start)?;
        let matched = candidates
            .into_iter()
            .find(|generated| generated.move_description == *chess_move)
            .ok_or_else(|| ChessErrors::IllegalMove(chess_move.get_long_algebraic()))?;

        self.history.push(HistoryEntry {
            move_description: *chess_move,
            flags_before: self.state.special_flags,
            half_move_clock_before: self.state.half_move_clock,
        });
        self.state = matched.game_after_move;
        *self
            .position_counts
            .entry(self.state.position_key())
            .or_insert(0) += 1;
        Ok(())
    }

    /// Pops the last move and restores the exact prior state.
    ///
    /// # Returns
    /// * `Err(ChessErrors::NoMoveHistory)` when there is nothing to undo; the
    ///   game is untouched in that case.
    pub fn undo_move(&mut self) -> Result<(), ChessErrors> {
        let entry = self.history.pop().ok_or(ChessErrors::NoMoveHistory)?;
        let mv = &entry.move_description;

        match self.position_counts.get_mut(&self.state.position_key()) {
            Some(count) if *count > 1 => *count -= 1,
            _ => {
                self.position_counts.remove(&self.state.position_key());
            }
        }

        let register = &mut self.state.piece_register;
        register.set_piece(mv.destination, None);
        register.set_piece(mv.start, Some(mv.moved_piece));
        if let Some(victim_square) = mv.capture_location() {
            register.set_piece(victim_square, mv.capture_status);
        }
        if let Some((rook_home, rook_landing)) = mv.castling_rook_vector() {
            if let Some(rook) = register.remove_piece_record(rook_landing) {
                register.set_piece(rook_home, Some(rook));
            }
        }

        self.state.special_flags = entry.flags_before;
        self.state.half_move_clock = entry.half_move_clock_before;
        if mv.moved_piece.team == PieceTeam::Dark {
            self.state.full_move_count -= 1;
        }
        self.state.turn = mv.moved_piece.team;
        Ok(())
    }

    /// Derived status of the position for the side to move.
    pub fn status(&self) -> Result<GameStatus, ChessErrors> {
        let legal = all_legal_moves(&self.state)?;
        let in_check = is_in_check(&self.state, self.state.turn)?;

        if legal.is_empty() {
            return Ok(if in_check {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            });
        }
        if self.state.half_move_clock >= 100 {
            return Ok(GameStatus::Draw(DrawReason::FiftyMoveRule));
        }
        if self
            .position_counts
            .get(&self.state.position_key())
            .is_some_and(|count| *count >= 3)
        {
            return Ok(GameStatus::Draw(DrawReason::ThreefoldRepetition));
        }
        if insufficient_material(&self.state.piece_register) {
            return Ok(GameStatus::Draw(DrawReason::InsufficientMaterial));
        }
        Ok(if in_check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        })
    }
}

/// Neither side can possibly deliver mate: bare kings, a lone minor piece,
/// or only bishops that all stand on the same square color.
fn insufficient_material(register: &PieceRegister) -> bool {
    let mut minor_count = 0;
    let mut bishop_square_colors: Vec<i8> = Vec::new();

    for (location, piece) in register.iter() {
        match piece.class {
            PieceClass::King => (),
            PieceClass::Bishop => {
                minor_count += 1;
                let (file, rank) = location.get_file_rank();
                bishop_square_colors.push((file + rank) % 2);
            }
            PieceClass::Knight => minor_count += 1,
            _ => return false,
        }
    }

    if minor_count <= 1 {
        return true;
    }
    // Two or more minors draw only when all are same-colored bishops.
    bishop_square_colors.len() == minor_count
        && bishop_square_colors.windows(2).all(|w| w[0] == w[1])
}
