//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, applies each candidate to
//! a scratch copy of the state, and discards the ones that leave the mover's
//! own king in check. Simulate-and-check is the single correctness mechanism;
//! pins and discovered checks need no special cases.

use crate::board_location::BoardLocation;
use crate::errors::ChessErrors;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::apply_move::apply_move_to_game_unchecked;
use crate::move_generation::check_inspection::is_in_check;
use crate::move_generation::pseudo_moves_bishop::pseudo_moves_bishop;
use crate::move_generation::pseudo_moves_king::{castling_moves, pseudo_moves_king};
use crate::move_generation::pseudo_moves_knight::pseudo_moves_knight;
use crate::move_generation::pseudo_moves_pawn::pseudo_moves_pawn;
use crate::move_generation::pseudo_moves_queen::pseudo_moves_queen;
use crate::move_generation::pseudo_moves_rook::pseudo_moves_rook;
use crate::piece_class::PieceClass;

/// A legal move paired with the state it leads to.
///
/// The legality filter has to compute the successor state anyway, so it is
/// kept for callers (the state machine adopts it, perft recurses into it).
#[derive(Clone, Debug)]
pub struct GeneratedMove {
    pub move_description: MoveDescription,
    pub game_after_move: GameState,
}

/// Geometrically valid moves for the side to move from one square, ignoring
/// king safety. Empty squares and opponent squares yield an empty list.
pub fn pseudo_moves_from(
    game: &GameState,
    start: BoardLocation,
) -> Result<Vec<MoveDescription>, ChessErrors> {
    let mut out = Vec::new();
    let Some(piece) = game.piece_register.view(start) else {
        return Ok(out);
    };
    if piece.team != game.turn {
        return Ok(out);
    }
    match piece.class {
        PieceClass::Pawn => pseudo_moves_pawn(game, start, piece, &mut out),
        PieceClass::Knight => pseudo_moves_knight(game, start, piece, &mut out),
        PieceClass::Bishop => pseudo_moves_bishop(game, start, piece, &mut out),
        PieceClass::Rook => pseudo_moves_rook(game, start, piece, &mut out),
        PieceClass::Queen => pseudo_moves_queen(game, start, piece, &mut out),
        PieceClass::King => {
            pseudo_moves_king(game, start, piece, &mut out);
            castling_moves(game, start, piece, &mut out);
        }
    }
    Ok(out)
}

/// Legal moves for the side to move from one square: pseudo-legal moves that
/// do not leave the mover's king in check.
pub fn legal_moves_from(
    game: &GameState,
    start: BoardLocation,
) -> Result<Vec<GeneratedMove>, ChessErrors> {
    let pseudo = pseudo_moves_from(game, start)?;
    let mut legal = Vec::with_capacity(pseudo.len());
    for move_description in pseudo {
        let game_after_move = apply_move_to_game_unchecked(&move_description, game)?;
        if is_in_check(&game_after_move, game.turn)? {
            continue;
        }
        legal.push(GeneratedMove {
            move_description,
            game_after_move,
        });
    }
    Ok(legal)
}

/// All legal moves for the side to move.
pub fn all_legal_moves(game: &GameState) -> Result<Vec<GeneratedMove>, ChessErrors> {
    let own_squares: Vec<BoardLocation> = game
        .piece_register
        .iter()
        .filter(|(_, piece)| piece.team == game.turn)
        .map(|(location, _)| location)
        .collect();

    let mut legal = Vec::with_capacity(64);
    for start in own_squares {
        legal.extend(legal_moves_from(game, start)?);
    }
    Ok(legal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_legal_moves_from_the_starting_position() {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game).unwrap().len(), 20);
    }

    #[test]
    fn empty_and_opponent_squares_yield_no_moves() {
        let game = GameState::new_game();
        let e4 = BoardLocation::from_long_algebraic("e4").unwrap();
        let e7 = BoardLocation::from_long_algebraic("e7").unwrap();
        assert!(legal_moves_from(&game, e4).unwrap().is_empty());
        assert!(legal_moves_from(&game, e7).unwrap().is_empty());
    }

    #[test]
    fn pinned_rook_stays_on_the_pin_line() {
        // Light rook e2 is pinned to the king on e1 by the rook on e8.
        let game =
            GameState::from_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1").expect("fixture FEN");
        let e2 = BoardLocation::from_long_algebraic("e2").unwrap();
        let moves = legal_moves_from(&game, e2).unwrap();
        assert!(!moves.is_empty());
        assert!(moves
            .iter()
            .all(|m| m.move_description.destination.file() == 4));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let game =
            GameState::from_fen("4r2k/8/8/8/8/8/8/4K3 w - - 0 1").expect("fixture FEN");
        let e1 = BoardLocation::from_long_algebraic("e1").unwrap();
        let moves = legal_moves_from(&game, e1).unwrap();
        // d1, d2, f1, f2 only; e2 stays covered by the rook on e8.
        assert_eq!(moves.len(), 4);
        assert!(moves
            .iter()
            .all(|m| m.move_description.destination.file() != 4));
    }

    #[test]
    fn check_evasion_only_when_in_check() {
        // Dark king h8 checked by the rook on h1; dark rook a8 can only help
        // by interposing on h-file... it cannot reach it, so king moves only.
        let game =
            GameState::from_fen("r6k/8/8/8/8/8/8/K6R b - - 0 1").expect("fixture FEN");
        let moves = all_legal_moves(&game).unwrap();
        assert!(moves.iter().all(|m| {
            let text = m.move_description.get_long_algebraic();
            text == "h8g7" || text == "h8g8"
        }));
        assert_eq!(moves.len(), 2);
    }
}
