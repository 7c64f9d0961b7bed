//! Pure move application on a `GameState` value.
//!
//! "Unchecked" means legality is not verified here; the legality filter and
//! the game state machine both call this on moves they already trust. The
//! input state is never touched, so a failed application leaves nothing
//! partially mutated.

use crate::errors::ChessErrors;
use crate::game_state::GameState;
use crate::move_description::{MoveDescription, MoveTypes};
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Applies a move to a game state, returning the resulting state.
///
/// Handles all move types, including castling, en passant and promotion, and
/// updates castling rights, the en passant target, both clocks and the turn.
///
/// # Returns
/// * `Ok(GameState)` - The new game state after the move.
/// * `Err(ChessErrors)` - If the move does not fit the board (no piece on the
///   start square); the input state is unaffected.
pub fn apply_move_to_game_unchecked(
    chess_move: &MoveDescription,
    game: &GameState,
) -> Result<GameState, ChessErrors> {
    let mut result = game.clone();
    let register = &mut result.piece_register;

    let moved = register
        .remove_piece_record(chess_move.start)
        .ok_or(ChessErrors::TryToViewOrEditEmptySquare(chess_move.start))?;

    // Remove the victim first; for en passant it stands behind the
    // destination rather than on it.
    if let Some(victim_square) = chess_move.capture_location() {
        register.remove_piece_record(victim_square);
    }

    let arriving = match chess_move.move_type {
        MoveTypes::Promote(class) => PieceRecord {
            class,
            team: moved.team,
        },
        _ => moved,
    };
    register.set_piece(chess_move.destination, Some(arriving));

    if let Some((rook_from, rook_to)) = chess_move.castling_rook_vector() {
        if let Some(rook) = register.remove_piece_record(rook_from) {
            register.set_piece(rook_to, Some(rook));
        }
    }

    // En passant target lives for exactly one reply.
    result.special_flags.en_passant_location = match chess_move.move_type {
        MoveTypes::DoubleStep(behind_pawn) => Some(behind_pawn),
        _ => None,
    };

    // A king move (castling included) forfeits both rights; a rook leaving
    // its home corner, or being captured on it, forfeits that side's right.
    if moved.class == PieceClass::King {
        result.special_flags.clear_kingside(moved.team);
        result.special_flags.clear_queenside(moved.team);
    }
    if moved.class == PieceClass::Rook {
        clear_right_for_corner(&mut result, chess_move.start.get_file_rank(), moved.team);
    }
    if let Some(victim) = chess_move.capture_status {
        if victim.class == PieceClass::Rook {
            clear_right_for_corner(
                &mut result,
                chess_move.destination.get_file_rank(),
                victim.team,
            );
        }
    }

    if moved.class == PieceClass::Pawn || chess_move.is_capture() {
        result.half_move_clock = 0;
    } else {
        result.half_move_clock += 1;
    }
    if moved.team == PieceTeam::Dark {
        result.full_move_count += 1;
    }
    result.turn = moved.team.opposite();

    Ok(result)
}

fn clear_right_for_corner(game: &mut GameState, (file, rank): (i8, i8), team: PieceTeam) {
    if rank != team.home_rank() {
        return;
    }
    if file == 0 {
        game.special_flags.clear_queenside(team);
    } else if file == 7 {
        game.special_flags.clear_kingside(team);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_location::BoardLocation;
    use crate::move_generation::legal_move_generator::legal_moves_from;

    fn find_move(game: &GameState, from: &str, to: &str) -> MoveDescription {
        let start = BoardLocation::from_long_algebraic(from).unwrap();
        legal_moves_from(game, start)
            .unwrap()
            .into_iter()
            .map(|generated| generated.move_description)
            .find(|m| m.destination.to_long_algebraic() == to)
            .expect("expected move should be legal")
    }

    #[test]
    fn double_step_sets_en_passant_target() {
        let game = GameState::new_game();
        let mv = find_move(&game, "e2", "e4");
        let next = apply_move_to_game_unchecked(&mv, &game).unwrap();
        assert_eq!(
            next.special_flags.en_passant_location,
            Some(BoardLocation::from_long_algebraic("e3").unwrap())
        );
        assert_eq!(next.turn, PieceTeam::Dark);
        assert_eq!(next.half_move_clock, 0);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let game = GameState::from_fen(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .unwrap();
        let mv = find_move(&game, "e5", "d6");
        assert_eq!(mv.move_type, MoveTypes::EnPassant);
        let next = apply_move_to_game_unchecked(&mv, &game).unwrap();

        let d6 = BoardLocation::from_long_algebraic("d6").unwrap();
        let d5 = BoardLocation::from_long_algebraic("d5").unwrap();
        let e5 = BoardLocation::from_long_algebraic("e5").unwrap();
        assert_eq!(
            next.piece_register.view(d6).map(|p| p.class),
            Some(PieceClass::Pawn)
        );
        assert!(next.piece_register.is_empty(d5));
        assert!(next.piece_register.is_empty(e5));
    }

    #[test]
    fn kingside_castle_relocates_rook_and_clears_rights() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = find_move(&game, "e1", "g1");
        assert_eq!(mv.move_type, MoveTypes::CastleKingside);
        let next = apply_move_to_game_unchecked(&mv, &game).unwrap();

        let g1 = BoardLocation::from_long_algebraic("g1").unwrap();
        let f1 = BoardLocation::from_long_algebraic("f1").unwrap();
        let h1 = BoardLocation::from_long_algebraic("h1").unwrap();
        let e1 = BoardLocation::from_long_algebraic("e1").unwrap();
        assert_eq!(
            next.piece_register.view(g1).map(|p| p.class),
            Some(PieceClass::King)
        );
        assert_eq!(
            next.piece_register.view(f1).map(|p| p.class),
            Some(PieceClass::Rook)
        );
        assert!(next.piece_register.is_empty(h1));
        assert!(next.piece_register.is_empty(e1));
        assert!(!next.special_flags.can_castle_king_light);
        assert!(!next.special_flags.can_castle_queen_light);
        // Dark rights are untouched.
        assert!(next.special_flags.can_castle_king_dark);
        assert!(next.special_flags.can_castle_queen_dark);
    }

    #[test]
    fn capturing_a_home_rook_clears_the_opponent_right() {
        // Light rook a1 takes the dark rook on a8.
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = find_move(&game, "a1", "a8");
        let next = apply_move_to_game_unchecked(&mv, &game).unwrap();
        assert!(!next.special_flags.can_castle_queen_dark);
        assert!(next.special_flags.can_castle_king_dark);
        // The mover's own queenside right goes too, its rook left home.
        assert!(!next.special_flags.can_castle_queen_light);
    }

    #[test]
    fn promotion_substitutes_the_piece_kind() {
        let game = GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
        let start = BoardLocation::from_long_algebraic("a7").unwrap();
        let mv = legal_moves_from(&game, start)
            .unwrap()
            .into_iter()
            .map(|generated| generated.move_description)
            .find(|m| m.move_type == MoveTypes::Promote(PieceClass::Queen))
            .unwrap();
        let next = apply_move_to_game_unchecked(&mv, &game).unwrap();
        let a8 = BoardLocation::from_long_algebraic("a8").unwrap();
        assert_eq!(
            next.piece_register.view(a8),
            Some(PieceRecord {
                class: PieceClass::Queen,
                team: PieceTeam::Light,
            })
        );
    }

    #[test]
    fn clocks_count_plies_and_full_moves() {
        let game = GameState::new_game();
        let after_knight = apply_move_to_game_unchecked(&find_move(&game, "g1", "f3"), &game).unwrap();
        assert_eq!(after_knight.half_move_clock, 1);
        assert_eq!(after_knight.full_move_count, 1);
        let reply = find_move(&after_knight, "b8", "c6");
        let after_reply = apply_move_to_game_unchecked(&reply, &after_knight).unwrap();
        assert_eq!(after_reply.half_move_clock, 2);
        assert_eq!(after_reply.full_move_count, 2);
        assert_eq!(after_reply.turn, PieceTeam::Light);
    }
}
