use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::{MoveDescription, MoveTypes};
use crate::piece_class::{PieceClass, PROMOTION_CLASSES};
use crate::piece_record::PieceRecord;

/// Pushes a pawn arrival on `destination`, fanning out into the four
/// promotion moves when the pawn reaches its last rank.
fn push_pawn_arrival(
    start: BoardLocation,
    destination: BoardLocation,
    piece: PieceRecord,
    capture_status: Option<PieceRecord>,
    out: &mut Vec<MoveDescription>,
) {
    if destination.rank() == piece.team.promotion_rank() {
        for class in PROMOTION_CLASSES {
            out.push(MoveDescription {
                start,
                destination,
                moved_piece: piece,
                capture_status,
                move_type: MoveTypes::Promote(class),
            });
        }
    } else {
        out.push(MoveDescription {
            start,
            destination,
            moved_piece: piece,
            capture_status,
            move_type: MoveTypes::Regular,
        });
    }
}

pub fn pseudo_moves_pawn(
    game: &GameState,
    start: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    let step = piece.team.pawn_step();

    // Single push, and the double push from the starting rank when both
    // squares ahead are empty.
    if let Ok(one_ahead) = start.offset(0, step) {
        if game.piece_register.is_empty(one_ahead) {
            push_pawn_arrival(start, one_ahead, piece, None, out);

            if start.rank() == piece.team.pawn_start_rank() {
                if let Ok(two_ahead) = start.offset(0, 2 * step) {
                    if game.piece_register.is_empty(two_ahead) {
                        out.push(MoveDescription {
                            start,
                            destination: two_ahead,
                            moved_piece: piece,
                            capture_status: None,
                            move_type: MoveTypes::DoubleStep(one_ahead),
                        });
                    }
                }
            }
        }
    }

    // Diagonal captures, including the en passant target.
    for d_file in [-1, 1] {
        let Ok(destination) = start.offset(d_file, step) else {
            continue;
        };
        if let Some(victim) = game.piece_register.view(destination) {
            if victim.team != piece.team {
                push_pawn_arrival(start, destination, piece, Some(victim), out);
            }
        } else if game.special_flags.en_passant_location == Some(destination) {
            out.push(MoveDescription {
                start,
                destination,
                moved_piece: piece,
                capture_status: Some(PieceRecord {
                    class: PieceClass::Pawn,
                    team: piece.team.opposite(),
                }),
                move_type: MoveTypes::EnPassant,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_team::PieceTeam;

    fn moves_from(game: &GameState, square: &str) -> Vec<MoveDescription> {
        let start = BoardLocation::from_long_algebraic(square).unwrap();
        let piece = game.piece_register.view(start).unwrap();
        let mut out = Vec::new();
        pseudo_moves_pawn(game, start, piece, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let moves = moves_from(&game, "e2");
        assert_eq!(moves.len(), 2);
        assert!(moves
            .iter()
            .any(|m| m.destination.to_long_algebraic() == "e3"
                && m.move_type == MoveTypes::Regular));
        assert!(moves
            .iter()
            .any(|m| m.destination.to_long_algebraic() == "e4"
                && matches!(m.move_type, MoveTypes::DoubleStep(_))));
    }

    #[test]
    fn double_push_requires_both_squares_empty() {
        // Dark knight on e3 blocks e2 entirely; dark knight on d4 leaves
        // only the single push for the d2 pawn.
        let game = GameState::from_fen(
            "rnbqkbnr/ppp1pppp/8/8/3n4/4n3/PPPPPPPP/RNBQKB1R w KQkq - 0 1",
        )
        .expect("fixture FEN");
        assert!(moves_from(&game, "e2").is_empty());
        // The d2 pawn keeps its single push (and the capture of the e3
        // knight) but loses the double step.
        let d2_moves = moves_from(&game, "d2");
        assert!(d2_moves
            .iter()
            .any(|m| m.destination.to_long_algebraic() == "d3"));
        assert!(!d2_moves
            .iter()
            .any(|m| matches!(m.move_type, MoveTypes::DoubleStep(_))));
    }

    #[test]
    fn en_passant_target_generates_capture_of_passed_pawn() {
        // Black just played d7d5; white e5 pawn may capture en passant on d6.
        let game = GameState::from_fen(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .expect("fixture FEN");
        let moves = moves_from(&game, "e5");
        let ep = moves
            .iter()
            .find(|m| m.move_type == MoveTypes::EnPassant)
            .expect("en passant should be generated");
        assert_eq!(ep.destination.to_long_algebraic(), "d6");
        assert_eq!(
            ep.capture_location().unwrap().to_long_algebraic(),
            "d5"
        );
        assert_eq!(
            ep.capture_status.unwrap().team,
            PieceTeam::Dark
        );
    }

    #[test]
    fn promotion_fans_out_into_four_moves() {
        let game = GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("fixture FEN");
        let moves = moves_from(&game, "a7");
        assert_eq!(moves.len(), 4);
        assert!(moves
            .iter()
            .all(|m| matches!(m.move_type, MoveTypes::Promote(_))));
        assert!(moves
            .iter()
            .any(|m| m.move_type == MoveTypes::Promote(PieceClass::Queen)));
    }
}
