use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::{MoveDescription, MoveTypes};
use crate::move_generation::check_inspection::is_square_attacked;
use crate::move_generation::pseudo_move_shared::{push_offset_moves, KING_OFFSETS};
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;

/// One-square king steps. Castling is generated separately so that attack
/// scans can use this function without recursing.
pub fn pseudo_moves_king(
    game: &GameState,
    start: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    push_offset_moves(game, start, piece, &KING_OFFSETS, out);
}

/// Castling moves for the king on `start`.
///
/// Generated only when the relevant right is still set, the king stands on
/// its home square, the rook is present, all squares between them are empty,
/// the king is not currently in check, and the king neither crosses nor lands
/// on an attacked square.
pub fn castling_moves(
    game: &GameState,
    start: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    let team = piece.team;
    let home_rank = team.home_rank();
    let enemy = team.opposite();

    if start.get_file_rank() != (4, home_rank) {
        return;
    }
    if is_square_attacked(game, start, enemy) {
        return;
    }

    let own_rook_at = |file: i8| -> bool {
        let corner = BoardLocation::new_unchecked(file, home_rank);
        game.piece_register.view(corner)
            == Some(PieceRecord {
                class: PieceClass::Rook,
                team,
            })
    };
    let empty = |file: i8| game.piece_register.is_empty(BoardLocation::new_unchecked(file, home_rank));
    let safe = |file: i8| {
        !is_square_attacked(game, BoardLocation::new_unchecked(file, home_rank), enemy)
    };

    if game.special_flags.can_castle_kingside(team)
        && own_rook_at(7)
        && empty(5)
        && empty(6)
        && safe(5)
        && safe(6)
    {
        out.push(MoveDescription {
            start,
            destination: BoardLocation::new_unchecked(6, home_rank),
            moved_piece: piece,
            capture_status: None,
            move_type: MoveTypes::CastleKingside,
        });
    }

    if game.special_flags.can_castle_queenside(team)
        && own_rook_at(0)
        && empty(1)
        && empty(2)
        && empty(3)
        && safe(2)
        && safe(3)
    {
        out.push(MoveDescription {
            start,
            destination: BoardLocation::new_unchecked(2, home_rank),
            moved_piece: piece,
            capture_status: None,
            move_type: MoveTypes::CastleQueenside,
        });
    }
}
