use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::pseudo_move_shared::{push_offset_moves, KNIGHT_OFFSETS};
use crate::piece_record::PieceRecord;

pub fn pseudo_moves_knight(
    game: &GameState,
    start: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    push_offset_moves(game, start, piece, &KNIGHT_OFFSETS, out);
}
