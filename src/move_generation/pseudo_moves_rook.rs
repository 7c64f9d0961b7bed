use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::pseudo_move_shared::{push_slider_moves, ROOK_DIRECTIONS};
use crate::piece_record::PieceRecord;

pub fn pseudo_moves_rook(
    game: &GameState,
    start: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    push_slider_moves(game, start, piece, &ROOK_DIRECTIONS, out);
}
