use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::pseudo_move_shared::{push_slider_moves, BISHOP_DIRECTIONS};
use crate::piece_record::PieceRecord;

pub fn pseudo_moves_bishop(
    game: &GameState,
    start: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    push_slider_moves(game, start, piece, &BISHOP_DIRECTIONS, out);
}
