use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::pseudo_move_shared::{
    push_slider_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::piece_record::PieceRecord;

/// Queen moves are the union of rook rays and bishop rays.
pub fn pseudo_moves_queen(
    game: &GameState,
    start: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    push_slider_moves(game, start, piece, &ROOK_DIRECTIONS, out);
    push_slider_moves(game, start, piece, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_queen_covers_eight_rays() {
        let game = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").expect("fixture FEN");
        let d4 = BoardLocation::from_long_algebraic("d4").unwrap();
        let piece = game.piece_register.view(d4).unwrap();
        let mut moves = Vec::new();
        pseudo_moves_queen(&game, d4, piece, &mut moves);
        // 14 rank/file squares plus 13 diagonal squares from d4.
        assert_eq!(moves.len(), 27);
    }
}
