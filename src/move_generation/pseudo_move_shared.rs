//! Helpers shared by the per-piece pseudo-legal generators.

use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::move_description::{MoveDescription, MoveTypes};
use crate::piece_record::PieceRecord;

/// Ray-casts from `start` in each direction until blocked by a piece or the
/// board edge. A blocking enemy piece yields one final capturing move; a
/// friendly piece yields none in that direction.
pub fn push_slider_moves(
    game: &GameState,
    start: BoardLocation,
    piece: PieceRecord,
    directions: &[(i8, i8)],
    out: &mut Vec<MoveDescription>,
) {
    for &(d_file, d_rank) in directions {
        let mut cursor = start;
        while let Ok(destination) = cursor.offset(d_file, d_rank) {
            match game.piece_register.view(destination) {
                None => {
                    out.push(MoveDescription {
                        start,
                        destination,
                        moved_piece: piece,
                        capture_status: None,
                        move_type: MoveTypes::Regular,
                    });
                    cursor = destination;
                }
                Some(blocker) => {
                    if blocker.team != piece.team {
                        out.push(MoveDescription {
                            start,
                            destination,
                            moved_piece: piece,
                            capture_status: Some(blocker),
                            move_type: MoveTypes::Regular,
                        });
                    }
                    break;
                }
            }
        }
    }
}

/// Fixed-offset targets (knight and king), filtered to board bounds and not
/// landing on a friendly piece.
pub fn push_offset_moves(
    game: &GameState,
    start: BoardLocation,
    piece: PieceRecord,
    offsets: &[(i8, i8)],
    out: &mut Vec<MoveDescription>,
) {
    for &(d_file, d_rank) in offsets {
        let Ok(destination) = start.offset(d_file, d_rank) else {
            continue;
        };
        match game.piece_register.view(destination) {
            None => out.push(MoveDescription {
                start,
                destination,
                moved_piece: piece,
                capture_status: None,
                move_type: MoveTypes::Regular,
            }),
            Some(blocker) if blocker.team != piece.team => out.push(MoveDescription {
                start,
                destination,
                moved_piece: piece,
                capture_status: Some(blocker),
                move_type: MoveTypes::Regular,
            }),
            Some(_) => (),
        }
    }
}

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
