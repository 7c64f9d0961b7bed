//! Attack and check detection.
//!
//! A square is attacked by a team when some piece of that team has it in its
//! pseudo-legal destination set. Castling is excluded from that set here (it
//! never attacks anything and including it would recurse), and pawns are
//! tested on their capture diagonals only, since pushes do not attack.

use crate::board_location::BoardLocation;
use crate::errors::ChessErrors;
use crate::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::pseudo_moves_bishop::pseudo_moves_bishop;
use crate::move_generation::pseudo_moves_king::pseudo_moves_king;
use crate::move_generation::pseudo_moves_knight::pseudo_moves_knight;
use crate::move_generation::pseudo_moves_queen::pseudo_moves_queen;
use crate::move_generation::pseudo_moves_rook::pseudo_moves_rook;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

fn pawn_attacks(start: BoardLocation, piece: PieceRecord, target: BoardLocation) -> bool {
    let step = piece.team.pawn_step();
    [-1, 1]
        .into_iter()
        .filter_map(|d_file| start.offset(d_file, step).ok())
        .any(|diagonal| diagonal == target)
}

/// Whether any piece of `by_team` attacks `target`.
pub fn is_square_attacked(game: &GameState, target: BoardLocation, by_team: PieceTeam) -> bool {
    let mut scratch = Vec::<MoveDescription>::new();
    for (location, piece) in game.piece_register.iter() {
        if piece.team != by_team {
            continue;
        }
        if piece.class == PieceClass::Pawn {
            if pawn_attacks(location, piece, target) {
                return true;
            }
            continue;
        }
        scratch.clear();
        match piece.class {
            PieceClass::Knight => pseudo_moves_knight(game, location, piece, &mut scratch),
            PieceClass::Bishop => pseudo_moves_bishop(game, location, piece, &mut scratch),
            PieceClass::Rook => pseudo_moves_rook(game, location, piece, &mut scratch),
            PieceClass::Queen => pseudo_moves_queen(game, location, piece, &mut scratch),
            PieceClass::King => pseudo_moves_king(game, location, piece, &mut scratch),
            PieceClass::Pawn => unreachable!("pawns are handled above"),
        }
        if scratch.iter().any(|m| m.destination == target) {
            return true;
        }
    }
    false
}

/// Whether the king of `team` is currently attacked.
///
/// # Returns
/// * `Err(ChessErrors::PieceRegisterDoesNotContainAKing)` on a corrupted
///   position with no king for `team`.
pub fn is_in_check(game: &GameState, team: PieceTeam) -> Result<bool, ChessErrors> {
    let king_square = game.piece_register.find_king(team)?;
    Ok(is_square_attacked(game, king_square, team.opposite()))
}
