//! The complete position of a game in progress.
//!
//! `GameState` is a plain value: board grid, side to move, castling and en
//! passant flags, and the two move counters. It round-trips through FEN for
//! fixtures, diagnostics and repetition keys. Move history lives one level
//! up, in `chess_game`.

use crate::board_location::BoardLocation;
use crate::errors::ChessErrors;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;
use crate::special_move_flags::SpecialMoveFlags;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub piece_register: PieceRegister,
    pub special_flags: SpecialMoveFlags,
    pub half_move_clock: u16,
    pub full_move_count: u16,
    pub turn: PieceTeam,
}

impl GameState {
    pub fn new_game() -> Self {
        GameState::from_fen(STARTING_POSITION_FEN)
            .expect("the starting position string must have been corrupted")
    }

    /// Parses all six FEN fields into a game state.
    ///
    /// # Returns
    /// * `Ok(GameState)` on success.
    /// * `Err(ChessErrors)` for malformed structure or unknown tokens.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        let mut fields = fen.split_ascii_whitespace();

        let placement_field = fields
            .next()
            .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_string()))?;
        let mut piece_register = PieceRegister::default();
        let mut file: i8 = 0;
        let mut rank: i8 = 7;
        for token in placement_field.chars() {
            match token {
                '/' => {
                    file = 0;
                    rank -= 1;
                    if rank < 0 {
                        return Err(ChessErrors::InvalidFenString(fen.to_string()));
                    }
                }
                '1'..='8' => {
                    file += token as i8 - '0' as i8;
                    if file > 8 {
                        return Err(ChessErrors::InvalidFenString(fen.to_string()));
                    }
                }
                _ => {
                    let record = PieceRecord::from_fen_char(token)
                        .ok_or(ChessErrors::InvalidFenToken(token))?;
                    let location = BoardLocation::from_file_rank(file, rank)?;
                    piece_register.add_piece_record(record, location)?;
                    file += 1;
                }
            }
        }

        let turn_field = fields
            .next()
            .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_string()))?;
        let turn = match turn_field {
            "w" => PieceTeam::Light,
            "b" => PieceTeam::Dark,
            _ => return Err(ChessErrors::InvalidFenString(fen.to_string())),
        };

        let castle_field = fields
            .next()
            .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_string()))?;
        let mut special_flags = SpecialMoveFlags::none();
        for c in castle_field.chars() {
            match c {
                'K' => special_flags.can_castle_king_light = true,
                'Q' => special_flags.can_castle_queen_light = true,
                'k' => special_flags.can_castle_king_dark = true,
                'q' => special_flags.can_castle_queen_dark = true,
                '-' => (),
                _ => return Err(ChessErrors::InvalidFenToken(c)),
            }
        }

        let en_passant_field = fields
            .next()
            .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_string()))?;
        special_flags.en_passant_location = match en_passant_field {
            "-" => None,
            square => Some(BoardLocation::from_long_algebraic(square)?),
        };

        let half_move_clock = fields
            .next()
            .and_then(|x| x.parse::<u16>().ok())
            .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_string()))?;
        let full_move_count = fields
            .next()
            .and_then(|x| x.parse::<u16>().ok())
            .ok_or_else(|| ChessErrors::InvalidFenString(fen.to_string()))?;

        Ok(GameState {
            piece_register,
            special_flags,
            half_move_clock,
            full_move_count,
            turn,
        })
    }

    /// Generates the FEN string for this state.
    pub fn get_fen(&self) -> String {
        let mut result = self.position_key();
        result.push(' ');
        result.push_str(&self.half_move_clock.to_string());
        result.push(' ');
        result.push_str(&self.full_move_count.to_string());
        result
    }

    /// First four FEN fields: placement, turn, castling, en passant.
    ///
    /// Identical keys mean positions repeat for the threefold-repetition
    /// rule, which ignores the move counters.
    pub fn position_key(&self) -> String {
        let mut result = String::new();

        for rank in (0..8).rev() {
            let mut space_count: u8 = 0;
            for file in 0..8 {
                let location = BoardLocation::new_unchecked(file, rank);
                if let Some(record) = self.piece_register.view(location) {
                    if space_count > 0 {
                        result.push(char::from(b'0' + space_count));
                    }
                    result.push(record.to_fen_char());
                    space_count = 0;
                } else {
                    space_count += 1;
                }
            }
            if space_count > 0 {
                result.push(char::from(b'0' + space_count));
            }
            if rank > 0 {
                result.push('/');
            }
        }

        result.push(' ');
        match self.turn {
            PieceTeam::Light => result.push('w'),
            PieceTeam::Dark => result.push('b'),
        }

        result.push(' ');
        let flags = &self.special_flags;
        if flags.can_castle_king_light {
            result.push('K');
        }
        if flags.can_castle_queen_light {
            result.push('Q');
        }
        if flags.can_castle_king_dark {
            result.push('k');
        }
        if flags.can_castle_queen_dark {
            result.push('q');
        }
        if !(flags.can_castle_king_light
            | flags.can_castle_queen_light
            | flags.can_castle_king_dark
            | flags.can_castle_queen_dark)
        {
            result.push('-');
        }

        result.push(' ');
        match flags.en_passant_location {
            Some(location) => result.push_str(&location.to_long_algebraic()),
            None => result.push('-'),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_new_game() {
        let dut = GameState::new_game();
        assert_eq!(dut.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(dut.turn, PieceTeam::Light);
        assert_eq!(dut.piece_register.iter().count(), 32);
    }

    #[test]
    fn fen_round_trips() {
        let fixtures = [
            "1r4k1/7p/3p1bp1/p1pP4/P1P1prP1/1N2R2P/1P1N1PK1/8 b - - 3 31",
            "r1bq1rk1/ppp2ppp/2n5/2bp4/4n3/1P2PNP1/PBP2PBP/RN1Q1RK1 b - - 2 9",
            "8/bpp1k2p/p2pP1p1/P5q1/1P5N/8/6PP/5Q1K b - - 0 35",
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        ];
        for fixture in fixtures {
            let dut = GameState::from_fen(fixture).expect("fixture should parse");
            assert_eq!(dut.get_fen(), fixture);
        }
    }

    #[test]
    fn rejects_malformed_fen() {
        assert!(GameState::from_fen("").is_err());
        assert!(GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").is_err());
        assert!(GameState::from_fen(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"
        )
        .is_err());
        assert!(GameState::from_fen(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNZ w KQkq - 0 1"
        )
        .is_err());
        assert!(GameState::from_fen(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"
        )
        .is_err());
    }

    #[test]
    fn position_key_ignores_move_counters() {
        let a = GameState::from_fen("8/8/8/8/8/8/8/K6k w - - 0 1").unwrap();
        let b = GameState::from_fen("8/8/8/8/8/8/8/K6k w - - 40 60").unwrap();
        assert_eq!(a.position_key(), b.position_key());
        assert_ne!(a.get_fen(), b.get_fen());
    }
}
