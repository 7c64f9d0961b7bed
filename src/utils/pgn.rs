//! PGN export of a recorded game.
//!
//! Serializes the state machine's move history and headers to PGN movetext.
//! Moves are written in long algebraic coordinates, which every mainstream
//! reader accepts for computer-generated games.

use std::collections::BTreeMap;

use crate::chess_game::{ChessGame, DrawReason, GameStatus};
use crate::piece_team::PieceTeam;

/// PGN result tag for a derived game status.
pub fn result_tag(status: GameStatus, side_to_move: PieceTeam) -> &'static str {
    match status {
        GameStatus::Checkmate => match side_to_move {
            // The side to move is the side that got mated.
            PieceTeam::Light => "0-1",
            PieceTeam::Dark => "1-0",
        },
        GameStatus::Stalemate | GameStatus::Draw(_) => "1/2-1/2",
        GameStatus::Ongoing | GameStatus::Check => "*",
    }
}

/// Writes the game with default headers.
pub fn write_pgn(game: &ChessGame, result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Parlor Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        chrono::Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    write_pgn_with_headers(game, &headers)
}

pub fn write_pgn_with_headers(
    game: &ChessGame,
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(game.history().len() + 1);
    for (ply, entry) in game.history().iter().enumerate() {
        let lan = entry.move_description.get_long_algebraic();
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, lan));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn normalize_result(result: &str) -> &'static str {
    match result.trim() {
        "1-0" => "1-0",
        "0-1" => "0-1",
        "1/2-1/2" => "1/2-1/2",
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
