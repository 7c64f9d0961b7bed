//! Terminal two-player front end.
//!
//! A thin presentation layer over the engine: it reads long algebraic moves
//! from stdin, renders the board after every change, and translates engine
//! errors into messages. All rule knowledge stays in the library.

use std::io::{self, BufRead, Write};

use parlor_chess::chess_game::{ChessGame, DrawReason, GameStatus};
use parlor_chess::engines::engine_random::RandomEngine;
use parlor_chess::engines::engine_trait::Engine;
use parlor_chess::errors::ChessErrors;
use parlor_chess::piece_team::PieceTeam;
use parlor_chess::utils::algebraic::parse_long_algebraic;
use parlor_chess::utils::pgn::{result_tag, write_pgn};
use parlor_chess::utils::render_game_state::render_game_state;

fn team_name(team: PieceTeam) -> &'static str {
    match team {
        PieceTeam::Light => "White",
        PieceTeam::Dark => "Black",
    }
}

fn describe_status(game: &ChessGame, status: GameStatus) -> String {
    let mover = team_name(game.state().turn);
    match status {
        GameStatus::Ongoing => format!("{mover} to move"),
        GameStatus::Check => format!("{mover} to move - check!"),
        GameStatus::Checkmate => format!("Checkmate! {mover} loses"),
        GameStatus::Stalemate => "Stalemate - draw".to_string(),
        GameStatus::Draw(DrawReason::FiftyMoveRule) => "Draw by the fifty-move rule".to_string(),
        GameStatus::Draw(DrawReason::ThreefoldRepetition) => {
            "Draw by threefold repetition".to_string()
        }
        GameStatus::Draw(DrawReason::InsufficientMaterial) => {
            "Draw by insufficient material".to_string()
        }
    }
}

fn print_board(game: &ChessGame) -> Result<(), ChessErrors> {
    println!("\n{}", render_game_state(game.state()));
    println!("{}\n", describe_status(game, game.status()?));
    Ok(())
}

fn apply_text_move(game: &mut ChessGame, text: &str) -> Result<(), ChessErrors> {
    let (start, destination, promotion) = parse_long_algebraic(text)?;
    let mv = game.find_legal_move(start, destination, promotion)?;
    game.apply_move(&mv)?;
    if mv.is_capture() {
        println!("Capture!");
    }
    Ok(())
}

fn run() -> Result<(), ChessErrors> {
    let mut game = ChessGame::new_game();
    let mut engine = RandomEngine::new();

    println!("parlor_chess - moves like e2e4 or e7e8q");
    println!("commands: new, undo, ai, pgn, quit");
    print_board(&game)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let input = line.trim();
        if input.is_empty() {
            print!("> ");
            io::stdout().flush().ok();
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "new" => {
                game = ChessGame::new_game();
                engine.new_game();
                println!("New game.");
                print_board(&game)?;
            }
            "undo" => match game.undo_move() {
                Ok(()) => print_board(&game)?,
                Err(ChessErrors::NoMoveHistory) => println!("Nothing to undo."),
                Err(e) => return Err(e),
            },
            "ai" => match engine.choose_move(&game)? {
                Some(mv) => {
                    println!("{} plays {}", engine.name(), mv.get_long_algebraic());
                    game.apply_move(&mv)?;
                    print_board(&game)?;
                }
                None => println!("No legal moves available."),
            },
            "pgn" => {
                let status = game.status()?;
                let tag = result_tag(status, game.state().turn);
                println!("{}", write_pgn(&game, tag));
            }
            _ => match apply_text_move(&mut game, input) {
                Ok(()) => {
                    print_board(&game)?;
                    if game.status()?.is_terminal() {
                        println!("Game over. Type new to play again or quit to exit.");
                    }
                }
                Err(ChessErrors::IllegalMove(text)) => {
                    println!("Illegal move: {text}. Try again.");
                }
                Err(
                    e @ (ChessErrors::InvalidAlgebraicString(_)
                    | ChessErrors::InvalidAlgebraicChar(_)
                    | ChessErrors::OutOfBounds(_)),
                ) => {
                    println!("Could not read that move ({e}). Use coordinates like e2e4.");
                }
                Err(e) => return Err(e),
            },
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("engine error: {e}");
        std::process::exit(1);
    }
}
