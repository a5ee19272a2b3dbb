use std::process::ExitCode;

use chrono::Utc;
use itertools::Itertools;
use tracing::error;
use tracing_subscriber::EnvFilter;

use hex_game::error::GameError;
use hex_game::game::{Game, GameOptions};
use hex_game::mv::Move;

const USAGE: &str = "usage: replay <size> [move]...\n  example: replay 5 c3 swap-pieces b2 c2";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect_vec();
    let (size, moves) = match args.split_first() {
        Some((size, moves)) => (size, moves),
        None => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let size = match size.parse::<u8>() {
        Ok(size) => size,
        Err(_) => {
            eprintln!("invalid size {:?}\n{}", size, USAGE);
            return ExitCode::FAILURE;
        }
    };

    match replay(size, moves) {
        Ok(game) => {
            print_game(&game);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("replay failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn replay(size: u8, moves: &[String]) -> Result<Game, GameError> {
    let now = Utc::now();
    let moves: Vec<Move> = moves
        .iter()
        .map(|s| Move::from_string(s).map(|mv| mv.with_played_at(now)))
        .collect::<Result<_, _>>()?;

    Game::from_moves(GameOptions::new(size), &moves, now)
}

fn print_game(game: &Game) {
    println!("{}", game.board());
    println!("moves: {}", game.moves_notation());
    println!("state: {:?}", game.state());

    match game.winner() {
        Some(winner) => println!("winner: {:?}", winner),
        None => println!("next: {:?}", game.current_player()),
    }

    if let Some(path) = game.winning_path() {
        println!("path: {}", path.iter().join(" "));
    }
}
