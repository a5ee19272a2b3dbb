#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A rules engine for the connection game [Hex](https://en.wikipedia.org/wiki/Hex_(board_game)).
//!
//! # Features
//!
//! * [HexBoard](crate::board::HexBoard), a square grid of cells where each cell has six neighbours,
//!     with connectivity checks and shortest winning paths in [connect](crate::connect).
//! * [Move](crate::mv::Move) and its notation (`"c2"`, `"aa13"`, `"swap-pieces"`, `"pass"`), see [io](crate::io).
//! * [Game](crate::game::Game), the full lifecycle of a game: seats, turn order, the swap rule,
//!     undo, resignation, time losses and cancellation, with events sent to every seat.
//! * [PlayerGameInput](crate::interface::PlayerGameInput) and [Participant](crate::interface::Participant),
//!     the seam where player implementations plug in.
//! * Random board generation for tests and experiments, see [board_gen](crate::util::board_gen).
//!
//! # Examples
//!
//! ## Play a short game on a small board.
//!
//! ```
//! # use chrono::Utc;
//! # use hex_game::board::Player;
//! # use hex_game::game::{Game, GameOptions, GameState};
//! let mut game = Game::new(GameOptions::new(3)).unwrap();
//! let _events_a = game.join(Player::A, "alice").unwrap();
//! let _events_b = game.join(Player::B, "bob").unwrap();
//! game.start(Utc::now()).unwrap();
//!
//! for (mv, player) in [("b2", Player::A), ("c2", Player::B), ("b3", Player::A), ("a3", Player::B), ("b1", Player::A)] {
//!     game.play(mv.parse().unwrap(), player, Utc::now()).unwrap();
//! }
//!
//! println!("{}", game.board());
//! assert_eq!(game.state(), GameState::Ended);
//! assert_eq!(game.winner(), Some(Player::A));
//! ```
//!
//! ## Let two random participants play against each other.
//!
//! ```
//! # use hex_game::board::Player;
//! # use hex_game::game::{Game, GameOptions};
//! # use hex_game::interface::{pump_until_idle, RandomParticipant, SeatedParticipant, SharedGame};
//! # use hex_game::util::tiny::seeded_rng;
//! let game = SharedGame::new(Game::new(GameOptions::new(5)).unwrap());
//! let mut seated = vec![
//!     SeatedParticipant::seat(&game, Player::A, Box::new(RandomParticipant::new("a", seeded_rng(1)))).unwrap(),
//!     SeatedParticipant::seat(&game, Player::B, Box::new(RandomParticipant::new("b", seeded_rng(2)))).unwrap(),
//! ];
//! game.start().unwrap();
//! pump_until_idle(&mut seated);
//!
//! assert!(game.snapshot().winner.is_some());
//! ```

pub mod board;
pub mod connect;
pub mod error;
pub mod game;
pub mod interface;
pub mod io;
pub mod mv;
pub mod tile;

pub mod util;
