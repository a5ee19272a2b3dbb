//! The seam between a [Game](crate::game::Game) and the implementations of its players.
//!
//! A [SharedGame] is the thread-safe handle to a game, seats hand out a [PlayerGameInput]
//! bound to a single player, and [Participant] is the contract player implementations follow.
pub use input::PlayerGameInput;
pub use participant::{pump_until_idle, Participant, RandomParticipant, SeatedParticipant};
pub use shared::{Seat, SharedGame};

pub mod input;
pub mod participant;
pub mod shared;
