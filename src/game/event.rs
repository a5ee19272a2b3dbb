use crate::board::Player;
use crate::game::Outcome;
use crate::mv::{Move, Timestamp};

/// Notifications sent by a [Game](crate::game::Game) to its seats and observers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GameEvent {
    Started { first: Player, at: Timestamp },
    /// Sent only to the seat of `player` when they are expected to move.
    YourTurn { player: Player },
    Played { mv: Move, by: Player, move_index: usize },
    /// `count` moves were taken back on request of `requester`.
    Undone { requester: Player, count: usize },
    Ended { winner: Player, outcome: Outcome, at: Timestamp },
    Canceled { at: Timestamp },
}
