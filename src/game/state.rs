use serde::{Deserialize, Serialize};

/// Lifecycle of a [Game](crate::game::Game). `Ended` and `Canceled` are terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Created,
    Playing,
    Ended,
    Canceled,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        match self {
            GameState::Created | GameState::Playing => false,
            GameState::Ended | GameState::Canceled => true,
        }
    }
}

/// How an ended game was decided.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The winner connected their edges.
    Path,
    Resign,
    /// The loser ran out of time.
    Time,
    Forfeit,
}
