use serde::{Deserialize, Serialize};

use crate::board::Player;
use crate::game::{GameState, Outcome, PlayedMoveData};
use crate::mv::Timestamp;

/// Everything about a game that outside collaborators (UI, persistence, clocks) need to know,
/// see [Game::snapshot](crate::game::Game::snapshot) and [Game::restore](crate::game::Game::restore).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub size: u8,
    pub moves_history: Vec<PlayedMoveData>,
    pub current_player_index: Player,
    pub winner: Option<Player>,
    pub outcome: Option<Outcome>,
    pub started_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,
    pub allow_swap: bool,
    pub state: GameState,
}
