use serde::{Deserialize, Serialize};

use crate::board::{HexBoard, Player};
use crate::error::PreconditionError;

/// Settings fixed when a game is created.
///
/// Deserializable with defaults for missing fields, so partial configuration like `{"size": 13}` works.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameOptions {
    pub size: u8,
    /// Whether the second player may answer the first move with `swap-pieces`.
    pub allow_swap: bool,
    /// The player making the first move, [Player::A] if not set.
    pub first_player: Option<Player>,
}

impl GameOptions {
    pub const DEFAULT_SIZE: u8 = 11;

    pub fn new(size: u8) -> Self {
        GameOptions {
            size,
            ..GameOptions::default()
        }
    }

    #[must_use]
    pub fn with_allow_swap(self, allow_swap: bool) -> Self {
        GameOptions { allow_swap, ..self }
    }

    #[must_use]
    pub fn with_first_player(self, first_player: Player) -> Self {
        GameOptions {
            first_player: Some(first_player),
            ..self
        }
    }

    pub fn first_player(&self) -> Player {
        self.first_player.unwrap_or(Player::A)
    }

    pub fn validate(&self) -> Result<(), PreconditionError> {
        HexBoard::try_new(self.size).map(|_| ())
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            size: Self::DEFAULT_SIZE,
            allow_swap: true,
            first_player: None,
        }
    }
}
