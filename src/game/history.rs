use serde::{Deserialize, Serialize};

use crate::board::{HexBoard, Player};
use crate::mv::{Move, MoveData, Timestamp};
use crate::tile::Tile;

/// The effect a move had on the board, recorded so it can be undone exactly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Applied {
    Placed(Tile),
    /// The stone on `from` was removed and `to`, its mirror, was given to the swapping player.
    Swapped { from: Tile, to: Tile },
    Passed,
}

impl Applied {
    /// Undo this effect on `board`. `first_mover` is the player whose stone was swapped away.
    pub(crate) fn revert(self, board: &mut HexBoard, first_mover: Player) {
        match self {
            Applied::Placed(tile) => board.set_tile(tile, None),
            Applied::Swapped { from, to } => {
                // `from == to` for swaps on the diagonal, so clear before restoring
                board.set_tile(to, None);
                board.set_tile(from, Some(first_mover));
            }
            Applied::Passed => {}
        }
    }
}

/// An entry of the game history.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
    pub played_at: Timestamp,
    pub(crate) applied: Applied,
}

impl PlayedMove {
    pub fn applied(&self) -> Applied {
        self.applied
    }

    pub fn to_data(&self) -> PlayedMoveData {
        PlayedMoveData {
            mv: self.mv.with_played_at(self.played_at).to_data(),
            player_index: self.player,
        }
    }
}

/// Serialized history entry: the [MoveData] fields plus the index of the player.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayedMoveData {
    #[serde(flatten)]
    pub mv: MoveData,
    pub player_index: Player,
}
