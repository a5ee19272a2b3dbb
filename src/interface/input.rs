use chrono::Utc;

use crate::board::{HexBoard, Player};
use crate::error::{GameError, IllegalMove, PreconditionError};
use crate::game::{GameState, PlayedMove};
use crate::interface::shared::SharedGame;
use crate::mv::Move;
use crate::tile::Tile;

/// Everything a player implementation is allowed to do with the game it is seated in.
///
/// Reads return copies, so a player can never observe a half-applied move.
/// Actions are always made on behalf of the bound player and timestamped with the current time.
#[derive(Debug, Clone)]
pub struct PlayerGameInput {
    game: SharedGame,
    player: Player,
}

impl PlayerGameInput {
    pub fn new(game: SharedGame, player: Player) -> Self {
        PlayerGameInput { game, player }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn size(&self) -> u8 {
        self.game.with(|game| game.size())
    }

    pub fn tile(&self, row: u16, col: u16) -> Result<Option<Player>, IllegalMove> {
        let tile = Tile::try_new(row as i64, col as i64).ok_or(IllegalMove::InvalidCoordinates {
            row: row as i64,
            col: col as i64,
        })?;

        self.game.with(|game| {
            let board = game.board();
            board.check_bounds(tile).map(|()| board.tile(tile))
        })
    }

    /// A copy of the current board.
    pub fn board(&self) -> HexBoard {
        self.game.with(|game| game.board().clone())
    }

    pub fn tiles(&self) -> Vec<Vec<Option<Player>>> {
        self.game.with(|game| game.board().tiles_clone())
    }

    pub fn moves_history(&self) -> Vec<PlayedMove> {
        self.game.with(|game| game.moves_history().to_vec())
    }

    pub fn last_move(&self) -> Option<PlayedMove> {
        self.game.with(|game| game.last_move().copied())
    }

    pub fn state(&self) -> GameState {
        self.game.with(|game| game.state())
    }

    pub fn is_my_turn(&self) -> bool {
        self.game
            .with(|game| game.is_playing() && game.current_player() == self.player)
    }

    pub fn play(&self, mv: Move) -> Result<(), GameError> {
        self.game.with(|game| game.play(mv, self.player, Utc::now()))
    }

    pub fn resign(&self) -> Result<(), PreconditionError> {
        self.game.with(|game| game.resign(self.player, Utc::now()))
    }

    pub fn can_undo(&self) -> bool {
        self.game.with(|game| game.can_undo(self.player))
    }

    /// Take back the last own move, see [Game::player_undo](crate::game::Game::player_undo).
    pub fn undo(&self) -> Result<usize, PreconditionError> {
        self.game.with(|game| game.player_undo(self.player))
    }
}
