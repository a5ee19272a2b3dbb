use std::ops::ControlFlow;

use internal_iterator::InternalIterator;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{IllegalMove, PreconditionError};
use crate::mv::{Move, MoveKind};
use crate::tile::Tile;

/// One of the two players.
///
/// [Player::A] (index 0) connects the top and bottom rows,
/// [Player::B] (index 1) connects the left and right columns.
/// Serialized as the player index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    pub fn from_index(index: u8) -> Option<Player> {
        match index {
            0 => Some(Player::A),
            1 => Some(Player::B),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.index()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidPlayerIndex(pub u8);

impl std::fmt::Display for InvalidPlayerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid player index {}, expected 0 or 1", self.0)
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayerIndex;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Player::from_index(index).ok_or(InvalidPlayerIndex(index))
    }
}

/// The Hex board: a `size x size` rhombus of hexagonal tiles, each empty or owned by a player.
///
/// The board only knows about stones. Turn order, the swap rule and the game lifecycle are handled by
/// [Game](crate::game::Game). Connectivity is implemented in [crate::connect].
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct HexBoard {
    size: u8,
    tiles: Vec<Option<Player>>,
}

impl HexBoard {
    /// The largest size for which every tile can be written in move notation.
    pub const MAX_SIZE: u8 = (Tile::MAX_ROW + 1) as u8;

    /// Construct an empty board. Panics if `size` is not in `1..=MAX_SIZE`, see [HexBoard::try_new].
    pub fn new(size: u8) -> HexBoard {
        match HexBoard::try_new(size) {
            Ok(board) => board,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(size: u8) -> Result<HexBoard, PreconditionError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(PreconditionError::InvalidSize {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(HexBoard {
            size,
            tiles: vec![None; size as usize * size as usize],
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    pub fn contains(&self, tile: Tile) -> bool {
        tile.exists(self.size)
    }

    /// The owner of `tile`. Panics if the tile is not on this board.
    pub fn tile(&self, tile: Tile) -> Option<Player> {
        assert!(self.contains(tile), "{:?} is not on a board of size {}", tile, self.size);
        self.tiles[tile.index(self.size)]
    }

    /// Overwrite the owner of `tile`, without any legality check. Panics if the tile is not on this board.
    pub fn set_tile(&mut self, tile: Tile, owner: Option<Player>) {
        assert!(self.contains(tile), "{:?} is not on a board of size {}", tile, self.size);
        self.tiles[tile.index(self.size)] = owner;
    }

    pub fn check_bounds(&self, tile: Tile) -> Result<(), IllegalMove> {
        if self.contains(tile) {
            Ok(())
        } else {
            Err(IllegalMove::OutOfBounds { tile, size: self.size })
        }
    }

    /// Check whether `mv` is a placement on an empty tile of this board, returning that tile.
    /// Special moves are game-level moves and are rejected here.
    pub fn check_move(&self, mv: &Move) -> Result<Tile, IllegalMove> {
        let tile = match mv.kind() {
            MoveKind::Place(tile) => tile,
            kind @ (MoveKind::SwapPieces | MoveKind::Pass) => return Err(IllegalMove::NotAPlacement(kind)),
        };
        self.check_bounds(tile)?;
        match self.tile(tile) {
            None => Ok(tile),
            Some(_) => Err(IllegalMove::Occupied(tile)),
        }
    }

    /// An independent copy of all tiles, indexed as `[row][col]`.
    pub fn tiles_clone(&self) -> Vec<Vec<Option<Player>>> {
        self.tiles
            .chunks(self.size as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_none()).count()
    }

    pub fn stone_count(&self, player: Player) -> usize {
        self.tiles.iter().filter(|&&t| t == Some(player)).count()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|t| t.is_some())
    }

    /// The empty tiles, in increasing `(row, col)` order.
    pub fn available_moves(&self) -> AvailableMovesIterator<'_> {
        AvailableMovesIterator { board: self }
    }

    /// Pick a random empty tile with a uniform distribution, `None` if the board is full.
    pub fn random_available_move(&self, rng: &mut impl Rng) -> Option<Tile> {
        let count = self.empty_count();
        if count == 0 {
            return None;
        }
        let index = rng.gen_range(0..count);
        self.available_moves().nth(index)
    }
}

/// Iterator over the empty tiles of a [HexBoard], see [HexBoard::available_moves].
#[derive(Debug)]
pub struct AvailableMovesIterator<'a> {
    board: &'a HexBoard,
}

impl<'a> InternalIterator for AvailableMovesIterator<'a> {
    type Item = Tile;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let size = self.board.size;
        for (index, owner) in self.board.tiles.iter().enumerate() {
            if owner.is_none() {
                if let ControlFlow::Break(r) = f(Tile::from_index(index, size)) {
                    return ControlFlow::Break(r);
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn count(self) -> usize {
        self.board.empty_count()
    }
}
