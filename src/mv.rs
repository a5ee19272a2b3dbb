use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::IllegalMove;
use crate::tile::Tile;

/// Point in time attached to moves and game transitions.
pub type Timestamp = DateTime<Utc>;

/// What a move does, without the time it was played at.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MoveKind {
    /// Place a stone on the given tile.
    Place(Tile),
    /// Take over the first stone of the opponent, mirrored. Only possible as the second move.
    SwapPieces,
    Pass,
}

/// A move together with the time it was played.
///
/// Identity ignores the timestamp: two moves are equal if they are the same special move or
/// place on the same tile.
#[derive(Copy, Clone)]
pub struct Move {
    kind: MoveKind,
    played_at: Timestamp,
}

impl Move {
    pub fn new(kind: MoveKind, played_at: Timestamp) -> Self {
        Move { kind, played_at }
    }

    /// A placement at `(row, col)`, stamped with the current time.
    /// Panics if the coordinates are outside the notation limits, see [Move::try_at].
    pub fn at(row: u16, col: u16) -> Self {
        Move::place(Tile::new(row, col))
    }

    /// Like [Move::at], but `None` if the coordinates are outside the notation limits.
    pub fn try_at(row: i64, col: i64) -> Option<Self> {
        Tile::try_new(row, col).map(Move::place)
    }

    pub fn place(tile: Tile) -> Self {
        Move::new(MoveKind::Place(tile), Utc::now())
    }

    pub fn swap_pieces() -> Self {
        Move::new(MoveKind::SwapPieces, Utc::now())
    }

    pub fn pass() -> Self {
        Move::new(MoveKind::Pass, Utc::now())
    }

    #[must_use]
    pub fn with_played_at(self, played_at: Timestamp) -> Self {
        Move { played_at, ..self }
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn played_at(&self) -> Timestamp {
        self.played_at
    }

    /// The placed tile, `None` for special moves.
    pub fn tile(&self) -> Option<Tile> {
        match self.kind {
            MoveKind::Place(tile) => Some(tile),
            MoveKind::SwapPieces | MoveKind::Pass => None,
        }
    }

    pub fn is_special(&self) -> bool {
        self.tile().is_none()
    }

    pub fn same_as(&self, other: &Move) -> bool {
        self.kind == other.kind
    }

    /// The same move with row and column swapped. Special moves are returned unchanged.
    #[must_use]
    pub fn clone_mirror(&self) -> Move {
        let kind = match self.kind {
            MoveKind::Place(tile) => MoveKind::Place(tile.mirror()),
            kind @ (MoveKind::SwapPieces | MoveKind::Pass) => kind,
        };
        Move { kind, ..*self }
    }

    pub fn to_data(&self) -> MoveData {
        let (row, col, special_move_type) = match self.kind {
            MoveKind::Place(tile) => (tile.row() as i32, tile.col() as i32, None),
            MoveKind::SwapPieces => (-1, -1, Some(SpecialMoveType::SwapPieces)),
            MoveKind::Pass => (-1, -1, Some(SpecialMoveType::Pass)),
        };
        MoveData {
            row,
            col,
            special_move_type,
            played_at: self.played_at,
        }
    }

    pub fn from_data(data: &MoveData) -> Result<Move, IllegalMove> {
        let kind = match data.special_move_type {
            Some(SpecialMoveType::SwapPieces) => MoveKind::SwapPieces,
            Some(SpecialMoveType::Pass) => MoveKind::Pass,
            None => {
                let tile = Tile::try_new(data.row as i64, data.col as i64).ok_or(IllegalMove::InvalidCoordinates {
                    row: data.row as i64,
                    col: data.col as i64,
                })?;
                MoveKind::Place(tile)
            }
        };
        Ok(Move::new(kind, data.played_at))
    }
}

impl From<Tile> for Move {
    fn from(tile: Tile) -> Self {
        Move::place(tile)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({}, {})", self, self.played_at.to_rfc3339())
    }
}

/// Special move marker of [MoveData].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SpecialMoveType {
    #[serde(rename = "swap-pieces")]
    SwapPieces,
    #[serde(rename = "pass")]
    Pass,
}

/// Plain record of a move as exchanged with persistence.
/// Special moves carry `-1` coordinates.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveData {
    pub row: i32,
    pub col: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_move_type: Option<SpecialMoveType>,
    pub played_at: Timestamp,
}
