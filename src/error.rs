//! Error kinds returned by the board and the game.
//!
//! Every operation that fails leaves the game untouched.
use crate::board::Player;
use crate::game::{GameState, Outcome};
use crate::mv::MoveKind;
use crate::tile::Tile;

/// The string could not be parsed as move notation.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid move notation {0:?}")]
pub struct InvalidNotation(pub String);

/// A move that is not allowed by the rules, or not allowed right now.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum IllegalMove {
    #[error("game is not in progress (state {0:?})")]
    NotPlaying(GameState),

    #[error("player {by:?} tried to move, but it is the turn of {current:?}")]
    NotYourTurn { by: Player, current: Player },

    #[error("tile {tile} is outside of the board with size {size}")]
    OutOfBounds { tile: Tile, size: u8 },

    #[error("tile {0} is already occupied")]
    Occupied(Tile),

    #[error("{0} is not a placement")]
    NotAPlacement(MoveKind),

    #[error("the swap rule is disabled for this game")]
    SwapNotAllowed,

    #[error("swap-pieces is only available as the second move, after a placement")]
    SwapNotAvailable,

    #[error("coordinates ({row}, {col}) do not describe a tile")]
    InvalidCoordinates { row: i64, col: i64 },

    #[error(transparent)]
    Notation(#[from] InvalidNotation),
}

/// An operation was called in a sequence that does not make sense.
/// This is an integration bug, not a gameplay condition.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum PreconditionError {
    #[error("invalid board size {size}, expected 1..={max}")]
    InvalidSize { size: u8, max: u8 },

    #[error("the seat of player {0:?} is already taken")]
    SeatTaken(Player),

    #[error("both seats must be taken before the game starts")]
    SeatsNotFilled,

    #[error("the game has already been started")]
    AlreadyStarted,

    #[error("the game is not in progress (state {0:?})")]
    NotPlaying(GameState),

    #[error("the game is already over (state {0:?})")]
    AlreadyOver(GameState),

    #[error("the game cannot be canceled anymore, {0} moves have been played")]
    CancelTooLate(usize),

    #[error("player {0:?} has no move to undo")]
    NothingToUndo(Player),

    #[error("outcome {0:?} can not be declared, it follows from the board")]
    UndeclarableOutcome(Outcome),

    #[error("the participant has not been seated in a game")]
    NotSeated,

    #[error("inconsistent snapshot: {0}")]
    InconsistentSnapshot(&'static str),
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Illegal(#[from] IllegalMove),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}

impl From<InvalidNotation> for GameError {
    fn from(err: InvalidNotation) -> Self {
        GameError::Illegal(err.into())
    }
}
