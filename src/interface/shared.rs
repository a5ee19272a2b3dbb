use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::board::Player;
use crate::error::PreconditionError;
use crate::game::{Game, GameEvent, GameSnapshot};
use crate::interface::input::PlayerGameInput;

/// A [Game] that can be shared between threads, every operation takes the same lock.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

/// A taken seat: the input to act with and the channel on which the seat receives its events.
#[derive(Debug)]
pub struct Seat {
    pub input: PlayerGameInput,
    pub events: Receiver<GameEvent>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Run `f` while holding the lock.
    /// A panic in an earlier holder does not poison the game, since every mutation validates before it starts.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn seat(&self, player: Player, name: impl Into<String>) -> Result<Seat, PreconditionError> {
        let events = self.with(|game| game.join(player, name))?;
        Ok(Seat {
            input: PlayerGameInput::new(self.clone(), player),
            events,
        })
    }

    pub fn subscribe(&self) -> Receiver<GameEvent> {
        self.with(|game| game.subscribe())
    }

    pub fn start(&self) -> Result<(), PreconditionError> {
        self.with(|game| game.start(Utc::now()))
    }

    pub fn cancel(&self) -> Result<(), PreconditionError> {
        self.with(|game| game.cancel(Utc::now()))
    }

    pub fn lose_by_time(&self) -> Result<(), PreconditionError> {
        self.with(|game| game.lose_by_time(Utc::now()))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.with(|game| game.snapshot())
    }
}
