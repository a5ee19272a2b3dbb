//! Player implementations and a simple driver that delivers game events to them.
use std::fmt::{Debug, Formatter};
use std::sync::mpsc::{Receiver, TryRecvError};

use rand::Rng;
use tracing::debug;

use crate::board::Player;
use crate::error::{GameError, PreconditionError};
use crate::game::GameEvent;
use crate::interface::input::PlayerGameInput;
use crate::interface::shared::SharedGame;
use crate::mv::Move;

/// A player implementation: a human relay, a bot or a remote engine.
///
/// The participant is handed its [PlayerGameInput] once it is seated,
/// and it should play a move whenever it receives [GameEvent::YourTurn].
pub trait Participant: Debug {
    fn name(&self) -> &str;

    /// Called once when seated.
    fn receive(&mut self, input: PlayerGameInput);

    fn input(&self) -> Option<&PlayerGameInput>;

    fn on_event(&mut self, event: &GameEvent);

    fn play(&self, mv: Move) -> Result<(), GameError> {
        let input = self.input().ok_or(PreconditionError::NotSeated)?;
        input.play(mv)
    }

    fn resign(&self) -> Result<(), GameError> {
        let input = self.input().ok_or(PreconditionError::NotSeated)?;
        Ok(input.resign()?)
    }
}

/// Participant that places a stone on a uniformly random empty tile.
pub struct RandomParticipant<R: Rng> {
    name: String,
    rng: R,
    input: Option<PlayerGameInput>,
}

impl<R: Rng> Debug for RandomParticipant<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomParticipant({:?})", self.name)
    }
}

impl<R: Rng> RandomParticipant<R> {
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        RandomParticipant {
            name: name.into(),
            rng,
            input: None,
        }
    }
}

impl<R: Rng> Participant for RandomParticipant<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, input: PlayerGameInput) {
        self.input = Some(input);
    }

    fn input(&self) -> Option<&PlayerGameInput> {
        self.input.as_ref()
    }

    fn on_event(&mut self, event: &GameEvent) {
        if !matches!(event, GameEvent::YourTurn { .. }) {
            return;
        }
        let input = match &self.input {
            Some(input) => input.clone(),
            None => return,
        };

        let mv = match input.board().random_available_move(&mut self.rng) {
            Some(tile) => Move::place(tile),
            None => Move::pass(),
        };

        if let Err(e) = input.play(mv) {
            debug!(name = %self.name, "random move rejected: {}", e);
        }
    }
}

/// A participant together with the event channel of its seat.
#[derive(Debug)]
pub struct SeatedParticipant {
    player: Player,
    participant: Box<dyn Participant + Send>,
    events: Receiver<GameEvent>,
}

impl SeatedParticipant {
    /// Take the seat of `player` in `game` and hand the input to `participant`.
    pub fn seat(
        game: &SharedGame,
        player: Player,
        mut participant: Box<dyn Participant + Send>,
    ) -> Result<Self, PreconditionError> {
        let seat = game.seat(player, participant.name())?;
        participant.receive(seat.input);

        Ok(SeatedParticipant {
            player,
            participant,
            events: seat.events,
        })
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn participant(&self) -> &dyn Participant {
        &*self.participant
    }

    /// Deliver all pending events to the participant, returning how many there were.
    pub fn pump(&mut self) -> usize {
        let mut count = 0;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    count += 1;
                    self.participant.on_event(&event);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return count,
            }
        }
    }
}

/// Pump all participants until none of them receive new events.
/// Returns the total number of delivered events.
pub fn pump_until_idle(seated: &mut [SeatedParticipant]) -> usize {
    let mut total = 0;
    loop {
        let delivered: usize = seated.iter_mut().map(|s| s.pump()).sum();
        if delivered == 0 {
            return total;
        }
        total += delivered;
    }
}
