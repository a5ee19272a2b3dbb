//! The game lifecycle: seats, turn order, the swap rule, undo and the ways a game can end.
use std::sync::mpsc::{channel, Receiver, Sender};

use itertools::Itertools;
use tracing::{debug, info, instrument, trace};

pub use event::GameEvent;
pub use history::{Applied, PlayedMove, PlayedMoveData};
pub use options::GameOptions;
pub use snapshot::GameSnapshot;
pub use state::{GameState, Outcome};

use crate::board::{HexBoard, Player};
use crate::error::{GameError, IllegalMove, PreconditionError};
use crate::mv::{Move, MoveKind, Timestamp};
use crate::tile::Tile;

mod event;
mod history;
mod options;
mod snapshot;
mod state;

/// A single game of Hex between two seats.
///
/// All mutating operations validate completely before changing anything, so a rejected call
/// leaves the game exactly as it was. The game is not synchronized itself, wrap it in a
/// [SharedGame](crate::interface::SharedGame) to use it from multiple threads.
#[derive(Debug)]
pub struct Game {
    options: GameOptions,
    board: HexBoard,
    history: Vec<PlayedMove>,
    current_player: Player,

    state: GameState,
    winner: Option<Player>,
    outcome: Option<Outcome>,
    started_at: Option<Timestamp>,
    ended_at: Option<Timestamp>,

    seats: [Option<Seat>; 2],
    observers: Vec<Sender<GameEvent>>,
}

#[derive(Debug)]
struct Seat {
    name: String,
    events: Sender<GameEvent>,
}

impl Game {
    pub fn new(options: GameOptions) -> Result<Game, PreconditionError> {
        let board = HexBoard::try_new(options.size)?;
        Ok(Game {
            options,
            board,
            history: vec![],
            current_player: options.first_player(),
            state: GameState::Created,
            winner: None,
            outcome: None,
            started_at: None,
            ended_at: None,
            seats: [None, None],
            observers: vec![],
        })
    }

    /// Rebuild a game in progress by replaying `moves`, without any seats.
    /// Each move is played by the player to move at that point, at its own timestamp.
    pub fn from_moves(options: GameOptions, moves: &[Move], started_at: Timestamp) -> Result<Game, GameError> {
        let mut game = Game::new(options)?;
        game.state = GameState::Playing;
        game.started_at = Some(started_at);

        for &mv in moves {
            game.play(mv, game.current_player, mv.played_at())?;
        }
        Ok(game)
    }

    /// Rebuild a game from a snapshot, the inverse of [Game::snapshot].
    pub fn restore(snapshot: &GameSnapshot) -> Result<Game, GameError> {
        let inconsistent = |reason| GameError::from(PreconditionError::InconsistentSnapshot(reason));

        let moves: Vec<Move> = snapshot
            .moves_history
            .iter()
            .map(|entry| Move::from_data(&entry.mv))
            .collect::<Result<_, _>>()?;
        let first_player = snapshot
            .moves_history
            .first()
            .map_or(snapshot.current_player_index, |entry| entry.player_index);
        let options = GameOptions {
            size: snapshot.size,
            allow_swap: snapshot.allow_swap,
            first_player: Some(first_player),
        };

        let mut game = match snapshot.started_at {
            Some(started_at) => Game::from_moves(options, &moves, started_at)?,
            None if moves.is_empty() => Game::new(options)?,
            None => return Err(inconsistent("moves were played but the game never started")),
        };

        if game.history.iter().map(|m| m.player).ne(snapshot.moves_history.iter().map(|m| m.player_index)) {
            return Err(inconsistent("players in the history do not alternate"));
        }

        match (snapshot.state, game.state) {
            (GameState::Created, GameState::Playing) if moves.is_empty() => {
                game.state = GameState::Created;
                game.started_at = None;
            }
            (GameState::Ended, GameState::Playing) => {
                let (winner, outcome, at) = match (snapshot.winner, snapshot.outcome, snapshot.ended_at) {
                    (Some(winner), Some(outcome), Some(at)) if outcome != Outcome::Path => (winner, outcome, at),
                    _ => return Err(inconsistent("ended game without a valid winner and outcome")),
                };
                game.finish(winner, outcome, at);
            }
            (GameState::Canceled, GameState::Playing | GameState::Created) => {
                if !game.can_cancel() {
                    return Err(inconsistent("canceled after too many moves"));
                }
                game.state = GameState::Canceled;
                game.ended_at = snapshot.ended_at;
            }
            (expected, actual) if expected == actual => {}
            _ => return Err(inconsistent("state does not match the moves")),
        }

        if game.winner != snapshot.winner || game.current_player != snapshot.current_player_index {
            return Err(inconsistent("winner or current player does not match the moves"));
        }
        if game.outcome != snapshot.outcome || game.ended_at != snapshot.ended_at {
            return Err(inconsistent("outcome or end time does not match the moves"));
        }

        Ok(game)
    }

    /// Take the seat of `player`, returning the channel on which this seat receives its events.
    pub fn join(&mut self, player: Player, name: impl Into<String>) -> Result<Receiver<GameEvent>, PreconditionError> {
        if self.state.is_terminal() {
            return Err(PreconditionError::AlreadyOver(self.state));
        }
        let seat = &mut self.seats[player.index() as usize];
        if seat.is_some() {
            return Err(PreconditionError::SeatTaken(player));
        }

        let name = name.into();
        info!(?player, %name, "player joined");

        let (sender, receiver) = channel();
        *seat = Some(Seat { name, events: sender });
        Ok(receiver)
    }

    /// Receive all events broadcast by this game from now on, without taking a seat.
    /// [GameEvent::YourTurn] is only sent to seats.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (sender, receiver) = channel();
        self.observers.push(sender);
        receiver
    }

    pub fn seat_name(&self, player: Player) -> Option<&str> {
        self.seats[player.index() as usize].as_ref().map(|seat| seat.name.as_str())
    }

    pub fn seats_filled(&self) -> bool {
        self.seats.iter().all(|seat| seat.is_some())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn start(&mut self, at: Timestamp) -> Result<(), PreconditionError> {
        match self.state {
            GameState::Created => {}
            GameState::Playing => return Err(PreconditionError::AlreadyStarted),
            GameState::Ended | GameState::Canceled => return Err(PreconditionError::AlreadyOver(self.state)),
        }
        if !self.seats_filled() {
            return Err(PreconditionError::SeatsNotFilled);
        }

        self.state = GameState::Playing;
        self.current_player = self.options.first_player();
        self.started_at = Some(at);
        info!(size = self.board.size(), first = ?self.current_player, "game started");

        self.broadcast(GameEvent::Started {
            first: self.current_player,
            at,
        });
        self.notify(self.current_player, GameEvent::YourTurn {
            player: self.current_player,
        });
        Ok(())
    }

    /// Play `mv` for player `by`. On success the turn passes to the other player,
    /// and the game ends if `by` connected their edges.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, mv: Move, by: Player, at: Timestamp) -> Result<(), GameError> {
        let applied = match self.check_play(&mv, by) {
            Ok(applied) => applied,
            Err(e) => {
                debug!("rejected move: {}", e);
                return Err(e.into());
            }
        };

        match applied {
            Applied::Placed(tile) => self.board.set_tile(tile, Some(by)),
            Applied::Swapped { from, to } => {
                self.board.set_tile(from, None);
                self.board.set_tile(to, Some(by));
            }
            Applied::Passed => {}
        }

        self.history.push(PlayedMove {
            mv: mv.with_played_at(at),
            player: by,
            played_at: at,
            applied,
        });
        self.current_player = by.other();
        debug!(move_index = self.history.len() - 1, ?applied, "played move");

        self.broadcast(GameEvent::Played {
            mv: mv.with_played_at(at),
            by,
            move_index: self.history.len() - 1,
        });

        match self.board.calculate_winner() {
            Some(winner) => self.finish(winner, Outcome::Path, at),
            None => self.notify(self.current_player, GameEvent::YourTurn {
                player: self.current_player,
            }),
        }

        Ok(())
    }

    /// Check whether `by` can play `mv` right now, and what the move would do to the board.
    pub fn check_play(&self, mv: &Move, by: Player) -> Result<Applied, IllegalMove> {
        if self.state != GameState::Playing {
            return Err(IllegalMove::NotPlaying(self.state));
        }
        if by != self.current_player {
            return Err(IllegalMove::NotYourTurn {
                by,
                current: self.current_player,
            });
        }

        match mv.kind() {
            MoveKind::Place(_) => self.board.check_move(mv).map(Applied::Placed),
            MoveKind::SwapPieces => {
                if !self.options.allow_swap {
                    return Err(IllegalMove::SwapNotAllowed);
                }
                match self.history.as_slice() {
                    [PlayedMove {
                        applied: Applied::Placed(from),
                        ..
                    }] => Ok(Applied::Swapped {
                        from: *from,
                        to: from.mirror(),
                    }),
                    _ => Err(IllegalMove::SwapNotAvailable),
                }
            }
            MoveKind::Pass => Ok(Applied::Passed),
        }
    }

    pub fn resign(&mut self, player: Player, at: Timestamp) -> Result<(), PreconditionError> {
        self.check_playing()?;
        info!(?player, "player resigned");
        self.finish(player.other(), Outcome::Resign, at);
        Ok(())
    }

    /// End the game with a decision made outside of the board, typically by a clock.
    pub fn declare_winner(&mut self, winner: Player, outcome: Outcome, at: Timestamp) -> Result<(), PreconditionError> {
        if outcome == Outcome::Path {
            return Err(PreconditionError::UndeclarableOutcome(outcome));
        }
        self.check_playing()?;
        self.finish(winner, outcome, at);
        Ok(())
    }

    /// The player to move ran out of time.
    pub fn lose_by_time(&mut self, at: Timestamp) -> Result<(), PreconditionError> {
        self.declare_winner(self.current_player.other(), Outcome::Time, at)
    }

    /// Cancel the game. Only possible before the second move has been played.
    pub fn cancel(&mut self, at: Timestamp) -> Result<(), PreconditionError> {
        if self.state.is_terminal() {
            return Err(PreconditionError::AlreadyOver(self.state));
        }
        if !self.can_cancel() {
            return Err(PreconditionError::CancelTooLate(self.history.len()));
        }

        self.state = GameState::Canceled;
        self.ended_at = Some(at);
        info!(moves = self.history.len(), "game canceled");

        self.broadcast(GameEvent::Canceled { at });
        Ok(())
    }

    pub fn can_cancel(&self) -> bool {
        !self.state.is_terminal() && self.history.len() < 2
    }

    /// Whether `player` has a move that [Game::player_undo] could take back.
    pub fn can_undo(&self, player: Player) -> bool {
        self.state == GameState::Playing && self.history.iter().any(|m| m.player == player)
    }

    /// Take back the last move of `requester`, and the reply of the opponent if there is one.
    /// Afterwards it is the turn of `requester` again. Returns the number of moves taken back.
    #[instrument(level = "debug", skip(self))]
    pub fn player_undo(&mut self, requester: Player) -> Result<usize, PreconditionError> {
        self.check_playing()?;
        if !self.can_undo(requester) {
            return Err(PreconditionError::NothingToUndo(requester));
        }

        let mut count = 0;
        while let Some(last) = self.history.last() {
            let own = last.player == requester;
            self.pop_move();
            count += 1;
            if own {
                break;
            }
        }
        self.current_player = requester;
        debug!(count, "undone moves");

        self.broadcast(GameEvent::Undone { requester, count });
        self.notify(requester, GameEvent::YourTurn { player: requester });
        Ok(count)
    }

    fn pop_move(&mut self) {
        if let Some(entry) = self.history.pop() {
            let first_mover = self.history.first().map_or(entry.player.other(), |m| m.player);
            entry.applied.revert(&mut self.board, first_mover);
            self.current_player = entry.player;
            trace!(mv = %entry.mv, "reverted move");
        }
    }

    fn check_playing(&self) -> Result<(), PreconditionError> {
        match self.state {
            GameState::Playing => Ok(()),
            state => Err(PreconditionError::NotPlaying(state)),
        }
    }

    fn finish(&mut self, winner: Player, outcome: Outcome, at: Timestamp) {
        debug_assert_eq!(self.state, GameState::Playing);
        self.state = GameState::Ended;
        self.winner = Some(winner);
        self.outcome = Some(outcome);
        self.ended_at = Some(at);
        info!(?winner, ?outcome, moves = self.history.len(), "game ended");

        self.broadcast(GameEvent::Ended { winner, outcome, at });
    }

    fn broadcast(&mut self, event: GameEvent) {
        for seat in self.seats.iter().flatten() {
            if seat.events.send(event.clone()).is_err() {
                trace!(name = %seat.name, "seat is no longer listening");
            }
        }
        self.observers.retain(|observer| observer.send(event.clone()).is_ok());
    }

    fn notify(&self, player: Player, event: GameEvent) {
        if let Some(seat) = &self.seats[player.index() as usize] {
            if seat.events.send(event).is_err() {
                trace!(name = %seat.name, "seat is no longer listening");
            }
        }
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    pub fn allow_swap(&self) -> bool {
        self.options.allow_swap
    }

    pub fn moves_history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<Timestamp> {
        self.ended_at
    }

    /// The shortest winning chain, if the game was won by connecting edges.
    pub fn winning_path(&self) -> Option<Vec<Tile>> {
        match self.outcome {
            Some(Outcome::Path) => self.board.shortest_winning_path(),
            _ => None,
        }
    }

    /// The history in move notation, separated by spaces. This is the format used in game records.
    pub fn moves_notation(&self) -> String {
        self.history.iter().map(|m| m.mv).join(" ")
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            moves_history: self.history.iter().map(PlayedMove::to_data).collect(),
            current_player_index: self.current_player,
            winner: self.winner,
            outcome: self.outcome,
            started_at: self.started_at,
            ended_at: self.ended_at,
            allow_swap: self.options.allow_swap,
            state: self.state,
        }
    }
}
