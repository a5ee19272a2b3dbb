use serde_json::json;

use hex_game::board::Player;
use hex_game::error::{GameError, PreconditionError};
use hex_game::game::{Game, GameOptions, GameSnapshot, GameState, Outcome};

use crate::game::{play_all, started_game, t};

#[test]
fn json_shape() {
    let (mut game, _events) = started_game(GameOptions::new(5));
    play_all(&mut game, &["c3", "swap-pieces"]);

    let value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(value["size"], json!(5));
    assert_eq!(value["state"], json!("playing"));
    assert_eq!(value["currentPlayerIndex"], json!(0));
    assert_eq!(value["allowSwap"], json!(true));
    assert_eq!(value["winner"], json!(null));

    let history = value["movesHistory"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["row"], json!(2));
    assert_eq!(history[0]["col"], json!(2));
    assert_eq!(history[0]["playerIndex"], json!(0));
    assert!(history[0].get("specialMoveType").is_none());
    assert_eq!(history[1]["row"], json!(-1));
    assert_eq!(history[1]["specialMoveType"], json!("swap-pieces"));
    assert_eq!(history[1]["playerIndex"], json!(1));
}

#[test]
fn json_round_trip_and_restore() {
    let (mut playing, _events) = started_game(GameOptions::new(5));
    play_all(&mut playing, &["c3", "swap-pieces", "a1", "pass"]);

    let (mut resigned, _events) = started_game(GameOptions::new(5));
    play_all(&mut resigned, &["c3", "d4", "e5"]);
    resigned.resign(Player::B, t(10)).unwrap();

    let (mut won, _events) = started_game(GameOptions::new(3));
    play_all(&mut won, &["b2", "c2", "b3", "a3", "b1"]);

    let (mut canceled, _events) = started_game(GameOptions::new(4).with_first_player(Player::B));
    play_all(&mut canceled, &["a1"]);
    canceled.cancel(t(3)).unwrap();

    let created = Game::new(GameOptions::new(7).with_allow_swap(false)).unwrap();

    for game in [playing, resigned, won, canceled, created] {
        let snapshot = game.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, parsed, "json round trip of {}", json);

        let restored = Game::restore(&parsed).unwrap();
        assert_eq!(snapshot, restored.snapshot());
        assert_eq!(game.board(), restored.board());
    }
}

#[test]
fn restored_game_continues() {
    let (mut game, _events) = started_game(GameOptions::new(3));
    play_all(&mut game, &["b2", "c2"]);

    let mut restored = Game::restore(&game.snapshot()).unwrap();
    assert_eq!(restored.state(), GameState::Playing);
    let _a = restored.join(Player::A, "a").unwrap();
    let _b = restored.join(Player::B, "b").unwrap();

    play_all(&mut restored, &["b3", "a3", "b1"]);
    assert_eq!(restored.winner(), Some(Player::A));
}

#[test]
fn inconsistent_snapshots() {
    let (mut game, _events) = started_game(GameOptions::new(5));
    play_all(&mut game, &["c3", "d4"]);
    let snapshot = game.snapshot();

    let mut wrong_player = snapshot.clone();
    wrong_player.current_player_index = Player::B;
    assert!(matches!(
        Game::restore(&wrong_player),
        Err(GameError::Precondition(PreconditionError::InconsistentSnapshot(_)))
    ));

    let mut wrong_state = snapshot.clone();
    wrong_state.state = GameState::Ended;
    assert!(Game::restore(&wrong_state).is_err());

    let mut occupied = snapshot;
    occupied.moves_history[1].mv = occupied.moves_history[0].mv.clone();
    assert!(Game::restore(&occupied).is_err());
}

fn assert_inconsistent(snapshot: &GameSnapshot) {
    assert!(
        matches!(
            Game::restore(snapshot),
            Err(GameError::Precondition(PreconditionError::InconsistentSnapshot(_)))
        ),
        "restored {:?}",
        snapshot
    );
}

#[test]
fn inconsistent_ended_snapshots() {
    let (mut game, _events) = started_game(GameOptions::new(3));
    play_all(&mut game, &["b2", "c2", "b3", "a3", "b1"]);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.outcome, Some(Outcome::Path));

    let mut wrong_outcome = snapshot.clone();
    wrong_outcome.outcome = Some(Outcome::Resign);
    assert_inconsistent(&wrong_outcome);

    let mut wrong_end = snapshot.clone();
    wrong_end.ended_at = Some(t(999));
    assert_inconsistent(&wrong_end);

    let mut no_end = snapshot;
    no_end.ended_at = None;
    assert_inconsistent(&no_end);
}

#[test]
fn inconsistent_canceled_snapshots() {
    let (mut game, _events) = started_game(GameOptions::new(5));
    play_all(&mut game, &["a1", "b1", "c1"]);
    let mut late = game.snapshot();
    late.state = GameState::Canceled;
    late.ended_at = Some(t(10));
    assert_inconsistent(&late);

    let (mut game, _events) = started_game(GameOptions::new(5));
    play_all(&mut game, &["a1"]);
    let mut early = game.snapshot();
    early.state = GameState::Canceled;
    early.ended_at = Some(t(10));
    let restored = Game::restore(&early).unwrap();
    assert_eq!(restored.state(), GameState::Canceled);
    assert_eq!(restored.ended_at(), Some(t(10)));
}
