//! Tests for scripted replays.

use time_travel_tictactoe::{Game, JumpError, Mark, MoveError, Status, Step, StepError};

fn steps(input: &[&str]) -> Vec<Step> {
    input
        .iter()
        .map(|s| s.parse().expect("valid step"))
        .collect()
}

#[test]
fn test_replay_plays_and_jumps() {
    let game = Game::replay(&steps(&["4", "0", "8", "@1", "2"])).expect("valid replay");

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
}

#[test]
fn test_replay_stops_at_rejected_move() {
    let err = Game::replay(&steps(&["4", "4"])).unwrap_err();

    assert_eq!(err.number, 2);
    assert_eq!(err.step, Step::Play(4));
    assert!(matches!(
        err.error,
        StepError::Move(MoveError::SquareOccupied(_))
    ));
    assert!(err.to_string().starts_with("Step 2 (4) rejected"));
}

#[test]
fn test_replay_stops_at_rejected_jump() {
    let err = Game::replay(&steps(&["4", "@5"])).unwrap_err();

    assert_eq!(
        err.error,
        StepError::Jump(JumpError::InvalidIndex { index: 5, len: 2 })
    );
}

#[test]
fn test_view_serializes_to_json() {
    let game = Game::replay(&steps(&["0", "3", "1", "4", "2"])).expect("valid replay");
    let json = serde_json::to_value(game.view()).expect("serializable");

    assert_eq!(json["current_move"], 5);
    assert_eq!(json["status"]["Winner"], "X");
    assert_eq!(json["moves"][0]["description"], "game start");
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(6));
}
