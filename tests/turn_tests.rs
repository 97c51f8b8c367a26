use naval_combat::{GameError, GamePhase, Side, TurnState};

#[test]
fn test_not_started_rejects_shots() {
    let t = TurnState::NotStarted;
    assert_eq!(t.phase(), GamePhase::Placement);
    assert_eq!(t.active(), None);
    assert_eq!(t.ensure_turn(Side::Player), Err(GameError::NotStarted));
    assert_eq!(t.ensure_turn(Side::Opponent), Err(GameError::NotStarted));
}

#[test]
fn test_start_once() {
    let t = TurnState::NotStarted.start().unwrap();
    assert_eq!(t, TurnState::PlayerTurn);
    assert_eq!(t.phase(), GamePhase::InProgress);
    assert_eq!(t.start(), Err(GameError::InvalidPhase));
}

#[test]
fn test_turns_alternate() {
    let t = TurnState::PlayerTurn;
    assert!(t.ensure_turn(Side::Player).is_ok());
    assert_eq!(t.ensure_turn(Side::Opponent), Err(GameError::InvalidPhase));

    let t = t.after_shot(Side::Player, 3, 9);
    assert_eq!(t, TurnState::OpponentTurn);
    assert_eq!(t.active(), Some(Side::Opponent));

    let t = t.after_shot(Side::Opponent, 8, 9);
    assert_eq!(t, TurnState::PlayerTurn);
}

#[test]
fn test_game_over_only_at_total() {
    assert_eq!(
        TurnState::PlayerTurn.after_shot(Side::Player, 9, 9),
        TurnState::GameOver(Side::Player)
    );
    assert_eq!(
        TurnState::OpponentTurn.after_shot(Side::Opponent, 9, 9),
        TurnState::GameOver(Side::Opponent)
    );

    let over = TurnState::GameOver(Side::Opponent);
    assert_eq!(over.phase(), GamePhase::OpponentWon);
    assert!(over.phase().is_over());
    assert_eq!(over.ensure_turn(Side::Player), Err(GameError::InvalidPhase));
    assert_eq!(over.ensure_turn(Side::Opponent), Err(GameError::InvalidPhase));
    assert_eq!(over.start(), Err(GameError::InvalidPhase));
}
