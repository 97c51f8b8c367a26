use naval_combat::{
    random_unshot, GameEngine, GameError, GameEvent, GamePhase, ShotOutcome, Side, TurnState,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Scores track sunk ships exactly and the game ends the moment one
    /// side has sunk the whole enemy fleet.
    #[test]
    fn random_games_end_exactly_at_total(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::with_observer(Default::default(), Vec::<GameEvent>::new());
        engine.auto_place_player(&mut rng).unwrap();
        engine.start_game(&mut rng).unwrap();
        let total = engine.catalog().total_ships();

        let mut rounds = 0;
        while !engine.phase().is_over() {
            rounds += 1;
            prop_assert!(rounds <= 100);

            let target = random_unshot(&mut rng, &engine.opponent_board().shots()).unwrap();
            let before = engine.scores();
            let outcome = engine.fire_at(target).unwrap();
            let after = engine.scores();
            prop_assert_eq!(after.player, before.player + usize::from(outcome.is_sunk()));
            prop_assert_eq!(after.player, engine.opponent_board().sunk_count());
            prop_assert!(after.player <= total);
            if after.player == total {
                prop_assert_eq!(engine.phase(), GamePhase::PlayerWon);
                break;
            }
            prop_assert_eq!(engine.turn(), TurnState::OpponentTurn);

            let before = engine.scores();
            let (_, outcome) = engine.opponent_move(&mut rng).unwrap();
            let after = engine.scores();
            prop_assert_eq!(after.opponent, before.opponent + usize::from(outcome.is_sunk()));
            prop_assert_eq!(after.opponent, engine.player_board().sunk_count());
            prop_assert!(after.opponent <= total);
            if after.opponent == total {
                prop_assert_eq!(engine.phase(), GamePhase::OpponentWon);
            } else {
                prop_assert_eq!(engine.turn(), TurnState::PlayerTurn);
            }
        }

        let winner = engine.phase().winner().unwrap();
        prop_assert_eq!(engine.scores().of(winner), total);
        prop_assert!(engine.scores().of(winner.other()) < total);
        prop_assert!(engine.board(winner.other()).all_sunk());
        prop_assert_eq!(engine.fire_at((0, 0)).unwrap_err(), GameError::InvalidPhase);

        let events = engine.into_observer();
        let sinks = |side: Side| events
            .iter()
            .filter(|e| matches!(e, GameEvent::ShotResult { side: s, outcome: ShotOutcome::Sunk(..), .. } if *s == side))
            .count();
        prop_assert_eq!(sinks(winner), total);
        prop_assert_eq!(events.last(), Some(&GameEvent::GameOver(winner)));
    }

    /// Rejected shots leave the turn and both boards untouched.
    #[test]
    fn repeated_shot_keeps_turn(seed in any::<u64>(), row in 0..10usize, col in 0..10usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        engine.auto_place_player(&mut rng).unwrap();
        engine.start_game(&mut rng).unwrap();

        engine.fire_at((row, col)).unwrap();
        if engine.phase().is_over() {
            return Ok(());
        }
        engine.opponent_move(&mut rng).unwrap();
        let player_shots = engine.player_board().shots();
        let opponent_shots = engine.opponent_board().shots();

        prop_assert!(engine.fire_at((row, col)).is_err());
        prop_assert_eq!(engine.turn(), TurnState::PlayerTurn);
        prop_assert_eq!(engine.player_board().shots(), player_shots);
        prop_assert_eq!(engine.opponent_board().shots(), opponent_shots);
    }
}
