//! The game engine: both boards, the placement queue, scores and the turn
//! gate, owned by one value.
//!
//! The engine is synchronous and has no notion of time. After the player's
//! shot hands the turn over, the caller decides when to ask for
//! [`GameEngine::opponent_move`], immediately or after a presentation delay.

use alloc::boxed::Box;
use rand::RngCore;

use crate::{
    board::Board,
    catalog::FleetCatalog,
    common::{GameError, ShotOutcome, Side},
    events::{GameObserver, NullObserver},
    placement::ManualPlacer,
    player::Player,
    player_ai::RandomPlayer,
    ship::{Orientation, Ship, ShipType},
    turn::{GamePhase, TurnState},
};

/// Enemy ships sunk by each side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Scores {
    pub player: usize,
    pub opponent: usize,
}

impl Scores {
    pub fn of(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    fn bump(&mut self, side: Side) -> usize {
        let score = match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        };
        *score += 1;
        *score
    }
}

/// Core game logic for a human player against a scripted opponent.
pub struct GameEngine<O: GameObserver = NullObserver> {
    catalog: FleetCatalog,
    player_board: Board,
    opponent_board: Board,
    placer: ManualPlacer,
    orientation: Orientation,
    turn: TurnState,
    scores: Scores,
    opponent: Box<dyn Player>,
    observer: O,
}

impl GameEngine<NullObserver> {
    /// Engine for the reference fleet with no observer attached.
    pub fn new() -> Self {
        Self::with_catalog(FleetCatalog::reference())
    }

    pub fn with_catalog(catalog: FleetCatalog) -> Self {
        Self::with_observer(catalog, NullObserver)
    }
}

impl Default for GameEngine<NullObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: GameObserver> GameEngine<O> {
    /// Engine for `catalog` reporting to `observer`. The opponent is a
    /// [`RandomPlayer`] until replaced with [`with_opponent`](Self::with_opponent).
    pub fn with_observer(catalog: FleetCatalog, observer: O) -> Self {
        Self {
            placer: ManualPlacer::new(&catalog),
            catalog,
            player_board: Board::new(Side::Player),
            opponent_board: Board::new(Side::Opponent),
            orientation: Orientation::Vertical,
            turn: TurnState::NotStarted,
            scores: Scores::default(),
            opponent: Box::new(RandomPlayer::new()),
            observer,
        }
    }

    /// Replace the automated opponent.
    pub fn with_opponent(mut self, opponent: Box<dyn Player>) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn catalog(&self) -> &FleetCatalog {
        &self.catalog
    }

    /// The human's board.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The scripted opponent's board.
    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Opponent => &self.opponent_board,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.turn.phase()
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Orientation used for the human's next manual placement.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Ship type waiting for manual placement.
    pub fn next_ship(&self) -> Option<&ShipType> {
        self.placer.next_ship()
    }

    /// Whether the human's placement queue is exhausted.
    pub fn placement_complete(&self) -> bool {
        self.placer.is_complete()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    fn ensure_placement(&self) -> Result<(), GameError> {
        match self.turn {
            TurnState::NotStarted => Ok(()),
            _ => Err(GameError::InvalidPhase),
        }
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), GameError> {
        self.ensure_placement()?;
        if self.orientation != orientation {
            self.orientation = orientation;
            self.observer.on_orientation_changed(orientation);
        }
        Ok(())
    }

    /// Flip the placement orientation and return the new one.
    pub fn toggle_orientation(&mut self) -> Result<Orientation, GameError> {
        let next = self.orientation.toggled();
        self.set_orientation(next)?;
        Ok(next)
    }

    /// Place the human's next queued ship.
    pub fn place_ship(
        &mut self,
        anchor: (usize, usize),
        orientation: Orientation,
    ) -> Result<&Ship, GameError> {
        self.ensure_placement()?;
        let ship = self
            .placer
            .place_next(&mut self.player_board, anchor, orientation)?;
        self.observer.on_ship_placed(ship, Side::Player);
        if self.placer.is_complete() {
            log::debug!("player placement complete");
            self.observer.on_placement_complete(Side::Player);
        }
        Ok(ship)
    }

    /// Randomly place whatever is left of the human's queue.
    pub fn auto_place_player<R: RngCore>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ensure_placement()?;
        let before = self.player_board.ships().len();
        self.placer.place_remaining(rng, &mut self.player_board)?;
        for ship in &self.player_board.ships()[before..] {
            self.observer.on_ship_placed(ship, Side::Player);
        }
        self.observer.on_placement_complete(Side::Player);
        Ok(())
    }

    /// Place the opponent's fleet and hand the first turn to the player.
    pub fn start_game<R: RngCore>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ensure_placement()?;
        if !self.placer.is_complete() {
            return Err(GameError::InvalidPhase);
        }
        self.opponent_board.clear();
        self.opponent
            .place_ships(rng, &mut self.opponent_board, &self.catalog.queue())?;
        for ship in self.opponent_board.ships() {
            self.observer.on_ship_placed(ship, Side::Opponent);
        }
        self.observer.on_placement_complete(Side::Opponent);

        self.turn = self.turn.start()?;
        log::debug!("game started, {} ships per fleet", self.catalog.total_ships());
        self.observer.on_game_started();
        Ok(())
    }

    /// The human fires at `cell` on the opponent's board. A cell that was
    /// already shot is rejected without consuming the turn.
    pub fn fire_at(&mut self, cell: (usize, usize)) -> Result<ShotOutcome, GameError> {
        self.turn.ensure_turn(Side::Player)?;
        self.resolve(Side::Player, cell)
    }

    /// Let the opponent pick a target on the human's board and fire.
    pub fn opponent_move<R: RngCore>(
        &mut self,
        rng: &mut R,
    ) -> Result<((usize, usize), ShotOutcome), GameError> {
        self.turn.ensure_turn(Side::Opponent)?;
        let shots = self.player_board.shots();
        let cell = self
            .opponent
            .select_target(rng, &shots)
            .ok_or(GameError::NoTarget)?;
        let outcome = self.resolve(Side::Opponent, cell)?;
        self.opponent.handle_shot_result(cell, &outcome);
        Ok((cell, outcome))
    }

    fn resolve(&mut self, shooter: Side, cell: (usize, usize)) -> Result<ShotOutcome, GameError> {
        let target = match shooter {
            Side::Player => &mut self.opponent_board,
            Side::Opponent => &mut self.player_board,
        };
        let outcome = target.fire(cell.0, cell.1)?;
        let score = if outcome.is_sunk() {
            self.scores.bump(shooter)
        } else {
            self.scores.of(shooter)
        };
        debug_assert_eq!(score, target.sunk_count());

        self.observer.on_shot_result(shooter, cell, &outcome);
        self.turn = self
            .turn
            .after_shot(shooter, score, self.catalog.total_ships());
        if let TurnState::GameOver(winner) = self.turn {
            log::debug!("game over, {} won {} to {}", winner, score, self.scores.of(shooter.other()));
            self.observer.on_game_over(winner);
        }
        Ok(outcome)
    }
}
