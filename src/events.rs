//! Notifications the engine emits for presentation layers.

use alloc::vec::Vec;

use crate::common::{ShotOutcome, Side};
use crate::ship::{Orientation, Ship, ShipId};

/// Receiver of engine state changes. Every method defaults to doing nothing.
pub trait GameObserver {
    fn on_ship_placed(&mut self, _ship: &Ship, _side: Side) {}
    fn on_placement_complete(&mut self, _side: Side) {}
    fn on_orientation_changed(&mut self, _orientation: Orientation) {}
    fn on_game_started(&mut self) {}
    /// `side` fired at `cell` on the other side's board.
    fn on_shot_result(&mut self, _side: Side, _cell: (usize, usize), _outcome: &ShotOutcome) {}
    fn on_game_over(&mut self, _winner: Side) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Owned copy of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    ShipPlaced {
        side: Side,
        ship: ShipId,
        cells: Vec<(usize, usize)>,
    },
    PlacementComplete(Side),
    OrientationChanged(Orientation),
    GameStarted,
    ShotResult {
        side: Side,
        cell: (usize, usize),
        outcome: ShotOutcome,
    },
    GameOver(Side),
}

/// Records every notification in order.
impl GameObserver for Vec<GameEvent> {
    fn on_ship_placed(&mut self, ship: &Ship, side: Side) {
        self.push(GameEvent::ShipPlaced {
            side,
            ship: ship.id(),
            cells: ship.cells().to_vec(),
        });
    }

    fn on_placement_complete(&mut self, side: Side) {
        self.push(GameEvent::PlacementComplete(side));
    }

    fn on_orientation_changed(&mut self, orientation: Orientation) {
        self.push(GameEvent::OrientationChanged(orientation));
    }

    fn on_game_started(&mut self) {
        self.push(GameEvent::GameStarted);
    }

    fn on_shot_result(&mut self, side: Side, cell: (usize, usize), outcome: &ShotOutcome) {
        self.push(GameEvent::ShotResult {
            side,
            cell,
            outcome: outcome.clone(),
        });
    }

    fn on_game_over(&mut self, winner: Side) {
        self.push(GameEvent::GameOver(winner));
    }
}

/// Fans every notification out to both observers, left first.
impl<A: GameObserver, B: GameObserver> GameObserver for (A, B) {
    fn on_ship_placed(&mut self, ship: &Ship, side: Side) {
        self.0.on_ship_placed(ship, side);
        self.1.on_ship_placed(ship, side);
    }

    fn on_placement_complete(&mut self, side: Side) {
        self.0.on_placement_complete(side);
        self.1.on_placement_complete(side);
    }

    fn on_orientation_changed(&mut self, orientation: Orientation) {
        self.0.on_orientation_changed(orientation);
        self.1.on_orientation_changed(orientation);
    }

    fn on_game_started(&mut self) {
        self.0.on_game_started();
        self.1.on_game_started();
    }

    fn on_shot_result(&mut self, side: Side, cell: (usize, usize), outcome: &ShotOutcome) {
        self.0.on_shot_result(side, cell, outcome);
        self.1.on_shot_result(side, cell, outcome);
    }

    fn on_game_over(&mut self, winner: Side) {
        self.0.on_game_over(winner);
        self.1.on_game_over(winner);
    }
}
