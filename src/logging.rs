#![cfg(feature = "std")]

use std::env;

use log::{self, LevelFilter, Metadata, Record};

use crate::{
    catalog::FleetCatalog,
    common::{CellName, ShotOutcome, Side},
    config::LOG_ENV,
    events::GameObserver,
    ship::{Orientation, Ship},
};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Initialize logging with a level taken from the `BATTLESHIP_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

/// Action log: writes one `info` line per engine notification.
pub struct LogObserver {
    catalog: FleetCatalog,
}

impl LogObserver {
    /// `catalog` sizes the opponent's placement summary.
    pub fn new(catalog: FleetCatalog) -> Self {
        Self { catalog }
    }

    fn shooter(side: Side) -> &'static str {
        match side {
            Side::Player => "You",
            Side::Opponent => "The opponent",
        }
    }
}

impl GameObserver for LogObserver {
    fn on_ship_placed(&mut self, ship: &Ship, side: Side) {
        if side == Side::Player {
            log::info!(
                "{} of length {} placed at {} ({})",
                ship.name(),
                ship.length(),
                CellName(ship.anchor()),
                ship.orientation()
            );
        }
    }

    fn on_placement_complete(&mut self, side: Side) {
        match side {
            Side::Player => log::info!("You have placed all your ships."),
            Side::Opponent => log::info!(
                "The opponent has placed {} ships.",
                self.catalog.total_ships()
            ),
        }
    }

    fn on_orientation_changed(&mut self, orientation: Orientation) {
        log::info!("Ship orientation changed to {}.", orientation);
    }

    fn on_game_started(&mut self) {
        log::info!("The game has started!");
    }

    fn on_shot_result(&mut self, side: Side, cell: (usize, usize), outcome: &ShotOutcome) {
        let who = Self::shooter(side);
        match outcome {
            ShotOutcome::Miss => log::info!("{} fired at {} and missed.", who, CellName(cell)),
            ShotOutcome::Hit(id) => log::info!("{} fired at {} and hit {}.", who, CellName(cell), id),
            ShotOutcome::Sunk(id, name) => {
                log::info!("{} fired at {} and sank the {} ({}).", who, CellName(cell), name, id)
            }
        }
    }

    fn on_game_over(&mut self, winner: Side) {
        match winner {
            Side::Player => log::info!("You won the game!"),
            Side::Opponent => log::info!("You lost the game."),
        }
    }
}
