use crate::ship::ShipType;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;
/// Number of cells on a board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Reference fleet: 9 ships over 21 cells.
pub const SHIPS: [ShipType; 4] = [
    ShipType::new("Aircraft Carrier", 4, 1),
    ShipType::new("Submarine", 3, 3),
    ShipType::new("Destroyer", 2, 3),
    ShipType::new("Patrol Boat", 1, 2),
];

/// Samples drawn for one ship before random placement gives up on the
/// current layout.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
/// Full-fleet layouts tried before random placement reports failure.
pub const MAX_FLEET_ATTEMPTS: usize = 100;
/// Candidate placements the deterministic layout search examines before
/// declaring a fleet unplaceable.
pub const MAX_PACKING_STEPS: usize = 200_000;
/// Random target samples before falling back to choosing among the
/// remaining unshot cells directly.
pub const MAX_TARGET_ATTEMPTS: usize = 1_000;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";
