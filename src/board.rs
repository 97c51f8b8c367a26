//! One side's board: placed ships, cell occupancy and shot marks.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::catalog::FleetCatalog;
use crate::common::{BoardError, ShotOutcome, Side};
use crate::config::{BOARD_SIZE, CELL_COUNT};
use crate::placement;
use crate::ship::{Orientation, Ship, ShipId, ShipType};

/// Cell mask sized for a board.
pub type Grid = BitBoard<u128, { BOARD_SIZE }>;

/// Shot state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotMark {
    Unshot,
    Miss,
    Hit,
}

pub struct Board {
    side: Side,
    ships: Vec<Ship>,
    /// Index into `ships` for every occupied cell.
    owners: [Option<usize>; CELL_COUNT],
    ship_map: Grid,
    hits: Grid,
    misses: Grid,
}

impl Board {
    /// Create an empty board for `side`.
    pub fn new(side: Side) -> Self {
        Board {
            side,
            ships: Vec::new(),
            owners: [None; CELL_COUNT],
            ship_map: Grid::new(),
            hits: Grid::new(),
            misses: Grid::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        if id.side() != self.side {
            return None;
        }
        self.ships.get(id.number().checked_sub(1)?)
    }

    /// Ship occupying (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        let idx = Self::index(row, col)?;
        self.owners[idx].map(|i| &self.ships[i])
    }

    /// Whether (row, col) holds a ship. Out-of-bounds cells are never occupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.ship_map.get(row, col).unwrap_or(false)
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    pub fn hits(&self) -> Grid {
        self.hits
    }

    pub fn misses(&self) -> Grid {
        self.misses
    }

    /// Every cell that has been shot at.
    pub fn shots(&self) -> Grid {
        self.hits | self.misses
    }

    pub fn mark(&self, row: usize, col: usize) -> Result<ShotMark, BoardError> {
        if self.hits.get(row, col)? {
            Ok(ShotMark::Hit)
        } else if self.misses.get(row, col)? {
            Ok(ShotMark::Miss)
        } else {
            Ok(ShotMark::Unshot)
        }
    }

    /// Number of ships fully sunk.
    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Unsunk ships per catalog type, in catalog order, skipping types with
    /// none left afloat.
    pub fn remaining_by_type<'a>(&self, catalog: &'a FleetCatalog) -> Vec<(&'a str, usize)> {
        catalog
            .types()
            .iter()
            .map(|t| {
                let afloat = self
                    .ships
                    .iter()
                    .filter(|s| s.name() == t.name() && !s.is_sunk())
                    .count();
                (t.name(), afloat)
            })
            .filter(|&(_, n)| n > 0)
            .collect()
    }

    /// Validate and commit a ship of `ship_type` anchored at `anchor`.
    pub fn place(
        &mut self,
        ship_type: &ShipType,
        anchor: (usize, usize),
        orientation: Orientation,
    ) -> Result<&Ship, BoardError> {
        let cells = placement::validate(self, anchor, ship_type.length(), orientation)?;
        self.commit(ship_type, orientation, cells)
    }

    /// Record a validated placement. `cells` must come from
    /// [`placement::validate`] against this board.
    fn commit(
        &mut self,
        ship_type: &ShipType,
        orientation: Orientation,
        cells: Vec<(usize, usize)>,
    ) -> Result<&Ship, BoardError> {
        let mask = Grid::from_cells(cells.iter().copied())?;
        let slot = self.ships.len();
        for &(r, c) in &cells {
            let idx = Self::index(r, c).ok_or(BoardError::OutOfBounds)?;
            self.owners[idx] = Some(slot);
        }
        self.ship_map |= mask;
        let id = ShipId::new(self.side, slot + 1);
        log::debug!("{} placed {} at {:?} {}", self.side, ship_type.name(), cells[0], orientation);
        self.ships.push(Ship::new(id, ship_type, orientation, cells));
        Ok(&self.ships[slot])
    }

    /// Remove every ship and shot mark.
    pub fn clear(&mut self) {
        *self = Board::new(self.side);
    }

    /// Resolve a shot at (row, col).
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        let idx = Self::index(row, col).ok_or(BoardError::OutOfBounds)?;
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(BoardError::AlreadyShot);
        }
        match self.owners[idx] {
            Some(slot) => {
                self.hits.set(row, col)?;
                let ship = &mut self.ships[slot];
                if ship.register_hit() {
                    Ok(ShotOutcome::Sunk(ship.id(), ship.display_name()))
                } else {
                    Ok(ShotOutcome::Hit(ship.id()))
                }
            }
            None => {
                self.misses.set(row, col)?;
                Ok(ShotOutcome::Miss)
            }
        }
    }

    fn index(row: usize, col: usize) -> Option<usize> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(row * BOARD_SIZE + col)
        } else {
            None
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  side: {},\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.side, self.ship_map, self.hits, self.misses, self.ships
        )
    }
}
