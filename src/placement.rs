//! Placement validation and the two fleet placement modes.
//!
//! [`validate`] is pure: it computes the cells a candidate ship would cover
//! and leaves committing them to the caller. [`ManualPlacer`] walks the
//! catalog queue one ship at a time; [`auto_place`] fills a board by random
//! rejection sampling and falls back to [`find_layout`] when sampling keeps
//! getting stuck.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::board::{Board, Grid};
use crate::catalog::FleetCatalog;
use crate::common::{BoardError, GameError};
use crate::config::{
    BOARD_SIZE, CELL_COUNT, MAX_FLEET_ATTEMPTS, MAX_PACKING_STEPS, MAX_PLACEMENT_ATTEMPTS,
};
use crate::ship::{Orientation, Ship, ShipType};

/// Cells a ship of `length` would occupy from `anchor`, or why it cannot go
/// there.
pub fn validate(
    board: &Board,
    anchor: (usize, usize),
    length: usize,
    orientation: Orientation,
) -> Result<Vec<(usize, usize)>, BoardError> {
    let (row, col) = anchor;
    if length == 0 || row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(BoardError::OutOfBounds);
    }
    let room = match orientation {
        Orientation::Horizontal => BOARD_SIZE - col,
        Orientation::Vertical => BOARD_SIZE - row,
    };
    if room < length {
        return Err(BoardError::OutOfBounds);
    }
    let cells: Vec<(usize, usize)> = (0..length).map(|i| orientation.step(anchor, i)).collect();
    if cells.iter().any(|&(r, c)| board.is_occupied(r, c)) {
        return Err(BoardError::Overlap);
    }
    Ok(cells)
}

/// Uniformly random anchor cell and orientation.
fn sample_placement<R: Rng + ?Sized>(rng: &mut R) -> ((usize, usize), Orientation) {
    let anchor = (rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
    let orientation = if rng.random_bool(0.5) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    (anchor, orientation)
}

/// Place one ship at a random legal position.
pub fn random_place<'b, R: Rng + ?Sized>(
    rng: &mut R,
    board: &'b mut Board,
    ship_type: &ShipType,
) -> Result<&'b Ship, BoardError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let (anchor, orientation) = sample_placement(rng);
        if validate(board, anchor, ship_type.length(), orientation).is_ok() {
            return board.place(ship_type, anchor, orientation);
        }
    }
    Err(BoardError::UnableToPlaceShip)
}

/// Randomly place every ship in `queue` on `board`.
///
/// A layout that paints itself into a corner is discarded and the whole
/// queue retried, up to [`MAX_FLEET_ATTEMPTS`] times, before a deterministic
/// search is tried. Ships already on the board before the call are kept. On
/// failure the board is left exactly as it was.
pub fn auto_place<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    queue: &[ShipType],
) -> Result<(), BoardError> {
    let existing: Vec<(ShipType, (usize, usize), Orientation)> = board
        .ships()
        .iter()
        .map(|s| {
            let t = ShipType::named(alloc::string::String::from(s.name()), s.length(), 1);
            (t, s.anchor(), s.orientation())
        })
        .collect();

    for attempt in 0..MAX_FLEET_ATTEMPTS {
        if attempt > 0 {
            log::debug!("{} fleet layout stuck, retrying (attempt {})", board.side(), attempt + 1);
            restore(board, &existing)?;
        }
        let placed = queue
            .iter()
            .try_for_each(|t| random_place(rng, board, t).map(|_| ()));
        match placed {
            Ok(()) => return Ok(()),
            Err(BoardError::UnableToPlaceShip) => continue,
            Err(e) => {
                restore(board, &existing)?;
                return Err(e);
            }
        }
    }

    restore(board, &existing)?;
    log::debug!("{} random layout gave up, searching", board.side());
    match find_layout(board.ship_map(), queue) {
        Some(layout) => {
            for (t, (anchor, orientation)) in queue.iter().zip(layout) {
                board.place(t, anchor, orientation)?;
            }
            Ok(())
        }
        None => Err(BoardError::UnableToPlaceShip),
    }
}

/// Reset `board` to just the ships in `existing`.
fn restore(
    board: &mut Board,
    existing: &[(ShipType, (usize, usize), Orientation)],
) -> Result<(), BoardError> {
    board.clear();
    for (t, anchor, orientation) in existing {
        board.place(t, *anchor, *orientation)?;
    }
    Ok(())
}

/// Deterministic layout for `queue` on the free cells of `occupied`, one
/// `(anchor, orientation)` per queue entry.
///
/// Depth-first, longest ships first, scanning anchors in row-major order.
/// Equal-length ships are only tried in increasing anchor order. Returns
/// `None` when no layout exists or the search runs past
/// [`MAX_PACKING_STEPS`] candidates.
pub fn find_layout(
    occupied: Grid,
    queue: &[ShipType],
) -> Option<Vec<((usize, usize), Orientation)>> {
    let mut order: Vec<usize> = (0..queue.len()).collect();
    order.sort_by(|&a, &b| queue[b].length().cmp(&queue[a].length()));

    let mut search = LayoutSearch {
        queue,
        order,
        slots: vec![None; queue.len()],
        steps: 0,
    };
    if search.place_from(0, occupied, 0) {
        search.slots.into_iter().collect()
    } else {
        None
    }
}

struct LayoutSearch<'q> {
    queue: &'q [ShipType],
    order: Vec<usize>,
    slots: Vec<Option<((usize, usize), Orientation)>>,
    steps: usize,
}

impl LayoutSearch<'_> {
    /// Place `order[depth..]`, trying candidates from index `first` on.
    /// Candidate `i` is anchor cell `i / 2`, horizontal when `i` is even.
    fn place_from(&mut self, depth: usize, occupied: Grid, first: usize) -> bool {
        let q = match self.order.get(depth) {
            Some(&q) => q,
            None => return true,
        };
        let length = self.queue[q].length();
        for candidate in first..CELL_COUNT * 2 {
            if self.steps >= MAX_PACKING_STEPS {
                return false;
            }
            self.steps += 1;

            let cell = candidate / 2;
            let anchor = (cell / BOARD_SIZE, cell % BOARD_SIZE);
            let orientation = if candidate % 2 == 0 {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let footprint = match footprint(occupied, anchor, length, orientation) {
                Some(mask) => mask,
                None => continue,
            };

            let next_first = match self.order.get(depth + 1) {
                Some(&n) if self.queue[n].length() == length => candidate + 1,
                _ => 0,
            };
            self.slots[q] = Some((anchor, orientation));
            if self.place_from(depth + 1, occupied | footprint, next_first) {
                return true;
            }
        }
        self.slots[q] = None;
        false
    }
}

/// Cells of the ship as a mask, or `None` if it leaves the board or hits
/// `occupied`.
fn footprint(
    occupied: Grid,
    anchor: (usize, usize),
    length: usize,
    orientation: Orientation,
) -> Option<Grid> {
    let mask = Grid::from_cells((0..length).map(|i| orientation.step(anchor, i))).ok()?;
    if (occupied & mask).is_empty() {
        Some(mask)
    } else {
        None
    }
}

/// Manual placement queue for one side.
#[derive(Debug, Clone)]
pub struct ManualPlacer {
    queue: Vec<ShipType>,
    cursor: usize,
}

impl ManualPlacer {
    /// Queue every ship instance of `catalog`, in catalog order.
    pub fn new(catalog: &FleetCatalog) -> Self {
        Self {
            queue: catalog.queue(),
            cursor: 0,
        }
    }

    /// The ship type the next [`place_next`](Self::place_next) will place.
    pub fn next_ship(&self) -> Option<&ShipType> {
        self.queue.get(self.cursor)
    }

    /// Ship types still waiting to be placed.
    pub fn pending(&self) -> &[ShipType] {
        &self.queue[self.cursor..]
    }

    pub fn placed(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    /// Place the next queued ship at `anchor`. Rejected placements leave the
    /// queue where it was.
    pub fn place_next<'b>(
        &mut self,
        board: &'b mut Board,
        anchor: (usize, usize),
        orientation: Orientation,
    ) -> Result<&'b Ship, GameError> {
        let ship_type = self.queue.get(self.cursor).ok_or(GameError::InvalidPhase)?;
        let ship = board.place(ship_type, anchor, orientation)?;
        self.cursor += 1;
        Ok(ship)
    }

    /// Randomly place everything still queued and exhaust the queue.
    pub fn place_remaining<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
    ) -> Result<(), GameError> {
        if self.is_complete() {
            return Err(GameError::InvalidPhase);
        }
        auto_place(rng, board, &self.queue[self.cursor..])?;
        self.cursor = self.queue.len();
        Ok(())
    }
}
