use alloc::vec::Vec;
use rand::{Rng, RngCore};

use crate::{
    board::{Board, Grid},
    common::BoardError,
    config::{BOARD_SIZE, MAX_TARGET_ATTEMPTS},
    placement,
    player::Player,
    ship::ShipType,
};

/// Scripted opponent: random legal placement and uniformly random targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Uniformly random cell not in `shots`.
///
/// Resamples the whole grid first; once that has failed
/// [`MAX_TARGET_ATTEMPTS`] times it picks directly among the free cells,
/// which keeps the choice uniform.
pub fn random_unshot<R: Rng + ?Sized>(rng: &mut R, shots: &Grid) -> Option<(usize, usize)> {
    for _ in 0..MAX_TARGET_ATTEMPTS {
        let r = rng.random_range(0..BOARD_SIZE);
        let c = rng.random_range(0..BOARD_SIZE);
        if !shots.get(r, c).unwrap_or(true) {
            return Some((r, c));
        }
    }
    let free: Vec<(usize, usize)> = (!*shots).cells().collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

impl Player for RandomPlayer {
    fn place_ships(
        &mut self,
        rng: &mut dyn RngCore,
        board: &mut Board,
        queue: &[ShipType],
    ) -> Result<(), BoardError> {
        placement::auto_place(rng, board, queue)
    }

    fn select_target(&mut self, rng: &mut dyn RngCore, shots: &Grid) -> Option<(usize, usize)> {
        random_unshot(rng, shots)
    }
}
