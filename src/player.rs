use rand::RngCore;

use crate::{
    board::{Board, Grid},
    common::{BoardError, ShotOutcome},
    ship::ShipType,
};

/// Interface implemented by the automated actors that drive a side.
pub trait Player {
    /// Place every ship in `queue` onto the provided board.
    fn place_ships(
        &mut self,
        rng: &mut dyn RngCore,
        board: &mut Board,
        queue: &[ShipType],
    ) -> Result<(), BoardError>;

    /// Choose the next target given the cells already shot on the enemy
    /// board. `None` when no unshot cell remains.
    fn select_target(&mut self, rng: &mut dyn RngCore, shots: &Grid) -> Option<(usize, usize)>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _cell: (usize, usize), _outcome: &ShotOutcome) {}
}
