//! Shared types: sides, shot outcomes and the engine's error kinds.

use alloc::borrow::Cow;
use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::ShipId;

/// One of the two fleets in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The human player.
    Player,
    /// The scripted opponent.
    Opponent,
}

impl Side {
    /// The side across the table.
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell held no ship.
    Miss,
    /// The cell held a segment of a ship that is still afloat.
    Hit(ShipId),
    /// The shot hit the last intact segment of the ship.
    Sunk(ShipId, Cow<'static, str>),
}

impl ShotOutcome {
    /// The ship struck by the shot, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Sunk(id, _) => Some(*id),
        }
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Sunk(..))
    }
}

/// Errors returned by board level operations (placement and shots).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A cell, or part of a ship, falls outside the grid.
    OutOfBounds,
    /// Ship placement overlaps another ship.
    Overlap,
    /// The cell was already shot at.
    AlreadyShot,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { .. } => BoardError::OutOfBounds,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Position is outside the board"),
            BoardError::Overlap => write!(f, "Ships cannot overlap"),
            BoardError::AlreadyShot => write!(f, "This position was already shot at"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Errors returned by engine commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A board level failure.
    Board(BoardError),
    /// The command is not accepted in the current phase or turn.
    InvalidPhase,
    /// Shots are not accepted until the game has been started.
    NotStarted,
    /// The automated actor found no unshot cell to target.
    NoTarget,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::InvalidPhase => write!(f, "Command not allowed in the current phase"),
            GameError::NotStarted => write!(f, "The game has not started yet"),
            GameError::NoTarget => write!(f, "No unshot cell left to target"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Displays a cell as column letter plus 1-based row, e.g. `(2, 0)` as `A3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellName(pub (usize, usize));

impl fmt::Display for CellName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.0;
        let letter = (b'A' + col as u8) as char;
        write!(f, "{}{}", letter, row + 1)
    }
}

/// Parse `A1`-style notation (case-insensitive) into `(row, col)`.
/// Does not check against the board size.
pub fn parse_cell(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let mut chars = input.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let col = (letter as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}
