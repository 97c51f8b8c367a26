//! Turn state machine gating which side may fire.

use crate::common::{GameError, Side};

/// Coarse phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Placement,
    InProgress,
    PlayerWon,
    OpponentWon,
}

impl GamePhase {
    /// Winner of a finished game.
    pub fn winner(self) -> Option<Side> {
        match self {
            GamePhase::PlayerWon => Some(Side::Player),
            GamePhase::OpponentWon => Some(Side::Opponent),
            GamePhase::Placement | GamePhase::InProgress => None,
        }
    }

    pub fn is_over(self) -> bool {
        self.winner().is_some()
    }
}

/// Whose shot is accepted next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Fleets are still being placed.
    NotStarted,
    PlayerTurn,
    OpponentTurn,
    /// Terminal.
    GameOver(Side),
}

impl TurnState {
    pub fn phase(self) -> GamePhase {
        match self {
            TurnState::NotStarted => GamePhase::Placement,
            TurnState::PlayerTurn | TurnState::OpponentTurn => GamePhase::InProgress,
            TurnState::GameOver(Side::Player) => GamePhase::PlayerWon,
            TurnState::GameOver(Side::Opponent) => GamePhase::OpponentWon,
        }
    }

    /// Side allowed to fire, if any.
    pub fn active(self) -> Option<Side> {
        match self {
            TurnState::PlayerTurn => Some(Side::Player),
            TurnState::OpponentTurn => Some(Side::Opponent),
            TurnState::NotStarted | TurnState::GameOver(_) => None,
        }
    }

    /// Leave placement. The player always moves first.
    pub fn start(self) -> Result<TurnState, GameError> {
        match self {
            TurnState::NotStarted => Ok(TurnState::PlayerTurn),
            _ => Err(GameError::InvalidPhase),
        }
    }

    /// Check that `side` may fire now.
    pub fn ensure_turn(self, side: Side) -> Result<(), GameError> {
        match self {
            TurnState::NotStarted => Err(GameError::NotStarted),
            TurnState::GameOver(_) => Err(GameError::InvalidPhase),
            _ if self.active() == Some(side) => Ok(()),
            _ => Err(GameError::InvalidPhase),
        }
    }

    /// State after `shooter` resolved a shot and now has `score` sunk ships
    /// out of `total`.
    pub fn after_shot(self, shooter: Side, score: usize, total: usize) -> TurnState {
        debug_assert_eq!(self.active(), Some(shooter));
        debug_assert!(score <= total);
        if score == total {
            TurnState::GameOver(shooter)
        } else {
            match shooter {
                Side::Player => TurnState::OpponentTurn,
                Side::Opponent => TurnState::PlayerTurn,
            }
        }
    }
}
