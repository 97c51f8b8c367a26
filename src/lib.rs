#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod catalog;
mod common;
mod config;
pub mod events;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
mod player_ai;
mod ship;
mod turn;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use catalog::*;
pub use common::*;
pub use config::*;
pub use events::{GameEvent, GameObserver, NullObserver};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LogObserver};
pub use placement::{auto_place, find_layout, validate, ManualPlacer};
pub use player::*;
pub use player_ai::*;
pub use ship::*;
pub use turn::*;
