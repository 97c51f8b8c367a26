#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    board::Board,
    catalog::FleetCatalog,
    common::Side,
    config::BOARD_SIZE,
    events::GameObserver,
    game::GameEngine,
};

fn header(out: &mut String) {
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
}

/// Render a board. Ships are drawn only when `reveal` is set.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let hits = board.hits();
    let misses = board.misses();
    let ships = board.ship_map();
    let mut out = String::new();
    header(&mut out);
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let ch = if hits.get(r, c).unwrap_or(false) {
                'X'
            } else if misses.get(r, c).unwrap_or(false) {
                'o'
            } else if reveal && ships.get(r, c).unwrap_or(false) {
                'S'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Unsunk ships per type, one `name: count` line each.
pub fn render_remaining(board: &Board, catalog: &FleetCatalog) -> String {
    let mut out = String::new();
    for (name, count) in board.remaining_by_type(catalog) {
        let _ = writeln!(out, "{}: {}", name, count);
    }
    out
}

/// Opponent board (ships hidden) above the player's board.
pub fn render_player_view<O: GameObserver>(engine: &GameEngine<O>) -> String {
    let scores = engine.scores();
    let mut out = String::new();
    let _ = writeln!(out, "Opponent board (score {}):", scores.of(Side::Player));
    out.push_str(&render_board(engine.opponent_board(), false));
    out.push_str(&render_remaining(engine.opponent_board(), engine.catalog()));
    let _ = writeln!(out, "\nYour board (opponent score {}):", scores.of(Side::Opponent));
    out.push_str(&render_board(engine.player_board(), true));
    out.push_str(&render_remaining(engine.player_board(), engine.catalog()));
    out
}
