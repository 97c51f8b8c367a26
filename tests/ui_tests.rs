use naval_combat::{
    parse_cell, ui, Board, CellName, FleetCatalog, Orientation, ShipType, Side,
};

#[test]
fn test_cell_names() {
    assert_eq!(CellName((0, 0)).to_string(), "A1");
    assert_eq!(CellName((9, 2)).to_string(), "C10");
    assert_eq!(parse_cell("c10"), Some((9, 2)));
    assert_eq!(parse_cell(" A1 "), Some((0, 0)));
    assert_eq!(parse_cell("A0"), None);
    assert_eq!(parse_cell("7B"), None);
    assert_eq!(parse_cell("B"), None);
}

#[test]
fn test_render_board_hides_ships_unless_revealed() {
    let mut board = Board::new(Side::Opponent);
    board
        .place(&ShipType::new("Destroyer", 2, 1), (0, 0), Orientation::Horizontal)
        .unwrap();
    board.fire(0, 0).unwrap();
    board.fire(1, 0).unwrap();

    let hidden = ui::render_board(&board, false);
    let lines: Vec<&str> = hidden.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "    A B C D E F G H I J");
    assert_eq!(lines[1], " 1  X . . . . . . . . .");
    assert_eq!(lines[2], " 2  o . . . . . . . . .");

    let shown = ui::render_board(&board, true);
    assert_eq!(shown.lines().nth(1), Some(" 1  X S . . . . . . . ."));
}

#[test]
fn test_render_remaining() {
    let catalog = FleetCatalog::reference();
    let mut board = Board::new(Side::Player);
    board.place(&catalog.types()[0], (0, 0), Orientation::Horizontal).unwrap();
    board.place(&catalog.types()[3], (2, 0), Orientation::Horizontal).unwrap();
    assert_eq!(
        ui::render_remaining(&board, &catalog),
        "Aircraft Carrier: 1\nPatrol Boat: 1\n"
    );
    board.fire(2, 0).unwrap();
    assert_eq!(ui::render_remaining(&board, &catalog), "Aircraft Carrier: 1\n");
}
