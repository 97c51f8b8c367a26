use std::collections::HashSet;

use naval_combat::{
    auto_place, validate, Board, BoardError, FleetCatalog, Orientation, ShotOutcome, Side,
    BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn orientation(horizontal: bool) -> Orientation {
    if horizontal {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

fn random_fleet(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(Side::Opponent);
    auto_place(&mut rng, &mut board, &FleetCatalog::reference().queue()).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn valid_placements_are_contiguous_and_in_bounds(
        row in 0..BOARD_SIZE + 2,
        col in 0..BOARD_SIZE + 2,
        length in 1..=5usize,
        horizontal in any::<bool>(),
    ) {
        let board = Board::new(Side::Player);
        let o = orientation(horizontal);
        let fits = row < BOARD_SIZE && col < BOARD_SIZE && match o {
            Orientation::Horizontal => col + length <= BOARD_SIZE,
            Orientation::Vertical => row + length <= BOARD_SIZE,
        };
        match validate(&board, (row, col), length, o) {
            Ok(cells) => {
                prop_assert!(fits);
                prop_assert_eq!(cells.len(), length);
                prop_assert_eq!(cells[0], (row, col));
                let distinct: HashSet<_> = cells.iter().collect();
                prop_assert_eq!(distinct.len(), length);
                for (i, &(r, c)) in cells.iter().enumerate() {
                    prop_assert!(r < BOARD_SIZE && c < BOARD_SIZE);
                    match o {
                        Orientation::Horizontal => { prop_assert_eq!((r, c), (row, col + i)); }
                        Orientation::Vertical => { prop_assert_eq!((r, c), (row + i, col)); }
                    }
                }
            }
            Err(e) => {
                prop_assert!(!fits);
                prop_assert_eq!(e, BoardError::OutOfBounds);
            }
        }
    }

    #[test]
    fn intersecting_second_ship_overlaps(
        a in (0..BOARD_SIZE, 0..BOARD_SIZE, 1..=4usize, any::<bool>()),
        b in (0..BOARD_SIZE, 0..BOARD_SIZE, 1..=4usize, any::<bool>()),
    ) {
        let mut board = Board::new(Side::Player);
        let first = match validate(&board, (a.0, a.1), a.2, orientation(a.3)) {
            Ok(cells) => cells,
            Err(_) => return Ok(()),
        };
        let second = match validate(&board, (b.0, b.1), b.2, orientation(b.3)) {
            Ok(cells) => cells,
            Err(_) => return Ok(()),
        };
        let ship_a = naval_combat::ShipType::new("A", a.2, 1);
        let ship_b = naval_combat::ShipType::new("B", b.2, 1);
        board.place(&ship_a, (a.0, a.1), orientation(a.3)).unwrap();

        let intersects = second.iter().any(|c| first.contains(c));
        let res = board.place(&ship_b, (b.0, b.1), orientation(b.3)).map(|s| s.id());
        if intersects {
            prop_assert_eq!(res.unwrap_err(), BoardError::Overlap);
            prop_assert_eq!(board.ships().len(), 1);
        } else {
            prop_assert!(res.is_ok());
            prop_assert_eq!(board.ship_map().count_ones(), a.2 + b.2);
        }
    }

    #[test]
    fn second_shot_at_a_cell_is_rejected(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = random_fleet(seed);
        let occupied = board.is_occupied(row, col);
        let first = board.fire(row, col).unwrap();
        prop_assert_eq!(first == ShotOutcome::Miss, !occupied);
        prop_assert_eq!(board.fire(row, col).unwrap_err(), BoardError::AlreadyShot);
        prop_assert_eq!(board.shots().count_ones(), 1);
        let hit_total: usize = board.ships().iter().map(|s| s.hit_count()).sum();
        prop_assert_eq!(hit_total, usize::from(occupied));
    }

    #[test]
    fn every_ship_sinks_on_its_last_cell(seed in any::<u64>()) {
        let catalog = FleetCatalog::reference();
        let mut board = random_fleet(seed);
        let mut sunk = 0;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let before = board.ship_at(r, c).map(|s| s.hit_count());
                let outcome = board.fire(r, c).unwrap();
                match (&outcome, board.ship_at(r, c)) {
                    (ShotOutcome::Miss, None) => {}
                    (ShotOutcome::Hit(id), Some(ship)) => {
                        prop_assert_eq!(*id, ship.id());
                        prop_assert_eq!(Some(ship.hit_count()), before.map(|h| h + 1));
                        prop_assert!(ship.hit_count() < ship.length());
                    }
                    (ShotOutcome::Sunk(id, name), Some(ship)) => {
                        prop_assert_eq!(*id, ship.id());
                        prop_assert_eq!(&name[..], ship.name());
                        prop_assert_eq!(ship.hit_count(), ship.length());
                        sunk += 1;
                    }
                    (o, s) => { prop_assert!(false, "outcome {:?} for ship {:?}", o, s); }
                }
            }
        }
        prop_assert_eq!(sunk, catalog.total_ships());
        prop_assert!(board.all_sunk());
        prop_assert_eq!(board.hits(), board.ship_map());
    }
}
