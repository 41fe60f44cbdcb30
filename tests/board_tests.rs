use salvo::{Board, Coordinate, GridSize, Orientation, Ship, ShipId, ShotOutcome};

fn two_ship_board() -> Board {
    let mut board = Board::new(GridSize::Standard);
    board.add_ship(Ship::new(ShipId(0), 3, Coordinate::new(0, 0), Orientation::Horizontal));
    board.add_ship(Ship::new(ShipId(1), 1, Coordinate::new(5, 5), Orientation::Vertical));
    board
}

#[test]
fn test_empty_board_is_not_all_sunk() {
    let board = Board::new(GridSize::Compact);
    assert!(!board.is_all_sunk());
    assert_eq!(board.unshot().count(), 64);
}

#[test]
fn test_receive_shot_outcomes() {
    let mut board = two_ship_board();

    let miss = board.receive_shot(Coordinate::new(9, 9));
    assert_eq!(
        miss,
        ShotOutcome {
            hit: false,
            ship: None,
            sunk_size: None
        }
    );

    let hit = board.receive_shot(Coordinate::new(0, 1));
    assert_eq!(hit.ship, Some(ShipId(0)));
    assert!(hit.hit);
    assert_eq!(hit.sunk_size, None);

    let sunk = board.receive_shot(Coordinate::new(5, 5));
    assert_eq!(sunk.sunk_size, Some(1));
    assert!(!board.is_all_sunk());

    board.receive_shot(Coordinate::new(0, 0));
    let last = board.receive_shot(Coordinate::new(0, 2));
    assert_eq!(last.sunk_size, Some(3));
    assert!(board.is_all_sunk());
}

#[test]
fn test_hits_misses_and_unshot() {
    let mut board = two_ship_board();
    board.receive_shot(Coordinate::new(0, 0));
    board.receive_shot(Coordinate::new(3, 3));
    board.receive_shot(Coordinate::new(4, 4));

    assert_eq!(board.hits().iter().collect::<Vec<_>>(), vec![Coordinate::new(0, 0)]);
    assert_eq!(board.misses().count(), 2);
    assert_eq!(board.shots().count(), 3);
    assert_eq!(board.unshot().count(), 97);
    assert!(board.has_been_shot(Coordinate::new(3, 3)));
    assert!(!board.has_been_shot(Coordinate::new(3, 4)));
}

#[test]
fn test_remaining_sizes_and_sunk_ships() {
    let mut board = two_ship_board();
    assert_eq!(board.remaining_ship_sizes(), vec![3, 1]);
    board.receive_shot(Coordinate::new(5, 5));
    assert_eq!(board.remaining_ship_sizes(), vec![3]);
    let sunk: Vec<_> = board.sunk_ships().map(|s| s.id()).collect();
    assert_eq!(sunk, vec![ShipId(1)]);
}

#[test]
fn test_occupancy_queries() {
    let board = two_ship_board();
    assert_eq!(board.occupancy().count(), 4);
    assert!(board.is_occupied(Coordinate::new(0, 2)));
    assert_eq!(board.ship_at(Coordinate::new(5, 5)).map(|s| s.id()), Some(ShipId(1)));

    let area = [Coordinate::new(0, 3), Coordinate::new(0, 2), Coordinate::new(1, 2)];
    assert!(board.has_ship_in_any(&area));
    assert_eq!(board.occupied_among(&area), vec![Coordinate::new(0, 2)]);
    assert!(!board.has_ship_in_any(&[Coordinate::new(9, 0)]));
}

#[test]
fn test_display_marks_cells() {
    let mut board = Board::new(GridSize::Compact);
    board.add_ship(Ship::new(ShipId(0), 2, Coordinate::new(0, 0), Orientation::Horizontal));
    board.receive_shot(Coordinate::new(0, 0));
    board.receive_shot(Coordinate::new(1, 0));
    let text = board.to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[1], " 1  X # . . . . . .");
    assert_eq!(rows[2], " 2  o . . . . . . .");
}
