use salvo::{Coordinate, GridSize, Orientation, Ship, ShipId, BoardHalf};

#[test]
fn test_new_and_coordinates() {
    let ship = Ship::new(ShipId(1), 4, Coordinate::new(0, 0), Orientation::Vertical);
    let cells: Vec<_> = ship.coordinates().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0),
            Coordinate::new(3, 0)
        ]
    );
    assert_eq!(ship.hit_mask().len(), 4);
    for c in cells {
        assert!(ship.contains(c));
    }
    assert!(!ship.contains(Coordinate::new(4, 0)));
    assert!(!ship.contains(Coordinate::new(0, 1)));
}

#[test]
fn test_record_hit_and_sunk() {
    let mut ship = Ship::new(ShipId(2), 2, Coordinate::new(1, 1), Orientation::Horizontal);
    assert!(!ship.is_sunk());
    assert!(ship.record_hit(Coordinate::new(1, 1)));
    assert!(!ship.is_sunk());
    // repeat hit is a no-op
    assert!(!ship.record_hit(Coordinate::new(1, 1)));
    assert_eq!(ship.hit_count(), 1);
    // miss
    assert!(!ship.record_hit(Coordinate::new(0, 0)));
    assert!(ship.record_hit(Coordinate::new(1, 2)));
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_mask(), &[true, true]);
}

#[test]
fn test_bounds() {
    let grid = GridSize::Compact;
    let inside = Ship::new(ShipId(0), 3, Coordinate::new(7, 5), Orientation::Horizontal);
    assert!(inside.is_in_bounds(grid));
    let outside = Ship::new(ShipId(0), 3, Coordinate::new(7, 6), Orientation::Horizontal);
    assert!(!outside.is_in_bounds(grid));
    assert!(outside.is_in_bounds(GridSize::Standard));
    let wrapping = Ship::new(ShipId(0), 5, Coordinate::new(254, 0), Orientation::Vertical);
    assert!(!wrapping.is_in_bounds(GridSize::Standard));
}

#[test]
fn test_halo_and_halves() {
    let grid = GridSize::Standard;
    let ship = Ship::new(ShipId(0), 3, Coordinate::new(3, 4), Orientation::Vertical);
    assert_eq!(ship.halo(grid).count(), 12);
    assert_eq!(ship.cells_in(BoardHalf::Top, grid), 2);
    assert_eq!(ship.cells_in(BoardHalf::Bottom, grid), 1);
    assert_eq!(ship.cells_in(BoardHalf::Left, grid), 3);
    assert_eq!(ship.cells_in(BoardHalf::Right, grid), 0);
}

#[test]
fn test_restore_with_hit_mask() {
    let ship = Ship::with_hit_mask(
        ShipId(3),
        3,
        Coordinate::new(0, 0),
        Orientation::Horizontal,
        vec![true, true, true],
    );
    assert!(ship.is_sunk());
}

#[test]
#[should_panic(expected = "hit mask length must equal ship size")]
fn test_mismatched_hit_mask_panics() {
    let _ = Ship::with_hit_mask(
        ShipId(3),
        3,
        Coordinate::new(0, 0),
        Orientation::Horizontal,
        vec![false, false],
    );
}
