use salvo::{BitBoard, BitBoardError, CellMask, Coordinate, GridSize};

#[test]
fn test_set_contains_and_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(Coordinate::new(1, 1)).unwrap();
    assert!(bb.contains(Coordinate::new(1, 1)));
    assert!(!bb.contains(Coordinate::new(1, 2)));

    let err = bb.set(Coordinate::new(4, 0)).unwrap_err();
    assert_eq!(err, BitBoardError::IndexOutOfBounds { row: 4, col: 0 });
    assert!(!bb.contains(Coordinate::new(4, 0)));
}

#[test]
fn test_insert_reports_new_members() {
    let mut mask = CellMask::new();
    assert!(mask.insert(Coordinate::new(3, 7)));
    assert!(!mask.insert(Coordinate::new(3, 7)));
    assert_eq!(mask.count(), 1);
}

#[test]
fn test_from_iter_and_iter_row_major() {
    let mask: CellMask = [Coordinate::new(5, 2), Coordinate::new(0, 1), Coordinate::new(9, 9)]
        .into_iter()
        .collect();
    let cells: Vec<_> = mask.iter().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(0, 1), Coordinate::new(5, 2), Coordinate::new(9, 9)]
    );
    assert_eq!(mask.first(), Some(Coordinate::new(0, 1)));
}

#[test]
fn test_full_matches_grid() {
    assert_eq!(CellMask::full(GridSize::Compact).count(), 64);
    assert_eq!(CellMask::full(GridSize::Standard).count(), 100);
    assert!(!CellMask::full(GridSize::Compact).contains(Coordinate::new(8, 0)));
}

#[test]
fn test_not_stays_within_capacity() {
    let empty = CellMask::new();
    assert_eq!((!empty).count(), 100);
    let compact = CellMask::full(GridSize::Compact);
    assert_eq!((!compact & CellMask::full(GridSize::Compact)).count(), 0);
}

#[test]
fn test_set_algebra() {
    let a: CellMask = [Coordinate::new(0, 0), Coordinate::new(0, 1)].into_iter().collect();
    let b: CellMask = [Coordinate::new(0, 1), Coordinate::new(0, 2)].into_iter().collect();
    assert_eq!((a & b).count(), 1);
    assert_eq!((a | b).count(), 3);
    assert!(a.intersects(&b));

    let mut c = a;
    c |= b;
    c &= b;
    assert_eq!(c, b);
}

#[test]
fn test_halo_is_clipped_and_excludes_self() {
    let grid = GridSize::Standard;
    let corner: CellMask = [Coordinate::new(0, 0)].into_iter().collect();
    assert_eq!(corner.halo(grid).count(), 3);

    let center: CellMask = [Coordinate::new(5, 5)].into_iter().collect();
    assert_eq!(center.halo(grid).count(), 8);

    let bar: CellMask = (3..6).map(|c| Coordinate::new(4, c)).collect();
    let halo = bar.halo(grid);
    assert_eq!(halo.count(), 12);
    assert!(!halo.intersects(&bar));

    let edge: CellMask = [Coordinate::new(7, 7)].into_iter().collect();
    assert_eq!(edge.halo(GridSize::Compact).count(), 3);
}
