use salvo::{Coordinate, GridSize};

#[test]
fn test_validity_depends_on_grid() {
    let c = Coordinate::new(8, 3);
    assert!(c.is_valid(GridSize::Standard));
    assert!(!c.is_valid(GridSize::Compact));
}

#[test]
fn test_neighbors_are_clipped() {
    let grid = GridSize::Standard;
    let corner = Coordinate::new(0, 0);
    assert_eq!(corner.orthogonal_neighbors(grid).len(), 2);
    assert_eq!(corner.diagonal_neighbors(grid).len(), 1);
    assert_eq!(corner.all_neighbors(grid).len(), 3);

    let inner = Coordinate::new(4, 4);
    assert_eq!(inner.orthogonal_neighbors(grid).len(), 4);
    assert_eq!(inner.diagonal_neighbors(grid).len(), 4);
    assert_eq!(inner.all_neighbors(grid).len(), 8);

    let far = Coordinate::new(9, 5);
    assert_eq!(far.orthogonal_neighbors(grid).len(), 3);
}

#[test]
fn test_offset() {
    let grid = GridSize::Compact;
    let c = Coordinate::new(0, 7);
    assert_eq!(c.offset(1, -1, grid), Some(Coordinate::new(1, 6)));
    assert_eq!(c.offset(-1, 0, grid), None);
    assert_eq!(c.offset(0, 1, grid), None);
}

#[test]
fn test_distances() {
    let a = Coordinate::new(2, 3);
    let b = Coordinate::new(5, 1);
    assert_eq!(a.manhattan_distance(b), 5);
    assert_eq!(a.chebyshev_distance(b), 3);
    assert_eq!(a.chebyshev_distance(Coordinate::new(3, 4)), 1);
}

#[test]
fn test_display() {
    assert_eq!(Coordinate::new(3, 2).to_string(), "C4");
    assert_eq!(Coordinate::new(0, 0).to_string(), "A1");
    assert_eq!(Coordinate::new(9, 9).to_string(), "J10");
}
