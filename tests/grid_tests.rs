use broadside::{Cell, GameError, Grid, ShotResult, GRID_SIZE};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            assert_eq!(grid.cell(x, y).unwrap(), Cell::Empty);
        }
    }
    assert_eq!(grid.ship_cells_remaining(), 0);
    assert!(!grid.has_ship_cells());
}

#[test]
fn test_shot_transitions() {
    let mut grid = Grid::new();
    grid.set(2, 3, Cell::Ship).unwrap();

    assert_eq!(grid.receive_shot(2, 3).unwrap(), ShotResult::Hit);
    assert_eq!(grid.cell(2, 3).unwrap(), Cell::Hit);

    assert_eq!(grid.receive_shot(0, 0).unwrap(), ShotResult::Miss);
    assert_eq!(grid.cell(0, 0).unwrap(), Cell::Miss);
}

#[test]
fn test_resolved_cells_reject_second_shot() {
    let mut grid = Grid::new();
    grid.set(5, 5, Cell::Ship).unwrap();
    grid.receive_shot(5, 5).unwrap();
    assert!(matches!(
        grid.receive_shot(5, 5),
        Err(GameError::InvalidOperation(_))
    ));

    grid.receive_shot(1, 1).unwrap();
    assert!(matches!(
        grid.receive_shot(1, 1),
        Err(GameError::InvalidOperation(_))
    ));
}

#[test]
fn test_out_of_bounds_access() {
    let grid = Grid::new();
    assert_eq!(
        grid.cell(GRID_SIZE, 0),
        Err(GameError::OutOfBounds { x: GRID_SIZE, y: 0 })
    );
}

#[test]
fn test_ship_cell_counting() {
    let mut grid = Grid::new();
    grid.set(0, 0, Cell::Ship).unwrap();
    grid.set(1, 0, Cell::Ship).unwrap();
    assert_eq!(grid.ship_cells_remaining(), 2);
    assert!(grid.has_ship_cells());

    grid.receive_shot(0, 0).unwrap();
    assert_eq!(grid.ship_cells_remaining(), 1);
    grid.receive_shot(1, 0).unwrap();
    assert_eq!(grid.ship_cells_remaining(), 0);
    assert!(!grid.has_ship_cells());
}

#[test]
fn test_cell_byte_vocabulary() {
    for cell in [Cell::Empty, Cell::Ship, Cell::Hit, Cell::Miss] {
        assert_eq!(Cell::from_byte(cell.to_byte()), Some(cell));
    }
    assert_eq!(Cell::from_byte(4), None);
    assert_eq!(Cell::from_byte(255), None);
}
