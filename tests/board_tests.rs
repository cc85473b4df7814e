use tiny_battleship::{create_board, Board, Cell, GameConfig, GameError, BOARD_SIZE, NUM_SHIPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_default_board_has_full_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = create_board(GameConfig::default(), &mut rng).unwrap();
    assert_eq!(board.size(), BOARD_SIZE);
    assert_eq!(board.count(Cell::Ship), NUM_SHIPS);
    assert_eq!(board.count(Cell::Empty), BOARD_SIZE * BOARD_SIZE - NUM_SHIPS);
    assert!(!board.all_sunk());
}

#[test]
fn test_full_board_placement_terminates() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = Board::random(GameConfig::new(3, 9), &mut rng).unwrap();
    assert_eq!(board.count(Cell::Ship), 9);
}

#[test]
fn test_too_many_ships_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = Board::random(GameConfig::new(4, 17), &mut rng).unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidConfiguration { size: 4, ships: 17 }
    ));
}

#[test]
fn test_zero_size_rejected() {
    assert!(matches!(
        GameConfig::new(0, 0).validate(),
        Err(GameError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_same_seed_same_layout() {
    let mut rng1 = SmallRng::seed_from_u64(99);
    let mut rng2 = SmallRng::seed_from_u64(99);
    let b1 = Board::random(GameConfig::default(), &mut rng1).unwrap();
    let b2 = Board::random(GameConfig::default(), &mut rng2).unwrap();
    assert_eq!(b1, b2);
}

#[test]
fn test_with_ships_and_bounds() {
    let board = Board::with_ships(4, &[(0, 0), (3, 3)]).unwrap();
    assert_eq!(board.get(0, 0).unwrap(), Cell::Ship);
    assert_eq!(board.get(3, 3).unwrap(), Cell::Ship);
    assert_eq!(board.get(1, 2).unwrap(), Cell::Empty);
    assert_eq!(board.ships_remaining(), 2);

    assert!(matches!(
        board.get(4, 0),
        Err(GameError::OutOfBounds { row: 4, col: 0, size: 4 })
    ));
    assert!(Board::with_ships(4, &[(0, 4)]).is_err());
}

#[test]
fn test_rows_iterate_top_to_bottom() {
    let board = Board::with_ships(2, &[(1, 0)]).unwrap();
    let rows: Vec<&[Cell]> = board.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], &[Cell::Empty, Cell::Empty]);
    assert_eq!(rows[1], &[Cell::Ship, Cell::Empty]);
}
