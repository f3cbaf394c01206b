use fleet_board::{Board, BoardConfig, Cell, FireOutcome, FleetEntry, MAX_SNAPSHOT_SIZE};

mod common;
use common::standard_fleet;

#[test]
fn test_fresh_board() {
    let board = Board::new(standard_fleet()).unwrap();
    let snap = board.snapshot();
    assert_eq!(snap.size(), 10);
    assert_eq!(snap.get(0, 0), Some(Cell::Ship));
    assert_eq!(snap.get(1, 0), Some(Cell::Water));
    assert_eq!(snap.get(10, 0), None);
    let ships = snap.rows().flatten().filter(|&&c| c == Cell::Ship).count();
    assert_eq!(ships, 20);
}

#[test]
fn test_symbol_priority() {
    let mut board = Board::new(standard_fleet()).unwrap();
    board.fire((0, 0));
    board.fire((6, 0));
    board.fire((5, 5));
    let snap = board.snapshot();
    assert_eq!(snap.get(0, 0), Some(Cell::Hit));
    assert_eq!(snap.get(0, 1), Some(Cell::Ship));
    assert_eq!(snap.get(6, 0), Some(Cell::Sunk));
    assert_eq!(snap.get(5, 5), Some(Cell::Water));

    for c in 1..4 {
        board.fire((0, c));
    }
    let snap = board.snapshot();
    for c in 0..4 {
        assert_eq!(snap.get(0, c), Some(Cell::Sunk));
    }
}

#[test]
fn test_snapshot_does_not_mutate() {
    let mut board = Board::new(standard_fleet()).unwrap();
    board.fire((2, 0));
    let first = board.snapshot();
    let second = board.snapshot();
    assert_eq!(first, second);
    assert_eq!(board.ships_remaining(), 10);
}

#[test]
fn test_unbounded_grows_to_fit() {
    let mut fleet = standard_fleet();
    fleet[9] = ((14, 3), (14, 3));
    let board = Board::with_config(fleet, &BoardConfig::unbounded()).unwrap();
    let snap = board.snapshot();
    assert_eq!(snap.size(), 15);
    assert_eq!(snap.get(14, 3), Some(Cell::Ship));
}

#[test]
fn test_display() {
    let mut board = Board::new(standard_fleet()).unwrap();
    board.fire((0, 0));
    board.fire((6, 0));
    let text = board.snapshot().to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].trim_start().starts_with("0  1  2"));
    assert_eq!(lines[1], " 0   X  S  S  S  .  S  S  S  .  .");
    assert_eq!(lines[7], " 6   #  .  S  .  S  .  S  .  .  .");
}

#[test]
fn test_far_away_ship_is_clipped() {
    let config = BoardConfig::unbounded().with_fleet([FleetEntry::new(1, 1)]);

    let mut board = Board::with_config([((usize::MAX, 0), (usize::MAX, 0))], &config).unwrap();
    let snap = board.snapshot();
    assert_eq!(snap.size(), MAX_SNAPSHOT_SIZE);
    assert!(snap.rows().flatten().all(|&c| c == Cell::Water));
    assert_eq!(board.fire((usize::MAX, 0)), FireOutcome::Sunk);

    let board = Board::with_config([((1_000_000, 3), (1_000_000, 3))], &config).unwrap();
    assert_eq!(board.snapshot().size(), MAX_SNAPSHOT_SIZE);
}
