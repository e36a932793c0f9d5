use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(5, 5);
    assert_eq!(pos.row, 5);
    assert_eq!(pos.col, 5);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(5, 5); // Center
    assert_eq!(pos.to_index(), 5 * 10 + 5);
    assert_eq!(pos.to_index(), 55);

    let pos2 = Pos::from_index(55);
    assert_eq!(pos2.row, 5);
    assert_eq!(pos2.col, 5);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(9, 9));
    assert!(Pos::is_valid(5, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(10, 0));
    assert!(!Pos::is_valid(0, 10));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 10);
    assert_eq!(TOTAL_CELLS, 100);
    assert_eq!(CENTER, Pos::new(5, 5));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    // Top-left
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    // Top-right
    assert_eq!(Pos::new(0, 9).to_index(), 9);
    // Bottom-left
    assert_eq!(Pos::new(9, 0).to_index(), 90);
    // Bottom-right
    assert_eq!(Pos::new(9, 9).to_index(), 99);
}

#[test]
fn test_center_distance() {
    assert_eq!(CENTER.center_distance(), 0);
    assert_eq!(Pos::new(5, 4).center_distance(), 1);
    assert_eq!(Pos::new(0, 0).center_distance(), 10);
    assert_eq!(Pos::new(9, 9).center_distance(), 8);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(3, 7);
    assert!(board.is_empty(pos));

    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_full_and_reset() {
    let mut board = Board::new();
    assert!(board.is_board_empty());
    assert!(!board.is_full());

    for idx in 0..TOTAL_CELLS {
        board.place_stone(Pos::from_index(idx), Stone::White);
    }
    assert!(board.is_full());
    assert_eq!(board.stone_count(), TOTAL_CELLS as u32);

    board.reset();
    assert!(board.is_board_empty());
    assert!(!board.is_full());
}

#[test]
fn test_board_restored_equals_original() {
    let mut board = Board::new();
    board.place_stone(Pos::new(4, 4), Stone::Black);
    let snapshot = board.clone();

    board.place_stone(Pos::new(4, 5), Stone::White);
    board.remove_stone(Pos::new(4, 5));
    assert_eq!(board, snapshot);
}
