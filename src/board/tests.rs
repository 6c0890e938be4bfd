use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_center() {
    assert_eq!(Pos::center(), Pos::new(7, 7));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert!(Pos::try_new(15, 3).is_none());
    assert!(!Pos { row: 15, col: 0 }.in_bounds());
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(2, 12)));
    assert_eq!(pos.offset(0, 1, 1), None);
    assert_eq!(pos.offset(-1, 0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(WIN_LENGTH, 5);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_place_only_on_empty() {
    let mut board = Board::new();
    assert!(board.place(Pos::new(3, 4), Mark::X));
    assert!(!board.place(Pos::new(3, 4), Mark::O));
    assert!(!board.place(Pos::new(5, 5), Mark::Empty));
    assert_eq!(board.get(Pos::new(3, 4)), Mark::X);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_with_placed_leaves_original() {
    let board = Board::new();
    let copy = board.with_placed(Pos::new(7, 7), Mark::O);
    assert!(board.is_board_empty());
    assert_eq!(copy.get(Pos::new(7, 7)), Mark::O);
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    assert!(!board.is_full());
    for idx in 0..TOTAL_CELLS {
        let mark = if idx % 2 == 0 { Mark::X } else { Mark::O };
        board.place(Pos::from_index(idx), mark);
    }
    assert!(board.is_full());
    assert_eq!(board.first_empty(), None);
}

#[test]
fn test_occupied_row_major() {
    let mut board = Board::new();
    board.place(Pos::new(9, 1), Mark::O);
    board.place(Pos::new(2, 8), Mark::X);
    board.place(Pos::new(2, 3), Mark::O);
    let cells: Vec<_> = board.occupied().collect();
    assert_eq!(
        cells,
        vec![
            (Pos::new(2, 3), Mark::O),
            (Pos::new(2, 8), Mark::X),
            (Pos::new(9, 1), Mark::O),
        ]
    );
}

#[test]
fn test_from_rows() {
    let board = Board::from_rows(&["X.O", "", "..x"]);
    assert_eq!(board.get(Pos::new(0, 0)), Mark::X);
    assert_eq!(board.get(Pos::new(0, 1)), Mark::Empty);
    assert_eq!(board.get(Pos::new(0, 2)), Mark::O);
    assert_eq!(board.get(Pos::new(2, 2)), Mark::X);
    assert_eq!(board.stone_count(), 3);
}

#[test]
fn test_display_shape() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Mark::X);
    let text = board.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), BOARD_SIZE);
    assert!(lines[0].starts_with("X..."));
    assert!(lines.iter().all(|l| l.len() == BOARD_SIZE));
}
