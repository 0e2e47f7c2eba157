use super::*;

#[test]
fn test_standard_opening_layout() {
    let board = Board::standard();
    assert_eq!(board.size(), 8);
    assert_eq!(board.cell(3, 3), Cell::White);
    assert_eq!(board.cell(4, 4), Cell::White);
    assert_eq!(board.cell(4, 3), Cell::Black);
    assert_eq!(board.cell(3, 4), Cell::Black);
    assert_eq!(board.disc_count(), 4);
    assert_eq!(board.empty_count(), 60);
    assert_eq!(Board::new(8).unwrap(), board);
}

#[test]
fn test_small_opening_is_centered() {
    let board = Board::new(4).unwrap();
    assert_eq!(board.rows(), vec!["....", ".WB.", ".BW.", "...."]);

    let board = Board::new(6).unwrap();
    assert_eq!(board.cell(2, 2), Cell::White);
    assert_eq!(board.cell(3, 3), Cell::White);
    assert_eq!(board.cell(3, 2), Cell::Black);
    assert_eq!(board.cell(2, 3), Cell::Black);
}

#[test]
fn test_invalid_sizes_rejected() {
    assert_eq!(Board::new(3), Err(OthelloError::InvalidSize(3)));
    assert_eq!(Board::new(7), Err(OthelloError::InvalidSize(7)));
    assert_eq!(Board::new(2), Err(OthelloError::InvalidSize(2)));
    assert_eq!(Board::new(28), Err(OthelloError::InvalidSize(28)));
    assert!(matches!(
        Board::from_cells(vec![Cell::Empty; 15]),
        Err(OthelloError::CellCount { .. })
    ));
    assert!(Board::from_rows(&["...", "...", "..."]).is_err());
}

#[test]
fn test_from_rows_round_trips_display() {
    let rows = ["B W .  .", "....", "..XO", "...."];
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(board.cell(0, 0), Cell::Black);
    assert_eq!(board.cell(1, 0), Cell::White);
    assert_eq!(board.cell(2, 2), Cell::Black);
    assert_eq!(board.cell(3, 2), Cell::White);
    assert_eq!(board.to_string(), "BW..\n....\n..BW\n....\n");
    assert!(matches!(
        Board::from_rows(&["B?..", "....", "....", "...."]),
        Err(OthelloError::Parse(_))
    ));
}

#[test]
fn test_is_legal_opening() {
    let board = Board::standard();
    assert!(board.is_legal(Side::Black, Move::new(2, 3)));
    assert!(board.is_legal(Side::Black, Move::new(3, 2)));
    assert!(board.is_legal(Side::Black, Move::new(4, 5)));
    assert!(board.is_legal(Side::Black, Move::new(5, 4)));

    // occupied
    assert!(!board.is_legal(Side::Black, Move::new(3, 3)));
    // empty but flanks nothing
    assert!(!board.is_legal(Side::Black, Move::new(0, 0)));
    assert!(!board.is_legal(Side::Black, Move::new(2, 2)));
    // off the board
    assert!(!board.is_legal(Side::Black, Move::new(8, 0)));
    assert!(!board.is_legal(Side::Black, Move::new(0, 200)));
}

#[test]
fn test_worked_4x4_capture() {
    let board = Board::from_rows(&[".WB.", "WW..", "B.W.", "...B"]).unwrap();
    assert_eq!(board.count(Side::Black), 3);
    assert_eq!(board.count(Side::White), 4);

    let mv = Move::new(0, 0);
    assert_eq!(
        board.flips(Side::Black, mv),
        vec![Move::new(0, 1), Move::new(1, 0), Move::new(1, 1), Move::new(2, 2)]
    );

    let next = board.apply_move(Side::Black, mv).unwrap();
    assert_eq!(next.rows(), vec!["BBB.", "BB..", "B.B.", "...B"]);
    assert_eq!(next.count(Side::Black), 8);
    assert_eq!(next.count(Side::White), 0);

    // input untouched
    assert_eq!(board.rows(), vec![".WB.", "WW..", "B.W.", "...B"]);
}

#[test]
fn test_unterminated_direction_does_not_flip() {
    // the diagonal run of white reaches the edge without a black disc
    let board = Board::from_rows(&[".WB.", "WW..", "B.W.", "...W"]).unwrap();
    let next = board.apply_move(Side::Black, Move::new(0, 0)).unwrap();
    assert_eq!(next.rows(), vec!["BBB.", "BW..", "B.W.", "...W"]);
}

#[test]
fn test_apply_move_rejects_illegal() {
    let board = Board::standard();
    assert_eq!(
        board.apply_move(Side::Black, Move::new(0, 0)),
        Err(OthelloError::IllegalMove {
            side: Side::Black,
            mv: Move::new(0, 0)
        })
    );
    assert_eq!(
        board.apply_move(Side::White, Move::new(9, 1)),
        Err(OthelloError::OutOfBounds {
            mv: Move::new(9, 1),
            size: 8
        })
    );
    assert_eq!(board, Board::standard());
}

#[test]
fn test_opening_move_flips_one() {
    let board = Board::standard();
    let next = board.apply_move(Side::Black, Move::new(3, 2)).unwrap();
    assert_eq!(next.cell(3, 2), Cell::Black);
    assert_eq!(next.cell(3, 3), Cell::Black);
    assert_eq!(next.count(Side::Black), 4);
    assert_eq!(next.count(Side::White), 1);
}

#[test]
fn test_move_coordinates() {
    assert_eq!(Move::new(3, 2).to_coord(), "d3");
    assert_eq!(Move::new(0, 0).to_string(), "a1");
    assert_eq!(Move::new(7, 7).to_coord(), "h8");
}

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Black.opponent(), Side::White);
    assert_eq!(Side::White.opponent(), Side::Black);
    assert_eq!(Side::Black.cell(), Cell::Black);
    assert_eq!(Cell::White.side(), Some(Side::White));
    assert_eq!(Cell::Empty.side(), None);
}
