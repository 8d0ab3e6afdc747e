use tictactoe_minimax::{apply_move, deep_copy, initial_board, Board, GameError, Mark, Move};

#[test]
fn test_initial_board_is_empty() {
    let board = initial_board();

    assert!(Move::all().all(|mv| board.get(mv).is_none()));
    assert_eq!(board.count(Mark::X), 0);
    assert_eq!(board.count(Mark::O), 0);
    assert!(!board.is_full());
    assert_eq!(board, Board::default());
}

#[test]
fn test_deep_copy_is_independent() {
    let original: Board = "X.. / .O. / ...".parse().unwrap();
    let copy = deep_copy(&original);
    assert_eq!(copy, original);

    // Building on the copy leaves the original untouched
    let derived = apply_move(&copy, Move::new(2, 2).unwrap()).unwrap();
    assert_eq!(derived.get(Move::new(2, 2).unwrap()), Some(Mark::X));
    assert_eq!(original.get(Move::new(2, 2).unwrap()), None);
    assert_eq!(copy, original);
    assert_eq!(original.count(Mark::X), 1);
    assert_eq!(original.count(Mark::O), 1);
}

#[test]
fn test_move_rejects_out_of_range_coordinates() {
    assert_eq!(
        Move::new(3, 0),
        Err(GameError::OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(
        Move::new(1, 7),
        Err(GameError::OutOfBounds { row: 1, col: 7 })
    );

    let mv = Move::new(2, 1).unwrap();
    assert_eq!((mv.row(), mv.col(), mv.index()), (2, 1, 7));
}

#[test]
fn test_move_all_is_row_major() {
    let indices: Vec<usize> = Move::all().map(|mv| mv.index()).collect();
    assert_eq!(indices, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_parse_board() {
    let board: Board = "XO. / .x- / o_X".parse().unwrap();

    let expected = Board::from_rows([
        [Some(Mark::X), Some(Mark::O), None],
        [None, Some(Mark::X), None],
        [Some(Mark::O), None, Some(Mark::X)],
    ]);
    assert_eq!(board, expected);

    let compact: Board = "XO..X.O.X".parse().unwrap();
    assert_eq!(compact, expected);
}

#[test]
fn test_parse_rejects_bad_input() {
    let wrong_count = "XO. / ...".parse::<Board>();
    assert!(matches!(wrong_count, Err(GameError::InvalidBoard(_))));

    let bad_symbol = "XO? / ... / ...".parse::<Board>();
    match bad_symbol {
        Err(e) => assert!(
            format!("{}", e).contains("unexpected character '?'"),
            "Error should name the bad character"
        ),
        _ => panic!("Unexpected result"),
    }
}

#[test]
fn test_display_board() {
    let board: Board = "X.O / .X. / ..O".parse().unwrap();
    let rendered = format!("{}", board);

    assert_eq!(rendered, "  0 1 2\n0 X . O \n1 . X . \n2 . . O \n");
}

#[test]
fn test_mark_helpers() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(format!("{}{}", Mark::X, Mark::O), "XO");
    assert_eq!(format!("{}", Move::new(1, 2).unwrap()), "(1, 2)");
}
