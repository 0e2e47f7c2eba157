use super::*;
use classical_engine::MinimaxAgent;
use random_engine::RandomAgent;

/// Always answers with the same square, legal or not.
struct StubbornAgent(Move);

impl Agent for StubbornAgent {
    fn face(&self) -> &str {
        "stubborn"
    }

    fn place(&mut self, _board: &Board, _side: Side) -> Option<Move> {
        Some(self.0)
    }
}

/// Never moves.
struct PassingAgent;

impl Agent for PassingAgent {
    fn face(&self) -> &str {
        "passer"
    }

    fn place(&mut self, _board: &Board, _side: Side) -> Option<Move> {
        None
    }
}

fn replay(record: &GameRecord, start: Board) -> Board {
    record.plies.iter().fold(start, |board, ply| match ply.mv {
        Some(mv) => board.apply_move(ply.side, mv).unwrap(),
        None => board,
    })
}

fn check_consistent(record: &GameRecord, start: Board) {
    let size = record.board_size;
    let end = replay(record, start);

    assert_eq!(end.rows(), record.final_board);
    assert_eq!(end.count(Side::Black), record.black_discs);
    assert_eq!(end.count(Side::White), record.white_discs);
    assert!(record.black_discs + record.white_discs <= size * size);
    assert!(!has_any_legal_move(&end, Side::Black));
    assert!(!has_any_legal_move(&end, Side::White));

    let expected = match record.black_discs.cmp(&record.white_discs) {
        std::cmp::Ordering::Greater => Some(Side::Black),
        std::cmp::Ordering::Less => Some(Side::White),
        std::cmp::Ordering::Equal => None,
    };
    assert_eq!(record.winner, expected);
}

#[test]
fn engines_finish_small_board() {
    let start = Board::new(4).unwrap();
    let mut black = MinimaxAgent::alpha_beta();
    let mut white = MinimaxAgent::plain_minimax();

    let record = play_game(&mut black, &mut white, start.clone()).unwrap();

    assert_eq!(record.board_size, 4);
    assert_eq!(record.black, "🐼");
    assert_eq!(record.white, "🤖");
    assert_eq!(record.plies[0].side, Side::Black);
    check_consistent(&record, start);
}

#[test]
fn random_players_finish_six_by_six() {
    let start = Board::new(6).unwrap();
    let mut black = RandomAgent::seeded(3);
    let mut white = RandomAgent::seeded(4);

    let record = play_game(&mut black, &mut white, start.clone()).unwrap();

    check_consistent(&record, start);
}

#[test]
fn seeded_games_repeat() {
    let run = || {
        let mut black = RandomAgent::seeded(11);
        let mut white = RandomAgent::seeded(12);
        play_game(&mut black, &mut white, Board::standard()).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn sides_alternate_every_ply() {
    let mut black = RandomAgent::seeded(5);
    let mut white = RandomAgent::seeded(6);

    let record = play_game(&mut black, &mut white, Board::new(6).unwrap()).unwrap();

    for (i, ply) in record.plies.iter().enumerate() {
        let expected = if i % 2 == 0 { Side::Black } else { Side::White };
        assert_eq!(ply.side, expected);
    }
}

#[test]
fn illegal_move_is_rejected() {
    let mut black = StubbornAgent(Move::new(0, 0));
    let mut white = RandomAgent::seeded(1);

    let err = play_game(&mut black, &mut white, Board::standard()).unwrap_err();

    match err {
        ArenaError::IllegalMove { side, face, .. } => {
            assert_eq!(side, Side::Black);
            assert_eq!(face, "stubborn");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn off_board_move_is_rejected() {
    let mut black = RandomAgent::seeded(1);
    let mut white = StubbornAgent(Move::new(9, 9));

    let err = play_game(&mut black, &mut white, Board::standard()).unwrap_err();

    assert!(matches!(
        err,
        ArenaError::IllegalMove {
            side: Side::White,
            ..
        }
    ));
}

#[test]
fn pass_with_legal_move_is_rejected() {
    let mut black = PassingAgent;
    let mut white = RandomAgent::seeded(1);

    let err = play_game(&mut black, &mut white, Board::standard()).unwrap_err();

    assert!(matches!(
        err,
        ArenaError::IllegalPass {
            side: Side::Black,
            ..
        }
    ));
}

#[test]
fn blocked_position_ends_after_two_passes() {
    let start = Board::from_rows(&["BBBB", "BBBB", "BBBB", "BBB."]).unwrap();
    let mut black = PassingAgent;
    let mut white = PassingAgent;

    let record = play_game(&mut black, &mut white, start).unwrap();

    assert_eq!(record.plies.len(), 2);
    assert_eq!(record.passes(), 2);
    assert_eq!(record.black_discs, 15);
    assert_eq!(record.white_discs, 0);
    assert_eq!(record.winner, Some(Side::Black));
}

#[test]
fn white_can_open() {
    let start = Board::standard();
    let mut black = RandomAgent::seeded(8);
    let mut white = RandomAgent::seeded(9);

    let record = play_game_from(&mut black, &mut white, start.clone(), Side::White).unwrap();

    assert_eq!(record.plies[0].side, Side::White);
    check_consistent(&record, start);
}

#[test]
fn record_serializes_to_json() {
    let mut black = RandomAgent::seeded(2);
    let mut white = RandomAgent::seeded(3);
    let record = play_game(&mut black, &mut white, Board::new(4).unwrap()).unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: GameRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back, record);
}

#[test]
fn summary_names_the_result() {
    let record = GameRecord {
        board_size: 4,
        black: "a".to_string(),
        white: "b".to_string(),
        plies: Vec::new(),
        final_board: Vec::new(),
        black_discs: 8,
        white_discs: 8,
        winner: None,
    };

    assert_eq!(record.summary(), "a (black) 8 - 8 b (white): draw");
}
