use board_rules::{Color, GameState, Phase, PieceKind, SelectOutcome, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn click_select_then_move_passes_the_turn() {
    let mut game = GameState::new();
    assert_eq!(game.select_square(sq("e2")), SelectOutcome::Selected(sq("e2")));
    assert_eq!(game.phase(), Phase::AwaitingDestination(sq("e2")));
    assert_eq!(game.selected_square(), Some(sq("e2")));

    let SelectOutcome::Moved(record) = game.select_square(sq("e4")) else {
        panic!("expected a move");
    };
    assert_eq!((record.from, record.to), (sq("e2"), sq("e4")));
    assert_eq!(game.current_turn(), Color::Black);
    assert_eq!(game.phase(), Phase::AwaitingSelection);

    let pawn = game.piece_at(sq("e4")).unwrap();
    assert!(pawn.has_moved);
    assert_eq!(pawn.square, sq("e4"));
    assert!(game.piece_at(sq("e2")).is_none());
    assert!(game.board().is_consistent());
}

#[test]
fn empty_square_click_while_awaiting_selection_is_a_no_op() {
    let mut game = GameState::new();
    assert_eq!(game.select_square(sq("e4")), SelectOutcome::Ignored);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.selected_square(), None);
    assert_eq!(game.current_turn(), Color::White);
}

#[test]
fn illegal_destination_deselects_without_moving() {
    let mut game = GameState::new();
    let before = game.board().clone();
    game.select_square(sq("e2"));
    assert_eq!(game.select_square(sq("e5")), SelectOutcome::Deselected);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.board(), &before);
    assert_eq!(game.current_turn(), Color::White);
}

#[test]
fn clicking_another_own_piece_deselects_instead_of_reselecting() {
    let mut game = GameState::new();
    game.select_square(sq("e2"));
    assert_eq!(game.select_square(sq("d2")), SelectOutcome::Deselected);
    assert_eq!(game.selected_square(), None);

    // A second click is needed to pick up d2.
    assert_eq!(game.select_square(sq("d2")), SelectOutcome::Selected(sq("d2")));
}

#[test]
fn clicking_the_selected_piece_again_deselects() {
    let mut game = GameState::new();
    game.select_square(sq("g1"));
    assert_eq!(game.select_square(sq("g1")), SelectOutcome::Deselected);
}

#[test]
fn turns_alternate_strictly() {
    let mut game = GameState::new();
    let script = [
        ("e2", "e4", Color::Black),
        ("e7", "e5", Color::White),
        ("g1", "f3", Color::Black),
        ("b8", "c6", Color::White),
    ];
    for (from, to, next) in script {
        // Selecting a piece of the side not on move never sticks.
        let wrong = if next == Color::Black { "a7" } else { "a2" };
        assert_eq!(game.select_square(sq(wrong)), SelectOutcome::Ignored);

        game.select_square(sq(from));
        assert!(matches!(game.select_square(sq(to)), SelectOutcome::Moved(_)));
        assert_eq!(game.current_turn(), next);
    }
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.history()[2].kind, PieceKind::Knight);
}

#[test]
fn capture_discards_the_captured_piece() {
    let mut game = GameState::new();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")] {
        game.try_move(sq(from), sq(to)).unwrap();
    }
    let record = game.history().last().copied().unwrap();
    assert_eq!(record.captured, Some(PieceKind::Pawn));
    assert_eq!(game.board().pieces_of(Color::Black).count(), 15);
    assert_eq!(game.piece_at(sq("d5")).unwrap().color, Color::White);
}

#[test]
fn core_rules_let_a_king_be_captured_and_play_on() {
    let mut game = GameState::new();
    // Shortest route to the black king under occupancy-only rules.
    for (from, to) in [
        ("e2", "e4"),
        ("f7", "f6"),
        ("d1", "h5"),
        ("a7", "a6"),
        ("h5", "e8"),
    ] {
        game.try_move(sq(from), sq(to)).unwrap();
    }
    assert_eq!(game.board().king_square(Color::Black), None);
    assert_eq!(game.current_turn(), Color::Black);
    assert!(!game.status().is_over());
    assert_eq!(game.select_square(sq("a6")), SelectOutcome::Selected(sq("a6")));
}

#[test]
fn highlight_query_matches_what_a_click_accepts() {
    let game = GameState::new();
    let dests = game.legal_destinations(sq("b1"));
    assert_eq!(dests.len(), 2);
    assert!(game.legal_destinations(sq("e4")).is_empty());

    for to in dests {
        let mut g = game.clone();
        g.select_square(sq("b1"));
        assert!(matches!(g.select_square(to), SelectOutcome::Moved(_)));
    }
}

#[test]
fn programmatic_move_drops_a_held_selection() {
    let mut game = GameState::new();
    game.select_square(sq("g1"));
    game.try_move(sq("e2"), sq("e4")).unwrap();
    assert_eq!(game.selected_square(), None);
    assert_eq!(game.current_turn(), Color::Black);

    // Black clicking the knight's destination must not move the White knight.
    assert_eq!(game.select_square(sq("f3")), SelectOutcome::Ignored);
    assert_eq!(game.piece_at(sq("g1")).unwrap().kind, PieceKind::Knight);
    assert!(game.piece_at(sq("f3")).is_none());
    assert_eq!(game.current_turn(), Color::Black);
    assert_eq!(game.history().len(), 1);

    assert_eq!(game.select_square(sq("e7")), SelectOutcome::Selected(sq("e7")));
    let SelectOutcome::Moved(record) = game.select_square(sq("e5")) else {
        panic!("expected a move");
    };
    assert_eq!(record.color, Color::Black);
    assert_eq!(game.current_turn(), Color::White);
}

#[test]
fn changing_rules_drops_a_held_selection() {
    let mut game = GameState::new();
    game.select_square(sq("e2"));
    let game = game.with_rules(board_rules::RuleOptions::standard());
    assert_eq!(game.phase(), Phase::AwaitingSelection);
}
