//! Tests for the session layer: scoring across matches and the
//! reject-and-re-prompt loop.

use connect_k::{
    run_match, Coord, MatchInProgress, MatchResult, MatchSetup, MoveError, Outcome, Piece,
    ScriptedSource, Session, WinKind, WinLength,
};

fn coords(list: &[(usize, usize)]) -> Vec<Coord> {
    list.iter().map(|&(row, col)| Coord::new(row, col)).collect()
}

/// Script where X takes the top row.
fn x_wins_script() -> ScriptedSource {
    ScriptedSource::new(coords(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]))
}

/// Script ending X O X / O X X / O X O with no line.
fn draw_script() -> ScriptedSource {
    ScriptedSource::new(coords(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (2, 0),
        (1, 2),
        (2, 2),
        (2, 1),
    ]))
}

#[test]
fn test_win_credits_the_winner() {
    let mut session = Session::new("Ada", "Grace");
    let report = session
        .play_match(3, &mut x_wins_script())
        .expect("valid size");

    assert_eq!(report.winner(), Some("Ada"));
    assert_eq!(report.moves(), 5);
    assert_eq!(
        report.outcome(),
        Outcome::Winner {
            piece: Piece::X,
            kind: WinKind::Row
        }
    );
    assert_eq!(session.player_x().wins(), 1);
    assert_eq!(session.player_o().wins(), 0);
    assert_eq!(session.draws(), 0);
}

#[test]
fn test_o_win_credits_o() {
    let mut session = Session::new("Ada", "Grace");
    // X scatters; O takes the middle row.
    let mut source = ScriptedSource::new(coords(&[
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (2, 2),
        (1, 2),
    ]));
    let report = session.play_match(3, &mut source).expect("valid size");

    assert_eq!(report.winner(), Some("Grace"));
    assert_eq!(report.outcome().winner(), Some(Piece::O));
    assert_eq!(session.player_o().wins(), 1);
    assert_eq!(session.player_x().wins(), 0);
}

#[test]
fn test_draw_counts_no_winner() {
    let mut session = Session::new("Ada", "Grace");
    let report = session.play_match(3, &mut draw_script()).expect("valid size");

    assert_eq!(report.winner(), None);
    assert!(report.outcome().is_draw());
    assert_eq!(report.moves(), 9);
    assert_eq!(session.draws(), 1);
    assert_eq!(session.player_x().wins(), 0);
    assert_eq!(session.player_o().wins(), 0);
}

#[test]
fn test_wins_accumulate_across_matches() {
    let mut session = Session::new("Ada", "Grace");
    session
        .play_match(3, &mut x_wins_script())
        .expect("valid size");
    session
        .play_match(3, &mut draw_script())
        .expect("valid size");
    session
        .play_match(3, &mut x_wins_script())
        .expect("valid size");

    assert_eq!(session.player_x().wins(), 2);
    assert_eq!(session.player_o().wins(), 0);
    assert_eq!(session.draws(), 1);
    assert_eq!(session.player_for(Piece::X).name(), "Ada");
}

#[test]
fn test_rejected_moves_reprompt_same_player() {
    let mut session = Session::new("Ada", "Grace");
    // O first answers with an occupied cell, then an off-board one, and
    // only then a legal coordinate; the match still completes.
    let mut source = ScriptedSource::new(coords(&[
        (0, 0),
        (0, 0),
        (5, 5),
        (1, 1),
        (0, 1),
        (2, 2),
        (0, 2),
    ]));
    let report = session.play_match(3, &mut source).expect("valid size");

    assert_eq!(report.winner(), Some("Ada"));
    assert_eq!(report.moves(), 5);
    assert_eq!(source.remaining(), 0);

    let rejected = source.rejected();
    assert_eq!(rejected.len(), 2);
    assert_eq!(rejected[0].0.piece(), Piece::O);
    assert!(matches!(rejected[0].1, MoveError::CellOccupied(_)));
    assert!(matches!(rejected[1].1, MoveError::OutOfBounds(_)));
}

#[test]
fn test_every_applied_move_was_gated() {
    // Replaying a finished history from scratch passes the legality gate
    // at every step, so nothing was applied ungated.
    let setup = MatchSetup::new(3).expect("valid size");
    let game = setup.start(Piece::X);
    let mut source = ScriptedSource::new(coords(&[
        (1, 1),
        (1, 1),
        (9, 0),
        (0, 0),
        (2, 2),
        (0, 2),
        (2, 0),
        (0, 1),
        (2, 1),
    ]));
    let finished = run_match(game, &mut source);

    assert_eq!(
        finished.history().len() + source.rejected().len(),
        9 - source.remaining()
    );

    let fresh = MatchSetup::new(3).expect("valid size");
    let replayed = MatchInProgress::replay(fresh, Piece::X, finished.history())
        .expect("an applied history is legal throughout");
    match replayed {
        MatchResult::Finished(done) => assert_eq!(done.outcome(), finished.outcome()),
        MatchResult::InProgress(_) => panic!("the original match finished"),
    }
}

#[test]
fn test_custom_win_length_match() {
    let mut session = Session::new("Ada", "Grace");
    // K=3 on a 5-board ends quickly.
    let mut source = ScriptedSource::new(coords(&[(0, 0), (1, 0), (0, 1), (2, 0), (0, 2)]));
    let report = session
        .play_match_with(5, WinLength::new(3), &mut source)
        .expect("satisfiable win length");

    assert_eq!(report.winner(), Some("Ada"));
    assert_eq!(session.player_x().wins(), 1);
}

#[test]
fn test_undersized_board_is_rejected() {
    let mut session = Session::new("Ada", "Grace");
    let mut source = ScriptedSource::default();
    assert!(session.play_match(2, &mut source).is_err());
    // Nothing was played or scored.
    assert_eq!(source.remaining(), 0);
    assert_eq!(session.player_x().wins(), 0);
    assert_eq!(session.draws(), 0);
}
