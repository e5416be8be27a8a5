//! Session tests - the full spawn/fall/register/feed loop end to end

use clusterfall::core::physics::PhysicsWorld;
use clusterfall::core::NullObserver;
use clusterfall::engine::Session;
use clusterfall::feed::JsonFeed;
use clusterfall::types::{
    BoardAction, Piece, PieceColor, PieceId, Shape, Vec3, BOARD_HALF_EXTENT, TICK_MS,
};

const TICK_SECS: f32 = TICK_MS as f32 / 1000.0;

#[test]
fn test_spawned_piece_falls_and_registers() {
    let mut session = Session::new(1);
    let mut observer = NullObserver;
    session.start(&mut observer);

    assert!(session.apply(BoardAction::SpawnPiece, &mut observer));
    // Spawn never registers synchronously.
    assert_eq!(session.board().registry().total(), 0);

    // A couple of simulated seconds is plenty for the drop.
    for _ in 0..300 {
        session.step(TICK_SECS, &mut observer);
        if session.board().registry().total() == 1 {
            break;
        }
    }
    assert_eq!(session.board().registry().total(), 1);
}

#[test]
fn test_body_knocked_off_the_board_is_cleaned_up() {
    let mut session = Session::new(1);
    let mut observer = NullObserver;
    session.start(&mut observer);

    // A body past the edge of the footprint has no floor under it.
    let stray = Piece::new(PieceId(900), Shape::Cube, PieceColor::Red);
    session
        .world_mut()
        .spawn_body(stray, Vec3::new(BOARD_HALF_EXTENT + 1.5, 2.0, 0.0));

    for _ in 0..600 {
        session.step(TICK_SECS, &mut observer);
    }

    assert!(!session.world().contains_body(PieceId(900)));
    assert_eq!(session.board().registry().total(), 0);
}

#[test]
fn test_restart_resets_board_and_world() {
    let mut session = Session::new(3);
    let mut observer = NullObserver;
    session.start(&mut observer);

    // Two pieces can never form a qualifying group, so both stay put.
    for _ in 0..2 {
        session.apply(BoardAction::SpawnPiece, &mut observer);
    }
    for _ in 0..200 {
        session.step(TICK_SECS, &mut observer);
    }
    assert!(session.world().body_count() > 0);

    session.apply(BoardAction::Restart, &mut observer);

    assert_eq!(session.world().body_count(), 0);
    assert_eq!(session.board().registry().total(), 0);
    assert_eq!(session.board().score(), 0);
    assert_eq!(session.board().time_left(), 90.0);
}

#[test]
fn test_snapshot_reflects_live_positions() {
    let mut session = Session::new(5);
    let mut observer = NullObserver;
    session.start(&mut observer);

    session.apply(BoardAction::SpawnPiece, &mut observer);
    for _ in 0..300 {
        session.step(TICK_SECS, &mut observer);
    }

    let snap = session.snapshot();
    assert_eq!(snap.pieces.len(), session.board().registry().total());
    for view in &snap.pieces {
        assert!(view.position.x.abs() <= BOARD_HALF_EXTENT + 0.1);
        assert!(view.position.y >= 0.0);
    }
    assert_eq!(snap.score, session.board().score());
}

#[test]
fn test_feed_streams_the_whole_game_as_json_lines() {
    let mut feed = JsonFeed::new(Vec::new());
    let mut session = Session::new(8);
    session.start(&mut feed);

    // Run the board clock out in whole-second steps with no pieces.
    for _ in 0..91 {
        session.step(1.0, &mut feed);
    }
    assert!(session.board().is_game_over());

    let out = String::from_utf8(feed.into_inner()).unwrap();
    let mut saw_mission = false;
    let mut saw_game_over = false;
    for line in out.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        match value["event"].as_str().unwrap() {
            "mission" => saw_mission = true,
            "game_over" => saw_game_over = true,
            "mission_time" => {
                let left = value["seconds_left"].as_f64().unwrap();
                assert!((0.0..=90.0).contains(&left));
            }
            _ => {}
        }
    }
    assert!(saw_mission);
    assert!(saw_game_over);
}
