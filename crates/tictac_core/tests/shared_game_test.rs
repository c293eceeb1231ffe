//! Tests for the mutex-guarded game handle.

use std::sync::{Arc, Mutex};
use std::thread;
use tictac_core::{
    BlockingStrategy, Coord, GameError, GameState, Mark, RandomStrategy, SharedGame, Status,
};

#[test]
fn test_concurrent_turns_keep_board_consistent() {
    let shared = SharedGame::new(GameState::new(Arc::new(RandomStrategy::seeded(21))));

    let handles: Vec<_> = Coord::ALL
        .into_iter()
        .map(|coord| {
            let shared = shared.clone();
            thread::spawn(move || shared.play_turn(coord))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    for result in &results {
        if let Err(e) = result {
            assert!(
                matches!(e, GameError::OccupiedCell { .. } | GameError::GameOver),
                "unexpected error {e}"
            );
        }
    }

    shared.with(|game| {
        let board = game.board();
        let xs = board.cells_marked_with(Mark::X).len();
        let os = board.cells_marked_with(Mark::O).len();
        assert_eq!(xs + os, game.moves_played());
        assert!(xs == os || xs == os + 1);
    });
}

#[test]
fn test_observer_runs_inside_lock() {
    let shared = SharedGame::new(GameState::new(Arc::new(BlockingStrategy::seeded(2))));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    shared.subscribe(move |game: &GameState| log.lock().unwrap().push(game.moves_played()));

    let turn = shared.play_turn(Coord::new(0, 0)).unwrap();

    assert_eq!(turn.computer, Some(Coord::CENTER));
    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
}

#[test]
fn test_reset_and_strategy_swap() {
    let shared = SharedGame::new(GameState::new(Arc::new(RandomStrategy::seeded(3))));
    shared.apply_move(Coord::CENTER, Mark::X).unwrap();

    shared.set_strategy(Arc::new(BlockingStrategy::seeded(3)));
    shared.reset();

    assert_eq!(shared.status(), Status::InProgress);
    assert_eq!(shared.board().remaining_cells(), 9);
    assert_eq!(shared.with(|game| game.strategy().name()), "blocking");
}

#[test]
fn test_unsubscribe_through_handle() {
    let shared = SharedGame::from(GameState::default());
    let id = shared.subscribe(|_: &GameState| {});
    assert!(shared.unsubscribe(id));
    assert!(!shared.unsubscribe(id));
}

#[test]
fn test_observers_survive_a_panicking_peer() {
    let shared = SharedGame::new(GameState::new(Arc::new(RandomStrategy::seeded(4))));
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    shared.subscribe(move |_: &GameState| *counter.lock().unwrap() += 1);
    let mut armed = true;
    shared.subscribe(move |_: &GameState| {
        if std::mem::take(&mut armed) {
            panic!("observer failure");
        }
    });

    let worker = shared.clone();
    let outcome = thread::spawn(move || worker.apply_move(Coord::CENTER, Mark::X)).join();
    assert!(outcome.is_err());

    // The lock was poisoned by the panic and is recovered.
    shared.apply_move(Coord::new(0, 0), Mark::O).unwrap();
    shared.reset();

    assert_eq!(*calls.lock().unwrap(), 3);
    assert_eq!(shared.status(), Status::InProgress);
}
