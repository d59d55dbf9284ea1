//! Property tests: engine invariants under arbitrary placement sequences.
//!
//! Each case drives a session with a random stream of placement intents
//! (most of which will be rejected) interleaved with undos, and checks the
//! structural invariants that must hold in every reachable state.

use proptest::prelude::*;

use magnet_maze::{Coord, EngineConfig, PuzzleState, Session};

const ROOM: [&str; 8] = [
    "##########",
    "#@..o....#",
    "#..#...o.#",
    "#.x....#.#",
    "#...o....#",
    "#.#....x.#",
    "#....o..x#",
    "##########",
];

fn check_invariants(state: &PuzzleState, initial_discs: usize) {
    // Disc conservation.
    assert_eq!(state.disc_count(), initial_discs);

    // Mutual exclusion: walls, discs, magnet pairwise disjoint.
    for disc in state.discs() {
        assert!(!state.is_wall(disc), "disc on wall at {disc}");
        assert_ne!(disc, state.magnet(), "disc under magnet at {disc}");
    }
    assert!(!state.is_wall(state.magnet()), "magnet on wall");

    // Every piece in bounds.
    for disc in state.discs() {
        assert!(state.in_bounds(disc));
    }
    assert!(state.in_bounds(state.magnet()));
}

/// A placement intent anywhere on (or just off) the board.
fn any_cell() -> impl Strategy<Value = Coord> {
    (-1..11i32, -1..9i32).prop_map(|(x, y)| Coord::new(x, y))
}

proptest! {
    #[test]
    fn invariants_hold_under_random_placements(cells in prop::collection::vec(any_cell(), 1..60)) {
        let mut session = Session::from_map(&ROOM, EngineConfig::default()).unwrap();
        let initial_discs = session.state().disc_count();
        let mut moves_seen = session.move_count();

        for cell in cells {
            let before = session.state().clone();
            let result = session.attempt_placement(cell);

            if result.is_err() {
                // Rejection is inert.
                prop_assert_eq!(session.state(), &before);
            } else {
                prop_assert_eq!(session.move_count(), before.moves() + 1);
            }

            // Move counter never decreases under placements.
            prop_assert!(session.move_count() >= moves_seen);
            moves_seen = session.move_count();

            check_invariants(session.state(), initial_discs);
        }
    }

    #[test]
    fn undo_restores_exact_state(cells in prop::collection::vec(any_cell(), 1..40)) {
        let mut session = Session::from_map(&ROOM, EngineConfig::default()).unwrap();

        for cell in cells {
            let before = session.state().clone();
            if session.attempt_placement(cell).is_ok() {
                prop_assert!(session.undo());
                prop_assert_eq!(session.state(), &before);
            }
        }
    }

    #[test]
    fn win_evaluation_is_pure(cells in prop::collection::vec(any_cell(), 1..40)) {
        use magnet_maze::{rules, Ruleset};

        let mut session = Session::from_map(&ROOM, EngineConfig::default()).unwrap();
        for cell in cells {
            let _ = session.attempt_placement(cell);
            let first = rules::evaluate_win(session.state(), Ruleset::DiscOnly);
            for _ in 0..3 {
                prop_assert_eq!(rules::evaluate_win(session.state(), Ruleset::DiscOnly), first);
            }
        }
    }

    #[test]
    fn interleaved_undos_never_break_invariants(
        steps in prop::collection::vec((any_cell(), prop::bool::ANY), 1..60)
    ) {
        let mut session = Session::from_map(&ROOM, EngineConfig::default()).unwrap();
        let initial_discs = session.state().disc_count();

        for (cell, undo) in steps {
            if undo {
                session.undo();
            } else {
                let _ = session.attempt_placement(cell);
            }
            check_invariants(session.state(), initial_discs);
        }
    }
}
