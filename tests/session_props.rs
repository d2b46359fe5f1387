//! Sequence-level session invariants
//!
//! Drives whole sessions with arbitrary seeds and direction scripts and
//! checks the properties that must hold at every tick.

use garden_worm::Config;
use garden_worm::sim::{Dir, GameSession, TickInput, tick};
use proptest::prelude::*;

const FRAME_DT: f64 = 1.0 / 60.0;

fn dir_strategy() -> impl Strategy<Value = Option<Dir>> {
    prop_oneof![
        Just(None),
        Just(Some(Dir::Up)),
        Just(Some(Dir::Down)),
        Just(Some(Dir::Left)),
        Just(Some(Dir::Right)),
    ]
}

proptest! {
    #[test]
    fn per_tick_invariants_hold(
        seed in any::<u64>(),
        dirs in proptest::collection::vec(dir_strategy(), 1..500),
    ) {
        let mut session = GameSession::new(Config::default(), seed);
        let mut now = 0.0;
        let mut last_body = 0;
        let mut was_over = false;

        for direction in dirs {
            let snap = tick(&mut session, &TickInput { direction }, now);
            now += FRAME_DT;

            // High score dominates the running score
            prop_assert!(snap.high_score >= snap.score);
            // Growth is monotonic between resets
            prop_assert!(session.worm.body_count >= last_body);
            last_body = session.worm.body_count;
            // History never outgrows the span the furthest segment needs
            let cap = (session.worm.gap() * (session.worm.body_count + 1) as f32).ceil();
            prop_assert!(session.worm.history_len() as f32 <= cap);
            // The score dies with the worm and stays dead until reset
            if snap.game_over {
                prop_assert_eq!(snap.score, 0);
            }
            // Game over latches; only reset() clears it
            if was_over {
                prop_assert!(snap.game_over);
            }
            was_over = snap.game_over;
        }
    }

    #[test]
    fn replays_are_deterministic(
        seed in any::<u64>(),
        dirs in proptest::collection::vec(dir_strategy(), 1..200),
    ) {
        let mut a = GameSession::new(Config::default(), seed);
        let mut b = GameSession::new(Config::default(), seed);
        let mut now = 0.0;
        for direction in dirs {
            let input = TickInput { direction };
            let snap_a = tick(&mut a, &input, now);
            let snap_b = tick(&mut b, &input, now);
            prop_assert_eq!(snap_a, snap_b);
            now += FRAME_DT;
        }
    }

    #[test]
    fn reset_always_returns_to_the_start_pose(
        seed in any::<u64>(),
        dirs in proptest::collection::vec(dir_strategy(), 1..200),
    ) {
        let mut session = GameSession::new(Config::default(), seed);
        let mut now = 0.0;
        for direction in dirs {
            tick(&mut session, &TickInput { direction }, now);
            now += FRAME_DT;
        }
        let high = session.high_score;

        session.reset();
        let first = session.snapshot();
        session.reset();
        let second = session.snapshot();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.score, 0);
        prop_assert_eq!(first.high_score, high);
        prop_assert!(!first.game_over);
        prop_assert!(first.segments.is_empty());
        prop_assert!(first.candies.is_empty());
        prop_assert!(first.poisons.is_empty());
    }
}
