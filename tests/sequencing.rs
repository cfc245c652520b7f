//! Timed turn sequencing tests.
//!
//! These drive [`TurnSequencer`] the way a render loop would: request a
//! roll, then feed elapsed milliseconds and watch the staged animation
//! cross its boundaries. The default cadence is ten jitter frames at
//! 100ms, a 500ms pause before the redirect and a 1500ms pause before
//! the rotation.

use snakes_ladders::core::{Cell, Phase, PlayerCount};
use snakes_ladders::engine::GameEngine;
use snakes_ladders::sequence::{SequenceTimings, Stage, TurnSequencer};

fn started(seed: u64) -> TurnSequencer {
    let mut sequencer = TurnSequencer::new(GameEngine::with_seed(seed));
    sequencer.start_game(PlayerCount::Two);
    sequencer
}

#[test]
fn test_timed_turn_follows_the_default_cadence() {
    let mut sequencer = started(7);
    assert_eq!(*sequencer.timings(), SequenceTimings::default());

    sequencer.roll_dice();
    assert!(sequencer.is_animating());
    assert_eq!(
        sequencer.stage(),
        Stage::Jitter {
            remaining: 10,
            elapsed_ms: 0,
        }
    );

    // Nine frame boundaries keep the dice rattling.
    for _ in 0..9 {
        sequencer.tick(100);
        assert!(matches!(sequencer.stage(), Stage::Jitter { .. }));
        assert!((1..=6).contains(&sequencer.display_face()));
    }

    // The tenth boundary settles the roll; the first turn always lands.
    sequencer.tick(100);
    assert_eq!(sequencer.stage(), Stage::RedirectPause { elapsed_ms: 0 });
    assert_eq!(sequencer.engine().phase(), Phase::Resolving);
    assert_eq!(sequencer.display_face(), sequencer.session().dice_value());

    sequencer.tick(500);
    assert_eq!(sequencer.stage(), Stage::RotatePause { elapsed_ms: 0 });

    sequencer.tick(1500);
    assert_eq!(sequencer.stage(), Stage::Idle);
    assert!(!sequencer.is_animating());
    assert_eq!(sequencer.engine().phase(), Phase::AwaitingRoll);

    let record = &sequencer.session().history()[0];
    assert_eq!(sequencer.session().position(record.player), Some(record.rest()));
    let expected_index = if record.extra_turn { 0 } else { 1 };
    assert_eq!(sequencer.session().current_index(), expected_index);
}

#[test]
fn test_partial_ticks_accumulate_without_crossing() {
    let mut sequencer = started(7);
    sequencer.roll_dice();

    sequencer.tick(99);
    assert_eq!(
        sequencer.stage(),
        Stage::Jitter {
            remaining: 10,
            elapsed_ms: 99,
        }
    );

    sequencer.tick(1);
    assert_eq!(
        sequencer.stage(),
        Stage::Jitter {
            remaining: 9,
            elapsed_ms: 0,
        }
    );

    // One oversized slice drains the remaining frames and both pauses.
    sequencer.tick(9 * 100 + 500 + 1500);
    assert_eq!(sequencer.stage(), Stage::Idle);
    assert_eq!(sequencer.engine().phase(), Phase::AwaitingRoll);
}

#[test]
fn test_sequencer_matches_the_bare_engine() {
    let mut bare = GameEngine::with_seed(4242);
    bare.start_game(PlayerCount::Two);
    let mut timed = started(4242);

    let mut turns = 0;
    while bare.phase() != Phase::Finished && turns < 200 {
        bare.roll_dice();
        bare.settle();
        bare.advance();
        bare.advance();

        timed.roll_dice();
        timed.tick(10_000);
        turns += 1;
    }

    assert_eq!(bare.session().history(), timed.session().history());
    assert_eq!(bare.snapshot(), timed.snapshot());
}

#[test]
fn test_no_new_roll_while_animating() {
    let mut sequencer = started(7);

    assert!(!sequencer.roll_dice().is_empty());
    sequencer.tick(450);
    let mid_stage = sequencer.stage();

    assert!(sequencer.roll_dice().is_empty(), "a roll is already in flight");
    assert!(sequencer.apply_move(3).is_empty());
    assert_eq!(sequencer.stage(), mid_stage);
}

#[test]
fn test_idle_ticks_change_nothing() {
    let mut sequencer = started(7);
    let before = sequencer.snapshot();

    sequencer.tick(10_000);
    assert_eq!(sequencer.stage(), Stage::Idle);
    assert_eq!(sequencer.snapshot(), before);
}

#[test]
fn test_apply_move_skips_jitter_but_keeps_the_pauses() {
    let mut sequencer = started(7);

    sequencer.apply_move(4);
    assert_eq!(sequencer.stage(), Stage::RedirectPause { elapsed_ms: 0 });
    assert_eq!(sequencer.display_face(), 4);
    assert_eq!(sequencer.session().players()[0].position, Cell::new(4));

    sequencer.tick(500);
    assert_eq!(sequencer.stage(), Stage::RotatePause { elapsed_ms: 0 });
    assert_eq!(sequencer.session().players()[0].position, Cell::new(14));

    sequencer.tick(1500);
    assert_eq!(sequencer.stage(), Stage::Idle);
    assert_eq!(sequencer.session().current_index(), 1);
}

#[test]
fn test_reset_mid_animation_goes_back_to_setup() {
    let mut sequencer = started(7);
    assert!(!sequencer.toggle_sound());
    sequencer.roll_dice();
    sequencer.tick(450);

    sequencer.reset_game();
    assert_eq!(sequencer.stage(), Stage::Idle);
    assert_eq!(sequencer.engine().phase(), Phase::Setup);
    assert_eq!(sequencer.display_face(), 1);
    assert!(!sequencer.session().sound_enabled(), "the flag survives reset");

    sequencer.start_game(PlayerCount::Three);
    assert!(!sequencer.roll_dice().is_empty());
}

#[test]
fn test_instant_timings_play_headless_games() {
    let engine = GameEngine::with_seed(31337);
    let mut sequencer = TurnSequencer::with_timings(engine, SequenceTimings::instant());
    sequencer.start_game(PlayerCount::Four);

    let mut turns = 0;
    while sequencer.engine().phase() != Phase::Finished && turns < 2_000 {
        sequencer.roll_dice();
        sequencer.tick(0);
        assert_eq!(sequencer.stage(), Stage::Idle, "instant timings never linger");
        turns += 1;
    }

    // Either somebody won or the bounded loop ran out; both are fine for
    // a dice game, but the sequencer must never wedge mid-stage.
    assert_eq!(sequencer.stage(), Stage::Idle);
    if sequencer.engine().phase() == Phase::Finished {
        let winner = sequencer.session().winner().unwrap();
        assert_eq!(sequencer.session().position(winner), Some(Cell::GOAL));
    }
}

#[test]
fn test_into_engine_hands_back_the_session() {
    let mut sequencer = started(7);
    sequencer.apply_move(2);
    sequencer.tick(2_000);

    let engine = sequencer.into_engine();
    assert_eq!(engine.session().history().len(), 1);
    assert_eq!(engine.phase(), Phase::AwaitingRoll);
}
