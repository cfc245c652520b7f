//! Timed presentation sequencing over the synchronous engine.
//!
//! The engine resolves a whole roll the moment it is asked to; the
//! classic feel of the game comes from pauses between the visible steps.
//! [`TurnSequencer`] owns an engine plus a [`SequenceTimings`] profile
//! and is driven by [`tick`](TurnSequencer::tick) with elapsed wall-clock
//! milliseconds from the render loop:
//!
//! ```text
//! roll_dice -> jitter frames -> settle -> pause -> redirect -> pause -> rotate
//! ```
//!
//! A single large `tick` drains as many stage boundaries as its slice
//! covers and returns every event emitted along the way, in order. While
//! a stage is in flight, further rolls are refused, which is the
//! no-concurrent-rolls guard.

use crate::core::{GameSession, Phase, PlayerCount, Snapshot};
use crate::engine::GameEngine;
use crate::events::Events;

/// Timing profile for the staged turn presentation.
///
/// Defaults give the classic pacing: ten jitter frames at 100 ms, half a
/// second from landing to the redirect step, a second and a half from
/// the redirect step to rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceTimings {
    /// Number of cosmetic dice faces shown before the value settles.
    pub jitter_frames: u32,
    /// Milliseconds between jitter frames.
    pub jitter_interval_ms: u32,
    /// Pause between the landing and the redirect step.
    pub redirect_delay_ms: u32,
    /// Pause between the redirect step and the rotation.
    pub rotate_delay_ms: u32,
}

impl SequenceTimings {
    /// Zero everything: rolls complete within a single `tick(0)`.
    /// Useful for headless drivers and tests.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            jitter_frames: 0,
            jitter_interval_ms: 0,
            redirect_delay_ms: 0,
            rotate_delay_ms: 0,
        }
    }
}

impl Default for SequenceTimings {
    fn default() -> Self {
        Self {
            jitter_frames: 10,
            jitter_interval_ms: 100,
            redirect_delay_ms: 500,
            rotate_delay_ms: 1500,
        }
    }
}

/// Where the sequencer is inside the staged turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Nothing in flight; the engine is ready for input.
    Idle,
    /// Dice animation: `remaining` frames left, `elapsed_ms` into the
    /// current frame.
    Jitter { remaining: u32, elapsed_ms: u32 },
    /// Waiting to apply the redirect step.
    RedirectPause { elapsed_ms: u32 },
    /// Waiting to rotate the turn.
    RotatePause { elapsed_ms: u32 },
}

/// Drives a [`GameEngine`] through the timed turn presentation.
#[derive(Clone, Debug)]
pub struct TurnSequencer {
    engine: GameEngine,
    timings: SequenceTimings,
    stage: Stage,
    display_face: u8,
}

impl TurnSequencer {
    /// Wrap an engine with the default timing profile.
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self::with_timings(engine, SequenceTimings::default())
    }

    /// Wrap an engine with a custom timing profile.
    #[must_use]
    pub fn with_timings(engine: GameEngine, timings: SequenceTimings) -> Self {
        let display_face = engine_face(&engine);
        Self {
            engine,
            timings,
            stage: Stage::Idle,
            display_face,
        }
    }

    /// Read access to the wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Read access to the session state.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        self.engine.session()
    }

    /// The active timing profile.
    #[must_use]
    pub const fn timings(&self) -> &SequenceTimings {
        &self.timings
    }

    /// Current sequencing stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether a staged turn is still playing out.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.stage != Stage::Idle
    }

    /// The die face to draw right now: a jitter face while the roll
    /// animates, otherwise the last resolved value.
    #[must_use]
    pub const fn display_face(&self) -> u8 {
        self.display_face
    }

    /// Capture a renderable snapshot of the engine state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Begin play. Passed straight through to the engine.
    pub fn start_game(&mut self, count: PlayerCount) -> Events {
        self.engine.start_game(count)
    }

    /// Start a roll and its jitter animation.
    ///
    /// Refused while any stage is in flight; otherwise defers to the
    /// engine's own preconditions.
    pub fn roll_dice(&mut self) -> Events {
        if self.stage != Stage::Idle {
            return Events::new();
        }

        let mut events = self.engine.roll_dice();
        if events.is_empty() {
            return events;
        }

        if self.timings.jitter_frames == 0 {
            events.extend(self.engine.settle());
            self.display_face = engine_face(&self.engine);
            self.stage = self.post_settle_stage();
        } else {
            self.stage = Stage::Jitter {
                remaining: self.timings.jitter_frames,
                elapsed_ms: 0,
            };
        }

        events
    }

    /// Apply an external dice value, then stage the usual pauses.
    ///
    /// Skips the jitter animation entirely; the redirect and rotation
    /// pauses still play out so the presentation stays consistent.
    pub fn apply_move(&mut self, steps: u8) -> Events {
        if self.stage != Stage::Idle {
            return Events::new();
        }

        let events = self.engine.apply_move(steps);
        if !events.is_empty() {
            self.display_face = engine_face(&self.engine);
            self.stage = self.post_settle_stage();
        }

        events
    }

    /// Advance the animation clock by `dt_ms` milliseconds.
    ///
    /// Crosses as many stage boundaries as the slice covers and returns
    /// every event emitted along the way, in order. Idle ticks are free.
    pub fn tick(&mut self, dt_ms: u32) -> Events {
        let mut events = Events::new();
        let mut budget = dt_ms;

        loop {
            match self.stage {
                Stage::Idle => break,
                Stage::Jitter { remaining, elapsed_ms } => {
                    let needed = self.timings.jitter_interval_ms - elapsed_ms;
                    if budget < needed {
                        self.stage = Stage::Jitter {
                            remaining,
                            elapsed_ms: elapsed_ms + budget,
                        };
                        break;
                    }
                    budget -= needed;
                    self.display_face = self.engine.jitter_face();
                    if remaining <= 1 {
                        events.extend(self.engine.settle());
                        self.display_face = engine_face(&self.engine);
                        self.stage = self.post_settle_stage();
                    } else {
                        self.stage = Stage::Jitter {
                            remaining: remaining - 1,
                            elapsed_ms: 0,
                        };
                    }
                }
                Stage::RedirectPause { elapsed_ms } => {
                    let needed = self.timings.redirect_delay_ms - elapsed_ms;
                    if budget < needed {
                        self.stage = Stage::RedirectPause {
                            elapsed_ms: elapsed_ms + budget,
                        };
                        break;
                    }
                    budget -= needed;
                    events.extend(self.engine.advance());
                    self.stage = Stage::RotatePause { elapsed_ms: 0 };
                }
                Stage::RotatePause { elapsed_ms } => {
                    let needed = self.timings.rotate_delay_ms - elapsed_ms;
                    if budget < needed {
                        self.stage = Stage::RotatePause {
                            elapsed_ms: elapsed_ms + budget,
                        };
                        break;
                    }
                    budget -= needed;
                    events.extend(self.engine.advance());
                    self.stage = Stage::Idle;
                }
            }
        }

        events
    }

    /// Reset the game and abort any in-flight stage.
    pub fn reset_game(&mut self) -> Events {
        self.stage = Stage::Idle;
        let events = self.engine.reset_game();
        self.display_face = engine_face(&self.engine);
        events
    }

    /// Flip the sound flag. Passed straight through to the engine.
    pub fn toggle_sound(&mut self) -> bool {
        self.engine.toggle_sound()
    }

    /// Unwrap the sequencer, keeping the engine.
    #[must_use]
    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    fn post_settle_stage(&self) -> Stage {
        if self.engine.phase() == Phase::Resolving {
            Stage::RedirectPause { elapsed_ms: 0 }
        } else {
            // Overshoot and wins finish inside settle with no staging.
            Stage::Idle
        }
    }
}

fn engine_face(engine: &GameEngine) -> u8 {
    engine.session().dice_value()
}
