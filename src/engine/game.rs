//! The turn engine.
//!
//! [`GameEngine`] owns the session, the board and the dice, and exposes
//! the operation surface a presentation layer drives. Operations are
//! synchronous; every timed pause lives in
//! [`TurnSequencer`](crate::sequence::TurnSequencer), layered on top.
//!
//! ## Turn protocol
//!
//! ```text
//! roll_dice -> settle -> advance (redirect step) -> advance (rotation)
//! ```
//!
//! `settle` reveals the committed value and applies the landing; the
//! session stays in `Resolving` until both staged steps have run, so the
//! landed cell is observable before any snake or ladder moves the token.
//! Overshoot and direct wins finish inside `settle` with nothing staged.
//! `apply_move` collapses roll-plus-settle for callers that bring their
//! own dice value (replays, external dice, deterministic tests).
//!
//! Illegal calls (rolling mid-roll, rolling after a win, advancing with
//! nothing staged) are silent no-ops that return no events.
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::core::{Phase, PlayerCount};
//! use snakes_ladders::engine::GameEngine;
//!
//! let mut engine = GameEngine::with_seed(42);
//! engine.start_game(PlayerCount::Two);
//! assert_eq!(engine.session().phase(), Phase::AwaitingRoll);
//!
//! engine.roll_dice();
//! let events = engine.settle();
//! assert!(!events.is_empty());
//! assert_eq!(engine.session().phase(), Phase::Resolving);
//!
//! engine.advance();
//! engine.advance();
//! assert_eq!(engine.session().phase(), Phase::AwaitingRoll);
//! ```

use crate::board::{Board, RedirectKind};
use crate::core::{Cell, DiceRng, GameSession, Phase, Player, PlayerCount, PlayerId, Snapshot};
use crate::events::{Events, GameEvent};

use super::resolve::{
    compute_outcome, landing_message, overshoot_message, turn_message, win_message, Resolution,
    ResolveStep, RollOutcome, RollRecord,
};

/// The game engine: authoritative state plus the operations that mutate it.
#[derive(Clone, Debug)]
pub struct GameEngine {
    session: GameSession,
    board: Board,
    rng: DiceRng,
    jitter: DiceRng,
}

impl GameEngine {
    /// An engine on the standard board with an entropy-seeded die.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    /// An engine on the standard board with a fixed dice seed.
    ///
    /// The same seed replays the same game move for move.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        GameBuilder::new().seed(seed).build()
    }

    /// Read access to the session state.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The board this engine plays on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The dice seed, for replays and diagnostics.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Whether a roll is committed but not yet settled.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.session.is_rolling()
    }

    /// Capture a renderable snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session)
    }

    /// Activate the first `count` roster seats and begin play.
    ///
    /// Only legal in `Setup`; anywhere else this is a no-op.
    pub fn start_game(&mut self, count: PlayerCount) -> Events {
        if self.session.phase != Phase::Setup {
            return Events::new();
        }

        self.session.active_count = count.as_usize();
        self.session.current_index = 0;
        self.session.phase = Phase::AwaitingRoll;
        self.session.message = turn_message(&self.session.players[0].name);

        Events::new()
    }

    /// Commit one authoritative dice value and enter `Rolling`.
    ///
    /// The value is drawn here, before any jitter frame is shown, so the
    /// animation can never change the outcome. Only legal in
    /// `AwaitingRoll`; rolling mid-roll or after a win is a no-op.
    pub fn roll_dice(&mut self) -> Events {
        if self.session.phase != Phase::AwaitingRoll {
            return Events::new();
        }

        self.session.pending_roll = Some(self.rng.roll());
        self.session.phase = Phase::Rolling;

        let mut events = Events::new();
        events.push(GameEvent::RollStarted {
            player: self.session.current_player().id,
        });
        events
    }

    /// Reveal the committed value and apply the landing.
    ///
    /// Overshoot and a direct landing on the goal complete here; any
    /// other landing leaves the session in `Resolving` with the redirect
    /// and rotation steps staged for [`advance`](Self::advance). Only
    /// legal in `Rolling`.
    pub fn settle(&mut self) -> Events {
        if self.session.phase != Phase::Rolling {
            return Events::new();
        }
        let value = match self.session.pending_roll.take() {
            Some(value) => value,
            None => return Events::new(),
        };

        self.resolve_roll(value)
    }

    /// Apply an externally supplied dice value as a full roll.
    ///
    /// Behaves exactly like a roll of `steps` that settles at once,
    /// skipping `Rolling` and the roll-started event. Only legal in
    /// `AwaitingRoll` with `steps` in `1..=6`; anything else is a no-op.
    pub fn apply_move(&mut self, steps: u8) -> Events {
        if self.session.phase != Phase::AwaitingRoll || !(1..=6).contains(&steps) {
            return Events::new();
        }

        self.resolve_roll(steps)
    }

    /// Run the next staged resolution step.
    ///
    /// The first call applies the redirect (or announces the plain move);
    /// the second rotates the turn, or hands it back on a six. Only legal
    /// in `Resolving`.
    pub fn advance(&mut self) -> Events {
        if self.session.phase != Phase::Resolving {
            return Events::new();
        }
        let resolution = match self.session.resolution {
            Some(resolution) => resolution,
            None => return Events::new(),
        };

        match resolution.step {
            ResolveStep::Announce => self.announce(resolution),
            ResolveStep::Rotate => {
                self.session.resolution = None;
                if resolution.value != 6 {
                    self.session.rotate();
                }
                self.session.phase = Phase::AwaitingRoll;
                Events::new()
            }
        }
    }

    /// Return the whole session to `Setup`.
    ///
    /// Positions, cursor, dice, winner, message and history all reset;
    /// the sound flag and the chosen player count survive. Callable from
    /// any phase, including mid-roll.
    pub fn reset_game(&mut self) -> Events {
        self.session.reset();
        Events::new()
    }

    /// Flip the presentation-only sound flag and return the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.session.sound_enabled = !self.session.sound_enabled;
        self.session.sound_enabled
    }

    /// A display-only die face for the roll animation.
    ///
    /// Drawn from an independent stream; calling this any number of
    /// times never changes the authoritative roll sequence.
    pub fn jitter_face(&mut self) -> u8 {
        self.jitter.roll()
    }

    /// Resolve a settled value for the current player.
    fn resolve_roll(&mut self, value: u8) -> Events {
        let index = self.session.current_index;
        let player = self.session.players[index].id;
        let name = self.session.players[index].name.clone();
        let from = self.session.players[index].position;
        let six = value == 6;

        self.session.dice_value = value;
        self.session.last_rolled_six = six;

        let mut events = Events::new();
        events.push(GameEvent::DiceRolled { player, value });

        let outcome = compute_outcome(from, value, &self.board);
        match outcome {
            RollOutcome::Overshoot { deficit } => {
                self.session.message = overshoot_message(&name, deficit, six);
                events.push(GameEvent::OvershootRejected { player, deficit });
                self.record(player, value, from, outcome, six);
                if !six {
                    self.session.rotate();
                }
                self.session.phase = Phase::AwaitingRoll;
            }
            RollOutcome::Won => {
                self.session.players[index].position = Cell::GOAL;
                self.session.winner = Some(player);
                self.session.message = win_message(&name);
                events.push(GameEvent::PlayerWon { player });
                self.record(player, value, from, outcome, false);
                self.session.phase = Phase::Finished;
            }
            RollOutcome::Landed { landed, redirect } => {
                self.session.players[index].position = landed;
                self.session.resolution = Some(Resolution {
                    player,
                    value,
                    from,
                    landed,
                    redirect,
                    step: ResolveStep::Announce,
                });
                self.record(player, value, from, outcome, six);
                self.session.phase = Phase::Resolving;
            }
        }

        events
    }

    /// Apply the redirect step of a staged resolution.
    fn announce(&mut self, resolution: Resolution) -> Events {
        let index = resolution.player.index();
        let name = self.session.players[index].name.clone();
        let six = resolution.value == 6;

        let mut events = Events::new();
        match resolution.redirect {
            Some(redirect) => {
                self.session.players[index].position = redirect.to;
                events.push(match redirect.kind {
                    RedirectKind::Snake => GameEvent::SnakeHit {
                        player: resolution.player,
                        from: resolution.landed,
                        to: redirect.to,
                    },
                    RedirectKind::Ladder => GameEvent::LadderClimbed {
                        player: resolution.player,
                        from: resolution.landed,
                        to: redirect.to,
                    },
                });
            }
            None => {
                events.push(GameEvent::PlayerMoved {
                    player: resolution.player,
                    from: resolution.from,
                    to: resolution.landed,
                });
            }
        }

        self.session.message = landing_message(&name, resolution.landed, resolution.redirect, six);
        self.session.resolution = Some(Resolution {
            step: ResolveStep::Rotate,
            ..resolution
        });

        events
    }

    fn record(&mut self, player: PlayerId, value: u8, from: Cell, outcome: RollOutcome, extra_turn: bool) {
        self.session.history.push(RollRecord {
            player,
            value,
            from,
            outcome,
            extra_turn,
        });
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a configured [`GameEngine`].
///
/// Everything is optional: the seed defaults to system entropy, the board
/// to the standard one and the roster names to "Player 1".."Player 4".
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    seed: Option<u64>,
    board: Option<Board>,
    names: Option<[String; 4]>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the dice seed for a reproducible game.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Play on a custom board instead of the standard one.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Rename the four roster seats; colors keep their canonical order.
    #[must_use]
    pub fn player_names(mut self, names: [&str; 4]) -> Self {
        self.names = Some(names.map(String::from));
        self
    }

    #[must_use]
    pub fn build(self) -> GameEngine {
        let rng = match self.seed {
            Some(seed) => DiceRng::new(seed),
            None => DiceRng::from_entropy(),
        };
        let jitter = rng.for_context("jitter");

        let mut roster = Player::default_roster();
        if let Some(names) = self.names {
            for (player, name) in roster.iter_mut().zip(names) {
                player.name = name;
            }
        }

        GameEngine {
            session: GameSession::with_roster(roster),
            board: self.board.unwrap_or_default(),
            rng,
            jitter,
        }
    }
}
