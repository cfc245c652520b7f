//! # snakes-ladders
//!
//! A turn-based Snakes and Ladders engine for 2-4 local players sharing
//! one device.
//!
//! ## Design Principles
//!
//! 1. **Synchronous Core**: Every operation is a plain function of
//!    (state, input) -> (state, events); nothing in the engine waits.
//!    The timed feel of the game is layered on top by
//!    [`sequence::TurnSequencer`].
//!
//! 2. **Deterministic Dice**: The dice stream is seedable, and display
//!    jitter draws from an independent stream, so a seed replays a game
//!    move for move no matter how the animation was driven.
//!
//! 3. **Quiet Boundaries**: Illegal play-time calls are silent no-ops,
//!    never panics. Malformed boards and player counts are rejected at
//!    construction with typed errors.
//!
//! ## Turn Protocol
//!
//! `roll_dice` commits a value, `settle` applies the landing, and two
//! `advance` calls play out the redirect and the rotation, so the landed
//! cell is observable before a snake or ladder moves the token.
//! Overshoot and direct wins complete inside `settle`. A six hands the
//! turn back to the same player.
//!
//! ## Modules
//!
//! - `core`: cells, players, session state, snapshots, RNG
//! - `board`: the 100-cell track and its snake/ladder tables
//! - `engine`: the operations that mutate a session
//! - `events`: named feedback events for presentation cues
//! - `sequence`: timed presentation sequencing over the engine

pub mod board;
pub mod core;
pub mod engine;
pub mod events;
pub mod sequence;

// Re-export commonly used types
pub use crate::core::{
    Cell, DiceRng, GameSession, InvalidPlayerCount, Phase, Player, PlayerColor, PlayerCount,
    PlayerId, PlayerView, Snapshot,
};

pub use crate::board::{Board, BoardError, Redirect, RedirectKind};

pub use crate::engine::{GameBuilder, GameEngine, RollOutcome, RollRecord};

pub use crate::events::{Events, GameEvent};

pub use crate::sequence::{SequenceTimings, Stage, TurnSequencer};
