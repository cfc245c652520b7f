//! Core types: cells, players, session state, snapshots, RNG.
//!
//! This module holds the data model; the operations that mutate it live
//! in [`crate::engine`].

pub mod cell;
pub mod player;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use cell::Cell;
pub use player::{InvalidPlayerCount, Player, PlayerColor, PlayerCount, PlayerId, ROSTER_SIZE};
pub use rng::DiceRng;
pub use session::{GameSession, Phase};
pub use snapshot::{PlayerView, Snapshot};
