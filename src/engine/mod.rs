//! The synchronous turn engine and its pure resolution rules.

mod game;
mod resolve;

pub use game::{GameBuilder, GameEngine};
pub use resolve::{
    compute_outcome, landing_message, overshoot_message, turn_message, win_message, Resolution,
    ResolveStep, RollOutcome, RollRecord, SETUP_MESSAGE,
};
