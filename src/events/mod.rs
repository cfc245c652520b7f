//! Observable game events.

mod event;

pub use event::{Events, GameEvent};
