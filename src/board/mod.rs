//! Board topology: the 100-cell track and its snake and ladder tables.

mod topology;

pub use topology::{Board, BoardError, Redirect, RedirectKind, LADDERS, SNAKES};
