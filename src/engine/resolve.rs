//! Pure roll resolution.
//!
//! Everything here is a function of `(position, value, board)` with no
//! session access; the engine in [`game`](super::game) owns the mutation
//! and event emission. Keeping the rules pure makes the overshoot, win
//! and redirect branches testable without standing up a session.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Redirect, RedirectKind};
use crate::core::{Cell, PlayerId};

/// What a settled roll does to the roller's token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// The roll would pass the goal; the token stays where it was.
    Overshoot { deficit: u8 },
    /// The token advanced to `landed`, then rides `redirect` if present.
    Landed {
        landed: Cell,
        redirect: Option<Redirect>,
    },
    /// The token landed exactly on the goal.
    Won,
}

/// One settled roll, as recorded in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    pub player: PlayerId,
    pub value: u8,
    pub from: Cell,
    pub outcome: RollOutcome,
    /// Whether this roll handed the same player another turn.
    pub extra_turn: bool,
}

impl RollRecord {
    /// The cell the token rests on once this roll is fully applied.
    #[must_use]
    pub fn rest(&self) -> Cell {
        match self.outcome {
            RollOutcome::Overshoot { .. } => self.from,
            RollOutcome::Landed { landed, redirect } => redirect.map_or(landed, |r| r.to),
            RollOutcome::Won => Cell::GOAL,
        }
    }
}

/// The sub-step a staged resolution performs on its next `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveStep {
    /// Apply the redirect (or none) and announce the move.
    Announce,
    /// Rotate the turn, or hand it back on a six.
    Rotate,
}

/// A landed roll waiting for its staged sub-steps.
///
/// The landing itself is already applied when this is created; the
/// redirect and the rotation are held back so the presentation layer can
/// show the token arriving before it slides or climbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub player: PlayerId,
    pub value: u8,
    pub from: Cell,
    pub landed: Cell,
    pub redirect: Option<Redirect>,
    pub step: ResolveStep,
}

/// Resolve a roll of `value` from `from` against `board`.
///
/// Win detection runs on the landed cell, before any redirect lookup, so
/// a ladder topping out at the goal carries the token there without
/// ending the game. Only a direct landing wins.
#[must_use]
pub fn compute_outcome(from: Cell, value: u8, board: &Board) -> RollOutcome {
    match from.advanced_by(value) {
        None => RollOutcome::Overshoot {
            deficit: from.remaining_to_goal(),
        },
        Some(landed) if landed.is_goal() => RollOutcome::Won,
        Some(landed) => RollOutcome::Landed {
            landed,
            redirect: board.redirect(landed),
        },
    }
}

/// Message shown before a game is started.
pub const SETUP_MESSAGE: &str = "Select number of players and press Start!";

/// Turn prompt for the player about to roll.
#[must_use]
pub fn turn_message(name: &str) -> String {
    format!("{}'s turn - Roll the dice!", name)
}

/// Overshoot notice. Always cites the exact deficit; a six appends the
/// roll-again notice because the turn does not rotate.
#[must_use]
pub fn overshoot_message(name: &str, deficit: u8, six: bool) -> String {
    let mut message = format!("{} needs exactly {} to win!", name, deficit);
    if six {
        message.push_str(" Got a 6, roll again!");
    }
    message
}

/// Move announcement for the redirect step.
#[must_use]
pub fn landing_message(name: &str, landed: Cell, redirect: Option<Redirect>, six: bool) -> String {
    match redirect {
        Some(Redirect {
            kind: RedirectKind::Snake,
            to,
        }) => format!(
            "{} hit a snake! Slid down to {}{}",
            name,
            to,
            if six { " But you got a 6, roll again!" } else { "" }
        ),
        Some(Redirect {
            kind: RedirectKind::Ladder,
            to,
        }) => format!(
            "{} climbed a ladder! Up to {}{}",
            name,
            to,
            if six { " And you got a 6, roll again!" } else { "" }
        ),
        None => format!(
            "{} moved to position {}{}",
            name,
            landed,
            if six { " - Got a 6! Roll again!" } else { "" }
        ),
    }
}

/// Win banner.
#[must_use]
pub fn win_message(name: &str) -> String {
    format!("{} wins!", name)
}
