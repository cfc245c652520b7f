//! Player identity and the fixed four-seat roster.
//!
//! ## PlayerId
//!
//! Type-safe 0-based index into the roster.
//!
//! ## Roster
//!
//! A session always owns four players ("Player 1".."Player 4" with the
//! classic token colors); `start_game` activates the first two, three or
//! four of them. The color is a cosmetic tag carried through to the
//! presentation layer and never interpreted by the engine.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Number of seats in the roster. Sessions activate 2..=4 of them.
pub const ROSTER_SIZE: usize = 4;

/// Player identifier, 0-based index into the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the IDs of the first `count` seats.
    pub fn all(count: usize) -> impl Iterator<Item = PlayerId> {
        (0..count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Display is 1-based to match the roster names.
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Cosmetic token color. Opaque to the game rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    /// Lowercase color name for display layers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One roster seat: identity plus the token's current position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Roster index.
    pub id: PlayerId,
    /// Display name used in session messages.
    pub name: String,
    /// Cosmetic tag, never interpreted by the engine.
    pub color: PlayerColor,
    /// Current cell; `Cell::START` until the token enters play.
    pub position: Cell,
}

impl Player {
    /// Create a player at the off-board start position.
    pub fn new(id: PlayerId, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            position: Cell::START,
        }
    }

    /// The default four-seat roster.
    #[must_use]
    pub fn default_roster() -> Vec<Player> {
        use PlayerColor::*;
        [Red, Blue, Green, Yellow]
            .into_iter()
            .enumerate()
            .map(|(i, color)| Player::new(PlayerId::new(i as u8), format!("Player {}", i + 1), color))
            .collect()
    }
}

/// Witness type for the legal active-player counts.
///
/// The session boundary accepts 2, 3 or 4 players and nothing else; using
/// an enum makes the illegal values unrepresentable once past the caller's
/// input handling. Convert user input with `TryFrom<u8>` and reject there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerCount {
    Two,
    Three,
    Four,
}

impl PlayerCount {
    /// All legal counts, smallest first.
    pub const ALL: [PlayerCount; 3] = [PlayerCount::Two, PlayerCount::Three, PlayerCount::Four];

    /// The count as a plain number of players.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        match self {
            PlayerCount::Two => 2,
            PlayerCount::Three => 3,
            PlayerCount::Four => 4,
        }
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// A player count outside 2..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("player count must be 2, 3 or 4, got {0}")]
pub struct InvalidPlayerCount(pub u8);

impl TryFrom<u8> for PlayerCount {
    type Error = InvalidPlayerCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(PlayerCount::Two),
            3 => Ok(PlayerCount::Three),
            4 => Ok(PlayerCount::Four),
            other => Err(InvalidPlayerCount(other)),
        }
    }
}
