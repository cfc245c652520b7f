//! Named feedback events emitted by engine operations.
//!
//! Every mutating operation returns the batch of events it produced, in
//! order. Presentation layers map them to cues (sounds, toasts, token
//! animation) without re-deriving game logic from state diffs.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, PlayerId};

/// Batch of events from a single operation.
///
/// A normal turn emits at most three events per call, so batches stay
/// inline and never allocate.
pub type Events = SmallVec<[GameEvent; 3]>;

/// A single observable game moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The dice animation should begin for this player.
    RollStarted { player: PlayerId },
    /// The authoritative roll value is known.
    DiceRolled { player: PlayerId, value: u8 },
    /// A token advanced (or entered play) without hitting a transit.
    PlayerMoved { player: PlayerId, from: Cell, to: Cell },
    /// A token landed on a snake mouth and slid down.
    SnakeHit { player: PlayerId, from: Cell, to: Cell },
    /// A token landed on a ladder foot and climbed up.
    LadderClimbed { player: PlayerId, from: Cell, to: Cell },
    /// The roll would pass the goal; the token stays put.
    OvershootRejected { player: PlayerId, deficit: u8 },
    /// A token reached cell 100 exactly.
    PlayerWon { player: PlayerId },
}

impl GameEvent {
    /// The player this event concerns.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        match *self {
            GameEvent::RollStarted { player }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::PlayerMoved { player, .. }
            | GameEvent::SnakeHit { player, .. }
            | GameEvent::LadderClimbed { player, .. }
            | GameEvent::OvershootRejected { player, .. }
            | GameEvent::PlayerWon { player } => player,
        }
    }

    /// Whether this event moves a token on the board.
    #[must_use]
    pub const fn moves_token(&self) -> bool {
        matches!(
            self,
            GameEvent::PlayerMoved { .. } | GameEvent::SnakeHit { .. } | GameEvent::LadderClimbed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_player() {
        let p = PlayerId::new(2);

        let events = [
            GameEvent::RollStarted { player: p },
            GameEvent::DiceRolled { player: p, value: 4 },
            GameEvent::PlayerMoved {
                player: p,
                from: Cell::new(3),
                to: Cell::new(7),
            },
            GameEvent::SnakeHit {
                player: p,
                from: Cell::new(16),
                to: Cell::new(6),
            },
            GameEvent::LadderClimbed {
                player: p,
                from: Cell::new(1),
                to: Cell::new(38),
            },
            GameEvent::OvershootRejected { player: p, deficit: 5 },
            GameEvent::PlayerWon { player: p },
        ];

        for event in events {
            assert_eq!(event.player(), p);
        }
    }

    #[test]
    fn test_moves_token() {
        let p = PlayerId::new(0);

        assert!(GameEvent::PlayerMoved {
            player: p,
            from: Cell::new(3),
            to: Cell::new(7),
        }
        .moves_token());
        assert!(GameEvent::SnakeHit {
            player: p,
            from: Cell::new(16),
            to: Cell::new(6),
        }
        .moves_token());
        assert!(!GameEvent::DiceRolled { player: p, value: 4 }.moves_token());
        assert!(!GameEvent::OvershootRejected { player: p, deficit: 2 }.moves_token());
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = GameEvent::SnakeHit {
            player: PlayerId::new(1),
            from: Cell::new(47),
            to: Cell::new(26),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_events_batch_stays_inline() {
        let p = PlayerId::new(0);
        let mut events = Events::new();
        events.push(GameEvent::DiceRolled { player: p, value: 6 });
        events.push(GameEvent::PlayerMoved {
            player: p,
            from: Cell::new(0),
            to: Cell::new(6),
        });
        events.push(GameEvent::PlayerWon { player: p });

        assert!(!events.spilled());
        assert_eq!(events.len(), 3);
    }
}
