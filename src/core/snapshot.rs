//! Read-only state views for presentation layers.
//!
//! A [`Snapshot`] is captured after every mutation and carries exactly
//! what a renderer needs: phase, active players, turn cursor, dice face,
//! winner, message and the presentation flags. It owns its data, so it
//! stays valid while the engine keeps mutating.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::player::{Player, PlayerColor, PlayerId};
use super::session::{GameSession, Phase};

/// One active player's renderable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub position: Cell,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            color: player.color,
            position: player.position,
        }
    }
}

/// Full renderable state of the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    /// Active players only, in turn order.
    pub players: Vec<PlayerView>,
    pub current_index: usize,
    pub dice_value: u8,
    pub winner: Option<PlayerId>,
    pub message: String,
    pub last_rolled_six: bool,
    pub sound_enabled: bool,
}

impl Snapshot {
    /// Capture the current session state.
    #[must_use]
    pub fn capture(session: &GameSession) -> Self {
        Self {
            phase: session.phase(),
            players: session.active_players().iter().map(PlayerView::from).collect(),
            current_index: session.current_index(),
            dice_value: session.dice_value(),
            winner: session.winner(),
            message: session.message().to_string(),
            last_rolled_six: session.last_rolled_six(),
            sound_enabled: session.sound_enabled(),
        }
    }

    /// The view of the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &PlayerView {
        &self.players[self.current_index]
    }

    /// Whether the session has ended.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_defaults() {
        let session = GameSession::new();
        let snapshot = Snapshot::capture(&session);

        assert_eq!(snapshot.phase, Phase::Setup);
        assert_eq!(snapshot.players.len(), 4);
        assert_eq!(snapshot.current_index, 0);
        assert_eq!(snapshot.dice_value, 1);
        assert_eq!(snapshot.winner, None);
        assert!(!snapshot.last_rolled_six);
        assert!(snapshot.sound_enabled);
        assert!(!snapshot.finished());
    }

    #[test]
    fn test_capture_reflects_session() {
        let mut session = GameSession::new();
        session.active_count = 2;
        session.current_index = 1;
        session.dice_value = 6;
        session.last_rolled_six = true;
        session.players[1].position = Cell::new(38);
        session.message = "Player 2 climbed a ladder! Up to 38".to_string();

        let snapshot = Snapshot::capture(&session);

        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.current_player().name, "Player 2");
        assert_eq!(snapshot.current_player().position, Cell::new(38));
        assert_eq!(snapshot.dice_value, 6);
        assert!(snapshot.last_rolled_six);
        assert_eq!(snapshot.message, "Player 2 climbed a ladder! Up to 38");
    }

    #[test]
    fn test_player_view_from_player() {
        let player = Player::new(PlayerId::new(2), "Player 3", PlayerColor::Green);
        let view = PlayerView::from(&player);

        assert_eq!(view.id, PlayerId::new(2));
        assert_eq!(view.name, "Player 3");
        assert_eq!(view.color, PlayerColor::Green);
        assert_eq!(view.position, Cell::START);
    }

    #[test]
    fn test_snapshot_owns_its_data() {
        let mut session = GameSession::new();
        let before = Snapshot::capture(&session);

        session.players[0].position = Cell::new(50);
        session.message = "changed".to_string();

        assert_eq!(before.players[0].position, Cell::START);
        assert_ne!(before, Snapshot::capture(&session));
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let session = GameSession::new();
        let snapshot = Snapshot::capture(&session);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
