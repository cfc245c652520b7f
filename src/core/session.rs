//! Session state for a single play-through.
//!
//! The session is a plain data container; all mutation goes through the
//! engine operations in [`crate::engine`]. Fields stay crate-private so
//! presentation layers read through the accessors here or through a
//! [`Snapshot`](super::snapshot::Snapshot).

use serde::{Deserialize, Serialize};

use crate::engine::{Resolution, RollRecord, SETUP_MESSAGE};

use super::cell::Cell;
use super::player::{Player, PlayerId, ROSTER_SIZE};

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Choosing the player count; nothing on the board yet.
    Setup,
    /// A player's turn, dice idle.
    AwaitingRoll,
    /// A roll is committed but not yet revealed.
    Rolling,
    /// The landed move is waiting for its staged redirect and rotation.
    Resolving,
    /// A winner exists. Terminal until reset.
    Finished,
}

/// Authoritative state of one game.
///
/// Owns the four-seat roster, the turn cursor and everything the
/// presentation layer reads between operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) players: Vec<Player>,
    pub(crate) active_count: usize,
    pub(crate) current_index: usize,
    pub(crate) dice_value: u8,
    pub(crate) phase: Phase,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) last_rolled_six: bool,
    pub(crate) message: String,
    pub(crate) sound_enabled: bool,
    pub(crate) pending_roll: Option<u8>,
    pub(crate) resolution: Option<Resolution>,
    pub(crate) history: Vec<RollRecord>,
}

impl GameSession {
    /// A fresh session with the default roster, in `Setup`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_roster(Player::default_roster())
    }

    /// A fresh session with a custom roster. The roster must have exactly
    /// four seats; `start_game` later activates the first 2..=4 of them.
    #[must_use]
    pub fn with_roster(players: Vec<Player>) -> Self {
        assert_eq!(players.len(), ROSTER_SIZE, "roster must have {} seats", ROSTER_SIZE);
        Self {
            players,
            active_count: ROSTER_SIZE,
            current_index: 0,
            dice_value: 1,
            phase: Phase::Setup,
            winner: None,
            last_rolled_six: false,
            message: SETUP_MESSAGE.to_string(),
            sound_enabled: true,
            pending_roll: None,
            resolution: None,
            history: Vec::new(),
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The full four-seat roster, active or not.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The players taking part in the current game.
    #[must_use]
    pub fn active_players(&self) -> &[Player] {
        &self.players[..self.active_count]
    }

    /// How many roster seats are active.
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.active_count
    }

    /// 0-based index of the player whose turn it is.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_index]
    }

    /// Last resolved dice value. Stays at its previous value while a roll
    /// is in flight; starts at 1.
    #[must_use]
    pub const fn dice_value(&self) -> u8 {
        self.dice_value
    }

    /// The winner, once someone has landed exactly on the goal.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// The winning player's full record, if the game is over.
    #[must_use]
    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.map(|id| &self.players[id.index()])
    }

    /// Whether the last settled roll was a six.
    #[must_use]
    pub const fn last_rolled_six(&self) -> bool {
        self.last_rolled_six
    }

    /// Current user-facing message line.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Presentation-only sound flag. Survives reset.
    #[must_use]
    pub const fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Whether a roll is committed but not yet revealed.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.phase == Phase::Rolling
    }

    /// Every settled roll so far, oldest first. Cleared by reset.
    #[must_use]
    pub fn history(&self) -> &[RollRecord] {
        &self.history
    }

    /// The position of a roster seat, if the ID is in range.
    #[must_use]
    pub fn position(&self, id: PlayerId) -> Option<Cell> {
        self.players.get(id.index()).map(|p| p.position)
    }

    /// Move the turn cursor to the next active player.
    pub(crate) fn rotate(&mut self) {
        self.current_index = (self.current_index + 1) % self.active_count;
    }

    /// Return to `Setup`, keeping only the sound flag and the chosen
    /// player count.
    pub(crate) fn reset(&mut self) {
        for player in &mut self.players {
            player.position = Cell::START;
        }
        self.current_index = 0;
        self.dice_value = 1;
        self.phase = Phase::Setup;
        self.winner = None;
        self.last_rolled_six = false;
        self.message = SETUP_MESSAGE.to_string();
        self.pending_roll = None;
        self.resolution = None;
        self.history.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerColor;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new();

        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.active_count(), 4);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.dice_value(), 1);
        assert_eq!(session.winner(), None);
        assert!(!session.last_rolled_six());
        assert!(session.sound_enabled());
        assert!(!session.is_rolling());
        assert_eq!(session.message(), SETUP_MESSAGE);
        assert!(session.history().is_empty());

        for player in session.players() {
            assert_eq!(player.position, Cell::START);
        }
    }

    #[test]
    fn test_custom_roster() {
        let roster = vec![
            Player::new(PlayerId::new(0), "Ada", PlayerColor::Red),
            Player::new(PlayerId::new(1), "Brin", PlayerColor::Blue),
            Player::new(PlayerId::new(2), "Ceres", PlayerColor::Green),
            Player::new(PlayerId::new(3), "Dara", PlayerColor::Yellow),
        ];
        let session = GameSession::with_roster(roster);

        assert_eq!(session.players()[0].name, "Ada");
        assert_eq!(session.players()[3].name, "Dara");
    }

    #[test]
    #[should_panic(expected = "roster must have 4 seats")]
    fn test_wrong_roster_size_panics() {
        let roster = vec![Player::new(PlayerId::new(0), "Solo", PlayerColor::Red)];
        let _ = GameSession::with_roster(roster);
    }

    #[test]
    fn test_rotate_wraps() {
        let mut session = GameSession::new();
        session.active_count = 3;

        session.rotate();
        assert_eq!(session.current_index(), 1);
        session.rotate();
        assert_eq!(session.current_index(), 2);
        session.rotate();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_reset_preserves_sound_and_count() {
        let mut session = GameSession::new();
        session.active_count = 3;
        session.sound_enabled = false;
        session.phase = Phase::Finished;
        session.current_index = 2;
        session.dice_value = 6;
        session.last_rolled_six = true;
        session.winner = Some(PlayerId::new(2));
        session.players[2].position = Cell::GOAL;
        session.message = "Player 3 wins!".to_string();

        session.reset();

        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.active_count(), 3);
        assert!(!session.sound_enabled());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.dice_value(), 1);
        assert!(!session.last_rolled_six());
        assert_eq!(session.winner(), None);
        assert_eq!(session.message(), SETUP_MESSAGE);
        for player in session.players() {
            assert_eq!(player.position, Cell::START);
        }
    }

    #[test]
    fn test_active_players_window() {
        let mut session = GameSession::new();
        session.active_count = 2;

        let active = session.active_players();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].name, "Player 1");
        assert_eq!(active[1].name, "Player 2");
    }

    #[test]
    fn test_position_lookup() {
        let mut session = GameSession::new();
        session.players[1].position = Cell::new(42);

        assert_eq!(session.position(PlayerId::new(1)), Some(Cell::new(42)));
        assert_eq!(session.position(PlayerId::new(0)), Some(Cell::START));
        assert_eq!(session.position(PlayerId::new(9)), None);
    }

    #[test]
    fn test_session_serde_round_trip() {
        let mut session = GameSession::new();
        session.players[0].position = Cell::new(17);
        session.dice_value = 4;

        let json = serde_json::to_string(&session).unwrap();
        let back: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }
}
