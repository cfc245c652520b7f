//! The 100-cell track and its snake and ladder tables.
//!
//! ## Layout
//!
//! Cells are numbered 1 to 100. Tokens start off-board (cell 0) and must
//! land on cell 100 exactly to win. A cell may be the mouth of a snake or
//! the foot of a ladder, never both, and never more than one of either.
//!
//! ## Redirects
//!
//! Landing on a mapped cell moves the token once to the mapped target.
//! A target may itself be the start of another snake or ladder (the
//! classic board has ladder 9 -> 21 with another ladder at 21); that
//! second redirect only fires when a later roll lands on it directly.
//!
//! ```
//! use snakes_ladders::board::{Board, RedirectKind};
//! use snakes_ladders::core::Cell;
//!
//! let board = Board::standard();
//! let hit = board.redirect(Cell::new(16)).unwrap();
//! assert_eq!(hit.kind, RedirectKind::Snake);
//! assert_eq!(hit.to, Cell::new(6));
//! assert!(board.redirect(Cell::new(2)).is_none());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// Snake mouths and their tails on the classic board.
pub const SNAKES: [(u8, u8); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Ladder feet and their tops on the classic board.
pub const LADDERS: [(u8, u8); 9] = [
    (1, 38),
    (4, 14),
    (9, 21),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// Which kind of transit a redirect rides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedirectKind {
    Snake,
    Ladder,
}

/// A single board transit: the cell a landing token is carried to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub kind: RedirectKind,
    pub to: Cell,
}

/// A malformed snake or ladder table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("entry {from} -> {to} leaves the 1..=100 board")]
    EntryOutOfRange { from: u8, to: u8 },

    #[error("cell 100 is the goal and cannot start a snake or ladder")]
    RedirectAtGoal,

    #[error("cell {cell} redirects to itself")]
    SelfTarget { cell: u8 },

    #[error("snake at {from} must slide down, not up to {to}")]
    SnakeGoesUp { from: u8, to: u8 },

    #[error("ladder at {from} must climb up, not down to {to}")]
    LadderGoesDown { from: u8, to: u8 },

    #[error("cell {cell} starts more than one snake or ladder")]
    DuplicateEntry { cell: u8 },
}

/// Immutable board topology shared by every session on it.
#[derive(Clone, Debug)]
pub struct Board {
    snakes: FxHashMap<Cell, Cell>,
    ladders: FxHashMap<Cell, Cell>,
}

impl Board {
    /// The classic board with ten snakes and nine ladders.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_tables(&SNAKES, &LADDERS).expect("canonical tables are valid")
    }

    /// Build a board from explicit snake and ladder tables.
    ///
    /// Both tables are validated: every cell stays in `1..=100`, the goal
    /// never starts a transit, snakes go down, ladders go up, and no cell
    /// starts more than one transit. Targets are allowed to coincide with
    /// other transit starts.
    pub fn from_tables(snakes: &[(u8, u8)], ladders: &[(u8, u8)]) -> Result<Self, BoardError> {
        let mut board = Self {
            snakes: FxHashMap::default(),
            ladders: FxHashMap::default(),
        };

        for &(from, to) in snakes {
            Self::check_entry(from, to)?;
            if to > from {
                return Err(BoardError::SnakeGoesUp { from, to });
            }
            if board.ladders.contains_key(&Cell::new(from))
                || board.snakes.insert(Cell::new(from), Cell::new(to)).is_some()
            {
                return Err(BoardError::DuplicateEntry { cell: from });
            }
        }

        for &(from, to) in ladders {
            Self::check_entry(from, to)?;
            if to < from {
                return Err(BoardError::LadderGoesDown { from, to });
            }
            if board.snakes.contains_key(&Cell::new(from))
                || board.ladders.insert(Cell::new(from), Cell::new(to)).is_some()
            {
                return Err(BoardError::DuplicateEntry { cell: from });
            }
        }

        Ok(board)
    }

    fn check_entry(from: u8, to: u8) -> Result<(), BoardError> {
        if from == 0 || from > 100 || to == 0 || to > 100 {
            return Err(BoardError::EntryOutOfRange { from, to });
        }
        if from == 100 {
            return Err(BoardError::RedirectAtGoal);
        }
        if from == to {
            return Err(BoardError::SelfTarget { cell: from });
        }
        Ok(())
    }

    /// The transit starting at `cell`, if any.
    #[must_use]
    pub fn redirect(&self, cell: Cell) -> Option<Redirect> {
        if let Some(&to) = self.snakes.get(&cell) {
            return Some(Redirect {
                kind: RedirectKind::Snake,
                to,
            });
        }
        self.ladders.get(&cell).map(|&to| Redirect {
            kind: RedirectKind::Ladder,
            to,
        })
    }

    /// The tail of the snake whose mouth is at `cell`, if any.
    #[must_use]
    pub fn snake_target(&self, cell: Cell) -> Option<Cell> {
        self.snakes.get(&cell).copied()
    }

    /// The top of the ladder whose foot is at `cell`, if any.
    #[must_use]
    pub fn ladder_target(&self, cell: Cell) -> Option<Cell> {
        self.ladders.get(&cell).copied()
    }

    /// Iterate over all snakes as `(mouth, tail)` pairs.
    pub fn snakes(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.snakes.iter().map(|(&from, &to)| (from, to))
    }

    /// Iterate over all ladders as `(foot, top)` pairs.
    pub fn ladders(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.ladders.iter().map(|(&from, &to)| (from, to))
    }

    /// Number of snakes on the board.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of ladders on the board.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
