//! Board cell addressing.
//!
//! The board is a single track of 100 numbered cells. Cell 0 is the
//! off-board starting position (a token that has not entered play yet),
//! cell 100 is the goal. Movement is plain addition along the track;
//! a move that would pass the goal is an overshoot and is expressed here
//! as `advanced_by` returning `None`.

use serde::{Deserialize, Serialize};

/// A position on the board track.
///
/// Valid values are 0..=100: 0 is off-board (not yet entered), 1..=99 are
/// ordinary squares, 100 is the goal. Construction does not range-check;
/// the board table validator and the move arithmetic keep every value the
/// engine produces inside the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell(pub u8);

impl Cell {
    /// Off-board starting position.
    pub const START: Cell = Cell(0);

    /// The winning cell.
    pub const GOAL: Cell = Cell(100);

    /// Create a cell from its board number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Get the raw board number (0 = off board).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Is this the off-board starting position?
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        self.0 == 0
    }

    /// Is this the goal cell?
    #[must_use]
    pub const fn is_goal(self) -> bool {
        self.0 == Self::GOAL.0
    }

    /// Advance by `steps` squares.
    ///
    /// Returns `None` when the move would pass the goal (an overshoot);
    /// the caller must leave the token where it is in that case.
    #[must_use]
    pub fn advanced_by(self, steps: u8) -> Option<Cell> {
        let target = self.0 as u16 + steps as u16;
        if target > Self::GOAL.0 as u16 {
            None
        } else {
            Some(Cell(target as u8))
        }
    }

    /// Exact number of squares remaining to the goal.
    #[must_use]
    pub const fn remaining_to_goal(self) -> u8 {
        Self::GOAL.0 - self.0
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
