//! Turn sequencing.

use serde::{Deserialize, Serialize};

use crate::Side;

/// Whose turn it is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Turn {
    /// No action has been played yet; either side may open.
    #[default]
    NotStarted,
    /// The given side is to act.
    Of(Side),
}

impl Turn {
    /// Check whether `side` may act now.
    #[inline]
    pub fn allows(self, side: Side) -> bool {
        match self {
            Turn::NotStarted => true,
            Turn::Of(current) => current == side,
        }
    }

    /// Hand the turn over after `mover` has acted.
    ///
    /// The first action of the game starts the sequence with the other
    /// side, the same as every later flip.
    #[inline]
    pub fn advance(self, mover: Side) -> Turn {
        debug_assert!(self.allows(mover));
        Turn::Of(mover.opponent())
    }

    /// The side to act, or None before the first action.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Turn::NotStarted => None,
            Turn::Of(side) => Some(side),
        }
    }
}
