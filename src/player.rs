//! Players and their reserve/capture ledgers.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Color, Unit};

/// One of the two players: identity plus the units they have taken off the
/// board.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
    /// Own units pushed off overflowing stacks, oldest first.
    reserve: VecDeque<Unit>,
    captured: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Player {
        Player {
            name: name.into(),
            color,
            reserve: VecDeque::new(),
            captured: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of units waiting in reserve.
    pub fn reserve_count(&self) -> usize {
        self.reserve.len()
    }

    /// Reserve units, oldest first.
    pub fn reserve(&self) -> impl Iterator<Item = Unit> + '_ {
        self.reserve.iter().copied()
    }

    /// Number of enemy units captured so far.
    pub fn captured(&self) -> u8 {
        self.captured
    }

    pub(crate) fn add_to_reserve(&mut self, unit: Unit) {
        debug_assert_eq!(unit.color(), self.color);
        self.reserve.push_back(unit);
    }

    /// Take the oldest reserve unit.
    pub(crate) fn take_from_reserve(&mut self) -> Option<Unit> {
        self.reserve.pop_front()
    }

    pub(crate) fn record_capture(&mut self) {
        self.captured += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_empty() {
        let p = Player::new("alice", Color('R'));
        assert_eq!(p.name(), "alice");
        assert_eq!(p.color(), Color('R'));
        assert_eq!(p.reserve_count(), 0);
        assert_eq!(p.captured(), 0);
    }

    #[test]
    fn test_reserve_is_fifo() {
        let mut p = Player::new("alice", Color('R'));
        p.add_to_reserve(Unit::new(Color('R')));
        p.add_to_reserve(Unit::new(Color('R')));
        assert_eq!(p.reserve_count(), 2);
        assert!(p.reserve().all(|u| u.color() == Color('R')));

        assert!(p.take_from_reserve().is_some());
        assert_eq!(p.reserve_count(), 1);
        assert!(p.take_from_reserve().is_some());
        assert_eq!(p.take_from_reserve(), None);
    }

    #[test]
    fn test_record_capture() {
        let mut p = Player::new("bob", Color('G'));
        for _ in 0..3 {
            p.record_capture();
        }
        assert_eq!(p.captured(), 3);
    }
}
