//! Ordered piece stacks held by board cells.

use serde::{Deserialize, Serialize};

use crate::{Color, EmptyStack, Unit};

/// A non-empty pile of units, stored bottom to top.
///
/// A cell without units holds no `Stack` at all; every operation that could
/// leave a stack empty hands back `None` instead. Serialized as a plain
/// bottom-to-top list; an empty list is refused on the way in.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Unit>", into = "Vec<Unit>")]
pub struct Stack {
    units: Vec<Unit>,
}

impl Stack {
    /// Create a height-1 stack.
    pub fn singleton(unit: Unit) -> Stack {
        Stack { units: vec![unit] }
    }

    /// Create a stack from units listed bottom to top.
    /// Returns None if `units` is empty.
    pub fn from_units(units: Vec<Unit>) -> Option<Stack> {
        if units.is_empty() {
            None
        } else {
            Some(Stack { units })
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.units.len()
    }

    /// Get the topmost unit.
    #[inline]
    pub fn top(&self) -> Unit {
        *self.units.last().expect("stack is never empty")
    }

    /// Color of the topmost unit. This is the color that controls the stack.
    #[inline]
    pub fn top_color(&self) -> Color {
        self.top().color()
    }

    /// Units bottom to top.
    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Units top to bottom.
    pub fn units_top_to_bottom(&self) -> impl Iterator<Item = Unit> + '_ {
        self.units.iter().rev().copied()
    }

    /// Split off the top `k` units.
    ///
    /// Returns `(lower_remainder, upper_portion)`. Both keep their internal
    /// order. The remainder is None when the whole stack is taken.
    ///
    /// Panics unless `1 <= k <= height`.
    pub fn split_from_top(mut self, k: usize) -> (Option<Stack>, Stack) {
        assert!(
            k >= 1 && k <= self.height(),
            "split depth {} out of range for stack of height {}",
            k,
            self.height()
        );
        let at = self.height() - k;
        let upper = Stack { units: self.units.split_off(at) };
        (Stack::from_units(self.units), upper)
    }

    /// Place `self` on top of `other`, returning the combined stack.
    pub fn merge_onto(self, mut other: Stack) -> Stack {
        other.units.extend(self.units);
        other
    }

    /// Remove every unit below the top `keep` units.
    ///
    /// The removed units are returned bottom-most first. Returns an empty
    /// vector when the stack is already `keep` tall or shorter.
    pub fn shed_bottom(&mut self, keep: usize) -> Vec<Unit> {
        assert!(keep >= 1, "a stack must keep at least one unit");
        let excess = self.height().saturating_sub(keep);
        self.units.drain(..excess).collect()
    }
}

impl TryFrom<Vec<Unit>> for Stack {
    type Error = EmptyStack;

    fn try_from(units: Vec<Unit>) -> Result<Stack, EmptyStack> {
        Stack::from_units(units).ok_or(EmptyStack)
    }
}

impl From<Stack> for Vec<Unit> {
    fn from(stack: Stack) -> Vec<Unit> {
        stack.units
    }
}
