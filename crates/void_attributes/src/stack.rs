//! The stack abstraction consumed by every inventory
//!
//! A stack is a quantity of one kind of storable thing (an item, a fluid)
//! plus whatever auxiliary data makes two stacks of the same thing differ.
//! Empty is a distinguished zero-count value, never `None`.

use core::fmt::Debug;

/// Something that can sit in an inventory slot
pub trait Stack: Clone + Debug + Send + Sync + 'static {
    /// The empty marker value
    fn empty() -> Self;

    /// Number of units in this stack
    fn count(&self) -> u32;

    /// Overwrite the number of units
    fn set_count(&mut self, count: u32);

    /// Equality ignoring the count. Two stacks that are the same kind can merge.
    fn same_kind(&self, other: &Self) -> bool;

    /// Check if this stack holds nothing
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The most units a single stack of this kind may hold on its own.
    ///
    /// Slots supply their own capacity through `max_amount`; this only caps
    /// the target that extracted units are merged into.
    fn max_count(&self) -> u32 {
        u32::MAX
    }

    /// Add units (saturating)
    fn increment(&mut self, amount: u32) {
        let count = self.count().saturating_add(amount);
        self.set_count(count);
    }

    /// Remove units (saturating)
    fn decrement(&mut self, amount: u32) {
        let count = self.count().saturating_sub(amount);
        self.set_count(count);
    }

    /// A copy of this stack holding `count` units
    fn with_count(&self, count: u32) -> Self {
        let mut copy = self.clone();
        copy.set_count(count);
        copy
    }

    /// Remove up to `amount` units from this stack and return them
    fn split(&mut self, amount: u32) -> Self {
        let taken = amount.min(self.count());
        if taken == 0 {
            return Self::empty();
        }
        let split = self.with_count(taken);
        self.decrement(taken);
        split
    }
}

#[cfg(test)]
pub(crate) mod test_stack {
    //! Minimal stack used by the core's own unit tests

    use super::Stack;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Pile {
        pub kind: &'static str,
        pub count: u32,
    }

    impl Pile {
        pub fn new(kind: &'static str, count: u32) -> Self {
            Self { kind, count }
        }
    }

    impl Stack for Pile {
        fn empty() -> Self {
            Self::new("", 0)
        }

        fn count(&self) -> u32 {
            self.count
        }

        fn set_count(&mut self, count: u32) {
            self.count = count;
        }

        fn same_kind(&self, other: &Self) -> bool {
            self.kind == other.kind
        }

        fn max_count(&self) -> u32 {
            64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_stack::Pile;
    use super::*;

    #[test]
    fn test_split() {
        let mut pile = Pile::new("sand", 10);

        let split = pile.split(4);
        assert_eq!(split, Pile::new("sand", 4));
        assert_eq!(pile.count, 6);

        let rest = pile.split(100);
        assert_eq!(rest.count, 6);
        assert!(pile.is_empty());

        assert!(pile.split(3).is_empty());
    }

    #[test]
    fn test_saturating_counts() {
        let mut pile = Pile::new("sand", u32::MAX - 1);
        pile.increment(5);
        assert_eq!(pile.count, u32::MAX);

        pile.set_count(2);
        pile.decrement(5);
        assert_eq!(pile.count, 0);
    }
}
