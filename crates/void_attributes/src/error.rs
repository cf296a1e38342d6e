//! Error types for inventory contract violations
//!
//! Rejections (a remainder handed back, an unchanged merge target, a `false`
//! from `set_stack`) are ordinary return values and never show up here.

use thiserror::Error;

/// Result type for inventory construction and forced writes
pub type Result<T> = std::result::Result<T, InvError>;

/// Programmer errors raised at the call site that broke an inventory contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvError {
    /// Slot index outside `[0, slot_count)`
    #[error("Slot {slot} is out of range (slot count {slot_count})")]
    SlotOutOfRange { slot: usize, slot_count: usize },

    /// Slot range that is reversed or runs past the end of the inventory
    #[error("Invalid slot range {from}..{to} (slot count {slot_count})")]
    InvalidRange {
        from: usize,
        to: usize,
        slot_count: usize,
    },

    /// Mapping entry that does not address a parent slot
    #[error("Mapping entry {index} points at slot {slot}, but the parent has {slot_count} slots")]
    InvalidMapping {
        index: usize,
        slot: usize,
        slot_count: usize,
    },

    /// `force_set_stack` was refused by the inventory
    #[error("Unable to force-set the slot {slot} to {stack}")]
    ForceSetRejected { slot: usize, stack: String },
}

impl InvError {
    /// Create a force-set error, rendering the stack with its debug form
    pub fn force_set_rejected(slot: usize, stack: &impl std::fmt::Debug) -> Self {
        InvError::ForceSetRejected {
            slot,
            stack: format!("{:?}", stack),
        }
    }
}

/// Check that `slot` addresses one of `slot_count` slots
pub fn check_slot(slot: usize, slot_count: usize) -> Result<()> {
    if slot < slot_count {
        Ok(())
    } else {
        Err(InvError::SlotOutOfRange { slot, slot_count })
    }
}

/// Check that `from..to` is a valid slice of `slot_count` slots
pub fn check_range(from: usize, to: usize, slot_count: usize) -> Result<()> {
    if from <= to && to <= slot_count {
        Ok(())
    } else {
        Err(InvError::InvalidRange {
            from,
            to,
            slot_count,
        })
    }
}

/// Panic with the out-of-range message unless `slot < slot_count`.
///
/// Live slot access fails loudly, the same way slice indexing does.
#[track_caller]
pub(crate) fn assert_slot(slot: usize, slot_count: usize) {
    if let Err(e) = check_slot(slot, slot_count) {
        panic!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range(0, 0, 0).is_ok());
        assert!(check_range(1, 3, 3).is_ok());
        assert_eq!(
            check_range(2, 1, 3),
            Err(InvError::InvalidRange { from: 2, to: 1, slot_count: 3 })
        );
        assert!(check_range(0, 4, 3).is_err());
    }

    #[test]
    fn test_messages() {
        let err = InvError::SlotOutOfRange { slot: 7, slot_count: 5 };
        assert_eq!(err.to_string(), "Slot 7 is out of range (slot count 5)");

        let err = InvError::force_set_rejected(2, &"stone");
        assert_eq!(err.to_string(), "Unable to force-set the slot 2 to \"stone\"");
    }

    #[test]
    #[should_panic(expected = "Slot 3 is out of range")]
    fn test_assert_slot_panics() {
        assert_slot(3, 3);
    }
}
