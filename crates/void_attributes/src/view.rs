//! Read-only, slot-addressed access to an inventory

use crate::filter::Filter;
use crate::listener::{InvChangeListener, ListenerRemoval, ListenerToken, SlotChangeListener};
use crate::stack::Stack;
use std::sync::Arc;

/// Identity of the storage cell behind a slot.
///
/// Two slots with equal `StorageSlot`s read and write the same stack, which
/// is how aliasing views (a mapping that repeats a slot, or an inventory
/// combined with itself) are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StorageSlot {
    owner: usize,
    slot: usize,
}

impl StorageSlot {
    /// Slot `slot` of the storage owned by `owner`
    pub fn new<T: ?Sized>(owner: &T, slot: usize) -> Self {
        Self {
            owner: owner as *const T as *const () as usize,
            slot,
        }
    }
}

/// Read access to a fixed number of slots.
///
/// Slot indices run over `[0, slot_count)`. Asking for any other slot is a
/// contract violation and panics.
pub trait FixedInvView<S: Stack>: Send + Sync {
    /// Number of slots. Stable for the lifetime of the inventory.
    fn slot_count(&self) -> usize;

    /// A copy of the stack in `slot`; an empty marker stack if the slot is empty
    fn get_stack(&self, slot: usize) -> S;

    /// Filter describing which kinds of stack the slot accepts
    fn filter_for_slot(&self, slot: usize) -> Filter<S> {
        let _ = slot;
        Filter::Everything
    }

    /// Check if `stack` is the right kind for `slot`.
    ///
    /// This ignores what the slot currently holds and how much room is left:
    /// a stack passing this check may still be refused on insertion.
    fn is_valid_for_slot(&self, slot: usize, stack: &S) -> bool {
        self.filter_for_slot(slot).matches(stack)
    }

    /// The most units of `stack`'s kind that `slot` can hold
    fn max_amount(&self, slot: usize, stack: &S) -> u32 {
        let _ = slot;
        stack.max_count()
    }

    /// The storage cell behind `slot`.
    ///
    /// Inventories that own their stacks keep the default; views forward to
    /// whatever they wrap.
    fn storage_slot(&self, slot: usize) -> StorageSlot {
        StorageSlot::new(self, slot)
    }

    /// Register a slot change listener.
    ///
    /// Returns `None` if this inventory cannot report changes.
    fn add_listener(
        &self,
        listener: SlotChangeListener<S>,
        removal: ListenerRemoval,
    ) -> Option<ListenerToken> {
        let _ = (listener, removal);
        None
    }

    /// Register a listener that only wants to know that something changed,
    /// not where. It fires once per slot change.
    fn add_change_listener(
        &self,
        listener: InvChangeListener,
        removal: ListenerRemoval,
    ) -> Option<ListenerToken> {
        self.add_listener(Arc::new(move |_: usize, _: &S, _: &S| listener()), removal)
    }
}
