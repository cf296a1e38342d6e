//! Mutable fixed-slot inventories and the entry points to their decorators

use crate::combined::CombinedFixedInv;
use crate::error::{self, InvError, Result};
use crate::filter::Filter;
use crate::grouped::{Extractable, GroupedInv, Insertable, Transferable};
use crate::grouped_wrapper::GroupedInvFixedWrapper;
use crate::limited::LimitedFixedInvBuilder;
use crate::listener::{ListenerRemoval, ListenerToken, SlotChangeListener};
use crate::mapped::MappedFixedInv;
use crate::simulation::Simulation;
use crate::slot::SingleSlot;
use crate::stack::Stack;
use crate::sub::SubFixedInv;
use crate::transfer;
use crate::view::{FixedInvView, StorageSlot};
use std::sync::Arc;

/// Shared handle to a fixed inventory
pub type FixedInvRef<S> = Arc<dyn FixedInv<S>>;

/// A [`FixedInvView`] whose contents can be changed.
///
/// Implementations only have to provide `set_stack`; slot insertion and
/// extraction are built on top of it. Implementations may refuse any stack
/// they like, so the contents cannot necessarily be set to anything a
/// caller wishes.
pub trait FixedInv<S: Stack>: FixedInvView<S> {
    /// Replace the stack in `slot`.
    ///
    /// Returns `false` if the inventory refused the change (for example the
    /// stack fails the slot's filter or is over capacity). With
    /// [`Simulation::Simulate`] the answer is the same but nothing changes.
    fn set_stack(&self, slot: usize, to: S, simulation: Simulation) -> bool;

    /// Replace the stack in `slot`, failing if the inventory refused it
    fn force_set_stack(&self, slot: usize, to: S) -> Result<()> {
        if self.set_stack(slot, to.clone(), Simulation::Action) {
            Ok(())
        } else {
            Err(InvError::force_set_rejected(slot, &to))
        }
    }

    /// Apply `f` to the stack in `slot` and force-set the result
    fn modify_slot(&self, slot: usize, f: &mut dyn FnMut(S) -> S) -> Result<()> {
        let modified = f(self.get_stack(slot));
        self.force_set_stack(slot, modified)
    }

    /// Insert `stack` into `slot`, returning the excess that was not accepted
    fn insert_stack(&self, slot: usize, stack: &S, simulation: Simulation) -> S {
        transfer::insert_stack(self, slot, stack, simulation)
    }

    /// Extract up to `max_count` units from `slot`.
    ///
    /// If `filter` is given it must match the stored stack. The extracted
    /// units are merged into `merge_with`, which must be empty or the same
    /// kind as the stored stack; it comes back unchanged if nothing moved.
    fn extract_stack(
        &self,
        slot: usize,
        filter: Option<&Filter<S>>,
        merge_with: S,
        max_count: u32,
        simulation: Simulation,
    ) -> S {
        transfer::extract_stack(self, slot, filter, merge_with, max_count, simulation)
    }
}

/// Decorator entry points on a shared fixed inventory.
///
/// Every method that would produce a no-op wrapper hands back an existing
/// handle instead: the parent itself, or the shared empty inventory.
pub trait FixedInvExt<S: Stack> {
    /// Slots `from..to` of this inventory
    fn sub_inv(&self, from: usize, to: usize) -> Result<FixedInvRef<S>>;

    /// Local slot `i` maps to parent slot `slots[i]`; duplicates alias
    fn mapped_inv(&self, slots: &[usize]) -> Result<FixedInvRef<S>>;

    /// This inventory followed by `others`, as one slot space
    fn combined_with(&self, others: &[FixedInvRef<S>]) -> FixedInvRef<S>;

    /// Slot-agnostic view over this inventory
    fn grouped(&self) -> Arc<dyn GroupedInv<S>>;

    /// Insert into any slot
    fn insertable(&self) -> Arc<dyn Insertable<S>>;

    /// Extract from any slot
    fn extractable(&self) -> Arc<dyn Extractable<S>>;

    /// Insert into and extract from any slot
    fn transferable(&self) -> Arc<dyn Transferable<S>>;

    /// Start configuring a rule-limited wrapper over this inventory
    fn limited(&self) -> LimitedFixedInvBuilder<S>;

    /// Read-only window that cannot be turned back into a mutable inventory
    fn view(&self) -> Arc<dyn FixedInvView<S>>;

    /// A single slot of this inventory
    fn slot(&self, slot: usize) -> Result<SingleSlot<S>>;

    /// Every slot, in ascending order
    fn slots(&self) -> Slots<S>;
}

impl<S: Stack> FixedInvExt<S> for FixedInvRef<S> {
    fn sub_inv(&self, from: usize, to: usize) -> Result<FixedInvRef<S>> {
        SubFixedInv::create(self, from, to)
    }

    fn mapped_inv(&self, slots: &[usize]) -> Result<FixedInvRef<S>> {
        MappedFixedInv::create(self, slots)
    }

    fn combined_with(&self, others: &[FixedInvRef<S>]) -> FixedInvRef<S> {
        let mut parts = Vec::with_capacity(others.len() + 1);
        parts.push(Arc::clone(self));
        parts.extend(others.iter().cloned());
        CombinedFixedInv::create(parts)
    }

    fn grouped(&self) -> Arc<dyn GroupedInv<S>> {
        Arc::new(GroupedInvFixedWrapper::new(Arc::clone(self)))
    }

    fn insertable(&self) -> Arc<dyn Insertable<S>> {
        Arc::new(GroupedInvFixedWrapper::new(Arc::clone(self)))
    }

    fn extractable(&self) -> Arc<dyn Extractable<S>> {
        Arc::new(GroupedInvFixedWrapper::new(Arc::clone(self)))
    }

    fn transferable(&self) -> Arc<dyn Transferable<S>> {
        Arc::new(GroupedInvFixedWrapper::new(Arc::clone(self)))
    }

    fn limited(&self) -> LimitedFixedInvBuilder<S> {
        LimitedFixedInvBuilder::new(Arc::clone(self))
    }

    fn view(&self) -> Arc<dyn FixedInvView<S>> {
        Arc::new(ReadOnlyFixedInv::new(Arc::clone(self)))
    }

    fn slot(&self, slot: usize) -> Result<SingleSlot<S>> {
        error::check_slot(slot, self.slot_count())?;
        Ok(SingleSlot::new(Arc::clone(self), slot))
    }

    fn slots(&self) -> Slots<S> {
        Slots {
            inv: Arc::clone(self),
            next: 0,
        }
    }
}

/// Iterator over the slots of an inventory
pub struct Slots<S: Stack> {
    inv: FixedInvRef<S>,
    next: usize,
}

impl<S: Stack> Iterator for Slots<S> {
    type Item = SingleSlot<S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.inv.slot_count() {
            return None;
        }
        let slot = SingleSlot::new(Arc::clone(&self.inv), self.next);
        self.next += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.inv.slot_count().saturating_sub(self.next);
        (left, Some(left))
    }
}

/// Read-only window over a fixed inventory
pub struct ReadOnlyFixedInv<S: Stack> {
    inv: FixedInvRef<S>,
}

impl<S: Stack> ReadOnlyFixedInv<S> {
    /// Hide the mutable half of `inv`
    pub fn new(inv: FixedInvRef<S>) -> Self {
        Self { inv }
    }
}

impl<S: Stack> FixedInvView<S> for ReadOnlyFixedInv<S> {
    fn slot_count(&self) -> usize {
        self.inv.slot_count()
    }

    fn get_stack(&self, slot: usize) -> S {
        self.inv.get_stack(slot)
    }

    fn filter_for_slot(&self, slot: usize) -> Filter<S> {
        self.inv.filter_for_slot(slot)
    }

    fn is_valid_for_slot(&self, slot: usize, stack: &S) -> bool {
        self.inv.is_valid_for_slot(slot, stack)
    }

    fn max_amount(&self, slot: usize, stack: &S) -> u32 {
        self.inv.max_amount(slot, stack)
    }

    fn storage_slot(&self, slot: usize) -> StorageSlot {
        self.inv.storage_slot(slot)
    }

    fn add_listener(
        &self,
        listener: SlotChangeListener<S>,
        removal: ListenerRemoval,
    ) -> Option<ListenerToken> {
        self.inv.add_listener(listener, removal)
    }
}
