//! A contiguous slice of another inventory's slots

use crate::empty::EmptyFixedInv;
use crate::error::{self, Result};
use crate::filter::Filter;
use crate::fixed::{FixedInv, FixedInvRef};
use crate::listener::{ListenerRemoval, ListenerToken, SlotChangeListener};
use crate::simulation::Simulation;
use crate::stack::Stack;
use crate::view::{FixedInvView, StorageSlot};
use std::sync::Arc;

/// Slots `from..to` of a parent inventory. Local slot `i` is parent slot `from + i`.
pub struct SubFixedInv<S: Stack> {
    inv: FixedInvRef<S>,
    from: usize,
    to: usize,
}

impl<S: Stack> SubFixedInv<S> {
    /// Slice `inv`.
    ///
    /// A zero-width range gives the shared empty inventory and the full
    /// range gives `inv` back. Fails unless `from <= to <= inv.slot_count()`.
    pub fn create(inv: &FixedInvRef<S>, from: usize, to: usize) -> Result<FixedInvRef<S>> {
        error::check_range(from, to, inv.slot_count())?;
        if from == to {
            return Ok(EmptyFixedInv::shared());
        }
        if from == 0 && to == inv.slot_count() {
            return Ok(Arc::clone(inv));
        }
        log::debug!("Sub inventory over slots {}..{}", from, to);
        Ok(Arc::new(Self {
            inv: Arc::clone(inv),
            from,
            to,
        }))
    }

    /// First parent slot covered
    pub fn from_index(&self) -> usize {
        self.from
    }

    /// One past the last parent slot covered
    pub fn to_index(&self) -> usize {
        self.to
    }

    fn parent_slot(&self, slot: usize) -> usize {
        error::assert_slot(slot, self.slot_count());
        self.from + slot
    }
}

impl<S: Stack> FixedInvView<S> for SubFixedInv<S> {
    fn slot_count(&self) -> usize {
        self.to - self.from
    }

    fn get_stack(&self, slot: usize) -> S {
        self.inv.get_stack(self.parent_slot(slot))
    }

    fn filter_for_slot(&self, slot: usize) -> Filter<S> {
        self.inv.filter_for_slot(self.parent_slot(slot))
    }

    fn is_valid_for_slot(&self, slot: usize, stack: &S) -> bool {
        self.inv.is_valid_for_slot(self.parent_slot(slot), stack)
    }

    fn max_amount(&self, slot: usize, stack: &S) -> u32 {
        self.inv.max_amount(self.parent_slot(slot), stack)
    }

    fn storage_slot(&self, slot: usize) -> StorageSlot {
        self.inv.storage_slot(self.parent_slot(slot))
    }

    fn add_listener(
        &self,
        listener: SlotChangeListener<S>,
        removal: ListenerRemoval,
    ) -> Option<ListenerToken> {
        let (from, to) = (self.from, self.to);
        self.inv.add_listener(
            Arc::new(move |slot: usize, before: &S, after: &S| {
                if (from..to).contains(&slot) {
                    listener(slot - from, before, after);
                }
            }),
            removal,
        )
    }
}

impl<S: Stack> FixedInv<S> for SubFixedInv<S> {
    fn set_stack(&self, slot: usize, to: S, simulation: Simulation) -> bool {
        self.inv.set_stack(self.parent_slot(slot), to, simulation)
    }

    fn insert_stack(&self, slot: usize, stack: &S, simulation: Simulation) -> S {
        self.inv.insert_stack(self.parent_slot(slot), stack, simulation)
    }

    fn extract_stack(
        &self,
        slot: usize,
        filter: Option<&Filter<S>>,
        merge_with: S,
        max_count: u32,
        simulation: Simulation,
    ) -> S {
        self.inv
            .extract_stack(self.parent_slot(slot), filter, merge_with, max_count, simulation)
    }
}
